// PlacePrep - core/catalog.rs
//
// Built-in keyword tables and content templates used by the analyzer.
// Core layer: static data only, embedded in the binary.
//
// Keywords are matched as case-insensitive substrings of the job
// description, so very short tokens ("C", "Go", "OS", "AI") are spelled out
// here to keep them from matching inside ordinary words.

use crate::core::model::SkillCategory;

// =============================================================================
// Skill keyword table
// =============================================================================

/// Keywords per category, in the order matches are reported.
pub const SKILL_KEYWORDS: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::CoreCs,
        &[
            "DSA",
            "Data Structures",
            "Algorithms",
            "OOPS",
            "Object Oriented",
            "DBMS",
            "Operating System",
            "Computer Networks",
            "System Design",
        ],
    ),
    (
        SkillCategory::Languages,
        &[
            "Java",
            "Python",
            "JavaScript",
            "TypeScript",
            "C++",
            "C#",
            "Golang",
            "Rust",
            "Ruby",
            "PHP",
            "Swift",
            "Kotlin",
        ],
    ),
    (
        SkillCategory::Web,
        &[
            "React",
            "Next.js",
            "Node.js",
            "Express.js",
            "REST API",
            "GraphQL",
            "HTML",
            "CSS",
            "Tailwind",
            "Vue",
            "Angular",
        ],
    ),
    (
        SkillCategory::Data,
        &[
            "SQL",
            "MongoDB",
            "PostgreSQL",
            "MySQL",
            "Redis",
            "Cassandra",
            "Data Science",
            "Machine Learning",
            "Pandas",
        ],
    ),
    (
        SkillCategory::Cloud,
        &[
            "AWS",
            "Azure",
            "GCP",
            "Docker",
            "Kubernetes",
            "CI/CD",
            "Linux",
            "Terraform",
            "Jenkins",
        ],
    ),
    (
        SkillCategory::Testing,
        &[
            "Selenium",
            "Cypress",
            "Playwright",
            "JUnit",
            "PyTest",
            "Jest",
            "Unit Testing",
        ],
    ),
];

/// Placeholders stored under `SkillCategory::General` when nothing matched.
pub const FALLBACK_SKILLS: &[&str] = &[
    "Communication",
    "Problem Solving",
    "Basic Coding",
    "Projects",
];

// =============================================================================
// Company roster and tier descriptions
// =============================================================================

/// Well-known large employers. Matched as case-insensitive substrings of
/// the company name.
pub const ENTERPRISE_ROSTER: &[&str] = &[
    "Amazon",
    "Google",
    "Microsoft",
    "Meta",
    "Facebook",
    "Apple",
    "Netflix",
    "Adobe",
    "Oracle",
    "IBM",
    "Intel",
    "Cisco",
    "Salesforce",
    "SAP",
    "Walmart",
    "Goldman Sachs",
    "JPMorgan",
    "Morgan Stanley",
    "Deloitte",
    "Accenture",
    "Infosys",
    "TCS",
    "Tata Consultancy",
    "Wipro",
    "Cognizant",
    "Capgemini",
    "HCL",
    "Tech Mahindra",
    "Flipkart",
    "Uber",
];

/// `(size, industry, focus)` text for `CompanyTier::Enterprise`.
pub const ENTERPRISE_INTEL: (&str, &str, &str) = (
    "Large (2,000+ employees)",
    "Technology / Large-scale services",
    "Structured DSA rounds, core CS fundamentals and standardised hiring bars",
);

/// `(size, industry, focus)` text for `CompanyTier::Startup`.
pub const STARTUP_INTEL: (&str, &str, &str) = (
    "Small to mid-size (under 200 employees)",
    "Technology / Product startup",
    "Practical problem solving, stack depth and ownership of shipped features",
);

// =============================================================================
// Round mapping templates
// =============================================================================

/// A round whose focus areas depend on whether a skill group was detected.
pub struct RoundTemplate {
    pub title: &'static str,
    pub why: &'static str,
    /// Which detected skills switch the focus list to `focus_when_detected`.
    pub branch: RoundBranch,
    pub focus_when_detected: &'static [&'static str],
    pub focus_otherwise: &'static [&'static str],
}

/// Skill group a round template branches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundBranch {
    /// Always uses `focus_when_detected`.
    None,
    CoreCs,
    WebOrLanguages,
}

pub const ENTERPRISE_ROUNDS: &[RoundTemplate] = &[
    RoundTemplate {
        title: "Round 1: Online Assessment",
        why: "Large employers filter most applicants with a timed aptitude and coding screen before any interview.",
        branch: RoundBranch::None,
        focus_when_detected: &["Aptitude", "Logical reasoning", "2-3 timed coding problems"],
        focus_otherwise: &[],
    },
    RoundTemplate {
        title: "Round 2: Technical Interview I",
        why: "Interviewers test problem solving under pressure and how clearly you reason about complexity.",
        branch: RoundBranch::CoreCs,
        focus_when_detected: &[
            "DSA problem solving",
            "Core CS fundamentals (OS, DBMS, Networks)",
            "Time and space complexity",
        ],
        focus_otherwise: &[
            "Arrays, strings and hashing",
            "Basic problem solving",
            "Clean, readable code",
        ],
    },
    RoundTemplate {
        title: "Round 3: Technical Interview II",
        why: "The second technical round checks depth: how well you know the stack and the projects on your resume.",
        branch: RoundBranch::WebOrLanguages,
        focus_when_detected: &[
            "Project deep-dive",
            "Language and framework internals",
            "Low-level design",
        ],
        focus_otherwise: &[
            "Project walkthrough",
            "Object-oriented design",
            "Debugging approach",
        ],
    },
    RoundTemplate {
        title: "Round 4: HR / Managerial",
        why: "Culture fit, communication and motivation decide close calls between technically similar candidates.",
        branch: RoundBranch::None,
        focus_when_detected: &["Behavioural questions (STAR)", "Career goals", "Company values"],
        focus_otherwise: &[],
    },
];

pub const STARTUP_ROUNDS: &[RoundTemplate] = &[
    RoundTemplate {
        title: "Round 1: Practical Coding",
        why: "Startups need people who can ship from day one, so the first round is usually a hands-on task.",
        branch: RoundBranch::WebOrLanguages,
        focus_when_detected: &[
            "Build a small feature in the stack",
            "API design",
            "Debugging an existing codebase",
        ],
        focus_otherwise: &[
            "Take-home problem",
            "Code quality and structure",
            "Working solution over perfect solution",
        ],
    },
    RoundTemplate {
        title: "Round 2: Technical Deep-Dive",
        why: "Small teams rely on each engineer's judgement, so they probe trade-offs and fundamentals behind your choices.",
        branch: RoundBranch::CoreCs,
        focus_when_detected: &[
            "System design basics",
            "Data modelling",
            "Performance trade-offs",
        ],
        focus_otherwise: &[
            "Past project decisions",
            "Tooling and workflow",
            "Learning new technology quickly",
        ],
    },
    RoundTemplate {
        title: "Round 3: Culture Fit",
        why: "Every hire changes a small team noticeably; founders look for ownership and a bias to action.",
        branch: RoundBranch::None,
        focus_when_detected: &["Ownership stories", "Working with ambiguity", "Why this startup"],
        focus_otherwise: &[],
    },
];

// =============================================================================
// Checklist templates
// =============================================================================

pub type ChecklistTemplate = &'static [(&'static str, &'static [&'static str])];

const HR_ROUND: (&str, &[&str]) = (
    "Round 3: HR",
    &[
        "Prepare \"Tell me about yourself\" (professional focus)",
        "Use the STAR method for a behavioural conflict scenario",
        "Identify 3 strengths with specific examples",
        "Research company values and recent news",
        "Prepare 3 thoughtful questions for the interviewer",
    ],
);

pub const ENTERPRISE_CHECKLIST: ChecklistTemplate = &[
    (
        "Round 1: Online Assessment",
        &[
            "Solve 20 quant problems on time/speed/distance",
            "Practice 15 logical reasoning puzzles",
            "Revise data interpretation charts",
            "Review basic probability and statistics",
            "Take a timed 30-minute aptitude mock test",
        ],
    ),
    (
        "Round 2: Technical Interviews",
        &[
            "Practice 5 medium-level linked list/tree problems",
            "Revise Big O notation and complexity analysis",
            "Explain ACID properties and indexing in DBMS",
            "Describe process lifecycle and threading in OS",
            "Review the TCP 3-way handshake",
        ],
    ),
    HR_ROUND,
];

pub const STARTUP_CHECKLIST: ChecklistTemplate = &[
    (
        "Round 1: Practical Assignment",
        &[
            "Build a small CRUD feature end-to-end in your main stack",
            "Write a README explaining setup and design choices",
            "Add basic tests for the critical path",
            "Practice debugging an unfamiliar codebase",
            "Time-box a take-home task to 3 hours",
        ],
    ),
    (
        "Round 2: Technical Discussion",
        &[
            "Prepare a 2-minute pitch for your top project",
            "Identify 3 key technical challenges you solved",
            "Sketch the architecture of your project",
            "Prepare to explain design decisions (why X over Y?)",
            "Review scaling basics: caching, queues, indexes",
        ],
    ),
    HR_ROUND,
];

// =============================================================================
// 7-day plan
// =============================================================================

/// `(focus, tasks)` for each day, day 1 first.
pub const PLAN_TEMPLATE: &[(&str, &[&str])] = &[
    (
        "Basics + Core CS",
        &[
            "Revise hashing and sorting",
            "Review OS scheduling algorithms",
            "DBMS normalisation basics",
        ],
    ),
    (
        "Core CS Deep-Dive",
        &[
            "Revise OOP principles with examples",
            "Computer networks: OSI layers and TCP/UDP",
            "Write short notes on each topic",
        ],
    ),
    (
        "DSA + Coding Practice",
        &[
            "Solve 5 medium problems",
            "Practice whiteboard coding",
            "Analyse time/space complexity of each solution",
        ],
    ),
    (
        "Advanced DSA",
        &[
            "Trees and graphs: BFS, DFS, shortest paths",
            "Dynamic programming patterns",
            "Re-solve two problems you got wrong",
        ],
    ),
    (
        "Project + Resume Alignment",
        &[
            "Perfect the STAR responses",
            "Review core architectural decisions in your projects",
            "Update resume for JD keywords",
        ],
    ),
    (
        "Mock Interview Questions",
        &[
            "Record yourself answering HR questions",
            "Do a peer-to-peer technical mock",
            "Review weak technical areas",
        ],
    ),
    (
        "Final Revision",
        &[
            "Read through revision notes",
            "Quickly review company news",
            "Rest and prepare logistics for interview day",
        ],
    ),
];

// =============================================================================
// Interview questions
// =============================================================================

/// General behavioural/project questions, always asked first.
pub const BASE_QUESTIONS: &[&str] = &[
    "Can you explain your final year project in detail?",
    "Tell me about a time you faced a difficult bug and how you solved it.",
    "Which programming language do you prefer and why?",
    "How do you handle working in a team with conflicting opinions?",
    "What is your approach to learning a new technology quickly?",
];

/// Templates with a `{skill}` placeholder for the primary detected skill.
pub const SKILL_QUESTION_TEMPLATES: &[&str] = &[
    "Walk me through a project where you used {skill}. What would you do differently?",
    "What are the most common pitfalls when working with {skill}, and how do you avoid them?",
];

/// Skill-specific questions appended when the skill was detected.
pub const SKILL_QUESTION_BANK: &[(&str, &[&str])] = &[
    (
        "SQL",
        &[
            "Explain the difference between JOIN and UNION.",
            "What is normalisation and why do we use it?",
        ],
    ),
    (
        "React",
        &[
            "Explain the React component lifecycle or Hooks.",
            "How does the Virtual DOM improve performance?",
        ],
    ),
    (
        "DSA",
        &[
            "Explain the pros and cons of QuickSort vs MergeSort.",
            "How would you detect a cycle in a directed graph?",
        ],
    ),
    (
        "Node.js",
        &[
            "Explain the event loop in Node.js.",
            "What is the difference between setImmediate() and process.nextTick()?",
        ],
    ),
    (
        "Docker",
        &[
            "What is the difference between an image and a container?",
            "How do you optimise a Dockerfile for production?",
        ],
    ),
    (
        "Java",
        &[
            "Explain JVM, JRE, and JDK.",
            "Difference between abstract class and interface in Java 8+.",
        ],
    ),
];
