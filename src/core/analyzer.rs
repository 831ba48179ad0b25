// PlacePrep - core/analyzer.rs
//
// Job description analysis: skill extraction, readiness scoring, company
// tiering, and generation of the round mapping, checklist, 7-day plan and
// interview questions.
//
// Core layer: pure and deterministic apart from the id/timestamps stamped
// on the result. Identical inputs always yield identical skills, scores,
// rounds, checklist, plan and questions.

use crate::core::catalog::{
    RoundBranch, RoundTemplate, BASE_QUESTIONS, ENTERPRISE_CHECKLIST, ENTERPRISE_INTEL,
    ENTERPRISE_ROSTER, ENTERPRISE_ROUNDS, FALLBACK_SKILLS, PLAN_TEMPLATE, SKILL_KEYWORDS,
    SKILL_QUESTION_BANK, SKILL_QUESTION_TEMPLATES, STARTUP_CHECKLIST, STARTUP_INTEL,
    STARTUP_ROUNDS,
};
use crate::core::model::{
    Analysis, ChecklistRound, CompanyIntel, CompanyTier, ExtractedSkills, PlanDay, RoundInfo,
    SkillCategory,
};
use crate::core::scoring;
use crate::util::constants::{DEBUG_MAX_JD_PREVIEW, MAX_QUESTIONS, MAX_SKILL_TEMPLATE_QUESTIONS};
use crate::util::error::AnalysisError;
use crate::util::logging::preview;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

/// Analyze a job description and build a complete, unsaved `Analysis`.
///
/// `company` and `role` may be empty. `job_text` must contain at least one
/// non-whitespace character.
///
/// The returned record has a fresh id, `created_at == updated_at`,
/// `base_score == final_score`, and an empty confidence map.
pub fn analyze(company: &str, role: &str, job_text: &str) -> Result<Analysis, AnalysisError> {
    if job_text.trim().is_empty() {
        return Err(AnalysisError::InvalidInput {
            field: "job_text",
            reason: "job description must not be empty".to_string(),
        });
    }

    let now = Utc::now();
    let extracted_skills = extract_skills(job_text);
    let base_score = scoring::base_score(&extracted_skills, company, role, job_text);
    let company_intel = company_intel(company);
    let tier = company_intel.category;

    let analysis = Analysis {
        id: next_id(now),
        created_at: now,
        updated_at: now,
        company: company.to_string(),
        role: role.to_string(),
        job_text: job_text.to_string(),
        round_mapping: round_mapping(tier, &extracted_skills),
        checklist: checklist(tier),
        plan: study_plan(&extracted_skills),
        questions: interview_questions(&extracted_skills),
        extracted_skills,
        base_score,
        final_score: base_score,
        skill_confidence_map: BTreeMap::new(),
        company_intel,
    };

    tracing::info!(
        id = %analysis.id,
        tier = %tier,
        skills = analysis.extracted_skills.skill_count(),
        base_score,
        "Job description analysed"
    );
    tracing::debug!(jd = %preview(job_text, DEBUG_MAX_JD_PREVIEW), "Analysed JD preview");

    Ok(analysis)
}

/// Non-blocking warnings about the job description.
///
/// Currently flags descriptions shorter than `short_jd_chars`; such input
/// still analyses but usually yields few detected skills.
pub fn input_warnings(job_text: &str, short_jd_chars: usize) -> Vec<String> {
    let mut warnings = Vec::new();
    let len = job_text.trim().chars().count();
    if len > 0 && len < short_jd_chars {
        warnings.push(format!(
            "This job description is short ({len} characters, under {short_jd_chars}). \
             Paste the full description for a more accurate analysis."
        ));
    }
    warnings
}

// =============================================================================
// Identifier generation
// =============================================================================

static LAST_ID_MICROS: AtomicI64 = AtomicI64::new(0);

/// Time-based id: microseconds since the Unix epoch, bumped past the last
/// issued value so ids stay unique and creation-ordered within a process.
fn next_id(now: DateTime<Utc>) -> String {
    let candidate = now.timestamp_micros();
    let mut last = LAST_ID_MICROS.load(Ordering::Relaxed);
    loop {
        let next = candidate.max(last + 1);
        match LAST_ID_MICROS.compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => return next.to_string(),
            Err(actual) => last = actual,
        }
    }
}

// =============================================================================
// Skill extraction
// =============================================================================

/// Detect skills by case-insensitive substring match against the keyword
/// table. Matches keep table order. Falls back to `SkillCategory::General`
/// placeholders when nothing matched.
pub fn extract_skills(job_text: &str) -> ExtractedSkills {
    let normalized = job_text.to_lowercase();
    let mut skills = ExtractedSkills::new();

    for (category, keywords) in SKILL_KEYWORDS {
        let found: Vec<String> = keywords
            .iter()
            .filter(|kw| normalized.contains(&kw.to_lowercase()))
            .map(|kw| kw.to_string())
            .collect();
        skills.insert(*category, found);
    }

    if skills.is_empty() {
        tracing::debug!("No keywords matched; using fallback skills");
        skills.insert(
            SkillCategory::General,
            FALLBACK_SKILLS.iter().map(|s| s.to_string()).collect(),
        );
    }

    skills
}

// =============================================================================
// Company intel
// =============================================================================

/// Classify `company` against the enterprise roster.
pub fn company_intel(company: &str) -> CompanyIntel {
    let name = company.trim().to_lowercase();
    let is_enterprise = !name.is_empty()
        && ENTERPRISE_ROSTER
            .iter()
            .any(|known| name.contains(&known.to_lowercase()));

    let (category, (size, industry, focus)) = if is_enterprise {
        (CompanyTier::Enterprise, ENTERPRISE_INTEL)
    } else {
        (CompanyTier::Startup, STARTUP_INTEL)
    };

    CompanyIntel {
        category,
        size: size.to_string(),
        industry: industry.to_string(),
        focus: focus.to_string(),
    }
}

// =============================================================================
// Round mapping and checklist
// =============================================================================

/// Build the tier's round mapping. The tier fixes the round count; detected
/// skills only choose between each round's two focus lists.
pub fn round_mapping(tier: CompanyTier, skills: &ExtractedSkills) -> Vec<RoundInfo> {
    let templates = match tier {
        CompanyTier::Enterprise => ENTERPRISE_ROUNDS,
        CompanyTier::Startup => STARTUP_ROUNDS,
    };
    templates.iter().map(|t| build_round(t, skills)).collect()
}

fn build_round(template: &RoundTemplate, skills: &ExtractedSkills) -> RoundInfo {
    let detected = match template.branch {
        RoundBranch::None => true,
        RoundBranch::CoreCs => skills.contains(SkillCategory::CoreCs),
        RoundBranch::WebOrLanguages => {
            skills.contains(SkillCategory::Web) || skills.contains(SkillCategory::Languages)
        }
    };
    let focus = if detected {
        template.focus_when_detected
    } else {
        template.focus_otherwise
    };

    RoundInfo {
        round_title: template.title.to_string(),
        focus_areas: focus.iter().map(|s| s.to_string()).collect(),
        why_it_matters: template.why.to_string(),
    }
}

/// The tier's fixed checklist skeleton.
pub fn checklist(tier: CompanyTier) -> Vec<ChecklistRound> {
    let template = match tier {
        CompanyTier::Enterprise => ENTERPRISE_CHECKLIST,
        CompanyTier::Startup => STARTUP_CHECKLIST,
    };
    template
        .iter()
        .map(|(title, items)| ChecklistRound {
            round_title: title.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}

// =============================================================================
// Study plan
// =============================================================================

/// The fixed 7-day plan. Day 1 and day 5 gain one task naming the first
/// detected web and cloud skill respectively.
pub fn study_plan(skills: &ExtractedSkills) -> Vec<PlanDay> {
    let mut plan: Vec<PlanDay> = PLAN_TEMPLATE
        .iter()
        .enumerate()
        .map(|(i, (focus, tasks))| PlanDay {
            day: (i + 1) as u8,
            focus: focus.to_string(),
            tasks: tasks.iter().map(|s| s.to_string()).collect(),
        })
        .collect();

    if let (Some(web), Some(day)) = (skills.first(SkillCategory::Web), plan.get_mut(0)) {
        day.tasks
            .push(format!("Revise {web} component architecture"));
    }
    if let (Some(cloud), Some(day)) = (skills.first(SkillCategory::Cloud), plan.get_mut(4)) {
        day.tasks.push(format!("Review {cloud} deployment flows"));
    }

    plan
}

// =============================================================================
// Interview questions
// =============================================================================

/// Base questions, then up to two template questions naming the primary
/// skill, then bank questions for detected skills; truncated to 10.
pub fn interview_questions(skills: &ExtractedSkills) -> Vec<String> {
    let mut questions: Vec<String> = BASE_QUESTIONS.iter().map(|q| q.to_string()).collect();

    if let Some(skill) = primary_skill(skills) {
        questions.extend(
            SKILL_QUESTION_TEMPLATES
                .iter()
                .take(MAX_SKILL_TEMPLATE_QUESTIONS)
                .map(|t| t.replace("{skill}", skill)),
        );
    }

    for (skill, bank) in SKILL_QUESTION_BANK {
        if skills.all_skills().any(|s| s == *skill) {
            questions.extend(bank.iter().map(|q| q.to_string()));
        }
    }

    questions.truncate(MAX_QUESTIONS);
    questions
}

/// First detected skill in priority order Web, Languages, Core CS.
fn primary_skill(skills: &ExtractedSkills) -> Option<&str> {
    [
        SkillCategory::Web,
        SkillCategory::Languages,
        SkillCategory::CoreCs,
    ]
    .into_iter()
    .find_map(|c| skills.first(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::constants::PLAN_DAYS;

    const FILLER: &str = "The team values ownership and steady delivery. ";

    fn long_jd(core: &str) -> String {
        let mut jd = core.to_string();
        while jd.chars().count() <= 800 {
            jd.push_str(FILLER);
        }
        jd
    }

    // -- validation --

    #[test]
    fn test_empty_job_text_rejected() {
        let err = analyze("", "", "").unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput { field: "job_text", .. }));
    }

    #[test]
    fn test_whitespace_job_text_rejected() {
        assert!(analyze("x", "y", "   \n\t").is_err());
    }

    #[test]
    fn test_company_and_role_optional() {
        let a = analyze("", "", "non-empty text").unwrap();
        assert_eq!(a.company, "");
        assert_eq!(a.role, "");
        assert_eq!(a.base_score, a.final_score);
        assert!(a.skill_confidence_map.is_empty());
        assert_eq!(a.created_at, a.updated_at);
    }

    // -- skill extraction --

    #[test]
    fn test_extraction_is_case_insensitive_and_table_ordered() {
        let skills = extract_skills("we use sql, REACT and html daily");
        assert_eq!(skills.get(SkillCategory::Web), ["React", "HTML"]);
        assert_eq!(skills.get(SkillCategory::Data), ["SQL"]);
    }

    #[test]
    fn test_substring_matches_overlapping_keywords() {
        let skills = extract_skills("Experience with PostgreSQL");
        assert_eq!(skills.get(SkillCategory::Data), ["SQL", "PostgreSQL"]);
    }

    #[test]
    fn test_no_match_uses_fallback() {
        let skills = extract_skills("We want a cheerful person for our team.");
        assert!(!skills.is_empty());
        assert_eq!(skills.iter().count(), 1);
        assert_eq!(skills.get(SkillCategory::General).len(), FALLBACK_SKILLS.len());
        assert_eq!(skills.detected_category_count(), 0);
    }

    #[test]
    fn test_fallback_absent_when_something_matched() {
        let skills = extract_skills("Docker");
        assert!(!skills.contains(SkillCategory::General));
    }

    // -- company intel and rounds --

    #[test]
    fn test_roster_match_is_enterprise() {
        assert_eq!(company_intel("Amazon").category, CompanyTier::Enterprise);
        assert_eq!(company_intel("amazon web services").category, CompanyTier::Enterprise);
    }

    #[test]
    fn test_unknown_and_empty_company_is_startup() {
        assert_eq!(company_intel("Random Startup Inc").category, CompanyTier::Startup);
        assert_eq!(company_intel("").category, CompanyTier::Startup);
    }

    #[test]
    fn test_enterprise_has_four_rounds() {
        let a = analyze("Amazon", "SDE", "DSA and Java").unwrap();
        assert_eq!(a.company_intel.category, CompanyTier::Enterprise);
        assert_eq!(a.round_count(), 4);
        assert!(a.round_mapping[3].round_title.contains("HR"));
    }

    #[test]
    fn test_startup_has_three_rounds() {
        let a = analyze("Random Startup Inc", "SDE", "DSA and Java").unwrap();
        assert_eq!(a.company_intel.category, CompanyTier::Startup);
        assert_eq!(a.round_count(), 3);
    }

    #[test]
    fn test_focus_areas_branch_on_core_cs() {
        let with_core = round_mapping(CompanyTier::Enterprise, &extract_skills("DSA"));
        let without = round_mapping(CompanyTier::Enterprise, &extract_skills("nothing here"));
        assert_eq!(with_core.len(), without.len());
        assert_ne!(with_core[1].focus_areas, without[1].focus_areas);
        assert!(with_core[1].focus_areas[0].contains("DSA"));
    }

    #[test]
    fn test_focus_areas_branch_on_web_or_languages() {
        let web = round_mapping(CompanyTier::Startup, &extract_skills("React"));
        let lang = round_mapping(CompanyTier::Startup, &extract_skills("Python"));
        let none = round_mapping(CompanyTier::Startup, &extract_skills("Docker"));
        assert_eq!(web[0].focus_areas, lang[0].focus_areas);
        assert_ne!(web[0].focus_areas, none[0].focus_areas);
    }

    #[test]
    fn test_checklist_shapes() {
        let ent = checklist(CompanyTier::Enterprise);
        let st = checklist(CompanyTier::Startup);
        assert_eq!(ent.len(), 3);
        assert_eq!(st.len(), 3);
        assert!(ent[0].round_title.contains("Online Assessment"));
        assert!(st[0].round_title.contains("Practical"));
        assert!(ent.iter().chain(st.iter()).all(|r| !r.items.is_empty()));
    }

    // -- plan --

    #[test]
    fn test_plan_always_seven_days() {
        for jd in ["nothing", "React Docker SQL DSA", "Kubernetes"] {
            let plan = study_plan(&extract_skills(jd));
            assert_eq!(plan.len(), PLAN_DAYS);
            let days: Vec<u8> = plan.iter().map(|d| d.day).collect();
            assert_eq!(days, vec![1, 2, 3, 4, 5, 6, 7]);
        }
    }

    #[test]
    fn test_plan_mentions_first_web_and_cloud_skill() {
        let plan = study_plan(&extract_skills("React, Vue, AWS"));
        assert!(plan[0].tasks.last().unwrap().contains("React"));
        assert!(plan[4].tasks.last().unwrap().contains("AWS"));
    }

    // -- questions --

    #[test]
    fn test_questions_without_skills_are_base_pool() {
        let q = interview_questions(&extract_skills("nothing relevant"));
        assert_eq!(q.len(), BASE_QUESTIONS.len());
    }

    #[test]
    fn test_template_questions_use_web_before_languages() {
        let q = interview_questions(&extract_skills("Java and React"));
        assert!(q[BASE_QUESTIONS.len()].contains("React"));
        assert!(q[BASE_QUESTIONS.len() + 1].contains("React"));
    }

    #[test]
    fn test_questions_truncated_to_ten_in_order() {
        let q = interview_questions(&extract_skills("SQL React DSA Node.js Docker Java"));
        assert_eq!(q.len(), MAX_QUESTIONS);
        assert_eq!(q[0], BASE_QUESTIONS[0]);
        // 5 base + 2 templates, then the SQL bank questions first
        assert_eq!(q[7], "Explain the difference between JOIN and UNION.");
    }

    // -- scoring and end-to-end --

    #[test]
    fn test_google_react_sql_scenario() {
        let jd = long_jd("We are looking for a React developer who knows SQL. ");
        let a = analyze("Google", "SWE", &jd).unwrap();
        assert!(a.extracted_skills.get(SkillCategory::Web).contains(&"React".to_string()));
        assert!(a.extracted_skills.get(SkillCategory::Data).contains(&"SQL".to_string()));
        assert_eq!(a.extracted_skills.detected_category_count(), 2);
        assert_eq!(a.base_score, 75);
        assert_eq!(a.final_score, 75);
        assert_eq!(a.company_intel.category, CompanyTier::Enterprise);
        assert_eq!(a.round_mapping.len(), 4);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let jd = long_jd("Java, Spring, SQL, Docker, DSA and Jest. ");
        let a = analyze("Infosys", "Engineer", &jd).unwrap();
        let b = analyze("Infosys", "Engineer", &jd).unwrap();
        assert_eq!(a.extracted_skills, b.extracted_skills);
        assert_eq!(a.base_score, b.base_score);
        assert_eq!(a.round_mapping, b.round_mapping);
        assert_eq!(a.checklist, b.checklist);
        assert_eq!(a.plan, b.plan);
        assert_eq!(a.questions, b.questions);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_scores_within_bounds() {
        for (c, r, jd) in [
            ("", "", "x"),
            ("Google", "SWE", "DSA Java React SQL AWS Jest and more"),
        ] {
            let a = analyze(c, r, jd).unwrap();
            assert!(a.base_score <= 100);
            assert!(a.final_score <= 100);
        }
    }

    // -- ids --

    #[test]
    fn test_ids_strictly_increase() {
        let now = Utc::now();
        let a: i64 = next_id(now).parse().unwrap();
        let b: i64 = next_id(now).parse().unwrap();
        let c: i64 = next_id(now).parse().unwrap();
        assert!(a < b && b < c);
    }

    // -- warnings --

    #[test]
    fn test_short_jd_warning() {
        assert_eq!(input_warnings("Hello world", 200).len(), 1);
        assert!(input_warnings(&"a".repeat(250), 200).is_empty());
        assert!(input_warnings("anything", 0).is_empty());
    }
}
