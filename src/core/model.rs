// PlacePrep - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.
//
// These types are the shared vocabulary across all layers. `Analysis`
// is the one persisted entity; its JSON field names are camelCase so the
// persisted layout matches the field names used by exporters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Analysis (the persisted record)
// =============================================================================

/// One result of running the analyzer on a job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Opaque, creation-ordered identifier.
    pub id: String,

    pub created_at: DateTime<Utc>,

    /// Bumped on every confidence change.
    pub updated_at: DateTime<Utc>,

    /// Free text; may be empty.
    pub company: String,

    /// Free text; may be empty.
    pub role: String,

    /// The raw job description. Never empty or whitespace-only.
    pub job_text: String,

    pub extracted_skills: ExtractedSkills,

    pub round_mapping: Vec<RoundInfo>,

    pub checklist: Vec<ChecklistRound>,

    /// Always exactly `PLAN_DAYS` entries.
    pub plan: Vec<PlanDay>,

    /// At most `MAX_QUESTIONS` entries, in generation order.
    pub questions: Vec<String>,

    /// Score at creation time. Never mutated.
    pub base_score: u32,

    /// `base_score` adjusted by the confidence map.
    pub final_score: u32,

    #[serde(default)]
    pub skill_confidence_map: BTreeMap<String, Confidence>,

    pub company_intel: CompanyIntel,
}

impl Analysis {
    /// All detected skills, flattened in category order.
    pub fn all_skills(&self) -> impl Iterator<Item = &str> {
        self.extracted_skills.all_skills()
    }

    /// Whether `skill` is one of this analysis' extracted skills
    /// (case-insensitive).
    pub fn has_skill(&self, skill: &str) -> bool {
        self.all_skills().any(|s| s.eq_ignore_ascii_case(skill))
    }

    /// Number of rounds in the round mapping.
    pub fn round_count(&self) -> usize {
        self.round_mapping.len()
    }
}

// =============================================================================
// Skill categories
// =============================================================================

/// The closed set of skill categories.
///
/// Declaration order is display order: `ExtractedSkills` iterates in this
/// order because the map is keyed by the derived `Ord`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum SkillCategory {
    CoreCs,
    Languages,
    Web,
    Data,
    Cloud,
    Testing,
    /// Populated only when nothing else matched.
    General,
}

impl SkillCategory {
    /// Returns all variants in display order.
    pub fn all() -> &'static [SkillCategory] {
        &[
            SkillCategory::CoreCs,
            SkillCategory::Languages,
            SkillCategory::Web,
            SkillCategory::Data,
            SkillCategory::Cloud,
            SkillCategory::Testing,
            SkillCategory::General,
        ]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::CoreCs => "Core CS",
            SkillCategory::Languages => "Languages",
            SkillCategory::Web => "Web",
            SkillCategory::Data => "Data",
            SkillCategory::Cloud => "Cloud/DevOps",
            SkillCategory::Testing => "Testing",
            SkillCategory::General => "General",
        }
    }

    /// True for the fallback category, which never counts towards the score.
    pub fn is_fallback(&self) -> bool {
        matches!(self, SkillCategory::General)
    }
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Detected skills grouped by category. Only non-empty categories are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedSkills(BTreeMap<SkillCategory, Vec<String>>);

impl ExtractedSkills {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `skills` under `category`. Empty lists are ignored so the map
    /// never holds an empty category.
    pub fn insert(&mut self, category: SkillCategory, skills: Vec<String>) {
        if !skills.is_empty() {
            self.0.insert(category, skills);
        }
    }

    /// Skills detected for `category`; empty slice when none.
    pub fn get(&self, category: SkillCategory) -> &[String] {
        self.0.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, category: SkillCategory) -> bool {
        self.0.contains_key(&category)
    }

    /// First skill detected for `category`, if any.
    pub fn first(&self, category: SkillCategory) -> Option<&str> {
        self.get(category).first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of non-fallback categories with at least one skill.
    pub fn detected_category_count(&self) -> usize {
        self.0.keys().filter(|c| !c.is_fallback()).count()
    }

    /// `(category, skills)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (SkillCategory, &[String])> {
        self.0.iter().map(|(c, s)| (*c, s.as_slice()))
    }

    /// All skills flattened in display order.
    pub fn all_skills(&self) -> impl Iterator<Item = &str> {
        self.0.values().flatten().map(String::as_str)
    }

    /// Total number of skills across all categories.
    pub fn skill_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

// =============================================================================
// Skill confidence
// =============================================================================

/// A user's self-assessment of one detected skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Know,
    Practice,
}

impl Confidence {
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::Know => "know",
            Confidence::Practice => "practice",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Confidence {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "know" | "known" => Ok(Confidence::Know),
            "practice" | "needs-practice" => Ok(Confidence::Practice),
            other => Err(format!(
                "unknown confidence '{other}' (expected 'know' or 'practice')"
            )),
        }
    }
}

// =============================================================================
// Company intel
// =============================================================================

/// Company tier. Drives round-mapping and checklist shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanyTier {
    Enterprise,
    Startup,
}

impl CompanyTier {
    pub fn label(&self) -> &'static str {
        match self {
            CompanyTier::Enterprise => "Enterprise",
            CompanyTier::Startup => "Startup",
        }
    }
}

impl std::fmt::Display for CompanyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Static facts derived once from the company name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyIntel {
    pub category: CompanyTier,
    pub size: String,
    pub industry: String,
    pub focus: String,
}

// =============================================================================
// Generated preparation content
// =============================================================================

/// One expected interview round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundInfo {
    pub round_title: String,
    pub focus_areas: Vec<String>,
    pub why_it_matters: String,
}

/// Checklist items for one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistRound {
    pub round_title: String,
    pub items: Vec<String>,
}

/// One day of the study plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDay {
    /// 1-based day number.
    pub day: u8,
    pub focus: String,
    pub tasks: Vec<String>,
}
