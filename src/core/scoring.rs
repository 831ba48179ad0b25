// PlacePrep - core/scoring.rs
//
// Readiness scoring rules shared by the analyzer (base score) and the
// history store (final score recomputation).
// Core layer: pure arithmetic, no I/O.

use crate::core::model::{Confidence, ExtractedSkills};
use crate::util::constants::{
    BASELINE_SCORE, COMPANY_BONUS, CONFIDENCE_DELTA, LONG_JD_BONUS, LONG_JD_THRESHOLD_CHARS,
    MAX_CATEGORY_POINTS, MAX_SCORE, MIN_SCORE, POINTS_PER_CATEGORY, ROLE_BONUS,
};
use std::collections::BTreeMap;

/// Clamp a raw score into `[MIN_SCORE, MAX_SCORE]`.
pub fn clamp_score(raw: i64) -> u32 {
    raw.clamp(MIN_SCORE, MAX_SCORE) as u32
}

/// Compute the creation-time readiness score.
///
/// 35 baseline, +5 per detected category (capped at +30), +10 each for a
/// non-blank company, a non-blank role, and a JD longer than 800 characters.
/// The fallback category never counts.
pub fn base_score(skills: &ExtractedSkills, company: &str, role: &str, job_text: &str) -> u32 {
    let categories = skills.detected_category_count() as i64;
    let mut score = BASELINE_SCORE;
    score += (categories * POINTS_PER_CATEGORY).min(MAX_CATEGORY_POINTS);
    if !company.trim().is_empty() {
        score += COMPANY_BONUS;
    }
    if !role.trim().is_empty() {
        score += ROLE_BONUS;
    }
    if job_text.chars().count() > LONG_JD_THRESHOLD_CHARS {
        score += LONG_JD_BONUS;
    }
    clamp_score(score)
}

/// Score adjustment contributed by a single confidence mark.
pub fn confidence_delta(confidence: Confidence) -> i64 {
    match confidence {
        Confidence::Know => CONFIDENCE_DELTA,
        Confidence::Practice => -CONFIDENCE_DELTA,
    }
}

/// Recompute the final score from the immutable base score and every entry
/// currently in the confidence map.
pub fn final_score(base_score: u32, confidence_map: &BTreeMap<String, Confidence>) -> u32 {
    let adjustment: i64 = confidence_map.values().copied().map(confidence_delta).sum();
    clamp_score(i64::from(base_score) + adjustment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::SkillCategory;

    fn skills_in(categories: &[SkillCategory]) -> ExtractedSkills {
        let mut skills = ExtractedSkills::new();
        for c in categories {
            skills.insert(*c, vec!["x".to_string()]);
        }
        skills
    }

    #[test]
    fn test_baseline_only() {
        assert_eq!(base_score(&ExtractedSkills::new(), "", "", "short"), 35);
    }

    #[test]
    fn test_blank_company_and_role_earn_nothing() {
        assert_eq!(base_score(&ExtractedSkills::new(), "   ", "\t", "short"), 35);
    }

    #[test]
    fn test_category_points_capped_at_30() {
        let all = skills_in(&[
            SkillCategory::CoreCs,
            SkillCategory::Languages,
            SkillCategory::Web,
            SkillCategory::Data,
            SkillCategory::Cloud,
            SkillCategory::Testing,
        ]);
        // 6 categories x 5 = 30, exactly the cap
        assert_eq!(base_score(&all, "", "", "jd"), 65);
    }

    #[test]
    fn test_fallback_category_earns_nothing() {
        let fallback = skills_in(&[SkillCategory::General]);
        assert_eq!(base_score(&fallback, "", "", "jd"), 35);
    }

    #[test]
    fn test_long_jd_threshold_is_exclusive() {
        let skills = ExtractedSkills::new();
        let exactly = "a".repeat(LONG_JD_THRESHOLD_CHARS);
        let over = "a".repeat(LONG_JD_THRESHOLD_CHARS + 1);
        assert_eq!(base_score(&skills, "", "", &exactly), 35);
        assert_eq!(base_score(&skills, "", "", &over), 45);
    }

    #[test]
    fn test_full_marks() {
        let all = skills_in(&[
            SkillCategory::CoreCs,
            SkillCategory::Languages,
            SkillCategory::Web,
            SkillCategory::Data,
            SkillCategory::Cloud,
            SkillCategory::Testing,
        ]);
        let jd = "a".repeat(900);
        assert_eq!(base_score(&all, "Google", "SWE", &jd), 95);
    }

    #[test]
    fn test_final_score_sums_deltas() {
        let mut map = BTreeMap::new();
        map.insert("React".to_string(), Confidence::Know);
        map.insert("SQL".to_string(), Confidence::Know);
        map.insert("Docker".to_string(), Confidence::Practice);
        assert_eq!(final_score(60, &map), 62);
    }

    #[test]
    fn test_final_score_clamped_at_both_ends() {
        let know: BTreeMap<_, _> = (0..40)
            .map(|i| (format!("skill{i}"), Confidence::Know))
            .collect();
        let practice: BTreeMap<_, _> = (0..40)
            .map(|i| (format!("skill{i}"), Confidence::Practice))
            .collect();
        assert_eq!(final_score(95, &know), 100);
        assert_eq!(final_score(35, &practice), 0);
    }

    #[test]
    fn test_empty_map_returns_base() {
        assert_eq!(final_score(72, &BTreeMap::new()), 72);
    }
}
