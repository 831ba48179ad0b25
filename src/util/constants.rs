// PlacePrep - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.
// Scoring weights live here so the analyzer and the store agree on them.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "PlacePrep";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "PlacePrep";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Readiness scoring
// =============================================================================

/// Starting point of every base score.
pub const BASELINE_SCORE: i64 = 35;

/// Points awarded for each skill category with at least one detected skill.
pub const POINTS_PER_CATEGORY: i64 = 5;

/// Upper bound on the total category bonus.
pub const MAX_CATEGORY_POINTS: i64 = 30;

/// Bonus when a company name was supplied.
pub const COMPANY_BONUS: i64 = 10;

/// Bonus when a role was supplied.
pub const ROLE_BONUS: i64 = 10;

/// Bonus when the job description is longer than `LONG_JD_THRESHOLD_CHARS`.
pub const LONG_JD_BONUS: i64 = 10;

/// Character count a JD must exceed to earn `LONG_JD_BONUS`.
pub const LONG_JD_THRESHOLD_CHARS: usize = 800;

/// Lowest possible readiness score.
pub const MIN_SCORE: i64 = 0;

/// Highest possible readiness score.
pub const MAX_SCORE: i64 = 100;

/// Score change per skill marked "know" (added) or "practice" (subtracted).
pub const CONFIDENCE_DELTA: i64 = 2;

// =============================================================================
// Generated content limits
// =============================================================================

/// Number of entries in every study plan.
pub const PLAN_DAYS: usize = 7;

/// Maximum number of interview questions kept per analysis.
pub const MAX_QUESTIONS: usize = 10;

/// Maximum number of template questions that reference a detected skill.
pub const MAX_SKILL_TEMPLATE_QUESTIONS: usize = 2;

/// JDs shorter than this (in characters) trigger a non-blocking warning.
pub const DEFAULT_SHORT_JD_WARNING_CHARS: usize = 200;

/// Upper bound for the user-configurable short-JD warning threshold.
pub const MAX_SHORT_JD_WARNING_CHARS: usize = 5_000;

// =============================================================================
// History store
// =============================================================================

/// Storage key holding the analysis history blob.
pub const HISTORY_KEY: &str = "placement_history";

/// Maximum number of analyses kept; the oldest are evicted on overflow.
pub const HISTORY_LIMIT: usize = 20;

/// Version stamp written into the persisted history envelope.
///
/// Increment whenever `Analysis` changes shape in a breaking way.
/// Blobs carrying any other version are discarded on read.
pub const HISTORY_SCHEMA_VERSION: u32 = 1;

/// File extension used by the file-backed storage for each key.
pub const STORAGE_FILE_EXTENSION: &str = "json";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Maximum number of JD characters included in debug output.
pub const DEBUG_MAX_JD_PREVIEW: usize = 80;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
