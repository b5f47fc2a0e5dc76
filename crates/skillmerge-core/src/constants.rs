//! Shared constants for the skillmerge engine.

/// skillmerge version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Near-duplicate detection ----

/// Number of MinHash functions (signature length).
pub const DEFAULT_NUM_HASHES: usize = 100;

/// Estimated Jaccard similarity at or above which two blocks are near-duplicates.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.8;

/// Words per shingle.
pub const DEFAULT_SHINGLE_SIZE: usize = 3;

/// Base constant the per-slot hash seeds are derived from.
pub const SEED_BASE: u64 = 0x5851_f42d_4c95_7f2d;

// ---- Merging ----

/// Name used when no input document carries a name.
pub const DEFAULT_MERGED_NAME: &str = "Merged Skill";

/// Maximum number of source names joined into a merged name.
pub const DEFAULT_MAX_JOINED_NAMES: usize = 3;

/// Separator between joined source names.
pub const NAME_SEPARATOR: &str = " + ";

/// Suffix appended when more sources carry names than can be joined.
pub const NAME_OVERFLOW_SUFFIX: &str = "more";

/// Separator between combined section contents.
pub const CONTENT_SEPARATOR: &str = "\n\n";

/// Separator between combined descriptions.
pub const DESCRIPTION_SEPARATOR: &str = " ";

// ---- Observability ----

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "SKILLMERGE_LOG";

/// Filter applied when `SKILLMERGE_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "skillmerge_core=info,skillmerge_engine=info";
