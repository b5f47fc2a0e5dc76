//! Configuration system for skillmerge.
//! TOML-based, 3-layer resolution: env > config file > defaults.

pub mod dedup_config;
pub mod merge_config;
pub mod skillmerge_config;

pub use dedup_config::DedupConfig;
pub use merge_config::MergeConfig;
pub use skillmerge_config::SkillMergeConfig;
