//! Environment-driven tuning for the research client.
//!
//! The parsing logic is decoupled from the process environment so it can be
//! tested with a pure map lookup, no `set_var`/`remove_var` needed.

use std::env::VarError;

use anyhow::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResearchSettings {
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub backoff_base_secs: u64,
}

/// Loads research-client settings from environment variables already in the
/// process.
///
/// # Errors
///
/// Fails if a set variable does not parse as its expected integer type.
pub fn load_research_settings() -> anyhow::Result<ResearchSettings> {
    build_research_settings(|key| std::env::var(key))
}

fn build_research_settings<F>(lookup: F) -> anyhow::Result<ResearchSettings>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let parse_u64 = |var: &str, default: u64| -> anyhow::Result<u64> {
        match lookup(var) {
            Ok(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("invalid value for {var}: \"{raw}\"")),
            Err(_) => Ok(default),
        }
    };
    let parse_u32 = |var: &str, default: u32| -> anyhow::Result<u32> {
        match lookup(var) {
            Ok(raw) => raw
                .parse::<u32>()
                .with_context(|| format!("invalid value for {var}: \"{raw}\"")),
            Err(_) => Ok(default),
        }
    };

    Ok(ResearchSettings {
        timeout_secs: parse_u64("FLIPSCAN_RESEARCH_TIMEOUT_SECS", 30)?,
        max_retries: parse_u32("FLIPSCAN_RESEARCH_MAX_RETRIES", 2)?,
        backoff_base_secs: parse_u64("FLIPSCAN_RESEARCH_BACKOFF_BASE_SECS", 1)?,
    })
}
