//! YAML configuration loading for the calibration harness CLI (§1 ambient
//! stack: "a small CLI loads scenario definitions from YAML"). Unlike the
//! teacher's multi-directory knowledge base, there is only one kind of
//! document here — a tunable-constant override sheet — so the generic
//! "read every YAML file in a directory into a map" loader collapses to a
//! single optional file read.

use anyhow::{Context, Result};
use aquasim_schemas::tunables::TunableConfig;
use std::fs;
use std::path::Path;

/// Loads a `TunableConfig` override sheet, falling back to published
/// defaults if `path` does not exist. A host tuning constants (§9 open
/// question b) edits this file rather than the crate's own source.
pub fn load_tunables(path: &Path) -> Result<TunableConfig> {
    if !path.exists() {
        return Ok(TunableConfig::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read tunables file: {:?}", path))?;
    let tunables: TunableConfig = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse tunables YAML from {:?}", path))?;
    Ok(tunables)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tunables_file_falls_back_to_defaults() {
        let tunables = load_tunables(Path::new("/nonexistent/tunables.yaml")).unwrap();
        assert_eq!(tunables.bacteria_per_cm2, TunableConfig::default().bacteria_per_cm2);
    }
}
