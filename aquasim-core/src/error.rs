use thiserror::Error;

/// Typed error taxonomy for every caller-reachable failure (§7). Per-tick
/// physical violations are never errors — they are silently clamped
/// (§4.1) — so every variant here is either a construction-time problem,
/// a calibration-harness/tooling problem, or a persistence problem.
#[derive(Debug, Error)]
pub enum AquaError {
    #[error("invalid simulation config: {0}")]
    InvalidConfig(String),

    #[error("unknown plant species requires substrate '{0}'")]
    SubstrateIncompatible(String),

    #[error("scenario script error: {0}")]
    ScenarioError(String),

    #[error("scenario assertion failed at tick {tick}: {message}")]
    AssertionFailed { tick: u64, message: String },

    #[error("persisted state schema version mismatch: expected {expected}, found {found}")]
    SchemaVersionMismatch { expected: u32, found: u32 },

    #[error("persisted state is structurally corrupt: {0}")]
    CorruptPersistedState(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),

    #[error("failed to parse JSON: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("failed to process CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),

    #[error("logging error: {0}")]
    LoggingError(#[from] anyhow::Error),
}
