//! Biochemical systems (§4.5). Photosynthesis/respiration and fish
//! metabolism are folded into `crate::plants` and `crate::fish` respectively
//! since they mutate the plant/fish collections, not just the scalar pool;
//! every other system here is a pure registry-compatible effect emitter.

pub mod algae;
pub mod decay;
pub mod evaporation;
pub mod gas_exchange;
pub mod nitrogen_cycle;
pub mod ph_drift;
pub mod temperature_drift;
