use aquasim_schemas::resources::ResourceKey;
use aquasim_schemas::tunables::TunableConfig;

use crate::effects::{Effect, Tier};
use crate::state::Snapshot;

/// CO2 generator controller (§4.4 "CO2 generator"). Registry-compatible.
pub fn update(snapshot: &Snapshot, _tunables: &TunableConfig) -> Vec<Effect> {
    let Some(co2) = snapshot.equipment.co2_generator else {
        return Vec::new();
    };
    if !co2.enabled || !co2.schedule.is_active_at(snapshot.hour_of_day()) {
        return Vec::new();
    }

    vec![Effect::new(Tier::Immediate, ResourceKey::Co2, co2.bubble_rate, "co2_generator")]
}
