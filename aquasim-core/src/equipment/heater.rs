use aquasim_schemas::resources::ResourceKey;
use aquasim_schemas::tunables::TunableConfig;

use crate::effects::{Effect, Tier};
use crate::state::Snapshot;

/// Heater controller outcome: effects plus the `isOn` state hint (§4.4
/// "Heater"). Heater has a hint, so it is not a registry member — the
/// orchestrator calls it directly and writes the hint onto the new
/// snapshot's equipment.
pub struct HeaterOutcome {
    pub effects: Vec<Effect>,
    pub is_on: bool,
}

pub fn update(snapshot: &Snapshot, tunables: &TunableConfig) -> HeaterOutcome {
    let heater = &snapshot.equipment.heater;
    let tank = &snapshot.tank;

    if !heater.enabled || heater.wattage <= 0.0 || tank.capacity_l <= 0.0 {
        return HeaterOutcome {
            effects: Vec::new(),
            is_on: false,
        };
    }

    let gap = heater.target_temperature - snapshot.resources.temperature;
    if gap <= 0.0 {
        return HeaterOutcome {
            effects: Vec::new(),
            is_on: false,
        };
    }

    let heating_rate = heater.wattage / tank.capacity_l.powf(tunables.heater_volume_exponent)
        * tunables.heater_rate_coefficient
        / 100.0;
    let delta = gap.min(heating_rate);

    HeaterOutcome {
        effects: vec![Effect::new(Tier::Immediate, ResourceKey::Temperature, delta, "heater")],
        is_on: true,
    }
}
