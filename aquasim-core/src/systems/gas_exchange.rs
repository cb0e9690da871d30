use aquasim_schemas::resources::ResourceKey;
use aquasim_schemas::tunables::TunableConfig;

use crate::effects::{Effect, Tier};
use crate::state::Snapshot;

/// O2/CO2 drift toward saturation, scaled by surface agitation (§4.5 "Gas
/// exchange"). Passive tier.
pub fn update(snapshot: &Snapshot, tunables: &TunableConfig) -> Vec<Effect> {
    if snapshot.resources.flow <= 0.0 {
        return Vec::new();
    }

    let aeration_bias = if snapshot.equipment.has_aeration() {
        tunables.gas_exchange_aeration_multiplier
    } else {
        1.0
    };
    let rate = tunables.gas_exchange_rate_coefficient * aeration_bias;

    let o2_saturation = oxygen_saturation_mg_per_l(snapshot.resources.temperature);
    let o2_delta = rate * (o2_saturation - snapshot.resources.oxygen);
    let co2_delta = rate * (tunables.co2_atmospheric_mg_per_l - snapshot.resources.co2);

    vec![
        Effect::new(Tier::Passive, ResourceKey::Oxygen, o2_delta, "gas_exchange"),
        Effect::new(Tier::Passive, ResourceKey::Co2, co2_delta, "gas_exchange"),
    ]
}

/// Benson-Krause-style approximation of dissolved O2 saturation (mg/L) at
/// sea level for fresh water, valid over typical aquarium temperatures.
fn oxygen_saturation_mg_per_l(temperature_c: f64) -> f64 {
    let t = temperature_c.clamp(0.0, 40.0);
    14.652 - 0.41022 * t + 0.0079910 * t * t - 0.000077774 * t * t * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquasim_schemas::config::SimulationConfig;
    use aquasim_schemas::equipment::{AirPump, Filter, FilterType, Powerhead};

    #[test]
    fn no_flow_means_no_exchange() {
        let config = SimulationConfig::new(50.0).with_powerhead(Powerhead {
            enabled: false,
            flow_rate_gph: 0.0,
        });
        let snap = crate::state::create_simulation(&config).unwrap();
        let tunables = TunableConfig::default();
        assert!(update(&snap, &tunables).is_empty());
    }

    #[test]
    fn aeration_increases_exchange_rate() {
        let tunables = TunableConfig::default();

        let plain = SimulationConfig::new(50.0)
            .with_filter(Filter { enabled: false, filter_type: FilterType::Hob })
            .with_powerhead(Powerhead {
                enabled: true,
                flow_rate_gph: 100.0,
            });
        let mut plain_snap = crate::state::create_simulation(&plain).unwrap();
        plain_snap.resources.flow = 50.0;
        plain_snap.resources.oxygen = 2.0;

        let aerated = plain.with_air_pump(AirPump { enabled: true });
        let mut aerated_snap = crate::state::create_simulation(&aerated).unwrap();
        aerated_snap.resources.flow = 50.0;
        aerated_snap.resources.oxygen = 2.0;

        let plain_delta = update(&plain_snap, &tunables)[0].delta;
        let aerated_delta = update(&aerated_snap, &tunables)[0].delta;
        assert!(aerated_delta > plain_delta);
    }
}
