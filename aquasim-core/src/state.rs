use aquasim_schemas::alert::AlertState;
use aquasim_schemas::config::SimulationConfig;
use aquasim_schemas::environment::Environment;
use aquasim_schemas::equipment::Equipment;
use aquasim_schemas::fish::Fish;
use aquasim_schemas::log::LogRing;
use aquasim_schemas::plant::Plant;
use aquasim_schemas::resources::Resources;
use aquasim_schemas::tank::Tank;
use aquasim_schemas::tunables::TunableConfig;
use serde::{Deserialize, Serialize};

use crate::error::AquaError;

/// The single value produced and consumed per tick (§3). Every collection
/// is exclusively owned; there is no structural sharing with the previous
/// snapshot, matching the "single-owner arena rebuilt each tick" approach
/// §9 calls out as acceptable at this scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub tank: Tank,
    pub resources: Resources,
    pub environment: Environment,
    pub equipment: Equipment,
    pub plants: Vec<Plant>,
    pub fish: Vec<Fish>,
    pub alert_state: AlertState,
    pub logs: LogRing,
    /// Engine-assigned monotonic id counters (§3 "Identifier allocation").
    pub next_plant_id: u64,
    pub next_fish_id: u64,
}

impl Snapshot {
    /// Maximum bacterial population the current surface area can support
    /// (§3 invariant 4; §4.5 step 7 "Surface cap").
    pub fn max_bacteria_population(&self, tunables: &TunableConfig) -> f64 {
        self.resources.surface * tunables.bacteria_per_cm2
    }

    /// The simulated hour-of-day, derived purely from the tick counter
    /// (§4.3 "hourOfDay is derived deterministically").
    pub fn hour_of_day(&self) -> u32 {
        (self.tick % 24) as u32
    }

    pub fn find_plant(&self, id: u64) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id == id)
    }

    pub fn find_fish(&self, id: u64) -> Option<&Fish> {
        self.fish.iter().find(|f| f.id == id)
    }
}

/// `createSimulation(config) -> Snapshot` (§6).
pub fn create_simulation(config: &SimulationConfig) -> Result<Snapshot, AquaError> {
    config
        .validate()
        .map_err(AquaError::InvalidConfig)?;

    let tank = Tank::new(config.tank_capacity_l);

    let resources = Resources {
        water: config.tank_capacity_l,
        temperature: config.initial_temperature,
        surface: tank.bacteria_surface_cm2,
        flow: 0.0,
        light: 0.0,
        food: 0.0,
        waste: 0.0,
        algae: 0.0,
        ammonia: 0.0,
        nitrite: 0.0,
        nitrate: 0.0,
        phosphate: 0.0,
        potassium: 0.0,
        iron: 0.0,
        oxygen: 7.0,
        co2: 4.0,
        ph: config.tap_water_ph,
        aob: 0.0,
        nob: 0.0,
    };

    let environment = Environment {
        room_temperature: config.room_temperature,
        tap_water_temperature: config.tap_water_temperature,
        tap_water_ph: config.tap_water_ph,
        ambient_waste_rate: 0.0,
    };

    let equipment = Equipment {
        heater: config.heater,
        ato: config.ato,
        filter: config.filter,
        powerhead: config.powerhead,
        substrate: config.substrate,
        hardscape: config.hardscape.clone(),
        lid: config.lid,
        light: config.light,
        co2_generator: config.co2_generator,
        air_pump: config.air_pump,
        auto_doser: config.auto_doser,
        auto_feeder: config.auto_feeder,
    };

    Ok(Snapshot {
        tick: 0,
        tank,
        resources,
        environment,
        equipment,
        plants: Vec::new(),
        fish: Vec::new(),
        alert_state: AlertState::default(),
        logs: LogRing::new(500),
        next_plant_id: 0,
        next_fish_id: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_simulation_seeds_full_water_and_defaults() {
        let config = SimulationConfig::new(100.0);
        let snap = create_simulation(&config).unwrap();
        assert_eq!(snap.tick, 0);
        assert_eq!(snap.resources.water, 100.0);
        assert_eq!(snap.resources.temperature, 25.0);
        assert!(snap.plants.is_empty());
        assert!(snap.fish.is_empty());
    }

    #[test]
    fn create_simulation_rejects_invalid_config() {
        let config = SimulationConfig::new(-1.0);
        assert!(create_simulation(&config).is_err());
    }

    #[test]
    fn hour_of_day_wraps_on_tick() {
        let config = SimulationConfig::new(50.0);
        let mut snap = create_simulation(&config).unwrap();
        snap.tick = 25;
        assert_eq!(snap.hour_of_day(), 1);
    }
}
