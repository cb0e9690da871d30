use crate::equipment::{
    AirPump, Ato, AutoDoser, AutoFeeder, Co2Generator, Filter, FilterType, Hardscape, Heater,
    Lid, LidType, Light, Powerhead, Schedule, Substrate, SubstrateType,
};
use serde::{Deserialize, Serialize};

/// One-time tank/equipment setup consumed by `create_simulation` (§6).
/// Mirrors the teacher crate's fluent builder: every `with_*` method
/// returns `Self` so a host assembles a config in one expression, and
/// everything not explicitly set keeps its published default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub tank_capacity_l: f64,
    pub initial_temperature: f64,
    pub room_temperature: f64,
    pub tap_water_temperature: f64,
    pub tap_water_ph: f64,
    pub heater: Heater,
    pub lid: Lid,
    pub ato: Ato,
    pub filter: Filter,
    pub powerhead: Powerhead,
    pub substrate: Substrate,
    pub hardscape: Hardscape,
    pub light: Light,
    pub co2_generator: Option<Co2Generator>,
    pub air_pump: Option<AirPump>,
    pub auto_doser: Option<AutoDoser>,
    pub auto_feeder: Option<AutoFeeder>,
}

impl SimulationConfig {
    /// Starts a config for a tank of the given capacity with every other
    /// field at its published default (§6 "SimulationConfig").
    pub fn new(tank_capacity_l: f64) -> Self {
        Self {
            tank_capacity_l,
            initial_temperature: 25.0,
            room_temperature: 22.0,
            tap_water_temperature: 18.0,
            tap_water_ph: 7.0,
            heater: Heater {
                enabled: true,
                target_temperature: 25.0,
                wattage: 100.0,
                is_on: false,
            },
            lid: Lid {
                lid_type: LidType::None,
            },
            ato: Ato { enabled: false },
            filter: Filter {
                enabled: true,
                filter_type: FilterType::Sponge,
            },
            powerhead: Powerhead {
                enabled: false,
                flow_rate_gph: 400.0,
            },
            substrate: Substrate {
                substrate_type: SubstrateType::None,
            },
            hardscape: Hardscape::default(),
            light: Light {
                enabled: true,
                wattage: 100.0,
                schedule: Schedule::new(8, 10),
            },
            co2_generator: None,
            air_pump: None,
            auto_doser: None,
            auto_feeder: None,
        }
    }

    pub fn with_initial_temperature(mut self, value: f64) -> Self {
        self.initial_temperature = value;
        self
    }

    pub fn with_room_temperature(mut self, value: f64) -> Self {
        self.room_temperature = value;
        self
    }

    pub fn with_tap_water(mut self, temperature: f64, ph: f64) -> Self {
        self.tap_water_temperature = temperature;
        self.tap_water_ph = ph;
        self
    }

    pub fn with_heater(mut self, heater: Heater) -> Self {
        self.heater = heater;
        self
    }

    pub fn with_lid(mut self, lid: Lid) -> Self {
        self.lid = lid;
        self
    }

    pub fn with_ato(mut self, ato: Ato) -> Self {
        self.ato = ato;
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_powerhead(mut self, powerhead: Powerhead) -> Self {
        self.powerhead = powerhead;
        self
    }

    pub fn with_substrate(mut self, substrate: Substrate) -> Self {
        self.substrate = substrate;
        self
    }

    pub fn with_hardscape(mut self, hardscape: Hardscape) -> Self {
        self.hardscape = hardscape;
        self
    }

    pub fn with_light(mut self, light: Light) -> Self {
        self.light = light;
        self
    }

    pub fn with_co2_generator(mut self, co2: Co2Generator) -> Self {
        self.co2_generator = Some(co2);
        self
    }

    pub fn with_air_pump(mut self, air_pump: AirPump) -> Self {
        self.air_pump = Some(air_pump);
        self
    }

    pub fn with_auto_doser(mut self, doser: AutoDoser) -> Self {
        self.auto_doser = Some(doser);
        self
    }

    pub fn with_auto_feeder(mut self, feeder: AutoFeeder) -> Self {
        self.auto_feeder = Some(feeder);
        self
    }

    /// Structural validation a host cannot skip (§7 "Construction error"):
    /// a malformed config has no prior valid snapshot to fall back to.
    pub fn validate(&self) -> Result<(), String> {
        if self.tank_capacity_l <= 0.0 {
            return Err("tank_capacity_l must be positive".to_string());
        }
        if !self.light.schedule.is_valid() {
            return Err("light schedule is invalid".to_string());
        }
        if let Some(co2) = &self.co2_generator {
            if !co2.schedule.is_valid() {
                return Err("co2 generator schedule is invalid".to_string());
            }
        }
        if let Some(doser) = &self.auto_doser {
            if !doser.schedule.is_valid() {
                return Err("auto-doser schedule is invalid".to_string());
            }
        }
        if let Some(feeder) = &self.auto_feeder {
            if !feeder.schedule.is_valid() {
                return Err("auto-feeder schedule is invalid".to_string());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_unset_fields_at_default() {
        let config = SimulationConfig::new(100.0);
        assert_eq!(config.tank_capacity_l, 100.0);
        assert_eq!(config.initial_temperature, 25.0);
        assert!(config.heater.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_positive_capacity() {
        let config = SimulationConfig::new(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_invalid_schedule() {
        let mut config = SimulationConfig::new(100.0);
        config.light.schedule = Schedule::new(0, 0);
        assert!(config.validate().is_err());
    }
}
