use serde::{Deserialize, Serialize};

/// External inputs the simulation never mutates on its own (§3): these only
/// change when a user edits the tank's setup (room climate, tap water).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub room_temperature: f64,
    pub tap_water_temperature: f64,
    pub tap_water_ph: f64,
    pub ambient_waste_rate: f64,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            room_temperature: 22.0,
            tap_water_temperature: 18.0,
            tap_water_ph: 7.0,
            ambient_waste_rate: 0.0,
        }
    }
}
