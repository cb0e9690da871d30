use serde::{Deserialize, Serialize};

/// The per-tick scalar resource pool (§3). Every field is a plain mass,
/// concentration or derived quantity; ppm is always `mass / water` and is
/// never stored, only computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resources {
    pub water: f64,
    pub temperature: f64,
    pub surface: f64,
    pub flow: f64,
    pub light: f64,
    pub food: f64,
    pub waste: f64,
    pub algae: f64,
    pub ammonia: f64,
    pub nitrite: f64,
    pub nitrate: f64,
    pub phosphate: f64,
    pub potassium: f64,
    pub iron: f64,
    pub oxygen: f64,
    pub co2: f64,
    pub ph: f64,
    pub aob: f64,
    pub nob: f64,
}

/// Identifies a scalar the effect pipeline can target. `surface`, `flow` and
/// `light` are deliberately excluded: they are recomputed wholesale from
/// equipment every tick (§4.3) and are never the target of an `Effect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKey {
    Water,
    Temperature,
    Food,
    Waste,
    Algae,
    Ammonia,
    Nitrite,
    Nitrate,
    Phosphate,
    Potassium,
    Iron,
    Oxygen,
    Co2,
    Ph,
    Aob,
    Nob,
}

impl Resources {
    /// Converts a dissolved mass (mg) into parts-per-million given the
    /// current water volume. Returns 0 rather than dividing by zero.
    pub fn ppm(&self, mass_mg: f64) -> f64 {
        if self.water > 0.0 {
            mass_mg / self.water
        } else {
            0.0
        }
    }

    pub fn ammonia_ppm(&self) -> f64 {
        self.ppm(self.ammonia)
    }

    pub fn nitrite_ppm(&self) -> f64 {
        self.ppm(self.nitrite)
    }

    pub fn nitrate_ppm(&self) -> f64 {
        self.ppm(self.nitrate)
    }

    pub fn phosphate_ppm(&self) -> f64 {
        self.ppm(self.phosphate)
    }

    pub fn potassium_ppm(&self) -> f64 {
        self.ppm(self.potassium)
    }

    pub fn iron_ppm(&self) -> f64 {
        self.ppm(self.iron)
    }

    pub fn watts_per_liter(&self) -> f64 {
        if self.water > 0.0 {
            self.light / self.water
        } else {
            0.0
        }
    }

    /// Reads the scalar addressed by `key`.
    pub fn get(&self, key: ResourceKey) -> f64 {
        match key {
            ResourceKey::Water => self.water,
            ResourceKey::Temperature => self.temperature,
            ResourceKey::Food => self.food,
            ResourceKey::Waste => self.waste,
            ResourceKey::Algae => self.algae,
            ResourceKey::Ammonia => self.ammonia,
            ResourceKey::Nitrite => self.nitrite,
            ResourceKey::Nitrate => self.nitrate,
            ResourceKey::Phosphate => self.phosphate,
            ResourceKey::Potassium => self.potassium,
            ResourceKey::Iron => self.iron,
            ResourceKey::Oxygen => self.oxygen,
            ResourceKey::Co2 => self.co2,
            ResourceKey::Ph => self.ph,
            ResourceKey::Aob => self.aob,
            ResourceKey::Nob => self.nob,
        }
    }

    /// Adds `delta` to the scalar addressed by `key`. Effects commute
    /// additively within a tier (§4.1), so callers may apply them in any
    /// order as long as tier boundaries are respected.
    pub fn apply_delta(&mut self, key: ResourceKey, delta: f64) {
        let slot = match key {
            ResourceKey::Water => &mut self.water,
            ResourceKey::Temperature => &mut self.temperature,
            ResourceKey::Food => &mut self.food,
            ResourceKey::Waste => &mut self.waste,
            ResourceKey::Algae => &mut self.algae,
            ResourceKey::Ammonia => &mut self.ammonia,
            ResourceKey::Nitrite => &mut self.nitrite,
            ResourceKey::Nitrate => &mut self.nitrate,
            ResourceKey::Phosphate => &mut self.phosphate,
            ResourceKey::Potassium => &mut self.potassium,
            ResourceKey::Iron => &mut self.iron,
            ResourceKey::Oxygen => &mut self.oxygen,
            ResourceKey::Co2 => &mut self.co2,
            ResourceKey::Ph => &mut self.ph,
            ResourceKey::Aob => &mut self.aob,
            ResourceKey::Nob => &mut self.nob,
        };
        *slot += delta;
    }

    /// Enforces every declared range from §3 invariants 1-4. Silent: this
    /// is the mechanism that absorbs floating-point drift, not a
    /// diagnostic (§4.1 "Clamping").
    pub fn clamp(&mut self, capacity_l: f64, max_bacteria_population: f64) {
        self.water = self.water.clamp(0.0, capacity_l);
        self.temperature = self.temperature.clamp(0.0, 50.0);
        self.ph = self.ph.clamp(0.0, 14.0);
        self.algae = self.algae.clamp(0.0, 100.0);
        self.food = self.food.max(0.0);
        self.waste = self.waste.max(0.0);
        self.ammonia = self.ammonia.max(0.0);
        self.nitrite = self.nitrite.max(0.0);
        self.nitrate = self.nitrate.max(0.0);
        self.phosphate = self.phosphate.max(0.0);
        self.potassium = self.potassium.max(0.0);
        self.iron = self.iron.max(0.0);
        self.oxygen = self.oxygen.max(0.0);
        self.co2 = self.co2.max(0.0);
        self.aob = self.aob.clamp(0.0, max_bacteria_population.max(0.0));
        self.nob = self.nob.clamp(0.0, max_bacteria_population.max(0.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Resources {
        Resources {
            water: 100.0,
            temperature: 25.0,
            surface: 0.0,
            flow: 0.0,
            light: 50.0,
            food: 1.0,
            waste: 0.0,
            algae: 0.0,
            ammonia: 10.0,
            nitrite: 0.0,
            nitrate: 0.0,
            phosphate: 0.0,
            potassium: 0.0,
            iron: 0.0,
            oxygen: 7.0,
            co2: 5.0,
            ph: 7.0,
            aob: 0.0,
            nob: 0.0,
        }
    }

    #[test]
    fn ppm_is_mass_over_water() {
        let r = sample();
        assert_eq!(r.ammonia_ppm(), 0.1);
    }

    #[test]
    fn ppm_zero_water_does_not_divide_by_zero() {
        let mut r = sample();
        r.water = 0.0;
        assert_eq!(r.ammonia_ppm(), 0.0);
    }

    #[test]
    fn apply_delta_round_trips_through_get() {
        let mut r = sample();
        r.apply_delta(ResourceKey::Ammonia, -4.0);
        assert_eq!(r.get(ResourceKey::Ammonia), 6.0);
    }

    #[test]
    fn clamp_enforces_every_declared_range() {
        let mut r = sample();
        r.water = -5.0;
        r.temperature = 999.0;
        r.ph = -1.0;
        r.algae = 500.0;
        r.ammonia = -3.0;
        r.aob = 1_000_000.0;
        r.clamp(50.0, 100.0);
        assert_eq!(r.water, 0.0);
        assert_eq!(r.temperature, 50.0);
        assert_eq!(r.ph, 0.0);
        assert_eq!(r.algae, 100.0);
        assert_eq!(r.ammonia, 0.0);
        assert_eq!(r.aob, 100.0);
    }
}
