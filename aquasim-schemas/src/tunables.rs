use serde::{Deserialize, Serialize};

/// Named biological/physical constants with published defaults, passed by
/// value and overridable per run (§2 "Tunable config", §9 open question b).
/// Every system in `aquasim-core` reads its constants from here rather than
/// hard-coding a literal, so the calibration harness can sweep them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TunableConfig {
    // --- Evaporation (§4.5) ---
    pub evaporation_base_rate_per_day: f64,
    pub evaporation_temp_doubling_interval: f64,

    // --- Heater (§4.4) ---
    pub heater_rate_coefficient: f64,
    pub heater_volume_exponent: f64,

    // --- Temperature drift (§4.5) ---
    pub temp_drift_reference_volume_l: f64,
    pub temp_drift_volume_exponent: f64,
    pub temp_drift_coefficient_per_hr: f64,

    // --- Decay (§4.5) ---
    pub decay_base_rate_per_hr: f64,
    pub decay_q10: f64,
    pub decay_waste_fraction: f64,
    pub decay_gas_exchange_per_gram: f64,

    // --- Nitrogen cycle (§4.5) ---
    pub waste_conversion_rate: f64,
    pub waste_to_ammonia_ratio: f64,
    pub aob_processing_rate: f64,
    pub nob_processing_rate: f64,
    pub bacteria_spawn_threshold_ppm: f64,
    pub bacteria_spawn_amount: f64,
    pub bacteria_growth_rate: f64,
    pub bacteria_death_rate: f64,
    pub bacteria_food_threshold_ppm: f64,
    pub bacteria_per_cm2: f64,

    // --- Gas exchange (§4.5) ---
    pub co2_atmospheric_mg_per_l: f64,
    pub gas_exchange_rate_coefficient: f64,
    pub gas_exchange_aeration_multiplier: f64,

    // --- Algae (§4.5) ---
    pub algae_max_growth_rate: f64,
    pub algae_half_saturation_wpl: f64,
    pub algae_cap: f64,

    // --- Photosynthesis & respiration (§4.5) ---
    pub photosynthesis_rate_coefficient: f64,
    pub photosynthesis_co2_half_saturation_mg_l: f64,
    pub respiration_rate_coefficient: f64,
    pub respiration_q10: f64,
    pub plant_biomass_to_nutrient_draw: f64,

    // --- Nutrient sufficiency / plant condition (§4.5, §4.6) ---
    pub plant_condition_step_up: f64,
    pub plant_condition_step_down: f64,
    pub plant_shedding_threshold: f64,
    pub plant_shedding_waste_g: f64,
    pub plant_death_after_ticks: u32,
    pub plant_death_waste_g: f64,

    // --- pH drift (§4.5) ---
    pub ph_drift_rate_per_hr: f64,
    pub driftwood_ph_delta: f64,
    pub calcite_ph_delta: f64,
    pub co2_ph_sensitivity: f64,

    // --- Fish metabolism (§4.5) ---
    pub fish_hunger_rate_per_hr: f64,
    pub fish_health_recovery_rate_per_hr: f64,
    pub fish_health_decline_rate_per_hr: f64,
    pub fish_death_health_threshold: f64,
    pub fish_waste_per_gram_food: f64,
    pub fish_capacity_grams_per_liter: f64,

    // --- Alert thresholds (§4.7) ---
    pub alert_water_critical_fraction: f64,
    pub alert_high_algae: f64,
    pub alert_high_ammonia_ppm: f64,
    pub alert_high_nitrite_ppm: f64,
    pub alert_high_nitrate_ppm: f64,
    pub alert_low_oxygen_mg_l: f64,
    pub alert_high_co2_mg_l: f64,

    // --- Passive resource derivation (§4.3) ---
    pub filter_surface_cm2: [f64; 4], // indexed by FilterType discriminant order
    pub substrate_surface_per_liter_cm2: [f64; 4], // indexed by SubstrateType
    pub filter_turnover_per_hr: [f64; 4],
    pub filter_max_flow_lph: [f64; 4],
    pub powerhead_flow_efficiency: f64,
    pub air_pump_flow_lph: f64,

    // --- Observability ---
    pub log_ring_capacity: usize,
}

impl Default for TunableConfig {
    fn default() -> Self {
        Self {
            evaporation_base_rate_per_day: 0.01,
            evaporation_temp_doubling_interval: 10.0,

            heater_rate_coefficient: 0.6,
            heater_volume_exponent: 0.5,

            temp_drift_reference_volume_l: 100.0,
            temp_drift_volume_exponent: 0.35,
            temp_drift_coefficient_per_hr: 0.12,

            decay_base_rate_per_hr: 0.05,
            decay_q10: 2.0,
            decay_waste_fraction: 0.40,
            decay_gas_exchange_per_gram: 1.2,

            waste_conversion_rate: 0.30,
            waste_to_ammonia_ratio: 0.35,
            aob_processing_rate: 0.02,
            nob_processing_rate: 0.02,
            bacteria_spawn_threshold_ppm: 0.05,
            bacteria_spawn_amount: 2.0,
            bacteria_growth_rate: 0.22,
            bacteria_death_rate: 0.05,
            bacteria_food_threshold_ppm: 0.01,
            bacteria_per_cm2: 50.0,

            co2_atmospheric_mg_per_l: 4.0,
            gas_exchange_rate_coefficient: 0.08,
            gas_exchange_aeration_multiplier: 2.5,

            algae_max_growth_rate: 1.2,
            algae_half_saturation_wpl: 0.4,
            algae_cap: 100.0,

            photosynthesis_rate_coefficient: 0.02,
            photosynthesis_co2_half_saturation_mg_l: 5.0,
            respiration_rate_coefficient: 0.01,
            respiration_q10: 2.0,
            plant_biomass_to_nutrient_draw: 0.002,

            plant_condition_step_up: 1.0,
            plant_condition_step_down: 2.0,
            plant_shedding_threshold: 40.0,
            plant_shedding_waste_g: 0.05,
            plant_death_after_ticks: 72,
            plant_death_waste_g: 2.0,

            ph_drift_rate_per_hr: 0.02,
            driftwood_ph_delta: -0.3,
            calcite_ph_delta: 0.3,
            co2_ph_sensitivity: 0.02,

            fish_hunger_rate_per_hr: 2.5,
            fish_health_recovery_rate_per_hr: 1.0,
            fish_health_decline_rate_per_hr: 3.0,
            fish_death_health_threshold: 0.0,
            fish_waste_per_gram_food: 0.2,
            fish_capacity_grams_per_liter: 0.5,

            alert_water_critical_fraction: 0.20,
            alert_high_algae: 80.0,
            alert_high_ammonia_ppm: 0.02,
            alert_high_nitrite_ppm: 0.1,
            alert_high_nitrate_ppm: 80.0,
            alert_low_oxygen_mg_l: 4.0,
            alert_high_co2_mg_l: 30.0,

            filter_surface_cm2: [300.0, 200.0, 800.0, 1500.0],
            substrate_surface_per_liter_cm2: [0.0, 50.0, 40.0, 70.0],
            filter_turnover_per_hr: [4.0, 6.0, 8.0, 10.0],
            filter_max_flow_lph: [200.0, 450.0, 900.0, 1600.0],
            powerhead_flow_efficiency: 0.85,
            air_pump_flow_lph: 15.0,

            log_ring_capacity: 500,
        }
    }
}
