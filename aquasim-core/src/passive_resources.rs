use aquasim_schemas::equipment::{Equipment, FilterType, LidType, SubstrateType};
use aquasim_schemas::tunables::TunableConfig;

/// Recomputes `surface`, `flow` and `light` wholesale from equipment,
/// tank and schedules (§4.3). These three scalars are never targeted by an
/// `Effect` — they have no history, only a present value derived from the
/// current tick.
pub struct PassiveResources {
    pub surface: f64,
    pub flow: f64,
    pub light: f64,
}

pub fn derive(
    equipment: &Equipment,
    tank_bacteria_surface_cm2: f64,
    tank_capacity_l: f64,
    hour_of_day: u32,
    tunables: &TunableConfig,
) -> PassiveResources {
    let surface = tank_bacteria_surface_cm2
        + filter_surface(equipment, tunables)
        + substrate_surface(equipment, tank_capacity_l, tunables)
        + hardscape_surface(equipment);

    let flow = filter_flow(equipment, tank_capacity_l, tunables)
        + powerhead_flow(equipment, tunables)
        + air_pump_flow(equipment, tunables);

    let light = if equipment.light.enabled && equipment.light.schedule.is_active_at(hour_of_day) {
        equipment.light.wattage
    } else {
        0.0
    };

    PassiveResources { surface, flow, light }
}

fn filter_index(filter_type: FilterType) -> usize {
    match filter_type {
        FilterType::Sponge => 0,
        FilterType::Hob => 1,
        FilterType::Canister => 2,
        FilterType::Sump => 3,
    }
}

fn substrate_index(substrate_type: SubstrateType) -> usize {
    match substrate_type {
        SubstrateType::None => 0,
        SubstrateType::Gravel => 1,
        SubstrateType::Sand => 2,
        SubstrateType::AquaSoil => 3,
    }
}

fn filter_surface(equipment: &Equipment, tunables: &TunableConfig) -> f64 {
    if equipment.filter.enabled {
        tunables.filter_surface_cm2[filter_index(equipment.filter.filter_type)]
    } else {
        0.0
    }
}

fn substrate_surface(equipment: &Equipment, capacity_l: f64, tunables: &TunableConfig) -> f64 {
    tunables.substrate_surface_per_liter_cm2[substrate_index(equipment.substrate.substrate_type)]
        * capacity_l
}

fn hardscape_surface(equipment: &Equipment) -> f64 {
    equipment.hardscape.items.iter().map(|item| item.surface_cm2).sum()
}

fn filter_flow(equipment: &Equipment, capacity_l: f64, tunables: &TunableConfig) -> f64 {
    if !equipment.filter.enabled {
        return 0.0;
    }
    let idx = filter_index(equipment.filter.filter_type);
    let target = capacity_l * tunables.filter_turnover_per_hr[idx];
    target.min(tunables.filter_max_flow_lph[idx])
}

fn powerhead_flow(equipment: &Equipment, tunables: &TunableConfig) -> f64 {
    if equipment.powerhead.enabled {
        // gallons/hour -> liters/hour
        equipment.powerhead.flow_rate_gph * 3.785 * tunables.powerhead_flow_efficiency
    } else {
        0.0
    }
}

fn air_pump_flow(equipment: &Equipment, tunables: &TunableConfig) -> f64 {
    match equipment.air_pump {
        Some(pump) if pump.enabled => tunables.air_pump_flow_lph,
        _ => 0.0,
    }
}

/// Lid evaporation multiplier (§4.5 "Evaporation").
pub fn lid_multiplier(lid_type: LidType) -> f64 {
    match lid_type {
        LidType::None => 1.0,
        LidType::Mesh => 0.75,
        LidType::Full => 0.25,
        LidType::Sealed => 0.0,
    }
}
