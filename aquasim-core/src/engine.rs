use aquasim_schemas::tunables::TunableConfig;

use crate::state::Snapshot;
use crate::{alerts, effects, equipment, fish, passive_resources, plants, registry};

/// `tick(snapshot, tunableConfig?) -> Snapshot` (§6). Performs the ten-step
/// tier-ordered pipeline of §4.1 exactly; reordering any step changes
/// results (§4.1 "Rationale for tiering").
pub fn tick(snapshot: &Snapshot, tunables: &TunableConfig) -> Snapshot {
    let mut next = snapshot.clone();

    // 1. Advance tick.
    next.tick = snapshot.tick + 1;

    // 2. Recompute derived passive resources.
    let hour = next.hour_of_day();
    let derived = passive_resources::derive(
        &next.equipment,
        next.tank.bacteria_surface_cm2,
        next.tank.capacity_l,
        hour,
        tunables,
    );
    next.resources.surface = derived.surface;
    next.resources.flow = derived.flow;
    next.resources.light = derived.light;

    // 3-4. Immediate tier: heater, ATO, CO2 generator, evaporation.
    let heater_outcome = equipment::heater::update(&next, tunables);
    let mut immediate_effects = registry::run(&registry::immediate_systems(), &next, tunables);
    immediate_effects.extend(heater_outcome.effects);
    effects::apply_effects(&mut next.resources, &immediate_effects);
    clamp(&mut next, tunables);
    next.equipment.heater.is_on = heater_outcome.is_on;

    // 5-6. Active tier: fish, plants, auto-doser, auto-feeder.
    let doser_outcome = equipment::auto_doser::update(&next, tunables);
    let feeder_outcome = equipment::auto_feeder::update(&next, tunables);
    let plant_output = plants::process(&next, tunables);
    let fish_output = fish::process(&next, tunables);

    let mut active_effects = doser_outcome.effects;
    active_effects.extend(feeder_outcome.effects);
    active_effects.extend(plant_output.effects);
    active_effects.extend(fish_output.effects);
    effects::apply_effects(&mut next.resources, &active_effects);
    clamp(&mut next, tunables);

    next.plants = plant_output.plants;
    next.fish = fish_output.fish;
    if let Some(doser) = next.equipment.auto_doser.as_mut() {
        doser.dosed_today = doser_outcome.dosed_today;
    }
    if let Some(feeder) = next.equipment.auto_feeder.as_mut() {
        feeder.fed_today = feeder_outcome.fed_today;
    }
    for log in plant_output.logs.into_iter().chain(fish_output.logs) {
        next.logs.push(log);
    }

    // 7-8. Passive tier: decay, nitrogen cycle, algae, gas exchange,
    // temperature drift, pH drift.
    let passive_effects = registry::run(&registry::passive_systems(), &next, tunables);
    effects::apply_effects(&mut next.resources, &passive_effects);
    clamp(&mut next, tunables);

    // 9. Alert registry.
    let (alert_state, alert_logs) = alerts::check_alerts(&next, tunables);
    next.alert_state = alert_state;
    for log in alert_logs {
        next.logs.push(log);
    }

    next
}

fn clamp(snapshot: &mut Snapshot, tunables: &TunableConfig) {
    let max_bacteria = snapshot.max_bacteria_population(tunables);
    snapshot.resources.clamp(snapshot.tank.capacity_l, max_bacteria);
    for plant in &mut snapshot.plants {
        plant.clamp_invariants();
    }
    for fish in &mut snapshot.fish {
        fish.clamp_invariants();
    }
}
