use aquasim_schemas::action::{Action, ActionOutcome};
use aquasim_schemas::equipment::SubstrateType;
use aquasim_schemas::fish::Fish;
use aquasim_schemas::log::{LogEntry, Severity};
use aquasim_schemas::plant::Plant;
use aquasim_schemas::tunables::TunableConfig;

use crate::state::Snapshot;

/// `applyAction(state, action) -> {state, message}` (§4.2, §6). All actions
/// are immutable: on rejection the returned snapshot is observably
/// identical to the input and no log entry is appended.
pub fn apply_action(snapshot: &Snapshot, action: &Action, tunables: &TunableConfig) -> (Snapshot, ActionOutcome) {
    match action {
        Action::TopOff => top_off(snapshot),
        Action::Feed { amount_g } => feed(snapshot, *amount_g),
        Action::WaterChange { fraction } => water_change(snapshot, *fraction),
        Action::AddPlant { species, initial_size } => add_plant(snapshot, *species, *initial_size, tunables),
        Action::RemovePlant { plant_id } => remove_plant(snapshot, *plant_id),
        Action::AddFish { species } => add_fish(snapshot, *species, tunables),
        Action::ScrubAlgae { fraction } => scrub_algae(snapshot, *fraction),
        Action::Dose { amount_ml } => dose(snapshot, *amount_ml),
    }
}

fn logged(mut snapshot: Snapshot, source: &str, message: impl Into<String>) -> (Snapshot, ActionOutcome) {
    let message = message.into();
    snapshot.logs.push(LogEntry::new(snapshot.tick, source, Severity::Info, message.clone()));
    (snapshot, ActionOutcome::applied(message))
}

fn rejected(snapshot: &Snapshot, message: impl Into<String>) -> (Snapshot, ActionOutcome) {
    (snapshot.clone(), ActionOutcome::rejected(message))
}

fn top_off(snapshot: &Snapshot) -> (Snapshot, ActionOutcome) {
    if snapshot.resources.water >= snapshot.tank.capacity_l {
        return rejected(
            snapshot,
            format!("Water already at capacity ({}L)", snapshot.tank.capacity_l),
        );
    }
    let mut next = snapshot.clone();
    next.resources.water = next.tank.capacity_l;
    logged(next, "user", "topped off water to capacity")
}

fn feed(snapshot: &Snapshot, amount_g: f64) -> (Snapshot, ActionOutcome) {
    if amount_g <= 0.0 {
        return rejected(snapshot, "feed amount must be positive");
    }
    let mut next = snapshot.clone();
    next.resources.food += amount_g;
    logged(next, "user", format!("fed {amount_g:.2}g"))
}

fn water_change(snapshot: &Snapshot, fraction: f64) -> (Snapshot, ActionOutcome) {
    if !(0.0..=1.0).contains(&fraction) || fraction == 0.0 {
        return rejected(snapshot, "water change fraction out of range");
    }
    if snapshot.resources.water <= 0.0 {
        return rejected(snapshot, "no water");
    }

    let mut next = snapshot.clone();
    let keep = 1.0 - fraction;
    let r = &mut next.resources;
    r.ammonia *= keep;
    r.nitrite *= keep;
    r.nitrate *= keep;
    r.phosphate *= keep;
    r.potassium *= keep;
    r.iron *= keep;
    r.waste *= keep;
    r.temperature = keep * r.temperature + fraction * next.environment.tap_water_temperature;
    r.ph = keep * r.ph + fraction * next.environment.tap_water_ph;

    logged(next, "user", format!("changed {:.0}% of the water", fraction * 100.0))
}

/// `floor(capacity / 18.927) * 3` (§4.2 "addPlant").
fn max_plants(capacity_l: f64) -> u32 {
    ((capacity_l / 18.927).floor() * 3.0).max(0.0) as u32
}

fn add_plant(
    snapshot: &Snapshot,
    species: aquasim_schemas::plant::PlantSpecies,
    initial_size: Option<f64>,
    _tunables: &TunableConfig,
) -> (Snapshot, ActionOutcome) {
    if snapshot.plants.len() as u32 >= max_plants(snapshot.tank.capacity_l) {
        return rejected(snapshot, "tank already has the maximum number of plants");
    }
    if let Some(required_name) = species.substrate_requirement_name() {
        if snapshot.equipment.substrate.substrate_type != required_substrate(species) {
            return rejected(snapshot, format!("this plant requires {required_name} substrate"));
        }
    }

    let mut next = snapshot.clone();
    let id = next.next_plant_id;
    next.next_plant_id += 1;
    next.plants.push(Plant::new(id, species, initial_size.unwrap_or(50.0)));
    logged(next, "user", format!("added {species:?}"))
}

fn required_substrate(species: aquasim_schemas::plant::PlantSpecies) -> SubstrateType {
    species
        .profile()
        .required_substrate
        .expect("substrate_requirement_name implies required_substrate is Some")
}

fn remove_plant(snapshot: &Snapshot, plant_id: u64) -> (Snapshot, ActionOutcome) {
    if snapshot.find_plant(plant_id).is_none() {
        return rejected(snapshot, "plant not found");
    }
    let mut next = snapshot.clone();
    next.plants.retain(|p| p.id != plant_id);
    logged(next, "user", format!("removed plant {plant_id}"))
}

/// Conservative bioload guard (§4.2 "Fish capacity check"): 1cm of adult
/// fish length per ~7.57L converted to mass, expressed directly as grams
/// per liter since the data model tracks adult mass, not length.
fn fish_capacity_grams(capacity_l: f64, tunables: &TunableConfig) -> f64 {
    capacity_l * tunables.fish_capacity_grams_per_liter
}

fn add_fish(
    snapshot: &Snapshot,
    species: aquasim_schemas::fish::FishSpecies,
    tunables: &TunableConfig,
) -> (Snapshot, ActionOutcome) {
    let stocked_mass: f64 = snapshot.fish.iter().map(|f| f.species.profile().adult_mass_g).sum();
    let capacity = fish_capacity_grams(snapshot.tank.capacity_l, tunables);
    if stocked_mass >= capacity {
        return rejected(snapshot, "tank is fully stocked");
    }

    let mut next = snapshot.clone();
    let id = next.next_fish_id;
    next.next_fish_id += 1;
    next.fish.push(Fish::new(id, species));
    logged(next, "user", format!("added {species:?}"))
}

fn scrub_algae(snapshot: &Snapshot, fraction: f64) -> (Snapshot, ActionOutcome) {
    let fraction = fraction.clamp(0.0, 1.0);
    let mut next = snapshot.clone();
    next.resources.algae -= next.resources.algae * fraction;
    logged(next, "user", format!("scrubbed {:.0}% of algae", fraction * 100.0))
}

fn dose(snapshot: &Snapshot, amount_ml: f64) -> (Snapshot, ActionOutcome) {
    if amount_ml <= 0.0 {
        return rejected(snapshot, "dose amount must be positive");
    }
    let formula = snapshot
        .equipment
        .auto_doser
        .map(|d| d.formula)
        .unwrap_or_default();

    let mut next = snapshot.clone();
    next.resources.nitrate += amount_ml * formula.nitrate_mg_per_ml;
    next.resources.phosphate += amount_ml * formula.phosphate_mg_per_ml;
    next.resources.potassium += amount_ml * formula.potassium_mg_per_ml;
    next.resources.iron += amount_ml * formula.iron_mg_per_ml;
    logged(next, "user", format!("dosed {amount_ml:.1}mL of fertilizer"))
}
