//! Built-in prototype definitions.
//!
//! The shipped bestiary, gear, and structures. Each function stamps a
//! fresh value-type template; [`builtin`] collects all of them into a
//! registry. Data files loaded afterwards can override any entry by name.

use mamba_core::{
    ActorTemplate, Brain, ConditionSpec, Consumable, Equippable, Faction, Fighter, GameConfig,
    ItemTemplate, Prototype, RenderOrder, ResourceTemplate, Rgb, Spawner,
};

use crate::registry::TemplateRegistry;

const SNAKE_GREEN: Rgb = (63, 255, 63);
const GUARD_PINK: Rgb = (255, 130, 180);
const VIRUS_TEAL: Rgb = (0, 197, 197);
const CRYSTAL_CYAN: Rgb = (7, 227, 247);

/// Registry preloaded with every built-in prototype.
pub fn builtin() -> TemplateRegistry {
    let mut registry = TemplateRegistry::new();
    for actor in [
        player(),
        green_mamba(),
        guard(),
        guard_miner(),
        virus(),
        virus_miner(),
        guard_timer_spawner(),
        guard_eco_spawner(),
        virus_timer_spawner(),
        virus_eco_spawner(),
    ] {
        registry.insert(Prototype::Actor(actor));
    }
    for item in [
        ar_150(),
        ballistic_vest(),
        crystal(),
        health_potion(),
        confusion_scroll(),
    ] {
        registry.insert(Prototype::Item(item));
    }
    registry.insert(Prototype::Resource(crystal_well()));
    registry
}

pub fn player() -> ActorTemplate {
    ActorTemplate::builder("Player")
        .glyph('@')
        .color((255, 255, 255))
        .faction(Faction::Player)
        .brain(Brain::combatant())
        .fighter(Fighter::new(30, 2, 1))
        .inventory(GameConfig::DEFAULT_INVENTORY_CAPACITY)
        .equipment()
        .build()
}

/// Venom applied on a mamba bite.
pub fn mamba_madness() -> ConditionSpec {
    ConditionSpec::poison("Mamba Madness", 3, 3)
}

pub fn green_mamba() -> ActorTemplate {
    ActorTemplate::builder("Green Mamba")
        .glyph('s')
        .color(SNAKE_GREEN)
        .faction(Faction::Snake)
        .brain(Brain::combatant())
        .fighter(Fighter::new(6, 5, 0).with_attack_effect(mamba_madness()))
        .inventory(1)
        .equipment()
        .build()
}

pub fn guard() -> ActorTemplate {
    ActorTemplate::builder("Guard")
        .glyph('g')
        .color(GUARD_PINK)
        .faction(Faction::Player)
        .brain(Brain::combatant())
        .fighter(Fighter::new(10, 4, 0))
        .inventory(1)
        .equipment()
        .build()
}

pub fn guard_miner() -> ActorTemplate {
    ActorTemplate::builder("Guard Miner")
        .glyph('m')
        .color(GUARD_PINK)
        .faction(Faction::Player)
        .brain(Brain::miner())
        .fighter(Fighter::new(5, 1, 0))
        .inventory(1)
        .build()
}

pub fn virus() -> ActorTemplate {
    ActorTemplate::builder("Virus")
        .glyph('v')
        .color(VIRUS_TEAL)
        .faction(Faction::Hostile)
        .brain(Brain::combatant())
        .fighter(Fighter::new(10, 4, 0))
        .equipment()
        .build()
}

pub fn virus_miner() -> ActorTemplate {
    ActorTemplate::builder("Virus Miner")
        .glyph('m')
        .color(VIRUS_TEAL)
        .faction(Faction::Hostile)
        .brain(Brain::miner())
        .fighter(Fighter::new(5, 1, 0))
        .inventory(1)
        .build()
}

fn spawner_structure(
    name: &str,
    color: Rgb,
    faction: Faction,
    brain: Brain,
    spawner: Spawner,
) -> ActorTemplate {
    ActorTemplate::builder(name)
        .glyph('O')
        .color(color)
        .render_order(RenderOrder::Structure)
        .faction(faction)
        .brain(brain)
        .fighter(Fighter::new(20, 0, 3))
        .spawner(spawner)
        .build()
}

pub fn guard_timer_spawner() -> ActorTemplate {
    spawner_structure(
        "Guard TimerSpawner",
        GUARD_PINK,
        Faction::Player,
        Brain::timer_spawner(),
        Spawner::timer(guard(), 5),
    )
}

pub fn guard_eco_spawner() -> ActorTemplate {
    spawner_structure(
        "Guard EcoSpawner",
        GUARD_PINK,
        Faction::Player,
        Brain::eco_spawner(),
        Spawner::eco(guard(), 1),
    )
}

pub fn virus_timer_spawner() -> ActorTemplate {
    spawner_structure(
        "Virus TimerSpawner",
        VIRUS_TEAL,
        Faction::Hostile,
        Brain::timer_spawner(),
        Spawner::timer(virus(), 5),
    )
}

pub fn virus_eco_spawner() -> ActorTemplate {
    spawner_structure(
        "Virus EcoSpawner",
        VIRUS_TEAL,
        Faction::Hostile,
        Brain::eco_spawner(),
        Spawner::eco(virus(), 1),
    )
}

pub fn ar_150() -> ItemTemplate {
    ItemTemplate::plain("AR-150", ')', (15, 15, 15))
        .with_equippable(Equippable::ranged_weapon(2, 1, 6, 15))
}

pub fn ballistic_vest() -> ItemTemplate {
    ItemTemplate::plain("Ballistic Vest", ']', (15, 50, 15)).with_equippable(Equippable::armor(2, 0))
}

pub fn crystal() -> ItemTemplate {
    ItemTemplate::plain("Crystal", 'c', CRYSTAL_CYAN).with_stack(1, 3)
}

pub fn crystal_well() -> ResourceTemplate {
    ResourceTemplate::new("Crystal Well", 'C', CRYSTAL_CYAN, 10, 1, crystal())
}

pub fn health_potion() -> ItemTemplate {
    ItemTemplate::plain("Health Potion", '!', (127, 0, 255))
        .with_consumable(Consumable::Healing { amount: 4 })
}

pub fn confusion_scroll() -> ItemTemplate {
    ItemTemplate::plain("Confusion Scroll", '~', (207, 63, 255))
        .with_consumable(Consumable::Confusion { turns: 10 })
}
