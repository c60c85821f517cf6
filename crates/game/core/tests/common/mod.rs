//! Shared fixtures: a grid map, trivial vision/path/rng oracles, and the
//! templates the scenario tests spawn from.
#![allow(dead_code)]

use mamba_core::{
    ActorTemplate, Brain, ConditionSpec, Consumable, CostGrid, Equippable, Faction, Fighter,
    GameConfig, GameState, ItemTemplate, MapDimensions, MapOracle, PathOracle, Position,
    ResourceTemplate, RngOracle, Spawner, VisionOracle,
};

/// Rectangular map with explicit wall tiles and an optional staircase.
pub struct GridMap {
    pub width: u32,
    pub height: u32,
    pub walls: Vec<Position>,
    pub downstairs: Option<Position>,
}

impl GridMap {
    pub fn open(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            walls: Vec::new(),
            downstairs: None,
        }
    }

    pub fn with_wall(mut self, position: Position) -> Self {
        self.walls.push(position);
        self
    }

    pub fn with_downstairs(mut self, position: Position) -> Self {
        self.downstairs = Some(position);
        self
    }
}

impl MapOracle for GridMap {
    fn dimensions(&self) -> MapDimensions {
        MapDimensions::new(self.width, self.height)
    }

    fn walkable(&self, position: Position) -> bool {
        self.dimensions().contains(position) && !self.walls.contains(&position)
    }

    fn downstairs(&self) -> Option<Position> {
        self.downstairs
    }
}

/// Vision oracle that answers the same for every tile.
pub struct FixedVision(pub bool);

impl VisionOracle for FixedVision {
    fn visible(&self, _position: Position) -> bool {
        self.0
    }
}

/// Greedy straight-line pathfinder: one diagonal-capable step toward the
/// target per waypoint. Good enough for open test maps.
pub struct StepPaths;

impl PathOracle for StepPaths {
    fn path(&self, from: Position, to: Position, cost: &CostGrid) -> Vec<Position> {
        let mut waypoints = Vec::new();
        let mut current = from;
        while current != to {
            let (dx, dy) = current.delta_to(to);
            current = current.offset(dx.signum(), dy.signum());
            if cost.is_blocked(current) {
                return Vec::new();
            }
            waypoints.push(current);
        }
        waypoints
    }
}

/// Rng oracle that returns the same raw value for every seed.
pub struct FixedRng(pub u32);

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}

pub fn world_with_player(at: Position) -> GameState {
    let mut state = GameState::new(7, GameConfig::new());
    state.add_player(&player_template(), at);
    state
}

pub fn player_template() -> ActorTemplate {
    ActorTemplate::builder("Player")
        .glyph('@')
        .faction(Faction::Player)
        .brain(Brain::combatant())
        .fighter(Fighter::new(30, 2, 1))
        .inventory(26)
        .equipment()
        .build()
}

pub fn mamba_venom() -> ConditionSpec {
    ConditionSpec::poison("Mamba Madness", 3, 3)
}

pub fn snake_template() -> ActorTemplate {
    ActorTemplate::builder("Green Mamba")
        .glyph('s')
        .faction(Faction::Snake)
        .brain(Brain::combatant())
        .fighter(Fighter::new(6, 5, 0).with_attack_effect(mamba_venom()))
        .inventory(1)
        .equipment()
        .build()
}

pub fn virus_template() -> ActorTemplate {
    ActorTemplate::builder("Virus")
        .glyph('v')
        .faction(Faction::Hostile)
        .brain(Brain::combatant())
        .fighter(Fighter::new(10, 4, 0))
        .build()
}

pub fn miner_template(faction: Faction) -> ActorTemplate {
    ActorTemplate::builder("Miner")
        .glyph('m')
        .faction(faction)
        .brain(Brain::miner())
        .fighter(Fighter::new(5, 1, 0))
        .inventory(1)
        .build()
}

pub fn timer_spawner_template(delay: u32) -> ActorTemplate {
    ActorTemplate::builder("Virus TimerSpawner")
        .glyph('O')
        .faction(Faction::Hostile)
        .brain(Brain::timer_spawner())
        .fighter(Fighter::new(20, 0, 3))
        .spawner(Spawner::timer(virus_template(), delay))
        .build()
}

pub fn eco_spawner_template(spawn_cost: u32) -> ActorTemplate {
    ActorTemplate::builder("Virus EcoSpawner")
        .glyph('O')
        .faction(Faction::Hostile)
        .brain(Brain::eco_spawner())
        .fighter(Fighter::new(20, 0, 3))
        .spawner(Spawner::eco(virus_template(), spawn_cost))
        .build()
}

pub fn crystal_template() -> ItemTemplate {
    ItemTemplate::plain("Crystal", 'c', (7, 227, 247)).with_stack(1, 10)
}

pub fn crystal_well_template() -> ResourceTemplate {
    ResourceTemplate::new("Crystal Well", 'C', (7, 227, 247), 10, 1, crystal_template())
}

pub fn health_potion_template() -> ItemTemplate {
    ItemTemplate::plain("Health Potion", '!', (127, 0, 255))
        .with_consumable(Consumable::Healing { amount: 4 })
}

pub fn confusion_scroll_template(turns: u32) -> ItemTemplate {
    ItemTemplate::plain("Confusion Scroll", '~', (207, 63, 255))
        .with_consumable(Consumable::Confusion { turns })
}

pub fn rifle_template() -> ItemTemplate {
    ItemTemplate::plain("AR-150", ')', (15, 15, 15))
        .with_equippable(Equippable::ranged_weapon(2, 1, 6, 15))
}

pub fn vest_template() -> ItemTemplate {
    ItemTemplate::plain("Ballistic Vest", ']', (15, 50, 15))
        .with_equippable(Equippable::armor(2, 0))
}
