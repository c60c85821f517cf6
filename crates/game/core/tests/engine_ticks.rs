mod common;

use common::{
    FixedRng, FixedVision, GridMap, StepPaths, crystal_well_template, eco_spawner_template,
    mamba_venom, miner_template, snake_template, timer_spawner_template, virus_template,
    world_with_player,
};
use mamba_core::{
    Action, Brain, ConditionSpec, EntityId, Faction, GameEnv, GameState, InvariantError,
    MessageColor, MessageLog, MoveAction, NoopHooks, Position, Prototype, SpawnerMode,
    TurnEngine, TurnHooks,
};

fn run_wait_tick(
    state: &mut GameState,
    env: &GameEnv<'_>,
    log: &mut MessageLog,
) -> Result<(), InvariantError> {
    TurnEngine::new(state).run_tick(env, &mut NoopHooks, log, &Action::wait(EntityId::PLAYER))
}

#[test]
fn the_player_acts_before_every_npc() {
    let map = GridMap::open(8, 8);
    let vision = FixedVision(true);
    let paths = StepPaths;
    let rng = FixedRng(0);
    let env = GameEnv::with_all(&map, &vision, &paths, &rng);
    let mut state = world_with_player(Position::new(1, 1));
    state.spawn(&Prototype::Actor(snake_template()), Position::new(2, 1));
    let mut log = MessageLog::new();

    TurnEngine::new(&mut state)
        .run_tick(
            &env,
            &mut NoopHooks,
            &mut log,
            &Action::Melee(mamba_core::MeleeAction::new(EntityId::PLAYER, 1, 0)),
        )
        .unwrap();

    assert_eq!(state.clock, 1);
    let texts: Vec<&str> = log.iter().map(|message| message.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Player attacks Green Mamba for 2 hit points.",
            "Green Mamba attacks Player for 4 hit points.",
            "Player is afflicted with Mamba Madness!",
        ]
    );
}

#[test]
fn a_rejected_player_action_still_burns_the_turn() {
    let map = GridMap::open(8, 8).with_wall(Position::new(1, 2));
    let vision = FixedVision(true);
    let paths = StepPaths;
    let rng = FixedRng(0);
    let env = GameEnv::with_all(&map, &vision, &paths, &rng);
    let mut state = world_with_player(Position::new(1, 1));
    state.spawn(&Prototype::Actor(snake_template()), Position::new(2, 1));
    let mut log = MessageLog::new();

    TurnEngine::new(&mut state)
        .run_tick(
            &env,
            &mut NoopHooks,
            &mut log,
            &Action::Move(MoveAction::new(EntityId::PLAYER, 0, 1)),
        )
        .unwrap();

    let first = log.iter().next().unwrap();
    assert_eq!(first.text, "That way is blocked");
    assert_eq!(first.color, MessageColor::Impossible);
    // The snake got its turn regardless.
    assert_eq!(state.player().unwrap().fighter().unwrap().hp(), 26);
}

#[test]
fn npc_rejections_are_swallowed_silently() {
    let map = GridMap::open(8, 8);
    let vision = FixedVision(true);
    let paths = StepPaths;
    // next_u32 = 0 picks the (-1, -1) stumble, straight off the map.
    let rng = FixedRng(0);
    let env = GameEnv::with_all(&map, &vision, &paths, &rng);
    let mut state = world_with_player(Position::new(7, 7));
    let snake = state.spawn(&Prototype::Actor(snake_template()), Position::new(0, 0));
    state.entities.expect_actor_mut(snake).unwrap().brain =
        Some(Brain::confused(Brain::combatant(), 5));
    let mut log = MessageLog::new();

    run_wait_tick(&mut state, &env, &mut log).unwrap();

    assert!(log.is_empty());
    assert_eq!(
        state.entities.actor(snake).unwrap().brain,
        Some(Brain::Confused {
            previous: Box::new(Brain::combatant()),
            turns_remaining: 4,
        })
    );
}

#[test]
fn confusion_wears_off_and_restores_the_old_brain() {
    let map = GridMap::open(8, 8);
    let vision = FixedVision(true);
    let paths = StepPaths;
    let rng = FixedRng(3);
    let env = GameEnv::with_all(&map, &vision, &paths, &rng);
    let mut state = world_with_player(Position::new(0, 0));
    let snake = state.spawn(&Prototype::Actor(snake_template()), Position::new(5, 5));
    state.entities.expect_actor_mut(snake).unwrap().brain =
        Some(Brain::confused(Brain::combatant(), 1));
    let mut log = MessageLog::new();

    // First tick: one last stumble.
    run_wait_tick(&mut state, &env, &mut log).unwrap();
    assert!(matches!(
        state.entities.actor(snake).unwrap().brain,
        Some(Brain::Confused {
            turns_remaining: 0,
            ..
        })
    ));

    // Second tick: the wrapped brain comes back and the turn is spent.
    run_wait_tick(&mut state, &env, &mut log).unwrap();
    assert_eq!(
        state.entities.actor(snake).unwrap().brain,
        Some(Brain::combatant())
    );
    assert!(log.contains("The Green Mamba is no longer confused."));
}

#[test]
fn poison_ticks_npcs_for_its_duration_then_clears() {
    let map = GridMap::open(8, 8);
    let vision = FixedVision(false);
    let paths = StepPaths;
    // range(seed, 1, magnitude) with a constant raw roll of 0 is always 1.
    let rng = FixedRng(0);
    let env = GameEnv::with_all(&map, &vision, &paths, &rng);
    let mut state = world_with_player(Position::new(0, 0));
    let snake = state.spawn(&Prototype::Actor(snake_template()), Position::new(5, 5));
    state
        .entities
        .expect_actor_mut(snake)
        .unwrap()
        .fighter_mut()
        .unwrap()
        .conditions
        .afflict(ConditionSpec::poison("Mamba Madness", 2, 1));
    let mut log = MessageLog::new();

    run_wait_tick(&mut state, &env, &mut log).unwrap();
    run_wait_tick(&mut state, &env, &mut log).unwrap();
    let fighter = state.entities.actor(snake).unwrap().fighter().unwrap();
    assert_eq!(fighter.hp(), 4);
    assert!(fighter.conditions.is_empty());

    // A third tick deals no further damage.
    run_wait_tick(&mut state, &env, &mut log).unwrap();
    let fighter = state.entities.actor(snake).unwrap().fighter().unwrap();
    assert_eq!(fighter.hp(), 4);
}

#[test]
fn lethal_poison_triggers_the_death_transition() {
    let map = GridMap::open(8, 8);
    let vision = FixedVision(false);
    let paths = StepPaths;
    let rng = FixedRng(0);
    let env = GameEnv::with_all(&map, &vision, &paths, &rng);
    let mut state = world_with_player(Position::new(0, 0));
    let snake = state.spawn(&Prototype::Actor(snake_template()), Position::new(5, 5));
    {
        let fighter = state
            .entities
            .expect_actor_mut(snake)
            .unwrap()
            .fighter_mut()
            .unwrap();
        fighter.set_hp(1);
        fighter
            .conditions
            .afflict(ConditionSpec::poison("Mamba Madness", 3, 1));
    }
    let mut log = MessageLog::new();

    run_wait_tick(&mut state, &env, &mut log).unwrap();

    assert!(!state.entities.actor(snake).unwrap().is_alive());
    assert!(log.contains("Green Mamba is dead!"));
}

#[test]
fn player_conditions_never_tick() {
    let map = GridMap::open(8, 8);
    let vision = FixedVision(false);
    let paths = StepPaths;
    let rng = FixedRng(0);
    let env = GameEnv::with_all(&map, &vision, &paths, &rng);
    let mut state = world_with_player(Position::new(0, 0));
    state
        .player_mut()
        .unwrap()
        .fighter_mut()
        .unwrap()
        .conditions
        .afflict(mamba_venom());
    let mut log = MessageLog::new();

    for _ in 0..5 {
        run_wait_tick(&mut state, &env, &mut log).unwrap();
    }

    let fighter = state.player().unwrap().fighter().unwrap();
    assert_eq!(fighter.hp(), 30);
    assert_eq!(
        fighter.conditions.get("Mamba Madness").unwrap().remaining,
        Some(3)
    );
}

#[test]
fn timer_spawner_fires_on_schedule_and_refuses_occupied_tiles() {
    let map = GridMap::open(12, 12);
    // Out of sight, so the spawned virus has no path and stays put.
    let vision = FixedVision(false);
    let paths = StepPaths;
    let rng = FixedRng(0);
    let env = GameEnv::with_all(&map, &vision, &paths, &rng);
    let mut state = world_with_player(Position::new(0, 0));
    state.spawn(
        &Prototype::Actor(timer_spawner_template(2)),
        Position::new(5, 5),
    );
    let mut log = MessageLog::new();

    let virus_count = |state: &GameState| {
        state
            .entities
            .alive_actors()
            .filter(|actor| actor.name == "Virus")
            .count()
    };

    run_wait_tick(&mut state, &env, &mut log).unwrap();
    assert_eq!(virus_count(&state), 0);

    run_wait_tick(&mut state, &env, &mut log).unwrap();
    assert_eq!(virus_count(&state), 1);

    // The next firing is refused while the first virus still camps the
    // spawner tile.
    run_wait_tick(&mut state, &env, &mut log).unwrap();
    run_wait_tick(&mut state, &env, &mut log).unwrap();
    assert_eq!(virus_count(&state), 1);
}

#[test]
fn eco_spawner_spends_its_bank_even_on_refused_spawns() {
    let map = GridMap::open(12, 12);
    let vision = FixedVision(false);
    let paths = StepPaths;
    let rng = FixedRng(0);
    let env = GameEnv::with_all(&map, &vision, &paths, &rng);
    let mut state = world_with_player(Position::new(0, 0));
    let spawner = state.spawn(
        &Prototype::Actor(eco_spawner_template(2)),
        Position::new(5, 5),
    );
    let mut log = MessageLog::new();

    let bank_of = |state: &GameState| match state
        .entities
        .actor(spawner)
        .unwrap()
        .spawner
        .as_ref()
        .unwrap()
        .mode
    {
        SpawnerMode::Eco { bank, .. } => bank,
        SpawnerMode::Timer { .. } => unreachable!(),
    };

    // Empty bank, nothing happens.
    run_wait_tick(&mut state, &env, &mut log).unwrap();
    assert_eq!(state.entities.alive_actors().count(), 2);

    state
        .entities
        .expect_actor_mut(spawner)
        .unwrap()
        .spawner_mut()
        .unwrap()
        .deposit(3);
    run_wait_tick(&mut state, &env, &mut log).unwrap();
    assert_eq!(bank_of(&state), 1);
    assert_eq!(state.entities.alive_actors().count(), 3);

    // Bank below cost: no payment, no spawn.
    run_wait_tick(&mut state, &env, &mut log).unwrap();
    assert_eq!(bank_of(&state), 1);

    // Refilled, but the tile is occupied: the cost burns anyway.
    state
        .entities
        .expect_actor_mut(spawner)
        .unwrap()
        .spawner_mut()
        .unwrap()
        .deposit(1);
    run_wait_tick(&mut state, &env, &mut log).unwrap();
    assert_eq!(bank_of(&state), 0);
    assert_eq!(state.entities.alive_actors().count(), 3);
}

#[test]
fn miners_alternate_between_mining_and_hauling() {
    let map = GridMap::open(12, 12);
    let vision = FixedVision(true);
    let paths = StepPaths;
    let rng = FixedRng(0);
    let env = GameEnv::with_all(&map, &vision, &paths, &rng);
    let mut state = world_with_player(Position::new(10, 10));
    let miner = state.spawn(
        &Prototype::Actor(miner_template(Faction::Hostile)),
        Position::new(2, 2),
    );
    state.spawn(
        &Prototype::Resource(crystal_well_template()),
        Position::new(2, 3),
    );
    // Cost out of reach so spawning never interferes.
    let spawner = state.spawn(
        &Prototype::Actor(eco_spawner_template(50)),
        Position::new(2, 1),
    );
    let mut log = MessageLog::new();

    // Mine, then haul, then mine again.
    run_wait_tick(&mut state, &env, &mut log).unwrap();
    assert_eq!(
        state.entities.actor(miner).unwrap().inventory().unwrap().len(),
        1
    );

    run_wait_tick(&mut state, &env, &mut log).unwrap();
    assert!(state.entities.actor(miner).unwrap().inventory().unwrap().is_empty());
    let bank = match state
        .entities
        .actor(spawner)
        .unwrap()
        .spawner
        .as_ref()
        .unwrap()
        .mode
    {
        SpawnerMode::Eco { bank, .. } => bank,
        SpawnerMode::Timer { .. } => unreachable!(),
    };
    assert_eq!(bank, 1);
    assert!(log.contains("Miner mines Crystal Well."));
    assert!(log.contains("Miner deposits 1 resources into the Virus EcoSpawner."));

    run_wait_tick(&mut state, &env, &mut log).unwrap();
    assert_eq!(
        state.entities.actor(miner).unwrap().inventory().unwrap().len(),
        1
    );
}

#[test]
fn out_of_sight_npcs_follow_their_stale_path() {
    let map = GridMap::open(12, 12);
    let vision = FixedVision(false);
    let paths = StepPaths;
    let rng = FixedRng(0);
    let env = GameEnv::with_all(&map, &vision, &paths, &rng);
    let mut state = world_with_player(Position::new(0, 0));
    let virus = state.spawn(&Prototype::Actor(virus_template()), Position::new(5, 5));
    state.entities.expect_actor_mut(virus).unwrap().brain = Some(Brain::Combatant {
        path: vec![Position::new(5, 4), Position::new(5, 3)],
    });
    let mut log = MessageLog::new();

    run_wait_tick(&mut state, &env, &mut log).unwrap();
    assert_eq!(
        state.entities.actor(virus).unwrap().position,
        Position::new(5, 4)
    );

    run_wait_tick(&mut state, &env, &mut log).unwrap();
    assert_eq!(
        state.entities.actor(virus).unwrap().position,
        Position::new(5, 3)
    );

    // Path exhausted and still unseen: the virus waits.
    run_wait_tick(&mut state, &env, &mut log).unwrap();
    assert_eq!(
        state.entities.actor(virus).unwrap().position,
        Position::new(5, 3)
    );
}

struct RecordingHooks {
    fov_calls: Vec<(Position, u32)>,
}

impl TurnHooks for RecordingHooks {
    fn refresh_fov(&mut self, origin: Position, radius: u32) {
        self.fov_calls.push((origin, radius));
    }

    fn regenerate_floor(&mut self, _state: &mut GameState) {}
}

#[test]
fn every_tick_ends_with_one_fov_refresh() {
    let map = GridMap::open(8, 8);
    let vision = FixedVision(true);
    let paths = StepPaths;
    let rng = FixedRng(0);
    let env = GameEnv::with_all(&map, &vision, &paths, &rng);
    let mut state = world_with_player(Position::new(3, 3));
    let mut hooks = RecordingHooks {
        fov_calls: Vec::new(),
    };
    let mut log = MessageLog::new();

    TurnEngine::new(&mut state)
        .run_tick(
            &env,
            &mut hooks,
            &mut log,
            &Action::Move(MoveAction::new(EntityId::PLAYER, 1, 0)),
        )
        .unwrap();
    assert_eq!(hooks.fov_calls, vec![(Position::new(4, 3), 8)]);

    state.config.do_fov = false;
    TurnEngine::new(&mut state)
        .run_tick(
            &env,
            &mut hooks,
            &mut log,
            &Action::wait(EntityId::PLAYER),
        )
        .unwrap();
    assert_eq!(hooks.fov_calls.last(), Some(&(Position::new(4, 3), 0)));
}

#[test]
fn a_dangling_actor_id_aborts_the_tick() {
    let map = GridMap::open(8, 8);
    let env = GameEnv::empty().with_map(&map);
    let mut state = world_with_player(Position::new(1, 1));
    let mut log = MessageLog::new();

    let result = TurnEngine::new(&mut state).run_tick(
        &env,
        &mut NoopHooks,
        &mut log,
        &Action::Move(MoveAction::new(EntityId(99), 1, 0)),
    );

    assert!(matches!(
        result,
        Err(InvariantError::MissingEntity(EntityId(99)))
    ));
}

#[test]
fn npcs_spawned_mid_tick_wait_for_the_next_one() {
    let map = GridMap::open(12, 12);
    // Visible, so a freshly spawned virus would chase if it got a turn.
    let vision = FixedVision(true);
    let paths = StepPaths;
    let rng = FixedRng(0);
    let env = GameEnv::with_all(&map, &vision, &paths, &rng);
    let mut state = world_with_player(Position::new(5, 8));
    state.spawn(
        &Prototype::Actor(timer_spawner_template(1)),
        Position::new(5, 5),
    );
    let mut log = MessageLog::new();

    run_wait_tick(&mut state, &env, &mut log).unwrap();
    let virus = state
        .entities
        .alive_actors()
        .find(|actor| actor.name == "Virus")
        .map(|actor| actor.id)
        .unwrap();
    // Spawned this tick, so it has not moved yet.
    assert_eq!(
        state.entities.actor(virus).unwrap().position,
        Position::new(5, 5)
    );

    run_wait_tick(&mut state, &env, &mut log).unwrap();
    assert_eq!(
        state.entities.actor(virus).unwrap().position,
        Position::new(5, 6)
    );
}
