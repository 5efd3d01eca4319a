//! Integration tests for turn rotation and full series play
use tenpin::engine::{EngineEvent, EnginePhase, RackReset, Transition};
use tenpin::lane::{AutoBowler, Lane};
use tenpin::{EngineError, GameMode, InvalidThrowError, Settings, TurnEngine};

fn engine(mode: GameMode) -> TurnEngine {
    TurnEngine::new(&Settings::from_mode(mode))
}

fn bowl(engine: &mut TurnEngine, throws: &[u8]) {
    for &pins in throws {
        engine.throw_ball(pins).unwrap();
    }
}

/// Play a whole series on the simulated lane, returning the final engine
fn simulate(settings: &Settings) -> TurnEngine {
    let mut engine = TurnEngine::new(settings);
    let mut lane = Lane::new(settings.seed);
    let mut bowlers: Vec<AutoBowler> = (0..engine.players().len())
        .map(|i| AutoBowler::new(settings.seed + i as u64, settings.bowler_wildness))
        .collect();

    let mut guard = 0;
    while !engine.is_series_complete() {
        let roll = bowlers[engine.current_player()].next_roll(&lane.rack);
        engine.launch().unwrap();
        let result = lane.throw(roll);
        let report = engine.on_throw_settled(result.pins_down).unwrap();
        lane.apply(&report.directive);

        guard += 1;
        assert!(guard < 10_000, "series never finished");
    }
    engine
}

#[test]
fn test_open_frame_advances() {
    let mut engine = engine(GameMode::Singles);
    bowl(&mut engine, &[4, 3]);
    let player = &engine.players()[0];
    assert_eq!(player.frames()[0].score(), Some(7));
    assert_eq!(player.current_frame(), 1);
}

#[test]
fn test_tenth_frame_strike_bonus_ends_turn() {
    let mut engine = engine(GameMode::Doubles);
    // Frames 1-9: 3, 4 each, total 63
    for _ in 0..9 {
        bowl(&mut engine, &[3, 4]);
    }
    assert_eq!(engine.players()[0].frames()[8].score(), Some(63));

    let report = engine.throw_ball(10).unwrap();
    assert_eq!(report.directive.rack, RackReset::Full);
    let report = engine.throw_ball(10).unwrap();
    assert_eq!(report.directive.rack, RackReset::Full);
    assert_eq!(engine.current_player(), 0);

    let report = engine.throw_ball(5).unwrap();
    assert!(report.turn_advance().is_some());
    let player = &engine.players()[0];
    assert_eq!(player.frames()[9].throws(), &[10, 10, 5]);
    assert_eq!(player.total_score(), 63 + 25);
    assert_eq!(engine.current_player(), 1);
}

#[test]
fn test_current_player_flips_once_per_tenth_frame() {
    let mut engine = engine(GameMode::Doubles);
    let mut flips = 0;
    let mut last = engine.current_player();

    // Two games of open frames for both bowlers
    for _ in 0..(2 * 2 * 20) {
        let report = engine.throw_ball(2).unwrap();
        if engine.current_player() != last {
            flips += 1;
            assert!(report.throw.frame == 10, "turn changed outside the tenth frame");
            last = engine.current_player();
        }
    }
    // 0->1, 1->0 (new game), 0->1, 1->0 (new game)
    assert_eq!(flips, 4);
    assert_eq!(engine.game_number(), 3);
}

#[test]
fn test_team_series_records_every_game() {
    let mut engine = engine(GameMode::Team);
    let mut games = Vec::new();
    let mut summaries = 0;

    // Everyone bowls all nines-and-misses: 9, 0 per frame = 90
    for _ in 0..(3 * 4 * 10) {
        engine.throw_ball(9).unwrap();
        let report = engine.throw_ball(0).unwrap();
        for event in &report.events {
            match event {
                EngineEvent::GameComplete(game) => games.push(game.clone()),
                EngineEvent::SeriesComplete(_) => summaries += 1,
                _ => {}
            }
        }
    }

    assert_eq!(games.len(), 3);
    assert!(games.iter().all(|g| g.scores == vec![90; 4]));
    assert_eq!(summaries, 1);
    assert_eq!(engine.state().phase, EnginePhase::SeriesComplete);

    let summary = engine.summary();
    assert_eq!(summary.games_played, 3);
    assert_eq!(summary.team_average, Some(360.0));
    assert!(summary.players.iter().all(|p| p.average == 90.0));
}

#[test]
fn test_invalid_throw_reported_with_state_unchanged() {
    let mut engine = engine(GameMode::Singles);
    bowl(&mut engine, &[8]);
    let before = engine.state().clone();

    let err = engine.throw_ball(3).unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidThrow(InvalidThrowError::ExceedsStanding {
            pins: 3,
            standing: 2
        })
    );
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_mid_series_state_restores() {
    let mut engine = engine(GameMode::Doubles);
    bowl(&mut engine, &[10; 12]);
    bowl(&mut engine, &[7, 2, 10, 3]);

    let json = serde_json::to_string(engine.state()).unwrap();
    let mut restored = TurnEngine::from_state(serde_json::from_str(&json).unwrap());
    assert_eq!(restored, engine);

    let rest = [6, 5, 5, 1, 8, 0, 0, 10, 10, 10, 4, 4, 9, 1, 2, 3, 3, 3, 3];
    bowl(&mut engine, &rest);
    bowl(&mut restored, &rest);
    assert_eq!(restored.snapshot(), engine.snapshot());
}

#[test]
fn test_simulated_series_completes() {
    for mode in [GameMode::Singles, GameMode::Doubles, GameMode::Team] {
        let mut settings = Settings::from_mode(mode);
        settings.seed = 2024;
        let engine = simulate(&settings);

        let summary = engine.summary();
        assert_eq!(summary.games_played, 3);
        for player in &summary.players {
            assert_eq!(player.game_scores.len(), 3);
            assert!(player.game_scores.iter().all(|&s| s <= 300));
        }
        assert_eq!(engine.state().last_transition, Transition::SeriesEnded);
    }
}

#[test]
fn test_simulated_series_is_reproducible() {
    let mut settings = Settings::from_mode(GameMode::Doubles);
    settings.seed = 77;
    let a = simulate(&settings);
    let b = simulate(&settings);
    assert_eq!(a.summary(), b.summary());
}
