//! Tenpin entry point
//!
//! Native: plays a full series on the simulated lane with computer bowlers.
//! The browser front end drives the engine through the `wasm` bindings instead.

#[cfg(not(target_arch = "wasm32"))]
const HELP: &str = "\
Bowl a series on a simulated lane

USAGE:
  tenpin [OPTIONS]

OPTIONS:
  --mode     MODE    singles, doubles or team          [default: singles]
  --games    N       Games in the series               [default: 3]
  --seed     N       Lane and bowler seed              [default: 24301]
  --config   PATH    JSON settings file (flags override it)

FLAGS:
  --pace             Honour the settle and reset delays between throws
  -h, --help         Print help information

ENVIRONMENT:
  RUST_LOG           Log level (e.g. info, debug)
";

#[cfg(not(target_arch = "wasm32"))]
fn parse_settings() -> Result<(tenpin::Settings, bool), Box<dyn std::error::Error>> {
    use tenpin::{GameMode, Settings, SettingsError};

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }
    let pace = args.contains("--pace");

    let config: Option<String> = args.opt_value_from_str("--config")?;
    let mut settings = match config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    if let Some(mode) = args.opt_value_from_str::<_, String>("--mode")? {
        settings.mode = GameMode::from_str(&mode).ok_or(SettingsError::UnknownMode(mode))?;
        settings.player_names = None;
    }
    if let Some(games) = args.opt_value_from_str("--games")? {
        settings.max_games = games;
    }
    if let Some(seed) = args.opt_value_from_str("--seed")? {
        settings.seed = seed;
    }
    settings.validate()?;
    Ok((settings, pace))
}

#[cfg(not(target_arch = "wasm32"))]
fn run(settings: &tenpin::Settings, pace: bool) -> Result<(), tenpin::EngineError> {
    use tenpin::engine::EngineEvent;
    use tenpin::lane::{AutoBowler, Lane};
    use tenpin::{TurnEngine, scoreboard};

    let mut engine = TurnEngine::new(settings);
    let mut lane = Lane::new(settings.seed);
    let mut bowlers: Vec<AutoBowler> = (0..engine.players().len())
        .map(|i| AutoBowler::new(settings.seed.wrapping_add(i as u64 + 1), settings.bowler_wildness))
        .collect();

    let pause = |delay: std::time::Duration| {
        if pace {
            std::thread::sleep(delay);
        }
    };

    while !engine.is_series_complete() {
        let roll = bowlers[engine.current_player()].next_roll(&lane.rack);
        engine.launch()?;
        let result = lane.throw(roll);
        pause(settings.settle_delay());
        let report = engine.on_throw_settled(result.pins_down)?;
        log::debug!(
            "{} down, {} down on this rack",
            result.pins_down,
            engine.state().pins_down
        );
        pause(settings.reset_delay());
        lane.apply(&report.directive);

        for event in &report.events {
            match event {
                EngineEvent::TurnAdvance(advance) => {
                    log::info!("Up next: {} (game {})", advance.next_name, advance.game_number);
                }
                EngineEvent::GameComplete(game) => {
                    println!("Game {} final", game.game_number);
                    for (player, score) in engine.players().iter().zip(&game.scores) {
                        println!("  {:<10} {:>3}", player.name, score);
                    }
                    println!();
                }
                EngineEvent::SeriesComplete(summary) => {
                    println!("{}", scoreboard::render_summary(summary));
                }
                _ => {}
            }
        }

        // Mid-game turn change: the finished bowler's frames are still on the board
        if report.turn_advance().is_some() && report.game_complete().is_none() {
            println!("{}", scoreboard::render(&engine.snapshot()));
        }
    }

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Tenpin (native) starting...");

    let (settings, pace) = match parse_settings() {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {e}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&settings, pace) {
        log::error!("Series aborted: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is the `wasm` module's start function
}
