//! Delve: a real-time dungeon crawl in the terminal.

mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use delve::assets::{FsAssetLoader, SpriteSet};
use delve::core::{game_tick, GameState};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};
use ui::{KeyAction, KeyboardInput};

const FRAME_POLL: Duration = Duration::from_millis(16);
const LOG_FILE: &str = "delve.log";

fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    // Log lines written to stderr would tear the alternate screen
    if let Ok(file) = std::fs::File::create(LOG_FILE) {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    let _ = builder.try_init();
}

/// `--seed N` pins the map; otherwise every session gets a fresh one.
fn seed_from_args() -> Result<Option<u32>> {
    let args: Vec<String> = std::env::args().collect();
    match args.iter().position(|a| a == "--seed") {
        Some(index) => {
            let raw = args.get(index + 1).context("--seed needs a value")?;
            let seed = raw
                .parse()
                .with_context(|| format!("invalid seed `{}`", raw))?;
            Ok(Some(seed))
        }
        None => Ok(None),
    }
}

fn new_session(seed: Option<u32>) -> GameState {
    let seed = seed.unwrap_or_else(rand::random);
    log::info!("starting session with map seed {}", seed);
    GameState::new(seed)
}

fn main() -> Result<()> {
    init_logging();
    let pinned_seed = seed_from_args()?;

    let sprites = SpriteSet::load_all(&mut FsAssetLoader, Path::new("assets"));
    if sprites.fallback {
        log::warn!(
            "{} sprite(s) unavailable, rendering with glyphs",
            sprites.failures.len()
        );
    }

    let mut state = new_session(pinned_seed);
    let mut input = KeyboardInput::new();
    let mut rng = rand::thread_rng();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut last_frame = Instant::now();
    let outcome = (|| -> Result<()> {
        loop {
            terminal.draw(|frame| ui::draw_ui(frame, &state, sprites.fallback))?;

            if event::poll(FRAME_POLL)? {
                if let Event::Key(key_event) = event::read()? {
                    match input.handle(key_event) {
                        KeyAction::Quit => return Ok(()),
                        KeyAction::Restart if state.game_over => {
                            state = new_session(pinned_seed);
                            input = KeyboardInput::new();
                        }
                        _ => {}
                    }
                }
            }

            // Wall-clock frame time, unclamped
            let now = Instant::now();
            let delta_time = now.duration_since(last_frame).as_secs_f64();
            last_frame = now;

            input.update(delta_time);
            game_tick(&mut state, &mut input, delta_time, &mut rng);
        }
    })();

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    outcome?;
    println!(
        "Reached level {} with {} kills. Map seed was {}.",
        state.player.level(),
        state.stats.kills,
        state.seed
    );
    Ok(())
}
