//! # Dung Main Entry Point
//!
//! Loads options, paints the demo layout, and runs the macroquad loop:
//! keyboard input every frame, animation steps on the frame clock.

use clap::Parser;
use dung::{
    describe_event, Action, DungError, DungResult, FrameClock, GameState, InputHandler, Layout,
    MacroquadDisplay, Options, PlayerInput,
};
use log::{error, info, warn};
use macroquad::prelude::{get_time, next_frame, screen_height, screen_width};
use std::path::PathBuf;

/// Command line arguments for Dung.
#[derive(Parser, Debug)]
#[command(name = "dung")]
#[command(about = "A tile-map dungeon prototype")]
#[command(version)]
struct Args {
    /// JSON options file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Random seed for animation start steps
    #[arg(short, long)]
    seed: Option<u64>,

    /// Animation frames per second
    #[arg(long)]
    fps: Option<u32>,

    /// Cell edge length in pixels
    #[arg(long)]
    block_size: Option<u32>,

    /// TrueType font for glyphs
    #[arg(long)]
    font: Option<PathBuf>,

    /// Start with the debug overlay on
    #[arg(long)]
    debug: bool,

    /// Log filter (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[macroquad::main("Dung")]
async fn main() {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    if let Err(e) = run(&args).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Initializes the logging system with the given filter.
fn initialize_logging(log_level: &str) {
    #[cfg(feature = "dev-tools")]
    {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(log_level))
            .with_target(false)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new().parse_filters(log_level).init();
    }
}

/// Merges the options file with command line overrides.
fn load_options(args: &Args) -> DungResult<Options> {
    let mut options = match &args.config {
        Some(path) => Options::load_from_file(path)?,
        None => Options::default(),
    };

    if let Some(seed) = args.seed {
        options.seed = Some(seed);
    }
    if let Some(fps) = args.fps {
        options.fps = fps;
    }
    if let Some(block_size) = args.block_size {
        options.block_size = block_size;
    }
    if let Some(font) = &args.font {
        options.font_path = Some(font.clone());
    }
    options.debug |= args.debug;

    options.validate()?;
    Ok(options)
}

async fn run(args: &Args) -> DungResult<()> {
    info!("Starting Dung v{}", dung::VERSION);

    let options = load_options(args)?;
    let mut game_state = GameState::new(options.clone(), screen_width(), screen_height())?;

    match Layout::demo().apply(&mut game_state) {
        Ok(()) => {}
        Err(DungError::InvalidConfig(reason)) => {
            warn!("demo layout skipped: {}", reason);
            let start = game_state.find_starting_position()?;
            game_state.move_player(start)?;
        }
        Err(e) => return Err(e),
    }

    let input_handler = InputHandler::new();
    let mut display = MacroquadDisplay::new(&options).await?;
    display.add_message("Welcome to Dung!".to_string());

    let mut clock = FrameClock::new(options.fps, get_time() * 1000.0);

    loop {
        if let Some(input) = input_handler.get_input() {
            match input {
                PlayerInput::Quit => {
                    info!("Player quit the game");
                    break;
                }
                PlayerInput::Help => {
                    display.add_message(dung::CONTROLS_TEXT.to_string());
                }
                PlayerInput::ToggleDebug => {
                    let on = display.toggle_debug(game_state.map.meta.block_size);
                    info!("debug overlay {}", if on { "on" } else { "off" });
                }
                _ => {
                    if let Some(action) = input_handler.input_to_action(input) {
                        match action.execute(&mut game_state) {
                            Ok(event) => {
                                if let Some(text) = describe_event(&event) {
                                    display.add_message(text);
                                }
                            }
                            Err(e) => warn!("Invalid action: {}", e),
                        }
                    }
                }
            }
        }

        if clock.tick(get_time() * 1000.0) {
            game_state.advance_frame();
        }

        display.render_game(&game_state);

        next_frame().await;
    }

    info!("Game loop ended after {} frames", game_state.frame_number);
    Ok(())
}
