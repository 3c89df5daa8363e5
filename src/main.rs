use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod carousel;
mod constants;
mod counter;
mod engine;
mod error;
mod nav;
mod newsletter;
mod page;
mod reveal;
mod sentiment;
mod timer;
mod visibility;

use crate::constants::*;
use crate::engine::Key;
use crate::page::content::PageContent;
use crate::page::engine::{FrameInput, PageEngine, Settings};
use crate::page::text::text_width;
use crate::sentiment::{Analysis, Analyzer, Summary};

/// Landing page with a testimonial carousel and animated stat counters
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Page content (TOML). Uses the bundled page when omitted
    #[arg(long, global = true)]
    page: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    /// Window height in pixels
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,

    /// Frames per second
    #[arg(long, default_value_t = FPS)]
    fps: u32,

    /// Seconds between automatic carousel advances
    #[arg(long, default_value_t = AUTO_ADVANCE_INTERVAL)]
    interval: f32,

    /// Counter smoothness, each step adds ceil(target / speed)
    #[arg(long, default_value_t = COUNTER_SPEED)]
    speed: u32,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score the sentiment of the page testimonials, a text, or each line of a file
    Sentiment {
        /// Text to score instead of the testimonials
        text: Option<String>,

        /// Score every non-empty line of this file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// List the words that contributed to each score
        #[arg(short, long)]
        verbose: bool,

        /// Print totals over all scored texts
        #[arg(short, long)]
        stats: bool,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter)
        .init();
}

// Keys of interest pressed this frame, typed characters included
fn read_keys(rl: &mut RaylibHandle) -> Vec<Key> {
    let mut keys = Vec::new();
    for (key, mapped) in [
        (KeyboardKey::KEY_LEFT, Key::Left),
        (KeyboardKey::KEY_RIGHT, Key::Right),
        (KeyboardKey::KEY_ENTER, Key::Enter),
        (KeyboardKey::KEY_BACKSPACE, Key::Backspace),
        (KeyboardKey::KEY_ESCAPE, Key::Escape),
    ] {
        if rl.is_key_pressed(key) {
            keys.push(mapped);
        }
    }
    while let Some(c) = rl.get_char_pressed() {
        keys.push(Key::Char(c));
    }
    keys
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    match &args.command {
        Some(Command::Sentiment { text, file, verbose, stats }) => {
            sentiment(args.page.as_deref(), text.as_deref(), file.as_deref(), *verbose, *stats)
        }
        None => run(&args),
    }
}

fn sentiment(page: Option<&Path>, text: Option<&str>, file: Option<&Path>, verbose: bool, stats: bool) -> Result<()> {
    let texts: Vec<String> = match (text, file) {
        (Some(text), _) => vec![text.to_string()],
        (None, Some(file)) => fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        (None, None) => {
            let content = PageContent::load(page).context("invalid page content")?;
            content.testimonials.slides.iter().map(|slide| slide.quote.clone()).collect()
        }
    };
    info!(texts = texts.len(), "Scoring sentiment");

    let analyzer = Analyzer::new();
    let analyses: Vec<Analysis> = texts.iter().map(|text| analyzer.analyze(text)).collect();
    for (i, analysis) in analyses.iter().enumerate() {
        println!("--- Analysis {} ---", i + 1);
        print!("{}", analysis.report(verbose));
    }
    if stats {
        if let Some(summary) = Summary::of(&analyses) {
            println!("--- Summary ---");
            print!("{summary}");
        }
    }
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    // --- Configuration faults stop us before a window ever opens ---
    let settings = Settings::new(args.interval, args.speed).context("invalid settings")?;
    let content = PageContent::load(args.page.as_deref()).context("invalid page content")?;
    let mut page = PageEngine::new(&content, settings).context("failed to build the page")?;

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title(&content.site.name)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Escape blurs the email field instead of closing the window
    rl.set_exit_key(None);
    page.measure_links(|label, font_size| text_width(&rl, label, font_size));

    info!(width = args.width, height = args.height, fps = args.fps, "Window opened");

    // --- Main Loop ---
    while !rl.window_should_close() {
        let input = FrameInput {
            dt: rl.get_frame_time(),
            screen_width: rl.get_screen_width() as f32,
            screen_height: rl.get_screen_height() as f32,
            mouse: rl.get_mouse_position(),
            clicked: rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
            wheel: rl.get_mouse_wheel_move(),
            keys: read_keys(&mut rl),
        };

        page.update(&input);

        let mut d = rl.begin_drawing(&thread);
        page.draw(&mut d);
    }

    info!("Window closed");
    Ok(())
}
