//! termsketch - an Etch A Sketch for the terminal
//!
//! Move the cursor with the arrow keys to leave a trail of drawn cells inside
//! a bordered area. The drawing can be cleared and started over at any time.
//!
//! # Quick Start
//!
//! ```text
//! termsketch                      # Draw with the default settings
//! termsketch --border rounded     # Use a rounded border
//! termsketch --demo "r r d d l"   # Print a scripted drawing without a TTY
//! ```
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | Arrow keys | Move and draw |
//! | c / C | Clear the drawing |
//! | q / Q / Ctrl+C | Quit |

mod config;
mod core;
mod ui;

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use crossterm::event::{self, Event};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::Config;
use crate::core::{parse_script, BorderStyle, Flow, Session, Surface};
use crate::ui::{BufferCanvas, KeyMapper, Renderer};

/// Command line options
#[derive(Debug, Default)]
struct CliArgs {
    /// Explicit config file
    config: Option<PathBuf>,
    no_border: bool,
    border_style: Option<BorderStyle>,
    message: Option<String>,
    no_message: bool,
    log_file: Option<PathBuf>,
    /// Action script for demo mode
    demo: Option<String>,
    /// Canvas size for demo mode
    size: Option<(u16, u16)>,
    print_config: bool,
}

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Canvas size used by demo mode when `--size` is absent
const DEMO_SIZE: (u16, u16) = (40, 12);

fn print_version() {
    eprintln!("termsketch {}", VERSION);
}

fn print_help() {
    eprintln!("termsketch {} - draw in the terminal with the arrow keys", VERSION);
    eprintln!();
    eprintln!("Usage: termsketch [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --config <PATH>   Read settings from PATH instead of ~/.termsketch/config.toml");
    eprintln!("  -b, --border <STYLE>  Border style: ascii, single, double, rounded");
    eprintln!("      --no-border       Do not draw a border");
    eprintln!("  -m, --message <TEXT>  Header line shown at the top");
    eprintln!("      --no-message      Do not show a header line");
    eprintln!("      --log <PATH>      Write the log to PATH");
    eprintln!("      --demo <ACTIONS>  Run ACTIONS on an in-memory screen and print it");
    eprintln!("      --size <WxH>      Screen size for --demo (default 40x12)");
    eprintln!("      --print-config    Print the effective configuration and exit");
    eprintln!("  -v, --version         Show version");
    eprintln!("  -h, --help            Show this help");
    eprintln!();
    eprintln!("Keys:");
    eprintln!("  Arrow keys            Move the cursor, leaving a trail");
    eprintln!("  c, C                  Clear the drawing and start over");
    eprintln!("  q, Q, Ctrl+C          Quit");
    eprintln!();
    eprintln!("Demo actions: left right up down clear quit (or l r u d c q),");
    eprintln!("separated by spaces or commas.");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  termsketch --border double");
    eprintln!("  termsketch --demo \"r r r d d l\" --size 20x8");
    eprintln!();
    eprintln!("Configuration: ~/.termsketch/config.toml");
    eprintln!("Log:           ~/.termsketch/termsketch.log (level from RUST_LOG)");
}

fn parse_args() -> Result<CliArgs, String> {
    parse_args_from(env::args().skip(1))
}

fn parse_args_from<I>(args: I) -> Result<CliArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let mut cli = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value = |name: &str| args.next().ok_or_else(|| format!("Missing value for {}", name));

        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            "-c" | "--config" => {
                cli.config = Some(PathBuf::from(value(&arg)?));
            }
            "-b" | "--border" => {
                let style = value(&arg)?;
                cli.border_style = Some(parse_border_style(&style)?);
            }
            "--no-border" => {
                cli.no_border = true;
            }
            "-m" | "--message" => {
                cli.message = Some(value(&arg)?);
            }
            "--no-message" => {
                cli.no_message = true;
            }
            "--log" => {
                cli.log_file = Some(PathBuf::from(value(&arg)?));
            }
            "--demo" => {
                cli.demo = Some(value(&arg)?);
            }
            "--size" => {
                let size = value(&arg)?;
                cli.size = Some(parse_size(&size)?);
            }
            "--print-config" => {
                cli.print_config = true;
            }
            other => {
                return Err(format!("Unknown argument: {}. Use -h for help.", other));
            }
        }
    }

    Ok(cli)
}

fn parse_border_style(s: &str) -> Result<BorderStyle, String> {
    match s.to_ascii_lowercase().as_str() {
        "ascii" => Ok(BorderStyle::Ascii),
        "single" => Ok(BorderStyle::Single),
        "double" => Ok(BorderStyle::Double),
        "rounded" => Ok(BorderStyle::Rounded),
        _ => Err(format!("Unknown border style: {}", s)),
    }
}

/// Parse `WxH`, e.g. `80x24`
fn parse_size(s: &str) -> Result<(u16, u16), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("Invalid size '{}', expected WxH", s))?;
    let w = w.trim().parse().map_err(|_| format!("Invalid width in '{}'", s))?;
    let h = h.trim().parse().map_err(|_| format!("Invalid height in '{}'", s))?;
    Ok((w, h))
}

/// Command line flags win over the config file
fn apply_overrides(config: &mut Config, cli: &CliArgs) {
    if let Some(style) = cli.border_style {
        config.border.style = style;
    }
    if cli.no_border {
        config.border.visible = false;
    }
    if let Some(ref message) = cli.message {
        config.message = message.clone();
    }
    if cli.no_message {
        config.message.clear();
    }
    if let Some(ref path) = cli.log_file {
        config.log.file = Some(path.clone());
    }
}

/// Send tracing output to the log file. The terminal itself is the drawing
/// surface, so nothing is ever logged to stdout or stderr.
fn init_logging(config: &Config) {
    let log_path = config.log_path();

    // Create log directory if needed
    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    // Start a fresh log each run
    let Ok(file) = std::fs::File::create(&log_path) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = match parse_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    let mut config = Config::load(cli.config.as_deref())?;
    apply_overrides(&mut config, &cli);

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&config).context("Failed to serialize config")?);
        return Ok(());
    }

    init_logging(&config);
    info!("termsketch {} starting...", VERSION);

    if let Some(ref script) = cli.demo {
        return run_demo(&config, script, cli.size.unwrap_or(DEMO_SIZE));
    }

    run_terminal(&config)
}

/// Draw interactively on the real terminal
fn run_terminal(config: &Config) -> anyhow::Result<()> {
    let (cols, rows) = Renderer::size()?;
    info!("Terminal size: {}x{}", cols, rows);

    let mut renderer = Renderer::new();
    renderer.init()?;

    // A failure from here on drops the renderer, which restores the terminal
    let surface = Surface::new(renderer, cols, rows, config.surface_options())?;
    info!(
        "Drawing area: outer={:?} inner={:?} margins={:?}",
        surface.outer(),
        surface.inner(),
        surface.margins()
    );

    let mut session = Session::start(surface, config.initial_cursor())?;
    run_main_loop(&mut session)?;

    let mut renderer = session.into_canvas();
    renderer.cleanup()?;
    info!("termsketch exiting");
    Ok(())
}

/// Main event loop: one key, one completed action
fn run_main_loop(session: &mut Session<Renderer>) -> anyhow::Result<()> {
    loop {
        match event::read()? {
            Event::Key(key_event) => {
                let Some(action) = KeyMapper::map(&key_event) else {
                    continue;
                };
                debug!("key = {:?} -> {:?}", key_event.code, action);

                if session.handle(action)? == Flow::Quit {
                    break;
                }
            }
            Event::Resize(cols, rows) => {
                debug!("Ignoring resize to {}x{}", cols, rows);
            }
            _ => {}
        }
    }
    Ok(())
}

/// Demo mode: run a script against an in-memory screen and print it
fn run_demo(config: &Config, script: &str, (cols, rows): (u16, u16)) -> anyhow::Result<()> {
    let actions = parse_script(script)?;
    info!("Demo: {} actions on {}x{}", actions.len(), cols, rows);

    let surface = Surface::new(BufferCanvas::new(cols, rows), cols, rows, config.surface_options())?;
    let mut session = Session::start(surface, config.initial_cursor())?;
    session.run_script(actions)?;

    if let Some(pos) = session.controller().position() {
        println!("Cursor: {}", pos);
    }
    println!("{}", session.into_canvas().render_text());
    Ok(())
}
