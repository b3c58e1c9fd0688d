use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gtk4::prelude::*;
use gtk4::Application;
use log::{error, info, warn};
use std::path::PathBuf;

use circle_progress::config::AppConfig;
use circle_progress::{gallery, ImageHost};
use circle_progress_render::{draw_on_host, CircleProgress};
use circle_progress_types::{ProgressStyle, ShaderMode, StrokeCap};

const APP_ID: &str = "com.github.circle_progress.gallery";

/// circle-progress - circular progress ring renderer
#[derive(Parser, Debug, Clone)]
#[command(name = "circle-progress")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0", global = true)]
    debug: u8,

    /// Config file to use instead of the per-user one
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Render one ring to a PNG file
    Render {
        /// Output PNG path
        #[arg(short = 'o', long = "output", default_value = "progress.png")]
        output: PathBuf,

        /// Primary progress
        #[arg(short = 'p', long = "progress", default_value = "0", allow_hyphen_values = true)]
        progress: i32,

        /// Secondary progress
        #[arg(short = 's', long = "second", default_value = "0", allow_hyphen_values = true)]
        second: i32,

        /// Maximum progress value
        #[arg(short = 'm', long = "max")]
        max: Option<i32>,

        /// Image width (defaults to the config's render width)
        #[arg(long = "width")]
        width: Option<u32>,

        /// Image height (defaults to the config's render height)
        #[arg(long = "height")]
        height: Option<u32>,

        /// Ring style: line, solid or solid_line
        #[arg(long = "style")]
        style: Option<ProgressStyle>,

        /// Gradient geometry: linear, radial or sweep
        #[arg(long = "shader")]
        shader: Option<ShaderMode>,

        /// Stroke cap: butt, round or square
        #[arg(long = "cap")]
        cap: Option<StrokeCap>,

        /// Render without the percentage label
        #[arg(long = "no-label")]
        no_label: bool,
    },
    /// Open the demo gallery window
    Show,
    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}

fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logger with verbosity based on -d/--debug flag
    // Level 0 (default): warn only
    // Level 1: info
    // Level 2: debug
    // Level 3+: trace
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting circle-progress v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load_from_path(path),
        None => AppConfig::load(),
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Render {
            output,
            progress,
            second,
            max,
            width,
            height,
            style,
            shader,
            cap,
            no_label,
        } => {
            let config = load_config(cli.config.as_ref())?;

            let mut ring = CircleProgress::with_config(config.progress)?;
            if let Some(max) = max {
                ring.set_max(max)?;
            }
            if let Some(style) = style {
                ring.set_style(style);
            }
            if let Some(shader) = shader {
                ring.set_shader_mode(shader);
            }
            if let Some(cap) = cap {
                ring.set_cap(cap);
            }
            if no_label {
                ring.set_progress_formatter(None);
            }
            ring.set_progress_first(progress);
            ring.set_progress_second(second);

            let width = width.unwrap_or(config.render.width);
            let height = height.unwrap_or(config.render.height);
            if width == 0 || height == 0 {
                bail!("Image size must be positive, got {}x{}", width, height);
            }

            let mut host = ImageHost::new(width, height)?;
            draw_on_host(&mut ring, &mut host)?;
            host.write_png(&output)?;
            info!("Rendered {}x{} ring to {}", width, height, output.display());
            Ok(())
        }
        Command::Show => {
            let config = load_config(cli.config.as_ref())?;

            let app = Application::builder().application_id(APP_ID).build();
            app.connect_activate(move |app| {
                if let Err(e) = gallery::build_window(app, &config.progress) {
                    error!("Failed to build gallery: {:#}", e);
                    app.quit();
                }
            });

            // Run the application (pass empty args since we already parsed them)
            app.run_with_args(&["circle-progress"]);
            Ok(())
        }
        Command::InitConfig { force } => {
            let path = match cli.config {
                Some(path) => path,
                None => AppConfig::config_path()?,
            };
            if path.exists() && !force {
                warn!("Config already exists at {}", path.display());
                bail!("Refusing to overwrite {} (use --force)", path.display());
            }
            AppConfig::default()
                .save_to_path(&path)
                .context("Failed to write default config")?;
            println!("Wrote {}", path.display());
            Ok(())
        }
    }
}
