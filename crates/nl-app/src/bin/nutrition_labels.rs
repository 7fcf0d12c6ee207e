//! Browse the accessibility catalog from the terminal.
//!
//! Usage:
//!   nutrition-labels list --query voice
//!   nutrition-labels list --type-size accessibility-2 --json
//!   nutrition-labels show voiceover --width 200 --reduce-motion
//!   nutrition-labels badges captions --width 160

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use nl_a11y::{ColorScheme, ContrastPreference, DynamicTypeSize, MotionPreference};
use nl_app::{badge, find_feature, Config, DetailView, ListingView};
use nl_catalog::CatalogIndex;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "nutrition-labels")]
#[command(about = "Browse accessibility features and how apps support them")]
#[command(version = nl_app::VERSION)]
struct Cli {
    /// Optional JSON config file; flags override its values.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    display: DisplayArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct DisplayArgs {
    /// Dynamic type size, e.g. large or accessibility-2.
    #[arg(long, global = true)]
    type_size: Option<DynamicTypeSize>,
    /// Use the dark color scheme.
    #[arg(long, global = true)]
    dark: bool,
    /// Use increased contrast styling.
    #[arg(long, global = true)]
    increase_contrast: bool,
    /// Replace animations with static alternatives.
    #[arg(long, global = true)]
    reduce_motion: bool,
    /// Add icons and captions to color-coded status.
    #[arg(long, global = true)]
    differentiate_without_color: bool,
    /// Container width in points.
    #[arg(long, global = true)]
    width: Option<f32>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List features grouped by category.
    List {
        /// Case-insensitive search over names and short descriptions.
        #[arg(long, short, default_value = "")]
        query: String,
        /// Print the grouped features as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show the detail page for a feature.
    Show {
        /// Feature id, e.g. voiceover.
        id: String,
    },
    /// Print packed platform badge frames for a feature.
    Badges {
        /// Feature id, e.g. captions.
        id: String,
    },
}

fn load_config(path: Option<&PathBuf>, display: &DisplayArgs) -> Result<Config> {
    let mut config = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            Config::from_json(&raw).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => Config::default(),
    };

    let prefs = &mut config.preferences;
    if let Some(size) = display.type_size {
        prefs.type_size = size;
    }
    if display.dark {
        prefs.color_scheme = ColorScheme::Dark;
    }
    if display.increase_contrast {
        prefs.contrast = ContrastPreference::Increased;
    }
    if display.reduce_motion {
        prefs.motion = MotionPreference::Reduce;
    }
    if display.differentiate_without_color {
        prefs.differentiate_without_color = true;
    }
    if let Some(width) = display.width {
        config.container_width = width;
    }

    config.validate().context("validating config")?;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref(), &cli.display)?;
    let index = CatalogIndex::builtin();

    match cli.command {
        Command::List { query, json } => {
            if json {
                let groups = index.search(&query);
                let out = serde_json::to_string_pretty(&groups).context("serializing catalog")?;
                println!("{out}");
            } else {
                print!("{}", ListingView::build(&index, &query, &config.preferences).render());
            }
        }
        Command::Show { id } => {
            let feature = find_feature(&index, &id)?;
            print!("{}", DetailView::build(feature, &config).render());
        }
        Command::Badges { id } => {
            let feature = find_feature(&index, &id)?;
            let (badges, packed) = badge::layout_badges(feature.platforms, &config);
            for badge in &badges {
                println!(
                    "{:<10} line {}  x={:>6.1} y={:>6.1} w={:>6.1} h={:>5.1}",
                    badge.label, badge.line, badge.frame.x, badge.frame.y, badge.frame.width, badge.frame.height
                );
            }
            println!(
                "bounds {:.1} x {:.1} ({} lines)",
                packed.size.width, packed.size.height, packed.line_count
            );
        }
    }

    Ok(())
}
