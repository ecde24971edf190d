use anyhow::Context;
use clap::Parser;
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;
use tinysteps_core::models::AGE_FILTERS;
use tinysteps_core::{AgeSelector, Catalog, Config, Theme, ViewController};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "tinysteps")]
#[command(version, about = "Montessori-style activities for babies and toddlers, in your terminal", long_about = None)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "TINYSTEPS_CONFIG")]
    config: Option<PathBuf>,

    /// Dataset file to use instead of the built-in catalog
    #[arg(long, global = true, env = "TINYSTEPS_DATA")]
    data: Option<PathBuf>,

    /// Color theme (Daylight, Nightlight, Meadow)
    #[arg(long, global = true)]
    theme: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Browse activities in the terminal UI (default)
    Browse,
    /// List activities
    List {
        /// Age group
        #[arg(long, value_parser = AGE_FILTERS)]
        age: Option<String>,
        /// Case-insensitive text to look for in titles and objectives
        #[arg(long, short)]
        query: Option<String>,
    },
    /// Show one activity in full
    Show {
        /// Activity id
        id: String,
    },
    /// Shopping list of materials
    Shop {
        /// Age group
        #[arg(long, value_parser = AGE_FILTERS)]
        age: Option<String>,
        /// Only Montessori classics
        #[arg(long)]
        classic: bool,
        /// Write the list to a .json, .csv or .md file
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Curated activity bundles
    Bundles {
        /// Age group
        #[arg(long, value_parser = AGE_FILTERS)]
        age: Option<String>,
    },
    /// Recommended reading
    Books,
    /// Why these activities matter
    Science,
    /// Validate the dataset
    Check,
    /// Show or create the config file
    Config {
        /// Write a config file with default values
        #[arg(long)]
        init: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, None | Some(Commands::Browse));

    init_logging(interactive)?;

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    // Flags win over the config file
    if cli.data.is_some() {
        config.data.path = cli.data.clone();
    }
    if let Some(theme) = &cli.theme {
        config.ui.theme = theme.clone();
    }

    if let Some(Commands::Config { init }) = cli.command {
        return commands::config(&config, cli.config.as_deref(), init);
    }

    let catalog = Catalog::load_or_embedded(config.data.path.as_deref())
        .context("Failed to load the activity catalog")?;
    let controller = ViewController::with_classics(catalog, config.classic_list());

    match cli.command {
        None | Some(Commands::Browse) => browse(controller, &config),
        Some(Commands::List { age, query }) => {
            commands::list(controller, age_selector(age), query.unwrap_or_default());
            Ok(())
        }
        Some(Commands::Show { id }) => commands::show(&controller, &config.link_builder(), &id),
        Some(Commands::Shop {
            age,
            classic,
            export,
        }) => commands::shop(
            controller,
            &config.link_builder(),
            age_selector(age),
            classic,
            export.as_deref(),
        ),
        Some(Commands::Bundles { age }) => {
            commands::bundles(&controller, age_selector(age));
            Ok(())
        }
        Some(Commands::Books) => {
            commands::books(controller.catalog());
            Ok(())
        }
        Some(Commands::Science) => {
            commands::science();
            Ok(())
        }
        Some(Commands::Check) => commands::check(controller.catalog()),
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn age_selector(age: Option<String>) -> AgeSelector {
    age.map(|a| AgeSelector::parse(&a)).unwrap_or_default()
}

fn browse(controller: ViewController, config: &Config) -> anyhow::Result<()> {
    let theme = Theme::by_name(&config.ui.theme).unwrap_or_else(|| {
        tracing::warn!("Unknown theme '{}', using Daylight", config.ui.theme);
        Theme::default()
    });
    tracing::info!(
        activities = controller.catalog().activities.len(),
        theme = %theme.name,
        "Launching TUI"
    );

    let app = tinysteps_tui::App::new(controller, config.link_builder(), theme);
    tinysteps_tui::run_tui(app, config.ui.mouse_enabled)
}

/// Log to stderr, or to a file while the TUI owns the terminal
fn init_logging(interactive: bool) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tinysteps=info".into());

    if interactive {
        let dir = dirs::cache_dir()
            .context("Could not determine cache directory")?
            .join("tinysteps");
        fs::create_dir_all(&dir)?;
        let file = File::create(dir.join("tinysteps.log"))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}
