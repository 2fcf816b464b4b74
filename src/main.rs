use clap::{Parser, Subcommand};
use eframe::{egui, NativeOptions};
use std::error::Error;
use std::path::PathBuf;
use tracing::{info, warn, Level};

use collocation_dashboard::app::{CollocationApp, WINDOW_TITLE};
use collocation_dashboard::config::load_config_or_default;
use collocation_dashboard::lexicon::Lexicon;
use collocation_dashboard::pairing::validate_pairings;
use collocation_dashboard::report::{render_json, render_text};
use collocation_dashboard::{Dashboard, DashboardError};

#[derive(Parser, Debug)]
#[command(
    name = "loanword-collocations",
    version,
    about = "Compare collocations of native Korean words and their loanword counterparts"
)]
struct Cli {
    /// TOML config file; defaults apply when it does not exist.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Seed for the sample data generator (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,

    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the dashboard window (default).
    Gui,
    /// Print one comparison to stdout.
    Report {
        word1: String,
        /// Defaults to the counterpart of WORD1.
        word2: Option<String>,
        #[arg(long)]
        json: bool,
    },
}

fn run_gui(dashboard: Dashboard, font_path: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Box::new(CollocationApp::new(cc, dashboard, font_path))),
    )
    .map_err(|e| format!("Failed to run dashboard window: {}", e))?;
    Ok(())
}

fn run_report(
    mut dashboard: Dashboard,
    word1: &str,
    word2: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    for word in std::iter::once(word1).chain(word2) {
        if !dashboard.words().iter().any(|w| w == word) {
            return Err(DashboardError::unknown_word(word, dashboard.words()).into());
        }
    }
    dashboard.select_words(word1, word2);

    let comparison = dashboard.comparison();
    if json {
        println!("{}", render_json(comparison)?);
    } else {
        print!("{}", render_text(comparison));
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let config = load_config_or_default(&cli.config)?;
    let distribution = config.generator.distribution()?;
    let seed = cli.seed.or(config.generator.seed);
    match seed {
        Some(seed) => info!(seed, "using fixed generator seed"),
        None => info!("seeding generator from OS entropy"),
    }

    let lexicon = Lexicon::builtin();
    for issue in validate_pairings(&lexicon) {
        warn!(
            word = issue.word,
            partner = issue.partner,
            missing = issue.missing,
            "pair default refers to a word outside the lexicon; selector falls back to index 0"
        );
    }

    let dashboard = Dashboard::new(lexicon, distribution, seed);
    match cli.command.unwrap_or(Command::Gui) {
        Command::Gui => run_gui(dashboard, config.ui.font_path),
        Command::Report { word1, word2, json } => {
            run_report(dashboard, &word1, word2.as_deref(), json)
        }
    }
}
