mod terminal;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use brewmap_arcgis::ArcgisClient;
use brewmap_core::{Coordinate, Region, SearchMode};
use brewmap_search::{
    initial_region, AlertButton, AlertPresenter, LocationEvent, MapPresenter, PresentingListener,
    ResultAggregator, SearchSession,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::terminal::{TerminalAlerts, TerminalMap};

#[derive(Debug, Parser)]
#[command(name = "brewmap")]
#[command(about = "Find coffee shops, places, and addresses from the terminal")]
struct Cli {
    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Coffee shops near a city or address.
    Shops { query: String },
    /// Places inside a map area. Without --lat/--lon there is no area to search.
    Places {
        query: String,
        #[arg(long, allow_negative_numbers = true, requires = "lon")]
        lat: Option<f64>,
        #[arg(long, allow_negative_numbers = true, requires = "lat")]
        lon: Option<f64>,
        /// Viewport span in degrees; defaults to 2 km around the point.
        #[arg(long)]
        span: Option<f64>,
    },
    /// Autocomplete suggestions for partial text.
    Suggest { text: String },
    /// Resolve every suggestion for the text to a pin.
    General { query: String },
    /// List search modes and their placeholder text.
    Modes,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("brewmap ready; run `brewmap --help` for commands");
        return Ok(ExitCode::SUCCESS);
    };

    let config = brewmap_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = ArcgisClient::from_app_config(&config).context("building ArcGIS client")?;
    let aggregator = ResultAggregator::arcgis(Arc::new(client));
    let mut session = SearchSession::new(Arc::new(aggregator));

    let map = TerminalMap::new(cli.json);
    execute(command, cli.json, &mut session, &map, &TerminalAlerts).await
}

/// Runs one command against the session. Search failures are shown through
/// `alerts` and reported as a failing exit code.
async fn execute(
    command: Commands,
    json: bool,
    session: &mut SearchSession,
    map: &dyn MapPresenter,
    alerts: &dyn AlertPresenter,
) -> anyhow::Result<ExitCode> {
    let listener = PresentingListener::new(map, alerts);

    let outcome = match command {
        Commands::Modes => {
            for mode in SearchMode::ALL {
                println!("{mode:<8} {}", mode.placeholder());
            }
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Suggest { text } => match session.update_completions(&text).await {
            Ok(completions) => {
                terminal::print_completions(completions, json)?;
                return Ok(ExitCode::SUCCESS);
            }
            Err(e) => {
                let (title, message) = e.alert();
                alerts.show_alert(title, message, &[AlertButton::Ok]);
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Shops { query } => {
            session.select_mode(SearchMode::Shop);
            session.submit(&query, None, &listener).await
        }
        Commands::Places {
            query,
            lat,
            lon,
            span,
        } => {
            session.select_mode(SearchMode::Place);
            let viewport = viewport_from_args(lat, lon, span);
            session.submit(&query, viewport.as_ref(), &listener).await
        }
        Commands::General { query } => {
            // No completions are cached, so the flow fetches them itself and
            // reports any failure through the listener.
            session.select_mode(SearchMode::General);
            session.submit(&query, None, &listener).await
        }
    };

    Ok(match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    })
}

/// Builds the search viewport the way the map would show it: an explicit
/// span when given, otherwise the initial region around a location fix.
fn viewport_from_args(lat: Option<f64>, lon: Option<f64>, span: Option<f64>) -> Option<Region> {
    let center = Coordinate::new(lat?, lon?);
    match span {
        Some(span) => Some(Region::new(center, span, span)),
        None => initial_region(&LocationEvent::Received(center)),
    }
}
