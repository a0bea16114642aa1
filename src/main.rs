mod terminal;

use air_route::{
    sdk::util::log::init_logging, GeocoderConfig, MapDefaults, NominatimProvider, RoutePlanner,
};
use clap::Parser;
use terminal::{Command, TerminalMap, TerminalView, HELP};
use tokio::io::{AsyncBufReadExt, BufReader};

type Planner = RoutePlanner<NominatimProvider, TerminalMap, TerminalView>;

/// Sum the straight-line (great-circle) distance along a route of places
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Places in travel order (e.g., "Tel Aviv" Jerusalem). Omit to start an interactive session.
    places: Vec<String>,

    /// [Optional] 2-letter country code restricting lookups (overrides GEOCODER_COUNTRY)
    #[arg(short, long)]
    country: Option<String>,

    /// [Optional] Client label sent with every lookup (overrides GEOCODER_USER_AGENT)
    #[arg(long)]
    user_agent: Option<String>,

    /// Print the route summary as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    let mut config = GeocoderConfig::from_env()?;
    if let Some(country) = &cli.country {
        config = config.with_country(country)?;
    }
    if let Some(agent) = &cli.user_agent {
        config = config.with_user_agent(agent)?;
    }
    log::info!(
        "Looking up places in {} via {}",
        config.country,
        config.base_url
    );

    let provider = NominatimProvider::new(&config)?;
    let interactive = cli.places.is_empty();
    let view = TerminalView {
        show_list: interactive,
        show_result: !cli.json,
    };
    let mut planner = RoutePlanner::new(provider, TerminalMap::default(), view, MapDefaults::default());

    if interactive {
        run_session(&mut planner).await
    } else {
        run_batch(&mut planner, &cli.places, cli.json).await
    }
}

async fn run_batch(planner: &mut Planner, places: &[String], json: bool) -> anyhow::Result<()> {
    for place in places {
        planner.on_append(place).await;
    }

    let summary = planner.on_resolve_all().await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}

async fn run_session(planner: &mut Planner) -> anyhow::Result<()> {
    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let Some(command) = Command::parse(&line) else {
            continue;
        };

        match command {
            Command::Add(name) => {
                planner.on_append(&name).await;
            }
            Command::Remove(index) => {
                if let Err(e) = planner.on_remove(index) {
                    eprintln!("{}", e);
                }
            }
            Command::List => planner.on_list(),
            Command::Calc => {
                if let Err(e) = planner.on_resolve_all().await {
                    log::debug!("Calculation stopped: {}", e);
                }
            }
            Command::Reset => planner.on_reset(),
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
            Command::Invalid(reason) => eprintln!("{} (type `help`)", reason),
        }
    }

    Ok(())
}
