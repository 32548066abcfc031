use std::process::ExitCode;

use skycast::{LocationParser, SkycastConfig, WeatherService};
use tracing_subscriber::EnvFilter;

// One sequential request chain per invocation; no need for worker threads
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match SkycastConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    if config.logging.format == "json" {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if query.trim().is_empty() {
        eprintln!("Usage: skycast <city name | lat,lon>");
        return ExitCode::FAILURE;
    }

    match run(&config, &query).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Lookup failed: {e}");
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &SkycastConfig, query: &str) -> skycast::Result<()> {
    let input = LocationParser::parse(query)?;
    let service = WeatherService::new(config)?;
    let record = service.lookup(input).await?;

    println!("{}, {}", record.city, record.country);
    println!("  Temperature: {}", record.format_temperature());
    println!("  Feels like:  {}°C", record.feels_like_rounded());
    println!("  Humidity:    {}%", record.humidity_rounded());
    println!("  Wind speed:  {}", record.format_wind());
    println!("  Conditions:  {}", record.description);
    println!("  Icon:        {}", record.icon_url);

    Ok(())
}
