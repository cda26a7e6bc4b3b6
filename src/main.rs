use radar_match::cli::{self, CliError};
use radar_match::config::{LoggingSettings, Settings};
use radar_match::core::Matcher;
use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true);

    match format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.json().init(),
    }
}

fn run() -> Result<(), CliError> {
    let settings = Settings::load()?;
    init_logging(&settings.logging);

    info!("Configuration loaded successfully");

    // Read from the file given as the first argument, or stdin
    let request = match std::env::args().nth(1) {
        Some(path) if path != "-" => cli::read_request(BufReader::new(File::open(path)?))?,
        _ => cli::read_request(io::stdin().lock())?,
    };

    let matcher = Matcher::with_default_weights();
    let response = cli::evaluate(&request, &settings, &matcher);

    serde_json::to_writer_pretty(io::stdout().lock(), &response)?;
    println!();
    Ok(())
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Logging may not be initialised if configuration failed
            if tracing::dispatcher::has_been_set() {
                error!("{}", e);
            } else {
                eprintln!("{}", e);
            }
            ExitCode::FAILURE
        }
    }
}
