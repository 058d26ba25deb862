use metrics_analyzer::config::Settings;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    println!("Usage: metrics-analyzer-config [--strict]");
    println!();
    println!("Resolve the analysis server settings and print them as JSON.");
    println!();
    println!("Options:");
    println!("  --strict   Fail if GROQ_API_KEY is not set instead of using the placeholder");
    println!("  --help     Show this message");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "metrics_analyzer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help") {
        print_help();
        return Ok(());
    }

    let settings = if args.iter().any(|a| a == "--strict") {
        Settings::from_env_strict().map_err(|e| format!("Failed to load configuration: {}", e))?
    } else {
        Settings::from_env()
    };

    tracing::info!(
        "Configuration loaded: model {} on {}",
        settings.groq_model,
        settings.server_address()
    );

    println!("{}", serde_json::to_string_pretty(&settings)?);

    Ok(())
}
