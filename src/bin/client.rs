//! Terminal client for the weather & currency proxy.
//!
//! Looks up a city through a running proxy and prints its weather together
//! with exchange rates for the country's currency.
//!
//! # Usage
//!
//! ```bash
//! # One-shot lookup
//! cargo run --bin weather-client -- Almaty
//!
//! # Interactive: type a city and press Enter, Ctrl-C to quit
//! cargo run --bin weather-client
//!
//! # Against another proxy instance
//! cargo run --bin weather-client -- --server http://127.0.0.1:8080 Tokyo
//! ```

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use dialoguer::Input;
use tracing_subscriber::EnvFilter;
use url::Url;
use weather_currency::client::render::{CurrencyPanel, WeatherPanel};
use weather_currency::client::{HttpProxyClient, Orchestrator, UiState, render};
use weather_currency::infrastructure::upstream;

/// Look up weather and local exchange rates for a city.
#[derive(Parser)]
#[command(name = "weather-client")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the proxy
    #[arg(short, long, default_value = "http://localhost:3000")]
    server: Url,

    /// City to look up; omit for an interactive prompt
    city: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let http = upstream::http_client().context("Failed to build HTTP client")?;
    let orchestrator = Orchestrator::new(Arc::new(HttpProxyClient::new(http, cli.server)));

    if let Some(city) = cli.city {
        orchestrator.search(&city, print_state).await;
        return Ok(());
    }

    println!("{}", "Weather & currency lookup".bright_blue().bold());
    println!("{}", "Type a city and press Enter (Ctrl-C to quit)".dimmed());

    loop {
        let input: String = match Input::new()
            .with_prompt("City")
            .allow_empty(true)
            .interact_text()
        {
            Ok(input) => input,
            Err(e) if is_quit(&e) => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        orchestrator.search(&input, print_state).await;
    }
}

/// Ctrl-C and end of input end the session.
fn is_quit(err: &dialoguer::Error) -> bool {
    let dialoguer::Error::IO(io) = err;
    matches!(
        io.kind(),
        io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof
    )
}

/// Prints the visible part of each state transition.
fn print_state(state: &UiState) {
    let display = render(state);

    if display.loading {
        println!("{}", "Loading...".dimmed());
    }

    if let Some(error) = &display.error {
        println!("{} {}", "✗".red().bold(), error.red());
    }

    // Weather is printed once, when it first appears.
    if let (UiState::WeatherLoaded(_), Some(weather)) = (state, &display.weather) {
        print_weather(weather);
    }

    if let Some(currency) = &display.currency {
        print_currency(currency);
    }
}

fn print_weather(panel: &WeatherPanel) {
    println!();
    println!("{}", panel.city.bright_white().bold());
    println!(
        "  {} {}",
        panel.temperature.bright_yellow().bold(),
        panel.description
    );
    println!("  {:<12} {}", "Feels like:".cyan(), panel.feels_like);
    println!("  {:<12} {}", "Wind:".cyan(), panel.wind_speed);
    println!("  {:<12} {}", "Humidity:".cyan(), panel.humidity);
    println!("  {:<12} {}", "Pressure:".cyan(), panel.pressure);
    println!("  {:<12} {}", "Coordinates:".cyan(), panel.coordinates);
    println!("  {:<12} {}", "Country:".cyan(), panel.country);
    println!("  {:<12} {}", "Rain:".cyan(), panel.rain);
}

fn print_currency(panel: &CurrencyPanel) {
    println!();
    println!("{}", panel.base_label.bright_white().bold());
    for row in &panel.rows {
        println!(
            "  1 {} = {} {}    1 {} = {} {}",
            panel.base_currency,
            row.forward.green(),
            row.code,
            row.code,
            row.inverse.green(),
            panel.base_currency
        );
    }
    println!();
}
