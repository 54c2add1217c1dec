//! Unit Converter CLI
//!
//! Converts values between length, weight and temperature units, either in
//! one shot or through an interactive form.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use unit_converter_lib::api::commands::converter::{
    build_request, convert_units_command, get_categories_command, get_units_for_category_command,
};
use unit_converter_lib::api::commands::form::ConverterForm;
use unit_converter_lib::shared::error::AppResult;
use unit_converter_lib::shared::settings::ConverterSettings;

#[derive(Parser)]
#[command(name = "unit-converter", version, about = "Convert values between length, weight and temperature units")]
struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a value between two units of one category
    Convert {
        /// Value to convert (defaults to the configured default value)
        #[arg(allow_negative_numbers = true)]
        value: Option<f64>,

        /// Category: Length, Weight or Temperature
        #[arg(short, long)]
        category: Option<String>,

        /// Source unit, by name or symbol
        #[arg(short, long)]
        from: Option<String>,

        /// Target unit, by name or symbol
        #[arg(short, long)]
        to: Option<String>,

        /// Print the full response as JSON
        #[arg(long)]
        json: bool,
    },
    /// List categories and their units
    Categories {
        #[arg(long)]
        json: bool,
    },
    /// List the units of one category
    Units {
        category: String,

        #[arg(long)]
        json: bool,
    },
    /// Fill in the conversion form interactively
    Form,
    /// Show the settings file, optionally resetting it to defaults
    Settings {
        #[arg(long)]
        reset: bool,
    },
}

fn settings_path(cli: &Cli) -> AppResult<PathBuf> {
    match &cli.settings {
        Some(path) => Ok(path.clone()),
        None => ConverterSettings::get_settings_path(),
    }
}

async fn load_settings(cli: &Cli) -> AppResult<ConverterSettings> {
    match &cli.settings {
        Some(path) => ConverterSettings::load_from(path).await,
        None => ConverterSettings::load().await,
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    match &cli.command {
        Command::Convert { value, category, from, to, json } => {
            let settings = load_settings(&cli).await?;
            let request = build_request(&settings, *value, category.clone(), from.clone(), to.clone())?;
            let response = convert_units_command(request, settings.decimal_places())?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("{}", response.summary);
            }
        }
        Command::Categories { json } => {
            let response = get_categories_command();
            if *json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                for category in response.categories {
                    let units: Vec<String> = category
                        .units
                        .iter()
                        .map(|unit| format!("{} ({})", unit.label, unit.id))
                        .collect();
                    println!("{} [{}]: {}", category.label, category.kind, units.join(", "));
                }
            }
        }
        Command::Units { category, json } => {
            let response = get_units_for_category_command(category)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                for unit in response.units {
                    println!("{} ({})", unit.label, unit.id);
                }
            }
        }
        Command::Form => {
            let settings = load_settings(&cli).await?;
            let stdin = io::stdin();
            let mut form = ConverterForm::new(stdin.lock(), io::stdout(), settings);
            form.run()?;
        }
        Command::Settings { reset } => {
            let path = settings_path(&cli)?;
            let settings = if *reset {
                let settings = ConverterSettings::default();
                settings.save_to(&path).await?;
                settings
            } else {
                ConverterSettings::load_from(&path).await?
            };
            println!("# {}", path.display());
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout stays clean for results
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
