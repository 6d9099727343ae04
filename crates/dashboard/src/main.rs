//! # cropwatch
//!
//! Command-line front end for crop nutrient reports.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use dashboard::{render_crops, render_report, CropDashboard, DashboardConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cropwatch")]
#[command(about = "Crop nutrient monitoring and forecasting", long_about = None)]
struct Cli {
    /// JSON configuration file (defaults are used when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding `<crop>.csv` sensor files
    #[arg(long, global = true, env = "CROPWATCH_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Directory holding `best_model_<crop>_<NUTRIENT>.json` files
    #[arg(long, global = true, env = "CROPWATCH_MODEL_DIR")]
    model_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List configured crops and their nutrient thresholds
    Crops,

    /// Build the nutrient report for one crop
    Report {
        /// Crop key (coffee, blackpepper, durian)
        #[arg(long)]
        crop: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn load_config(cli: &Cli) -> anyhow::Result<DashboardConfig> {
    let config = DashboardConfig::load(cli.config.as_deref())?
        .with_dirs(cli.data_dir.clone(), cli.model_dir.clone());
    Ok(config)
}

fn write_output(content: &str, output: Option<&PathBuf>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => print!("{}", content),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so report output stays clean
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cropwatch=info,dashboard=info".into()),
        )
        .init();

    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Crops => {
            print!("{}", render_crops(&config));
        }
        Commands::Report {
            crop,
            format,
            output,
        } => {
            let service = CropDashboard::new(config)?;
            let report = service.report(crop)?;
            let content = match format {
                Format::Text => render_report(&report),
                Format::Json => serde_json::to_string_pretty(&report)? + "\n",
            };
            write_output(&content, output.as_ref())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_report() {
        let cli = Cli::try_parse_from([
            "cropwatch", "report", "--crop", "coffee", "--format", "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Report {
                crop,
                format,
                output,
            } => {
                assert_eq!(crop, "coffee");
                assert_eq!(format, Format::Json);
                assert!(output.is_none());
            }
            Commands::Crops => panic!("Expected Report"),
        }
    }

    #[test]
    fn test_report_defaults_to_text() {
        let cli = Cli::try_parse_from(["cropwatch", "report", "--crop", "durian"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Report {
                format: Format::Text,
                ..
            }
        ));
    }

    #[test]
    fn test_report_requires_crop() {
        assert!(Cli::try_parse_from(["cropwatch", "report"]).is_err());
        assert!(Cli::try_parse_from([
            "cropwatch", "report", "--crop", "coffee", "--format", "csv",
        ])
        .is_err());
    }

    #[test]
    fn test_global_dirs_override_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("cropwatch.json");
        std::fs::write(
            &path,
            r#"{"data_dir": "/srv/data", "model_dir": "/srv/models"}"#,
        )
        .unwrap();
        let path = path.to_string_lossy().into_owned();

        let cli = Cli::try_parse_from([
            "cropwatch",
            "crops",
            "--config",
            path.as_str(),
            "--data-dir",
            "/mnt/sensors",
            "--model-dir",
            "/mnt/models",
        ])
        .unwrap();
        let config = load_config(&cli).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/mnt/sensors"));
        assert_eq!(config.model_dir, PathBuf::from("/mnt/models"));
    }

    #[test]
    fn test_config_file_applies_without_flags() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("cropwatch.json");
        std::fs::write(&path, r#"{"data_dir": "/srv/data", "window_hours": 12}"#).unwrap();
        let path = path.to_string_lossy().into_owned();

        let cli =
            Cli::try_parse_from(["cropwatch", "--config", path.as_str(), "crops"]).unwrap();
        let config = load_config(&cli).unwrap();

        assert_eq!(config.window_hours, 12);
        if std::env::var_os("CROPWATCH_DATA_DIR").is_none() {
            assert_eq!(config.data_dir, PathBuf::from("/srv/data"));
        }
    }
}
