use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dashkit::OutputFormat;
use dashkit::core::commands;
use dashkit::core::config::{self, CliOverrides, ConfigError, EnvOverrides, ResolvedConfig};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "dashkit", about = "Admin dashboard menu and mock data tools")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the navigation menu as a role sees it
    Nav {
        /// Role whose rules filter the menu
        #[arg(short, long)]
        role: Option<String>,
        /// Menu file (.toml or .json) instead of the built-in menu
        #[arg(short, long)]
        file: Option<PathBuf>,
        #[arg(long, default_value_t, value_enum)]
        format: OutputFormat,
    },
    /// Check that every route name in the menu is unique
    Check {
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Print the JSON schema of a navigation file
    Schema,
    /// Print one page of a JSON array of records
    Paginate {
        records: PathBuf,
        #[arg(long)]
        per_page: Option<usize>,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Print the id the next record appended to a JSON array should get
    GenId { records: PathBuf },
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to dashkit.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("dashkit.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    match run(args.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::warn!("Command failed: {}", e);
            eprintln!("dashkit: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<String, Box<dyn std::error::Error>> {
    match command {
        Command::Nav { role, file, format } => {
            let resolved = resolve_config(&CliOverrides {
                role: role.as_deref(),
                nav_file: file.as_deref(),
                per_page: None,
            })?;
            log::info!("dashkit nav as role '{}'", resolved.role);
            Ok(commands::nav(&resolved, format)?)
        }
        Command::Check { file } => {
            let resolved = resolve_config(&CliOverrides {
                nav_file: file.as_deref(),
                ..Default::default()
            })?;
            Ok(commands::check(&resolved)?)
        }
        Command::Schema => Ok(commands::schema()?),
        Command::Paginate {
            records,
            per_page,
            page,
        } => {
            let resolved = resolve_config(&CliOverrides {
                per_page,
                ..Default::default()
            })?;
            let records = commands::read_records(&records)?;
            Ok(commands::paginate(&records, resolved.per_page, page)?)
        }
        Command::GenId { records } => {
            let records = commands::read_records(&records)?;
            Ok(commands::next_id(&records).to_string())
        }
    }
}

/// Only subcommands that depend on settings touch the config file.
fn resolve_config(cli: &CliOverrides<'_>) -> Result<ResolvedConfig, ConfigError> {
    let file_config = config::load_config()?;
    Ok(config::resolve(&file_config, &EnvOverrides::from_env(), cli))
}
