use std::cmp::Ordering;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use swift_toolchain_resolver::config::{ResolverConfig, config_path};
use swift_toolchain_resolver::logging;
use swift_toolchain_resolver::version::{VersionIdentifier, latest, parse_version};

#[derive(Parser)]
#[command(name = "swift-toolchain-resolver")]
#[command(version, about = "Resolve Swift toolchain versions to download URLs")]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a version string and print its components
    Parse {
        version: String,
        #[arg(long)]
        json: bool,
    },
    /// Print the download URL of a toolchain archive
    Url {
        version: String,
        /// Platform tag (defaults to the configured default platform)
        #[arg(long)]
        platform: Option<String>,
        /// Print every resolved path segment as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare two versions, printing <, = or >
    Compare { left: String, right: String },
    /// Print the newest of the given versions
    Latest {
        #[arg(required = true)]
        versions: Vec<String>,
    },
    /// List configured platforms
    Platforms {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.log_file.as_deref())?;

    let config = match &cli.config {
        Some(path) => ResolverConfig::load(path)
            .with_context(|| format!("Failed to load config {:?}", path))?,
        None => ResolverConfig::load_or_default(&config_path())
            .context("Failed to load default config")?,
    };

    match cli.command {
        Command::Parse { version, json } => {
            let id = parse_version(&version)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&id)?);
            } else {
                println!("{}", describe(&id));
            }
        }
        Command::Url {
            version,
            platform,
            json,
        } => {
            let id = parse_version(&version)?;
            let platform = platform.unwrap_or_else(|| config.default_platform.clone());
            let resolved = config.resolver().resolve(&id, &platform)?;
            info!("Resolved {} to {}", version, resolved.url);
            if json {
                println!("{}", serde_json::to_string_pretty(&resolved)?);
            } else {
                println!("{}", resolved.url);
            }
        }
        Command::Compare { left, right } => {
            let left = parse_version(&left)?;
            let right = parse_version(&right)?;
            let symbol = match left.cmp(&right) {
                Ordering::Less => "<",
                Ordering::Equal => "=",
                Ordering::Greater => ">",
            };
            println!("{symbol}");
        }
        Command::Latest { versions } => {
            let ids = versions
                .iter()
                .map(String::as_str)
                .map(parse_version)
                .collect::<Result<Vec<_>, _>>()?;
            if let Some(newest) = latest(&ids) {
                println!("{newest}");
            }
        }
        Command::Platforms { json } => {
            let table = config.platform_table();
            if json {
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                for platform in table.iter() {
                    println!("{}\t{}", platform.tag, platform.archive_suffix);
                }
            }
        }
    }

    Ok(())
}

fn describe(id: &VersionIdentifier) -> String {
    match id {
        VersionIdentifier::Release(r) => format!(
            "release major={} minor={} patch={}",
            r.major, r.minor, r.patch
        ),
        VersionIdentifier::Snapshot(s) => format!(
            "snapshot major={} minor={} date={} suffix={}",
            s.major(),
            s.minor(),
            s.date(),
            s.suffix().map(String::from).unwrap_or_else(|| "-".to_string())
        ),
    }
}
