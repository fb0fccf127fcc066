use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use jobscrape::{ScraperConfig, ScraperRegistry};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "jobscrape")]
#[command(about = "Search job boards through registered scrapers", long_about = None)]
struct Cli {
    #[arg(
        short = 'l',
        long = "log-level",
        value_enum,
        default_value = "info",
        global = true,
        help = "Set the logging level"
    )]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered scrapers
    List {
        #[arg(long, conflicts_with = "complex", help = "Only scrapers that need plain HTTP")]
        simple: bool,

        #[arg(long, help = "Only scrapers that need browser automation")]
        complex: bool,
    },
    /// Show how a scraper is registered
    Info {
        #[arg(help = "Registered scraper name")]
        name: String,
    },
    /// Search one job board
    Scrape {
        #[arg(help = "Registered scraper name, e.g. duunitori")]
        name: String,

        #[arg(help = "Search keyword")]
        keyword: String,

        #[arg(long, help = "Location filter")]
        location: Option<String>,

        #[arg(long, default_value_t = 10, help = "Maximum number of jobs to return")]
        limit: usize,

        #[arg(
            long,
            default_value_t = jobscrape::config::DEFAULT_RATE_LIMIT,
            help = "Seconds to wait before each request"
        )]
        rate_limit: f64,

        #[arg(
            short = 'o',
            long = "output",
            value_enum,
            default_value = "text",
            help = "Output format"
        )]
        format: OutputFormat,
    },
}

fn serialize_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Error serializing to JSON: {}", e);
            process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.clone().into())
        .init();

    let registry = ScraperRegistry::with_builtin();

    match cli.command {
        Commands::List { simple, complex } => {
            let names = if simple {
                registry.list_simple()
            } else if complex {
                registry.list_complex()
            } else {
                registry.list_all()
            };

            if names.is_empty() {
                println!("No scrapers registered.");
            }
            for name in names {
                println!("{}", name);
            }
        }

        Commands::Info { name } => match registry.get_info(&name) {
            Some(info) => println!("{} (complexity: {})", info.name, info.complexity),
            None => {
                log::error!(
                    "Scraper '{}' not found. Available: [{}]",
                    name,
                    registry.list_all().join(", ")
                );
                process::exit(1);
            }
        },

        Commands::Scrape {
            name,
            keyword,
            location,
            limit,
            rate_limit,
            format,
        } => {
            let config = ScraperConfig::default().with_rate_limit(rate_limit);

            let scraper = registry.get(&name, &config).unwrap_or_else(|e| {
                log::error!("{}", e);
                process::exit(1);
            });

            let jobs = scraper
                .scrape_jobs(&keyword, location.as_deref(), limit)
                .await;

            match format {
                OutputFormat::Json => serialize_json(&jobs),
                OutputFormat::Text => {
                    if jobs.is_empty() {
                        println!("No jobs found.");
                    } else {
                        for (i, job) in jobs.iter().enumerate() {
                            println!("{:>3}. {}", i + 1, job);
                        }
                    }
                }
            }
        }
    }
}
