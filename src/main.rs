use clap::{Parser, Subcommand};
use codebase_scout::{requirements, Analyzer, Config};
use std::env;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "codebase-scout")]
#[command(about = "A codebase analysis engine for scanning project structure and tech stack")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a project directory
    Analyze {
        /// Target directory to analyze (absolute, or relative to the working directory)
        #[arg(short, long, default_value = ".")]
        path: String,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Maximum traversal depth
        #[arg(long)]
        max_depth: Option<usize>,

        /// Exclude patterns (replaces the configured set)
        #[arg(long)]
        exclude: Vec<String>,

        /// Extensions to include (replaces the configured set)
        #[arg(long)]
        include_ext: Vec<String>,

        /// Write the JSON report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Json)]
        format: ReportFormat,
    },
    /// Generate a default configuration file
    Config {
        /// Output path for the config file (defaults to ~/.codebase-scout.toml)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Read a requirements document relative to the working directory
    Requirements {
        /// Path to the requirements file (e.g. requirements.md)
        file: String,
    },
}

#[derive(clap::ValueEnum, Clone, Copy)]
enum ReportFormat {
    Json,
    Text,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            config,
            max_depth,
            exclude,
            include_ext,
            output,
            format,
        } => analyze_project(path, config, max_depth, exclude, include_ext, output, format),
        Commands::Config { output } => generate_config(output),
        Commands::Requirements { file } => read_requirements(&file),
    }
}

fn analyze_project(
    path: String,
    config_path: Option<PathBuf>,
    max_depth: Option<usize>,
    exclude: Vec<String>,
    include_ext: Vec<String>,
    output: Option<PathBuf>,
    format: ReportFormat,
) -> anyhow::Result<()> {
    println!("🚀 Starting Codebase Scout Analysis");
    println!("===================================");

    let start_time = Instant::now();

    let mut config = if let Some(config_path) = config_path {
        Config::from_file(&config_path)?
    } else {
        Config::load()?
    };

    if let Some(max_depth) = max_depth {
        config.max_depth = max_depth;
    }
    if !exclude.is_empty() {
        config.exclude_patterns = exclude;
    }
    if !include_ext.is_empty() {
        config.include_extensions = include_ext;
    }

    println!("🎯 Target directory: {}", path);

    let analyzer = Analyzer::new(config);
    let report = analyzer.analyze(&path)?;

    let duration = start_time.elapsed();

    match format {
        ReportFormat::Json => {
            let json = report.to_json()?;
            match output {
                Some(output_path) => {
                    std::fs::write(&output_path, json)?;
                    println!("📁 Report written to: {}", output_path.display());
                }
                None => println!("{}", json),
            }
        }
        ReportFormat::Text => {
            report.print_summary();
        }
    }

    println!("\n✅ Analysis completed in {:.2}s", duration.as_secs_f64());
    Ok(())
}

fn generate_config(output_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config_path = output_path.unwrap_or_else(|| {
        Config::default_config_path().unwrap_or_else(|_| PathBuf::from("codebase-scout.toml"))
    });

    println!("📝 Generating configuration file: {}", config_path.display());

    let documented_config = Config::create_documented_config();
    std::fs::write(&config_path, documented_config)?;

    println!("✅ Configuration file created successfully!");
    println!("💡 Edit the file to customize traversal depth, exclusions, and extensions.");
    Ok(())
}

fn read_requirements(file: &str) -> anyhow::Result<()> {
    let cwd = env::current_dir()?;
    let result = requirements::read_requirements(&cwd, file);

    println!("{}", result.message);
    if result.exists {
        println!();
        println!("{}", result.content);
    }
    Ok(())
}
