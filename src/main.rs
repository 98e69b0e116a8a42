use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use resume_analyzer::analysis::{AnalysisType, AnalyzeRequest, ResumeAnalyzer};
use resume_analyzer::config::AppConfig;
use resume_analyzer::{start_web_server, utils};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Default filter must cover both the bin target (`rescore`) and the
/// library targets (`resume_analyzer::*`), or server logging goes dark
const DEFAULT_LOG_FILTER: &str = "resume_analyzer=info,rescore=info";

#[derive(Parser)]
#[command(name = "rescore")]
#[command(about = "Keyword-based resume scoring against an ATS catalog")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the analysis API server
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
    /// Analyze a resume text file offline
    Analyze {
        /// Path to the resume text file
        resume: PathBuf,
        /// Optional job description file for job-specific analysis
        #[arg(long)]
        job: Option<PathBuf>,
        /// Write the JSON report to the configured output directory
        /// instead of stdout
        #[arg(long)]
        save: bool,
        /// Write the JSON report to this directory instead of stdout
        /// (overrides the configured output directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List the active keyword catalog by category
    Keywords,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new(DEFAULT_LOG_FILTER)))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    match cli.command.unwrap_or(Command::Serve { port: None }) {
        Command::Serve { port } => {
            let config = AppConfig {
                port: port.unwrap_or(config.port),
                ..config
            };
            start_web_server(config).await
        }
        Command::Analyze {
            resume,
            job,
            save,
            output,
        } => analyze_file(config, resume, job, save, output).await,
        Command::Keywords => {
            let catalog = config.load_catalog().await?;
            for (name, set) in [
                ("technical", &catalog.technical),
                ("soft", &catalog.soft),
                ("industry", &catalog.industry),
            ] {
                println!("{} ({}):", name, set.len());
                for keyword in set {
                    println!("  {}", keyword);
                }
            }
            Ok(())
        }
    }
}

/// Report destination: an explicit --output directory wins, --save falls
/// back to the configured output directory, otherwise stdout
fn resolve_report_dir(save: bool, output: Option<PathBuf>, config: &AppConfig) -> Option<PathBuf> {
    match (save, output) {
        (_, Some(dir)) => Some(dir),
        (true, None) => Some(config.output_path.clone()),
        (false, None) => None,
    }
}

async fn analyze_file(
    config: AppConfig,
    resume: PathBuf,
    job: Option<PathBuf>,
    save: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let resume_text = tokio::fs::read_to_string(&resume)
        .await
        .with_context(|| format!("Failed to read resume file: {}", resume.display()))?;

    let job_description = match &job {
        Some(path) => Some(
            tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read job description: {}", path.display()))?,
        ),
        None => None,
    };

    let analysis_type = if job_description.is_some() {
        AnalysisType::JobSpecific
    } else {
        AnalysisType::General
    };

    let catalog = config.load_catalog().await?;
    let analyzer = ResumeAnalyzer::new(Arc::new(catalog));
    let report = analyzer
        .analyze(&AnalyzeRequest {
            resume_text,
            job_description,
            analysis_type,
        })
        .context("Resume analysis failed")?;

    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;

    match resolve_report_dir(save, output, &config) {
        Some(dir) => {
            tokio::fs::create_dir_all(&dir)
                .await
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            let stem = resume
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("resume");
            let path = utils::report_file_path(&dir, stem);
            tokio::fs::write(&path, json)
                .await
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
