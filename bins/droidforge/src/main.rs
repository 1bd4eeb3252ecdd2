//! droidforge CLI
//!
//! Stamps out an Android project skeleton from a template tree.

use anyhow::Result;
use clap::{Parser, Subcommand};
use droidforge_cli::output::{format_count, Status};
use droidforge_cli::progress;
use droidforge_core::config::Config;
use droidforge_core::error::exit_codes;
use droidforge_core::process::command_exists;
use droidforge_scaffold::generator::{generate, GenerateRequest};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "droidforge")]
#[command(about = "Android project scaffolding")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new Android project
    New {
        /// Project name; becomes the target directory and Gradle root name
        project_name: String,
        /// Android package name, e.g. com.acme.myapp
        package_name: String,
        /// Base directory to create the project under (default: current directory)
        base_dir: Option<PathBuf>,
        /// Template tree to copy from (default: from config)
        #[arg(long)]
        template_dir: Option<PathBuf>,
        /// Skip the Gradle dry-run after generation
        #[arg(long)]
        skip_gradle_check: bool,
    },

    /// Diagnose environment
    Doctor {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Argument errors exit 1, matching the rest of the fatal tier
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    exit_codes::SUCCESS
                }
                _ => exit_codes::FAILURE,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if cli.no_color {
        owo_colors::set_override(false);
    }

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("droidforge=debug")
            .init();
    }

    let config = Config::load(cli.config.as_deref().and_then(|p| p.to_str()))?;

    let exit_code = match cli.command {
        Commands::New {
            project_name,
            package_name,
            base_dir,
            template_dir,
            skip_gradle_check,
        } => run_new(
            &config,
            project_name,
            package_name,
            base_dir,
            template_dir,
            skip_gradle_check,
            cli.quiet,
        ),
        Commands::Doctor { json } => run_doctor(json),
    };

    std::process::exit(exit_code);
}

#[allow(clippy::too_many_arguments)]
fn run_new(
    config: &Config,
    project_name: String,
    package_name: String,
    base_dir: Option<PathBuf>,
    template_dir: Option<PathBuf>,
    skip_gradle_check: bool,
    quiet: bool,
) -> i32 {
    let base_dir = base_dir.unwrap_or_else(|| PathBuf::from(&config.schema.general.base_dir));
    let template_dir =
        template_dir.unwrap_or_else(|| PathBuf::from(&config.schema.template.template_dir));

    let mut verify_config = config.schema.verify.clone();
    if skip_gradle_check {
        verify_config.gradle_check = false;
    }

    let request = GenerateRequest {
        project_name,
        package_name,
        base_dir,
        template_dir,
        template_config: config.schema.template.clone(),
        verify_config,
    };

    tracing::debug!(
        project = %request.project_name,
        package = %request.package_name,
        template = %request.template_dir.display(),
        "starting generation"
    );

    let spinner = (!quiet).then(|| progress::spinner("Generating project..."));

    match generate(&request) {
        Ok(report) => {
            if let Some(pb) = spinner {
                progress::finish_success(&pb, &format!("Created {}", report.target.display()));
            }
            for warning in &report.warnings {
                Status::warning(warning);
            }
            if !quiet {
                Status::info(&format!(
                    "{}, {} ({} substituted)",
                    format_count(report.directories_created, "directory", "directories"),
                    format_count(report.files_copied, "file copied", "files copied"),
                    report.files_substituted,
                ));
                Status::success("Project ready");
            }
            exit_codes::SUCCESS
        }
        Err(e) => {
            if let Some(pb) = spinner {
                progress::finish_error(&pb, "Generation failed");
            }
            Status::error(&e.to_string());
            exit_codes::FAILURE
        }
    }
}

fn run_doctor(json: bool) -> i32 {
    let tools = [
        ("gradle", "needed for the post-generation dry-run"),
        ("java", "needed by Gradle"),
        ("adb", "needed to install builds on a device"),
    ];

    if json {
        let report: Vec<_> = tools
            .iter()
            .map(|(tool, _)| {
                serde_json::json!({
                    "tool": tool,
                    "installed": command_exists(tool),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&report).unwrap_or_default());
        return exit_codes::SUCCESS;
    }

    println!("Environment Check");
    println!();

    for (tool, why) in tools {
        if command_exists(tool) {
            Status::success(&format!("{}: installed", tool));
        } else {
            Status::warning(&format!("{}: not found ({})", tool, why));
        }
    }

    exit_codes::SUCCESS
}
