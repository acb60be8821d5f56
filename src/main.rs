//! Job matcher: resume-to-job matching and ranking tool

use clap::Parser;
use job_matcher::cli::{self, Cli, Commands, ConfigAction, SkillAction};
use job_matcher::config::Config;
use job_matcher::error::{JobMatcherError, Result};
use job_matcher::input::{load_jobs, InputManager};
use job_matcher::matching::{MatchEngine, SkillCatalog};
use job_matcher::output::formatter::{save_report_to_file, ReportGenerator};
use job_matcher::output::metrics::{self, RunMetrics};
use log::{error, info};
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Match {
            resume,
            jobs,
            title,
            location,
            experience,
            top,
            output,
            save,
        } => {
            info!("Starting job matching");

            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| JobMatcherError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&jobs, &["json"])
                .map_err(|e| JobMatcherError::InvalidInput(format!("Job list file: {}", e)))?;

            let output_format = cli::parse_output_format(&output).map_err(JobMatcherError::InvalidInput)?;

            println!("🎯 Job matching");
            println!("📄 Resume: {}", resume.display());
            println!("💼 Jobs: {}", jobs.display());

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume)?;
            let job_list = load_jobs(&jobs)?;

            let engine = MatchEngine::new(config.scoring.clone());
            let mut results = engine.rank_jobs(
                &resume_text,
                &job_list,
                title.as_deref(),
                &location,
                &experience,
            );

            let limit = top.unwrap_or(config.matching.max_results);
            results.truncate(limit);

            if let Some(metrics_file) = &config.matching.metrics_file {
                metrics::record(&RunMetrics::from_results(&results), metrics_file);
            }

            let generator = ReportGenerator::with_options(
                config.output.color_output,
                config.output.detailed,
                true,
                true,
            );
            let report = generator.generate(&results, &output_format)?;

            if let Some(save_path) = save {
                save_report_to_file(&report, &save_path)?;
                println!("💾 Saved results to {}", save_path.display());
            } else {
                println!("{}", report);
            }
        }

        Commands::Skills { action } => {
            let catalog = SkillCatalog::global();
            match action {
                SkillAction::List => {
                    println!("📚 Skill catalog ({} skills)\n", catalog.len());
                    for skill in catalog.all_skills() {
                        println!("  • {}", skill);
                    }
                }
                SkillAction::Categories => {
                    println!("📂 Skill categories\n");
                    for category in catalog.categories() {
                        println!(
                            "  • {} ({} skills)",
                            category,
                            catalog.skills_by_category(category).len()
                        );
                    }
                }
                SkillAction::Normalize { token } => {
                    println!("{}", catalog.normalize(&token));
                }
                SkillAction::Search { query } => {
                    let hits = catalog.search(&query);
                    if hits.is_empty() {
                        println!("No skills matching '{}'", query);
                    } else {
                        for skill in hits {
                            println!("  • {}", skill);
                        }
                    }
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Scoring Weights:");
                println!("  Skills: {:.1}%", config.scoring.skill_weight * 100.0);
                println!("  Semantic: {:.1}%", config.scoring.semantic_weight * 100.0);
                println!("  Role: {:.1}%", config.scoring.role_weight * 100.0);
                println!("  Experience: {:.1}%", config.scoring.experience_weight * 100.0);
                println!("  Location: {:.1}%", config.scoring.location_weight * 100.0);
                println!("\nMax Results: {}", config.matching.max_results);
                match &config.matching.metrics_file {
                    Some(path) => println!("Metrics File: {}", path.display()),
                    None => println!("Metrics File: disabled"),
                }
            }
            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}
