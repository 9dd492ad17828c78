use crate::cli::Workspace;
use crate::history::GitHistory;
use crate::models::{HealthStats, HealthStatus, StalenessConfig};
use crate::services::{append_ci_outputs, generate_health_report};
use crate::Result;
use chrono::Utc;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Environment variable naming the CI output file
pub const CI_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

pub fn run(workspace: &Workspace, json: bool) -> Result<HealthStatus> {
    let now = Utc::now();
    let thresholds = workspace.config.staleness()?;
    let docs_root = workspace.config.docs_root(&workspace.root);

    let pb = if json {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")?
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );
    pb.set_message("Reading page history...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let history = match GitHistory::discover(&docs_root) {
        Ok(history) => history,
        Err(e) => {
            pb.suspend(|| {
                eprintln!(
                    "{}",
                    format!("⚠️  {}; page ages are unavailable", e).yellow()
                )
            });
            GitHistory::empty(&workspace.root)
        }
    };

    let stats = generate_health_report(&workspace.root, &workspace.config, &history, now);
    pb.finish_and_clear();
    let stats = stats?;

    if let Some(output) = std::env::var_os(CI_OUTPUT_ENV) {
        append_ci_outputs(Path::new(&output), &stats)?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&stats.summary())?);
    } else {
        print_summary(workspace, &stats, &thresholds);
    }

    Ok(stats.status())
}

fn print_summary(workspace: &Workspace, stats: &HealthStats, thresholds: &StalenessConfig) {
    println!("{}", "📋 Documentation health".cyan().bold());
    println!("   Pages:     {}", stats.total_docs_count);
    println!(
        "   Recent:    {:.1}% (last {} weeks)",
        stats.recent_percentage(),
        thresholds.recent_within_weeks()
    );
    if stats.unavailable_count > 0 {
        println!("   No history: {}", stats.unavailable_count.to_string().dimmed());
    }

    match stats.status() {
        HealthStatus::Healthy => {
            println!("{}", "✅ All documentation is up-to-date".green());
        }
        HealthStatus::Stale => {
            println!(
                "{}",
                format!(
                    "⚠️  {} page(s) older than {} days",
                    stats.total_stale_files,
                    thresholds.stale_after_days()
                )
                .yellow()
            );
            for (section, stat) in &stats.sections {
                for entry in &stat.stale_files {
                    println!("   • [{}] {} ({} days)", section, entry.path, entry.age_days());
                }
            }
        }
    }

    println!(
        "   Report:    {}",
        workspace.config.report_path(&workspace.root).display()
    );
}
