use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use dochealth::cli::Workspace;
use dochealth::Result;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dochealth")]
#[command(author = "Chris Cheng <chris.cheng@shopee.com>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Documentation health and version reports", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Project root (default: current directory)
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add the version key to every page's front matter
    Stamp {
        /// Version value to write (overrides `stamp_version`)
        #[arg(long = "set-version")]
        set_version: Option<String>,

        /// List pages that would change without writing them
        #[arg(long)]
        dry_run: bool,
    },

    /// Classify pages by last commit and update the health report
    Health {
        /// Days after which a page is stale (overrides `stale_after_days`)
        #[arg(long)]
        stale_days: Option<u32>,

        /// Weeks counted as "recent" (overrides `recent_within_weeks`)
        #[arg(long)]
        recent_weeks: Option<u32>,

        /// Output summary in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Group pages by declared version and update the version report
    Versions,

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}", format!("Error: {:#}", e).red());
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let root = cli.root.as_deref();

    match cli.command {
        Commands::Stamp {
            set_version,
            dry_run,
        } => {
            let mut workspace = Workspace::open(root)?;
            if let Some(version) = set_version {
                workspace.config.stamp_version = version;
            }
            println!("{}", "🏷️  Stamping documentation pages...".cyan());
            dochealth::cli::stamp::run(&workspace, dry_run)?;
        }

        Commands::Health {
            stale_days,
            recent_weeks,
            json,
        } => {
            let mut workspace = Workspace::open(root)?;
            if let Some(days) = stale_days {
                workspace.config.stale_after_days = days;
            }
            if let Some(weeks) = recent_weeks {
                workspace.config.recent_within_weeks = weeks;
            }
            let status = dochealth::cli::health::run(&workspace, json)?;
            return Ok(status.exit_code());
        }

        Commands::Versions => {
            let workspace = Workspace::open(root)?;
            println!("{}", "🔖 Generating version report...".cyan());
            dochealth::cli::versions::run(&workspace)?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "dochealth", &mut io::stdout());
        }
    }

    Ok(0)
}
