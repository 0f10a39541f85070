use clap::{Parser, Subcommand};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use virtual_git::commands::*;
use virtual_git::core::{
    command_init::CommandContext, error::Result, print_error, store::DEFAULT_PROJECT,
};

#[derive(Parser)]
#[command(name = "virtual-git")]
#[command(about = "A tiny embedded version history for a project's files")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Project whose history to operate on
    #[arg(long, global = true, default_value = DEFAULT_PROJECT)]
    project: String,

    /// Data directory (defaults to the per-user data directory)
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current branch and uncommitted changes
    Status,
    /// Record the live files as a new commit
    Commit {
        /// Commit message
        #[arg(short, long)]
        message: Option<String>,
    },
    /// Show commit history from HEAD
    Log {
        /// Maximum number of commits to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// List branches or create one
    Branch {
        /// Name of the branch to create
        name: Option<String>,
    },
    /// Switch branches and restore their files
    Checkout {
        /// Create the branch before switching
        #[arg(short = 'b')]
        create: bool,
        /// Branch to switch to
        name: Option<String>,
    },
    /// Show uncommitted changes line by line
    Diff,
    /// Show a commit and its changes
    Show {
        /// Commit id
        id: String,
    },
    /// Draw the commit graph
    Graph {
        /// Only show commits whose message, id or branch matches
        #[arg(long)]
        filter: Option<String>,
    },
    /// Write a live file
    Write {
        filename: String,
        content: String,
    },
    /// Remove a live file
    Rm { filename: String },
    /// List live files
    Ls,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(cli) {
        log::debug!("Command failed: {e:?}");
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut context = CommandContext::initialize(cli.home.as_deref(), &cli.project)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Status => execute_status(&context, &mut out)?,
        Commands::Commit { message } => execute_commit(&mut context, message.as_deref(), &mut out)?,
        Commands::Log { limit } => execute_log(&context, limit, &mut out)?,
        Commands::Branch { name } => execute_branch(&mut context, name.as_deref(), &mut out)?,
        Commands::Checkout { create, name } => {
            execute_checkout(&mut context, create, name.as_deref(), &mut out)?
        }
        Commands::Diff => execute_diff(&context, &mut out)?,
        Commands::Show { id } => execute_show(&context, &id, &mut out)?,
        Commands::Graph { filter } => execute_graph(&context, filter.as_deref(), &mut out)?,
        Commands::Write { filename, content } => {
            execute_write(&mut context, &filename, &content, &mut out)?
        }
        Commands::Rm { filename } => execute_rm(&mut context, &filename, &mut out)?,
        Commands::Ls => execute_ls(&context, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
