use clap::{Parser, Subcommand};
use colored::Colorize;
use std::env;
use std::path::PathBuf;
use workspace_prompt::commands::*;
use workspace_prompt::shell::Shell;

#[derive(Parser)]
#[command(name = "workspace-prompt")]
#[command(about = "A contextual multi-line prompt for interactive shells")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose one prompt block for the host shell
    Render {
        /// Shell whose prompt engine consumes the output
        #[arg(long, value_enum)]
        shell: Shell,
        /// Terminal width in columns (defaults to a live query)
        #[arg(long)]
        width: Option<usize>,
        /// Workspace root override
        #[arg(long)]
        workspace_root: Option<PathBuf>,
    },
    /// Print the shell integration hook script
    Init {
        /// Shell to emit the hook script for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Dump the aggregated prompt inputs as JSON
    Explain {
        /// Workspace root override
        #[arg(long)]
        workspace_root: Option<PathBuf>,
    },
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

    let result = match cli.command {
        Commands::Render {
            shell,
            width,
            workspace_root,
        } => execute_render(shell, width, workspace_root),
        Commands::Init { shell } => execute_init(shell),
        Commands::Explain { workspace_root } => execute_explain(workspace_root),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "✕ Error:".red(), e);
        std::process::exit(1);
    }
}
