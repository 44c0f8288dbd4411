//! CLI argument definitions using clap

use clap::{Parser, Subcommand};

/// Yes/no symptom checker: answer a few questions, get a triage diagnosis
#[derive(Parser, Debug)]
#[command(name = "symcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output to stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a symptom assessment
    Check {
        /// Scripted answers instead of prompting, e.g. "n,y,y"
        #[arg(short, long)]
        answers: Option<String>,
        /// Do not record the diagnosis in history
        #[arg(long)]
        no_save: bool,
    },

    /// Show the decision tree
    Tree,

    /// List all possible diagnoses, most urgent first
    Conditions,

    /// Show the answers that lead to a diagnosis
    Path {
        /// Condition name, e.g. "COMMON COLD"
        condition: String,
    },

    /// Manage assessment history
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },

    /// Show today's health tip
    Tip,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    /// List saved assessments, newest first
    List {
        /// Show full diagnosis details
        #[arg(short, long)]
        verbose: bool,
    },

    /// Delete all saved assessments
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective config
    Show,

    /// Create config template
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Show config paths
    Path,
}
