use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recipe-authors")]
#[command(about = "Film simulation recipe author reconciliation tool", long_about = None)]
pub struct Cli {
    /// Defaults to `fix` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Also report recipes without a reference list entry
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Correct recipe authors and verify the result
    Fix {
        /// Recipe JSON file (default: src/data/recipes.json)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Extra corrections file (JSON object of name → author),
        /// merged over the built-in lists
        #[arg(long)]
        corrections: Option<PathBuf>,

        /// Preview corrections without rewriting the file
        #[arg(long)]
        dry_run: bool,
    },

    /// Report author mismatches without modifying the file
    Verify {
        /// Recipe JSON file (default: src/data/recipes.json)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Extra corrections file (JSON object of name → author)
        #[arg(long)]
        corrections: Option<PathBuf>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Fix {
            file: None,
            corrections: None,
            dry_run: false,
        }
    }
}
