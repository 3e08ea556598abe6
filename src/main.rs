use clap::Parser;
use recipe_authors::{authors, cli, corrector, error, store, verifier};

use authors::AuthorIndex;
use cli::{Cli, Commands};
use error::Result;
use std::path::{Path, PathBuf};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("❌ Error: {}", e);
        eprintln!("{:?}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or_default() {
        Commands::Fix {
            file,
            corrections,
            dry_run,
        } => {
            println!("🔧 recipe-authors - author correction\n");

            let path = recipes_path(file);
            let index = build_index(corrections.as_deref())?;

            println!("📖 Reading {}...", path.display());
            let mut recipes = store::load_recipes(&path)?;
            println!("✔ {} recipes loaded\n", recipes.len());

            if cli.verbose {
                report_unclassified(&recipes, &index);
            }

            let applied = corrector::correct_authors(&mut recipes, &index);
            for c in &applied {
                println!(
                    "✏️  Correcting \"{}\": \"{}\" → \"{}\"",
                    c.name,
                    c.old_author.as_deref().unwrap_or("N/A"),
                    c.new_author
                );
            }

            if applied.is_empty() {
                println!("✅ All authors are already correct!");
            } else if dry_run {
                println!(
                    "\n💧 Dry run, file not modified ({} corrections pending)",
                    applied.len()
                );
            } else {
                println!("\n💾 Writing corrections ({} recipes updated)...", applied.len());
                store::save_recipes(&path, &recipes)?;
                println!("✅ Done!");
            }

            report_verification(&recipes, &index);
        }

        Commands::Verify { file, corrections } => {
            println!("🔍 recipe-authors - verification\n");

            let path = recipes_path(file);
            let index = build_index(corrections.as_deref())?;

            println!("📖 Reading {}...", path.display());
            let recipes = store::load_recipes(&path)?;
            println!("✔ {} recipes loaded", recipes.len());

            if cli.verbose {
                report_unclassified(&recipes, &index);
            }

            report_verification(&recipes, &index);
        }
    }

    Ok(())
}

fn recipes_path(file: Option<PathBuf>) -> PathBuf {
    file.unwrap_or_else(|| PathBuf::from(store::DEFAULT_RECIPES_PATH))
}

/// Builds the author index: built-in lists, then an optional corrections
/// file merged on top.
fn build_index(corrections: Option<&Path>) -> Result<AuthorIndex> {
    let overlaps = authors::overlapping_names();
    if !overlaps.is_empty() {
        println!(
            "⚠️  {} recipe name(s) appear in more than one reference list:",
            overlaps.len()
        );
        for name in &overlaps {
            println!("  - {}", name);
        }
        println!();
    }

    let mut index = AuthorIndex::built_in();
    if let Some(path) = corrections {
        let extra = AuthorIndex::from_file(path)?;
        println!("✔ {} corrections loaded from {}\n", extra.len(), path.display());
        index.merge(extra);
    }

    Ok(index)
}

fn report_unclassified(recipes: &[recipe_authors::Recipe], index: &AuthorIndex) {
    let unclassified = recipes
        .iter()
        .filter(|r| r.name().map_or(true, |n| index.classify(n).is_none()))
        .count();
    println!("  {} recipe(s) without a reference list entry\n", unclassified);
}

fn report_verification(recipes: &[recipe_authors::Recipe], index: &AuthorIndex) {
    println!("\n🔍 Verification...");

    let mismatches = verifier::find_mismatches(recipes, index);
    if mismatches.is_empty() {
        println!("✅ All classified recipes have correct authors!");
    } else {
        println!("⚠️  Still incorrect:");
        for m in &mismatches {
            println!(
                "  - {} → {} (should be {})",
                m.name,
                m.actual.as_deref().unwrap_or("N/A"),
                m.expected
            );
        }
    }
}
