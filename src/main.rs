use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use vacant::{find_empty_dirs, remove_all, Error};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Find and remove empty directories except hidden directories",
    long_about = None
)]
struct Args {
    /// Starting directory
    start_dir: String,

    /// Show empty directories and quit
    #[arg(long)]
    dry_run: bool,

    /// Skip confirmation and delete all empty directories immediately
    #[arg(long)]
    no_interaction: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let start_dir = expand_start_dir(&args.start_dir)?;
    if !start_dir.exists() {
        return Err(Error::InvalidRoot(start_dir).into());
    }

    let empty_dirs = find_empty_dirs(&start_dir).unwrap_or_default();
    if empty_dirs.is_empty() {
        println!("Could not find any empty directories");
        return Ok(());
    }

    print_directories(&empty_dirs);
    if args.dry_run {
        return Ok(());
    }

    if !args.no_interaction && !prompt_confirm("Delete empty directories?")? {
        println!("Skipped");
        return Ok(());
    }

    remove_all(&empty_dirs)?;

    Ok(())
}

/// Expand the starting path the way a shell user expects: a literal `.`
/// becomes the current working directory and a leading `~` becomes the home
/// directory. Anything else is taken as-is.
fn expand_start_dir(input: &str) -> Result<PathBuf> {
    if input == "." {
        return env::current_dir().context("failed to resolve the current working directory");
    }

    if input == "~" {
        return dirs::home_dir().context("could not determine the home directory");
    }

    if let Some(rest) = input.strip_prefix("~/") {
        let home = dirs::home_dir().context("could not determine the home directory")?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(input))
}

fn print_directories(paths: &[PathBuf]) {
    println!("{}", "Empty directories:".bold());
    println!();
    for path in paths {
        println!("- {}", path.display());
    }
    println!();
}

/// Ask the operator for a yes/no answer on stdin. Anything other than a `y`
/// counts as a no.
fn prompt_confirm(prompt: &str) -> Result<bool> {
    print!("{} (y/N) ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}
