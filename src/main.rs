//! CLI entry point for twig

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use twig::{ColorFormatter, TreeConfig, TreeWalker, find_by_extension, format_size_with};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "twig")]
#[command(about = "Directory trees, extension search, and human-readable file sizes")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the size of a file in raw and human-readable form
    Size {
        /// File to inspect
        file: String,

        /// Decimal digits in the formatted size
        #[arg(short = 'p', long = "precision", default_value = "2")]
        precision: usize,

        /// Use decimal units (KB, MB) instead of binary (KiB, MiB)
        #[arg(long = "decimal")]
        decimal: bool,

        /// Output in JSON format
        #[arg(long = "json")]
        json: bool,
    },
    /// Render a directory as an ASCII tree
    Tree {
        /// Directory to display
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Descend at most N levels beneath the root
        #[arg(short = 'L', long = "level", default_value = "3")]
        level: usize,

        /// Ignore entries matching pattern (can be used multiple times)
        #[arg(short = 'I', long = "ignore")]
        ignore: Vec<String>,

        /// Control color output: auto, always, never
        #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
        color: ColorMode,
    },
    /// Recursively find files with a given extension
    Find {
        /// Extension to match, including the leading dot (e.g. ".txt")
        extension: String,

        /// Directory to search
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output matches as a JSON array
        #[arg(long = "json")]
        json: bool,
    },
}

fn main() {
    let args = Args::parse();

    let result = match args.command {
        Command::Size {
            file,
            precision,
            decimal,
            json,
        } => cmd_size(&file, precision, !decimal, json),
        Command::Tree {
            path,
            level,
            ignore,
            color,
        } => cmd_tree(&path, level, ignore, color),
        Command::Find {
            extension,
            path,
            json,
        } => cmd_find(&path, &extension, json),
    };

    if let Err(e) = result {
        eprintln!("twig: error writing output: {}", e);
        process::exit(1);
    }
}

#[derive(Serialize)]
struct SizeReport<'a> {
    file: &'a str,
    size_bytes: u64,
    size_human: String,
}

fn cmd_size(file: &str, precision: usize, use_binary: bool, json: bool) -> io::Result<()> {
    let file = file.trim();
    if file.is_empty() {
        eprintln!("Error: No filename provided.");
        process::exit(1);
    }

    let path = Path::new(file);
    if !path.exists() {
        eprintln!("Error: File '{}' not found.", file);
        process::exit(1);
    }
    if !path.is_file() {
        eprintln!("Error: '{}' is not a regular file.", file);
        process::exit(1);
    }

    let size_bytes = match path.metadata() {
        Ok(meta) => meta.len(),
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            process::exit(1);
        }
    };

    // File sizes are never negative, so formatting cannot fail; keep the
    // message path anyway for parity with the library contract.
    let size_human = format_size_with(size_bytes as i64, precision, use_binary)
        .unwrap_or_else(|e| e.to_string());

    if json {
        let report = SizeReport {
            file,
            size_bytes,
            size_human,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).map_err(io::Error::other)?
        );
    } else {
        println!("File: {}", file);
        println!("Size: {} bytes", size_bytes);
        println!("Size: {}", size_human);
    }
    Ok(())
}

fn cmd_tree(path: &Path, level: usize, ignore: Vec<String>, color: ColorMode) -> io::Result<()> {
    if !path.is_dir() {
        eprintln!("Error: '{}' is not a valid directory.", path.display());
        process::exit(1);
    }

    let walker = TreeWalker::new(TreeConfig {
        max_depth: level,
        ignore_patterns: ignore,
    });
    let mut formatter = ColorFormatter::new(should_use_color(color));
    walker.walk(path, &mut formatter)
}

fn cmd_find(path: &Path, extension: &str, json: bool) -> io::Result<()> {
    if extension.trim().is_empty() {
        eprintln!("Error: No extension provided.");
        process::exit(1);
    }

    let matches = find_by_extension(path, extension);

    if json {
        let paths: Vec<String> = matches
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&paths).map_err(io::Error::other)?
        );
    } else {
        for found in &matches {
            println!("{}", found.display());
        }
        println!();
        println!("{} matching files", matches.len());
    }
    Ok(())
}
