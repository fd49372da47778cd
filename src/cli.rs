// CLI module - command-line argument parsing and handlers
//
// Without a subcommand the TUI runs. Subcommands:
// - split: Print the terms of a sentence
// - categories: Print the category tree, or resolve one id
// - config --show/--path/--reset/--edit: Manage the config file

use crate::category::{CategoryNode, CategoryTree, Resolution};
use crate::config::{Config, VERSION};
use crate::sentence::{split_into_terms, TermToken};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::Command;

/// Rozbor - sentence annotation in the terminal
#[derive(Parser)]
#[command(name = "rozbor")]
#[command(version = VERSION)]
#[command(about = "Split a sentence into words and mark their sentence roles", long_about = None)]
pub struct Cli {
    /// Start with this sentence already split into terms
    #[arg(long, short)]
    pub sentence: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a sentence into terms and print them
    Split {
        sentence: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the category tree
    Categories {
        /// Print JSON instead of a tree
        #[arg(long)]
        json: bool,

        /// Resolve one id (e.g. "4" or "04") to its label and classes
        #[arg(long, value_name = "ID")]
        resolve: Option<String>,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Handle a subcommand. Returns Ok(false) when there is none and the TUI
/// should run.
pub fn handle_command(command: Option<&Commands>) -> Result<bool> {
    let Some(command) = command else {
        return Ok(false);
    };

    match command {
        Commands::Split { sentence, json } => {
            let terms = split_into_terms(sentence);
            let out = if *json {
                serde_json::to_string_pretty(&terms).context("Failed to serialize terms")?
            } else {
                format_terms(&terms)
            };
            println!("{}", out);
        }
        Commands::Categories { json, resolve } => {
            let tree = CategoryTree::default();
            let out = match resolve {
                Some(id) => {
                    let resolution = tree.resolve_str(id);
                    if *json {
                        serde_json::to_string_pretty(&resolution)
                            .context("Failed to serialize resolution")?
                    } else {
                        format_resolution(&resolution)
                    }
                }
                None if *json => {
                    serde_json::to_string_pretty(&tree).context("Failed to serialize categories")?
                }
                None => format_tree(&tree),
            };
            println!("{}", out);
        }
        Commands::Config {
            show,
            reset,
            edit,
            path,
        } => {
            if *path {
                handle_config_path();
            } else if *show {
                handle_config_show();
            } else if *reset {
                handle_config_reset()?;
            } else if *edit {
                handle_config_edit();
            } else {
                println!("Usage: rozbor config [--show|--reset|--edit|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --edit    Open config file in $EDITOR");
                println!("  --path    Show config file path");
            }
        }
    }

    Ok(true)
}

/// One line per term: index, kind and quoted text
fn format_terms(terms: &[TermToken]) -> String {
    terms
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let kind = if t.categorizable { "word" } else { "sep" };
            format!("{:>3}  {:<4}  {:?}", i, kind, t.text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Indented tree: `id short name [classes]`, group children under the group
fn format_tree(tree: &CategoryTree) -> String {
    let mut lines = Vec::new();
    for node in tree.nodes() {
        match node {
            CategoryNode::Leaf { entry, classes } => lines.push(format!(
                "{:>3} {:<5} {} [{}]",
                entry.id,
                entry.short_name.as_deref().unwrap_or("-"),
                entry.name,
                classes.join(" ")
            )),
            CategoryNode::Group {
                name,
                classes,
                children,
            } => {
                lines.push(format!("    {} [{}]", name, classes.join(" ")));
                for child in children {
                    lines.push(format!(
                        "  {:>3} {:<5} {}",
                        child.id,
                        child.short_name.as_deref().unwrap_or("-"),
                        child.name
                    ));
                }
            }
        }
    }
    lines.join("\n")
}

/// `Po  is-categorizable is-cat-1`, or `-` plus base classes when uncategorized
fn format_resolution(resolution: &Resolution) -> String {
    let classes = resolution.classes.join(" ");
    match &resolution.short_name {
        Some(short) if !resolution.is_uncategorized() => format!("{:<5} {}", short, classes),
        _ => format!("{:<5} {}", "-", classes),
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("theme = {:?}", config.theme);
    println!("hint_delay_ms = {}", config.hint_delay_ms);
    println!("show_logs = {}", config.show_logs);
    println!("mouse = {}", config.mouse);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!("file_dir = {:?}", config.logging.file_dir.display().to_string());
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());
    println!("file_prefix = {:?}", config.logging.file_prefix);

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().context("Failed to flush stderr")?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read answer")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

fn handle_config_edit() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    match Command::new(&editor).arg(&path).status() {
        Ok(s) if s.success() => {}
        Ok(s) => {
            eprintln!("Editor exited with status: {}", s);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to launch editor '{}': {}", editor, e);
            eprintln!("Set $EDITOR environment variable to your preferred editor");
            std::process::exit(1);
        }
    }
}
