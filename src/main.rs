// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boxwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boxwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Boxwright CLI entrypoint.
//!
//! Reads a JSON array of node descriptors, validates them against the grid, and prints the
//! rendered mockup to stdout.

use std::error::Error;

use boxwright::config::EditorConfig;
use boxwright::editor::Editor;
use boxwright::validate::validate_all;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--rows <n>] [--cols <n>] [--config <file.json>] <descriptors.json>\n\nReads a JSON array of node descriptors (or a single descriptor object), places them on\nthe grid and prints the trimmed render. `-` reads descriptors from stdin.\n\nGrid size defaults come from the config file, then BOXWRIGHT_GRID_ROWS / BOXWRIGHT_GRID_COLS,\nthen --rows / --cols. Set RUST_LOG=debug for diagnostics on stderr."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    rows: Option<usize>,
    cols: Option<usize>,
    config: Option<String>,
    input: String,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();
    let mut input = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--rows" => {
                if options.rows.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.rows = Some(raw.parse().map_err(|_| ())?);
            }
            "--cols" => {
                if options.cols.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.cols = Some(raw.parse().map_err(|_| ())?);
            }
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                options.config = Some(args.next().ok_or(())?);
            }
            "-" => {
                if input.is_some() {
                    return Err(());
                }
                input = Some(arg);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if input.is_some() {
                    return Err(());
                }
                input = Some(arg);
            }
        }
    }

    if options.rows == Some(0) || options.cols == Some(0) {
        return Err(());
    }
    options.input = input.ok_or(())?;
    Ok(options)
}

fn read_input(path: &str) -> std::io::Result<String> {
    if path == "-" {
        std::io::read_to_string(std::io::stdin())
    } else {
        std::fs::read_to_string(path)
    }
}

fn run(options: CliOptions) -> Result<(), Box<dyn Error>> {
    let mut config = match &options.config {
        Some(path) => EditorConfig::from_file(path)?,
        None => EditorConfig::default(),
    }
    .with_env();
    if let Some(rows) = options.rows {
        config.grid_rows = rows;
    }
    if let Some(cols) = options.cols {
        config.grid_cols = cols;
    }

    let raw = read_input(&options.input)?;
    let parsed: serde_json::Value = serde_json::from_str(&raw)?;
    let items = match parsed {
        serde_json::Value::Array(items) => items,
        other => vec![other],
    };

    let width = i32::try_from(config.grid_cols)?;
    let height = i32::try_from(config.grid_rows)?;
    let (descriptors, rejected) = validate_all(&items, width, height);

    let mut editor = Editor::new(config);
    for descriptor in descriptors {
        editor.add(descriptor);
    }
    info!(nodes = editor.document().len(), rejected, "rendering");

    println!("{}", editor.export_text()?);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "boxwright".to_owned());
    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    if let Err(err) = run(options) {
        eprintln!("boxwright: {err}");
        std::process::exit(1);
    }
}
