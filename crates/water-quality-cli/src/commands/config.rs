//! Dump the built-in scoring table.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use water_quality::ScoringConfig;

pub fn run(output: Option<PathBuf>) -> Result<()> {
    let json = render()?;

    match output {
        Some(path) => {
            write(&path, &json)?;
            eprintln!("Saved to: {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn render() -> Result<String> {
    Ok(ScoringConfig::default().to_json()?)
}

fn write(path: &Path, json: &str) -> Result<()> {
    std::fs::write(path, json).with_context(|| format!("Failed to write to {}", path.display()))
}
