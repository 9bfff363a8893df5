//! Health payload command.

use anyhow::Result;

pub fn run() -> Result<()> {
    println!("{}", render()?);
    Ok(())
}

fn render() -> Result<String> {
    Ok(serde_json::to_string(&water_quality::service::health())?)
}
