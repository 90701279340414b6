//! flowgrid command-line host.
//!
//! Reads a TOML scene, runs the sizing and placement passes, and prints the
//! result as JSON. Set `RUST_LOG=debug` to see packing details.

mod scene;

use std::path::Path;

use anyhow::{Context, Result};

use scene::Scene;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args()
        .nth(1)
        .context("usage: flowgrid-app <scene.toml>")?;
    let scene =
        Scene::from_file(Path::new(&path)).with_context(|| format!("loading scene {path}"))?;
    log::info!(
        "Laying out {} items ({:?})",
        scene.items.len(),
        scene.layout.orientation
    );

    let report = scene.layout();
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
