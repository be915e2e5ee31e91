//! Replay an adjustable widget scene and print the resulting geometry.
//!
//! Usage: `adjustable-demo [scene.json]`. Without an argument the bundled
//! scene is replayed.

use adjustable_demo::{DemoResult, Replay, Scene};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> DemoResult<()> {
    let scene = match std::env::args_os().nth(1) {
        Some(path) => Scene::load(path)?,
        None => Scene::builtin()?,
    };
    log::info!(
        "Replaying scene '{}' ({} steps)",
        scene.name,
        scene.script.len()
    );

    let mut replay = Replay::new(&scene)?;
    replay.run(&scene.script)?;

    println!("{}", serde_json::to_string_pretty(&replay.report())?);
    Ok(())
}
