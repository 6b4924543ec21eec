//! JSON-lines bridge on stdin/stdout.

use anyhow::{Context, Result};
use std::io;

use crate::core::config::Config;

pub fn execute(config: &Config) -> Result<()> {
    let bridge = super::build_bridge(config);

    log::info!("Serving bridge on stdio, one JSON request per line");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let answered = bridge
        .serve(stdin.lock(), stdout.lock())
        .context("Bridge transport failed")?;

    bridge.shutdown();
    log::info!("Input closed after {} requests", answered);
    Ok(())
}
