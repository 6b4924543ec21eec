//! One-shot bridge calls: health, quick, info, ping.

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::bridge::{Call, Envelope};
use crate::core::config::Config;
use crate::core::health::{HealthReport, Ping, QuickHealth};
use crate::core::system_info::SystemInfo;
use crate::ui::health_formatters;

/// Run `call` once and print the result, as JSON with `--json`
pub fn execute(call: Call, matches: &ArgMatches, config: &Config) -> Result<()> {
    let json_output = matches
        .try_get_one::<bool>("json")
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false);

    if matches!(call, Call::GetHealthStatus) && !json_output {
        println!("Running health checks...");
    }

    let bridge = super::build_bridge(config);
    let envelope = bridge.call(call);

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&envelope).context("Failed to encode response")?
        );
    } else {
        render(call, &envelope)?;
    }

    if envelope.success {
        Ok(())
    } else {
        Err(anyhow::anyhow!("{} failed", call))
    }
}

fn render(call: Call, envelope: &Envelope) -> Result<()> {
    if !envelope.success {
        health_formatters::format_failure(envelope);
        return Ok(());
    }

    match call {
        Call::GetHealthStatus => {
            let report: HealthReport = decode(envelope)?;
            health_formatters::format_health_report(&report);
        }
        Call::GetQuickHealth => {
            let quick: QuickHealth = decode(envelope)?;
            health_formatters::format_quick_health(&quick);
        }
        Call::GetSystemInfo => {
            let info: SystemInfo = decode(envelope)?;
            health_formatters::format_system_info(&info);
        }
        Call::Ping => {
            let ping: Ping = decode(envelope)?;
            health_formatters::format_ping(&ping);
        }
    }

    Ok(())
}

fn decode<T: serde::de::DeserializeOwned>(envelope: &Envelope) -> Result<T> {
    envelope
        .data_as()
        .context("Response payload did not match the expected shape")
}
