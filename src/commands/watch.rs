//! Live page view: polls the bridge on the page's timers until Ctrl+C.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use tokio::sync::broadcast;

use crate::core::bridge::{Bridge, Call, Envelope};
use crate::core::config::Config;
use crate::core::health::{HealthAggregator, HealthReport, HealthSettings, QuickHealth};
use crate::core::pages::{Page, PageRouter, PollIntervals};
use crate::core::store::{Snapshot, StateStore};
use crate::core::system_info::SystemInfo;
use crate::ui::{formatters::status_label, health_formatters};

pub fn execute(matches: &ArgMatches, config: &Config) -> Result<()> {
    let page = matches
        .get_one::<String>("page")
        .map(|name| name.parse::<Page>())
        .transpose()?
        .unwrap_or(Page::Dashboard);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_time()
        .thread_name("sysprobe-poller")
        .build()
        .context("Failed to start poller runtime")?;

    let bridge = Arc::new(Bridge::new(HealthAggregator::for_host(
        HealthSettings::from(config),
    )));
    bridge.start();

    let ready_timeout = Duration::from_millis(config.bridge_ready_timeout_ms);
    let probe = runtime.block_on(Arc::clone(&bridge).call_when_ready(Call::Ping, ready_timeout));
    if !probe.success {
        health_formatters::format_failure(&probe);
        anyhow::bail!("Bridge did not answer; retry with 'sysprobe watch'");
    }

    let (shutdown_tx, mut shutdown_rx) = broadcast::channel::<()>(1);
    ctrlc::set_handler(move || {
        let _ = shutdown_tx.send(());
    })
    .map_err(|e| anyhow::anyhow!("Failed to set Ctrl+C handler: {}", e))?;

    let store = StateStore::new();
    let mut snapshots = store.subscribe();
    let mut router = PageRouter::new(
        Arc::clone(&bridge),
        store,
        runtime.handle().clone(),
        PollIntervals::from(config),
    );

    println!(
        "{} {}",
        "Watching".cyan().bold(),
        page.to_string().bold()
    );
    println!("{}", "Press Ctrl+C to stop".dimmed());

    if page == Page::Settings {
        print_settings(config);
    }

    router.navigate(page);

    runtime.block_on(async {
        let mut shown = Snapshot::default();
        loop {
            tokio::select! {
                changed = snapshots.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let snapshot = snapshots.borrow_and_update().clone();
                    render_changes(&shown, &snapshot);
                    shown = snapshot;
                }
                _ = shutdown_rx.recv() => {
                    break;
                }
            }
        }
    });

    router.leave();
    bridge.shutdown();
    println!();
    println!("{}", "Stopped.".dimmed());
    Ok(())
}

fn render_changes(previous: &Snapshot, current: &Snapshot) {
    for call in Call::ALL {
        let Some(envelope) = current.get(call) else {
            continue;
        };
        if previous.get(call) == Some(envelope) {
            continue;
        }
        render(call, envelope);
    }
}

fn render(call: Call, envelope: &Envelope) {
    if !envelope.success {
        health_formatters::format_failure(envelope);
        return;
    }

    match call {
        Call::GetHealthStatus => {
            if let Some(report) = envelope.data_as::<HealthReport>() {
                println!(
                    "{} health {} ({} passed, {} failed)",
                    report.timestamp.format("%H:%M:%S").to_string().dimmed(),
                    status_label(report.status),
                    report.summary.passed,
                    report.summary.failed
                );
                for (name, result) in report.checks.iter() {
                    if let Some(ref error) = result.error {
                        println!("  {} {}", name.to_string().red(), error);
                    }
                }
            }
        }
        Call::GetQuickHealth => {
            if let Some(quick) = envelope.data_as::<QuickHealth>() {
                print!("{} ", quick.timestamp.format("%H:%M:%S").to_string().dimmed());
                health_formatters::format_quick_health(&quick);
            }
        }
        Call::GetSystemInfo => {
            if let Some(info) = envelope.data_as::<SystemInfo>() {
                health_formatters::format_system_info(&info);
            }
        }
        Call::Ping => {}
    }
}

fn print_settings(config: &Config) {
    println!("\n{}", "SETTINGS".bold().bright_cyan());
    for key in Config::keys() {
        if let Some(value) = config.get(key) {
            println!("  {}: {}", key, value);
        }
    }
}
