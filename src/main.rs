use anyhow::Result;
use clap::{Arg, ArgAction, Command};

use sysprobe::commands;
use sysprobe::core::bridge::Call;
use sysprobe::core::config::Config;

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Print the raw response envelope as JSON")
        .action(ArgAction::SetTrue)
}

fn build_cli() -> Command {
    Command::new("sysprobe")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Local host health checks behind a request/response bridge")
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("health")
                .about("Run all health checks (system info, memory, disk, uptime, CPU)")
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("quick")
                .about("Quick health: memory, CPU and uptime only")
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("info")
                .about("Show system information")
                .arg(json_flag()),
        )
        .subcommand(Command::new("ping").about("Liveness probe"))
        .subcommand(
            Command::new("serve")
                .about("Serve the bridge over stdin/stdout, one JSON request per line")
                .long_about(
                    "Serve the bridge over stdin/stdout\n\n\
                     Each input line is a request such as {\"id\": 1, \"call\": \"get_quick_health\"}.\n\
                     Each output line is the response envelope with the id echoed back.\n\n\
                     CALLS:\n    get_health_status\n    get_quick_health\n    get_system_info\n    ping",
                ),
        )
        .subcommand(
            Command::new("watch")
                .about("Poll a page's calls on its timers until Ctrl+C")
                .arg(
                    Arg::new("page")
                        .short('p')
                        .long("page")
                        .value_name("PAGE")
                        .help("Page to show: dashboard, system-info, settings")
                        .default_value("dashboard"),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Manage configuration (use 'sysprobe config --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(Command::new("show").about("Show the effective configuration"))
                .subcommand(Command::new("path").about("Print the config file location"))
                .subcommand(
                    Command::new("set")
                        .about("Set a configuration value")
                        .arg(
                            Arg::new("key")
                                .help("Configuration key, e.g. unhealthy_threshold")
                                .required(true)
                                .index(1),
                        )
                        .arg(
                            Arg::new("value")
                                .help("New value")
                                .required(true)
                                .index(2),
                        ),
                )
                .subcommand(Command::new("reset").about("Restore default configuration")),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell: bash, zsh, fish, powershell, elvish")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    // A broken config file must not lock the user out of fixing it
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) if matches!(
            matches.subcommand_name(),
            Some("config") | Some("version") | Some("completions")
        ) =>
        {
            eprintln!("Warning: {:#}; using defaults", e);
            Config::default()
        }
        Err(e) => return Err(e),
    };
    sysprobe::init_logging(config.debug || matches.get_flag("debug"));

    match matches.subcommand() {
        Some(("health", sub_matches)) => {
            commands::calls::execute(Call::GetHealthStatus, sub_matches, &config)
        }
        Some(("quick", sub_matches)) => {
            commands::calls::execute(Call::GetQuickHealth, sub_matches, &config)
        }
        Some(("info", sub_matches)) => {
            commands::calls::execute(Call::GetSystemInfo, sub_matches, &config)
        }
        Some(("ping", sub_matches)) => commands::calls::execute(Call::Ping, sub_matches, &config),
        Some(("serve", _)) => commands::serve::execute(&config),
        Some(("watch", sub_matches)) => commands::watch::execute(sub_matches, &config),
        Some(("config", sub_matches)) => commands::config::execute(sub_matches, &config),
        Some(("completions", sub_matches)) => {
            let mut cli = build_cli();
            commands::completions::execute(sub_matches, &mut cli)
        }
        Some(("version", _)) => commands::version(),
        _ => {
            println!("Welcome to sysprobe!");
            println!("Use 'sysprobe --help' for more information.");
            Ok(())
        }
    }
}
