use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=RUSTC");

    // The toolchain version is reported by the system info check
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());

    let version = Command::new(&rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .and_then(|stdout| stdout.split_whitespace().nth(1).map(str::to_string))
        .unwrap_or_else(|| "Unknown".to_string());

    println!("cargo:rustc-env=SYSPROBE_RUSTC_VERSION={}", version);
}
