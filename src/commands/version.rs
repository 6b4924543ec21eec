use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("sysprobe version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
