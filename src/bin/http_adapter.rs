//! Pattern 1: Factory Method (HTTP adapters)
//!
//! Run with: cargo run --bin http_adapter

use creational_patterns::config::DEFAULT_CONFIG_FILE;
use creational_patterns::{http_adapter, Console, DemoConfig};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = DemoConfig::load_or_default(DEFAULT_CONFIG_FILE)?;
    let mut console = Console::stdout(&config);
    http_adapter::run_demo(&mut console)?;
    Ok(())
}
