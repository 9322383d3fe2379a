//! Pattern 2: Singleton
//!
//! Run with: cargo run --bin singleton

use creational_patterns::config::DEFAULT_CONFIG_FILE;
use creational_patterns::{singleton, Console, DemoConfig};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = DemoConfig::load_or_default(DEFAULT_CONFIG_FILE)?;
    let mut console = Console::stdout(&config);
    singleton::run_demo(&mut console)?;
    Ok(())
}
