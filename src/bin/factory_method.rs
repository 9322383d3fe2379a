//! Pattern 1: Factory Method
//!
//! Run with: cargo run --bin factory_method

use creational_patterns::config::DEFAULT_CONFIG_FILE;
use creational_patterns::{factory, Console, DemoConfig};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = DemoConfig::load_or_default(DEFAULT_CONFIG_FILE)?;
    let mut console = Console::stdout(&config);
    factory::run_demo(&mut console)?;
    Ok(())
}
