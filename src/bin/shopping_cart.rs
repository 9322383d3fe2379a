//! Pattern 2: Singleton (shopping cart)
//!
//! Run with: cargo run --bin shopping_cart

use creational_patterns::config::DEFAULT_CONFIG_FILE;
use creational_patterns::{shopping_cart, Console, DemoConfig};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = DemoConfig::load_or_default(DEFAULT_CONFIG_FILE)?;
    let mut console = Console::stdout(&config);
    shopping_cart::run_demo(&mut console)?;
    Ok(())
}
