//! Creational Patterns - Factory Method & Singleton
//!
//! This crate contains runnable demos for two creational patterns:
//!
//! ## Pattern 1: Factory Method
//! - Car factories behind trait objects ([`factory`])
//! - HTTP adapter factory parameterised by framework ([`http_adapter`])
//!
//! ## Pattern 2: Singleton
//! - Process-wide instance with a checked constructor ([`singleton`])
//! - Shared shopping cart behind a mutex ([`shopping_cart`])
//!
//! Run any demo with:
//! ```bash
//! cargo run --bin factory_method
//! cargo run --bin singleton
//! cargo run --bin http_adapter
//! cargo run --bin shopping_cart
//! ```

pub mod config;
pub mod console;
pub mod error;
pub mod factory;
pub mod http_adapter;
pub mod shopping_cart;
pub mod singleton;

pub use config::DemoConfig;
pub use console::Console;
pub use error::{ConfigError, FactoryError, SingletonError};
