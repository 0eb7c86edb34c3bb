//! # UpiQr Config
//!
//! Type-safe configuration management for the UPI QR bot.
//!
//! This crate provides the configuration schema, compiled-in payee defaults,
//! environment-based loading, and validation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
