//! # UpiQr Bot
//!
//! Discord bot that delivers UPI payment QR codes via private messages.
//!
//! This is the main binary crate that wires configuration, the Poise
//! framework, and the serenity gateway client together.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod error;

pub use bot::*;
pub use error::*;
