//! # UpiQr Payments
//!
//! UPI payment payload encoding and QR rendering for the UPI QR bot.
//!
//! This crate holds the whole payment core: deep-link construction, per-request
//! validation, and rasterization of the resulting payload into a scannable
//! PNG. Everything here is synchronous and CPU-bound.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod payload;
pub mod qr;
pub mod request;

pub use error::*;
pub use payload::*;
pub use qr::*;
pub use request::*;
