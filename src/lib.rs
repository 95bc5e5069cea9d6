//! Async `no_std` drivers for low-cost Winsen gas sensors.
//!
//! - [`Mhz19b`]: MH-Z19B NDIR CO2 sensor on UART, including zero-point calibration.
//! - [`ZeSensor`]: ZE-series sensors (CO, CH2O, O3, ...) on UART, in initiative or
//!   query/answer mode.
//! - [`ZeAnalogSensor`]: ZE-series sensors read through their 0.4V-2.0V analog output.
//!
//! All UART sensors share the same 9-byte frame, see [`frame`]. Every `read` returns
//! `None` when no valid reading is available; the matching `try_read` tells why.
//! Nothing is retried, poll again later.
//!
//! ```ignore
//! let mut co2 = Mhz19b::new(uart, delay);
//! if let Some(ppm) = co2.read_co2().await {
//!     log::info!("CO2: {} ppm", ppm);
//! }
//! ```
#![cfg_attr(not(test), no_std)]

mod constants;
pub use constants::*;

mod error;
pub use error::*;

mod config;
pub use config::*;

pub mod frame;
pub use frame::{Command, Frame};

mod serial;

pub mod calibration;

mod mhz19b;
pub use mhz19b::*;

mod ze_uart;
pub use ze_uart::*;

mod ze_analog;
pub use ze_analog::*;

#[cfg(test)]
mod mock;
