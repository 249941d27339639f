//! Ohmmeter Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the peripheral
//! drivers are written against. Chip-specific crates implement them, so the
//! drivers themselves build and test on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  ohmmeter-firmware (control loop)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ohmmeter-drivers (SSD1306, WS2812)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ohmmeter-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ohmmeter-hal-rp2040 (PIO, clocks)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The two-wire display bus is not abstracted here: drivers use
//! `embedded_hal::i2c::I2c` directly and this crate only carries the bus
//! configuration.
//!
//! # Traits
//!
//! - [`fifo::TxFifo`] - Blocking word FIFO feeding a timed serial output
//! - [`fifo::ChannelProvider`] - Brings up and claims such an output

#![no_std]
#![deny(unsafe_code)]

pub mod fifo;
pub mod i2c;

pub use fifo::{ChannelError, ChannelProvider, TxFifo};
pub use i2c::I2cConfig;
