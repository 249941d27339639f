//! Embassy async tasks

pub mod bootsel;
pub mod meter;

pub use bootsel::bootsel_task;
pub use meter::{meter_task, MeterDisplay, MeterMatrix};
