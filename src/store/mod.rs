//! Calibration store implementations.

mod memory;

pub use memory::InMemoryCalibrationStore;
