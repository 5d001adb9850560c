//! Calibration monitoring service.
//!
//! Consumes externally-supplied error metrics, classifies drift against the
//! baseline, and on critical drift flags the environment for recalibration
//! in the store. The flag escalates visibility, not autonomy: scope
//! resolution never reads it, and the score is only revised by a subsequent
//! profile write.

mod service;

pub use service::CalibrationMonitor;
