//! rf-sweep: parametric sweeps of the steady-state CSTR model.
//!
//! Provides:
//! - Inclusive stepped ranges ([`SweepRange`])
//! - Flow rate × inlet concentration grid evaluation ([`execute_grid_sweep`])
//! - `;`-delimited CSV reports of a finished grid ([`report`])
//!
//! # Example
//!
//! ```
//! use rf_sweep::{GridSweep, SweepRange, execute_grid_sweep};
//!
//! let sweep = GridSweep {
//!     k1: 0.1,
//!     k2: 0.2,
//!     vr: 10.0,
//!     q: SweepRange::new(1.0, 10.0, 1.0).unwrap(),
//!     ca_in: SweepRange::new(0.1, 1.0, 0.1).unwrap(),
//! };
//!
//! let result = execute_grid_sweep(&sweep).unwrap();
//! assert_eq!(result.points.len(), 100);
//! assert_eq!(result.num_failed, 0);
//! ```

pub mod error;
pub mod executor;
pub mod report;
pub mod sweeps;

// Re-exports for ergonomics
pub use error::SweepError;
pub use executor::{GridSweep, MAX_GRID_POINTS, SweepPoint, SweepResult, execute_grid_sweep};
pub use report::{ReportHeader, render_csv_report, write_csv_report};
pub use sweeps::SweepRange;
