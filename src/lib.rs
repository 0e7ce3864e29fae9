//! # mdao-cases - Recorded iteration access
//!
//! Optimization and multidisciplinary analysis runs record each driver,
//! system and solver iteration. This crate wraps one decoded iteration in a
//! typed case and lets callers read variables by the short promoted names
//! they use in their model, resolving them to the absolute names the
//! recorder stored.
//!
//! ## Core Concepts
//!
//! - **Case**: base fields of a recorded iteration (file, counter, coordinate, time, status)
//! - **DriverCase / SystemCase / SolverCase**: a case plus its variable groups
//! - **AliasTable**: promoted-to-absolute name table, split into inputs and outputs
//! - **PromotedToAbsoluteMap**: lookup of one variable group by promoted name
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use mdao_cases::{AliasTable, Case, Direction, SystemCase, SystemRecord, Value};
//!
//! let prom2abs = Arc::new(
//!     AliasTable::new()
//!         .with(Direction::Input, "x", ["d1.x"])
//!         .with(Direction::Output, "y1", ["d1.y1"]),
//! );
//! let record = SystemRecord {
//!     inputs: Some([("d1.x", 1.0)].into_iter().collect()),
//!     outputs: Some([("d1.y1", 25.6)].into_iter().collect()),
//!     residuals: None,
//! };
//!
//! let case = SystemCase::new(
//!     Case::new("cases.sql", 1, "rank0:root._solve_nonlinear|0", 1_700_000_000.0, true, ""),
//!     record,
//!     prom2abs,
//! );
//!
//! assert_eq!(case.inputs().get("x")?, &Value::Float(1.0));
//! assert_eq!(case.outputs().get("y1")?, &Value::Float(25.6));
//! assert!(case.residuals().get("y1").is_err());
//! # Ok::<(), mdao_cases::LookupError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod alias;
pub mod case;
pub mod direction;
pub mod error;
pub mod json;
pub mod record;
pub mod resolver;
pub mod value;

// Re-export primary types at crate root for convenience
pub use alias::{AliasEntry, AliasTable};
pub use case::{
    Case, CaseKind, CoordinateSegment, DriverCase, IterationCoordinate, RecordedCase, SolverCase,
    SystemCase,
};
pub use direction::Direction;
pub use error::{CaseError, CaseResult, DecodeError, LookupError};
pub use record::{DriverRecord, RecordValues, SolverRecord, SystemRecord};
pub use resolver::PromotedToAbsoluteMap;
pub use value::Value;
