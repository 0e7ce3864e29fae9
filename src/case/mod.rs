//! Recorded cases.
//!
//! A case is one recorded iteration of a driver, system or solver. Every
//! kind shares the same base fields ([`Case`]) and attaches its own
//! variable groups, each wrapped in a [`PromotedToAbsoluteMap`](crate::PromotedToAbsoluteMap).
//! Cases are immutable once built.

mod coordinate;
mod driver;
mod solver;
mod system;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use coordinate::{CoordinateSegment, IterationCoordinate};
pub use driver::DriverCase;
pub use solver::SolverCase;
pub use system::SystemCase;

/// Fields common to every recorded iteration.
///
/// # Examples
///
/// ```
/// use mdao_cases::Case;
///
/// let case = Case::new("cases.sql", 3, "rank0:SLSQP|2", 1_700_000_000.5, true, "");
/// assert_eq!(case.counter(), 3);
/// assert!(case.success());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    filename: String,
    counter: u64,
    iteration_coordinate: String,
    timestamp: f64,
    success: bool,
    msg: String,
}

impl Case {
    #[must_use]
    pub fn new(
        filename: impl Into<String>,
        counter: u64,
        iteration_coordinate: impl Into<String>,
        timestamp: f64,
        success: bool,
        msg: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            counter,
            iteration_coordinate: iteration_coordinate.into(),
            timestamp,
            success,
            msg: msg.into(),
        }
    }

    /// The file the case was loaded from.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The global execution counter.
    pub const fn counter(&self) -> u64 {
        self.counter
    }

    /// Unique identifier of the recorded iteration.
    pub fn iteration_coordinate(&self) -> &str {
        &self.iteration_coordinate
    }

    /// Seconds since the Unix epoch at which the iteration ran.
    pub const fn timestamp(&self) -> f64 {
        self.timestamp
    }

    pub const fn success(&self) -> bool {
        self.success
    }

    /// Message recorded with the case; often empty.
    pub fn msg(&self) -> &str {
        &self.msg
    }

    /// The timestamp as a UTC date-time.
    ///
    /// Returns `None` if the timestamp is not finite or out of range.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        if !self.timestamp.is_finite() {
            return None;
        }
        let secs = self.timestamp.floor();
        if secs < i64::MIN as f64 || secs > i64::MAX as f64 {
            return None;
        }
        let nanos = ((self.timestamp - secs) * 1e9).round() as u32;
        DateTime::from_timestamp(secs as i64, nanos.min(999_999_999))
    }

    /// Parses the iteration coordinate.
    ///
    /// Returns `None` if the coordinate does not follow the recorder format.
    #[must_use]
    pub fn coordinate(&self) -> Option<IterationCoordinate> {
        IterationCoordinate::parse(&self.iteration_coordinate)
    }
}

/// Which part of the model hierarchy a case was recorded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseKind {
    Driver,
    System,
    Solver,
}

/// Any recorded case.
///
/// Serializes with a `"kind"` tag matching [`CaseKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordedCase {
    Driver(DriverCase),
    System(SystemCase),
    Solver(SolverCase),
}

impl RecordedCase {
    /// The shared base fields.
    pub const fn base(&self) -> &Case {
        match self {
            Self::Driver(c) => c.base(),
            Self::System(c) => c.base(),
            Self::Solver(c) => c.base(),
        }
    }

    pub const fn kind(&self) -> CaseKind {
        match self {
            Self::Driver(_) => CaseKind::Driver,
            Self::System(_) => CaseKind::System,
            Self::Solver(_) => CaseKind::Solver,
        }
    }

    pub const fn as_driver(&self) -> Option<&DriverCase> {
        match self {
            Self::Driver(c) => Some(c),
            _ => None,
        }
    }

    pub const fn as_system(&self) -> Option<&SystemCase> {
        match self {
            Self::System(c) => Some(c),
            _ => None,
        }
    }

    pub const fn as_solver(&self) -> Option<&SolverCase> {
        match self {
            Self::Solver(c) => Some(c),
            _ => None,
        }
    }
}

impl From<DriverCase> for RecordedCase {
    fn from(c: DriverCase) -> Self {
        Self::Driver(c)
    }
}

impl From<SystemCase> for RecordedCase {
    fn from(c: SystemCase) -> Self {
        Self::System(c)
    }
}

impl From<SolverCase> for RecordedCase {
    fn from(c: SolverCase) -> Self {
        Self::Solver(c)
    }
}
