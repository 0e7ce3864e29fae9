//! Iteration coordinates.
//!
//! Recorders identify an iteration by the path of solver and system calls
//! that led to it, prefixed with the MPI rank:
//! `rank0:SLSQP|3|root._solve_nonlinear|3|NLRunOnce|0`.

use std::fmt;

/// One `name|iteration` pair of a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CoordinateSegment {
    pub name: String,
    pub iteration: u64,
}

/// A parsed iteration coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IterationCoordinate {
    rank: u32,
    segments: Vec<CoordinateSegment>,
}

impl IterationCoordinate {
    /// Parses a coordinate string.
    ///
    /// Returns `None` unless the string is `rank<N>:` followed by one or more
    /// `name|iteration` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdao_cases::IterationCoordinate;
    ///
    /// let coord = IterationCoordinate::parse("rank1:SLSQP|3|root._solve_nonlinear|3").unwrap();
    /// assert_eq!(coord.rank(), 1);
    /// assert_eq!(coord.depth(), 2);
    /// assert_eq!(coord.leaf().unwrap().name, "root._solve_nonlinear");
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let (rank, path) = s.strip_prefix("rank")?.split_once(':')?;
        let rank = rank.parse().ok()?;

        let parts: Vec<&str> = path.split('|').collect();
        if parts.len() % 2 != 0 {
            return None;
        }

        let segments = parts
            .chunks_exact(2)
            .map(|pair| {
                let name = pair[0];
                if name.is_empty() {
                    return None;
                }
                Some(CoordinateSegment {
                    name: name.to_string(),
                    iteration: pair[1].parse().ok()?,
                })
            })
            .collect::<Option<Vec<_>>>()?;

        Some(Self { rank, segments })
    }

    /// MPI rank that recorded the iteration.
    pub const fn rank(&self) -> u32 {
        self.rank
    }

    pub fn segments(&self) -> &[CoordinateSegment] {
        &self.segments
    }

    /// Number of nested calls in the coordinate.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// The outermost call, usually the driver or root system.
    pub fn root(&self) -> Option<&CoordinateSegment> {
        self.segments.first()
    }

    /// The innermost call.
    pub fn leaf(&self) -> Option<&CoordinateSegment> {
        self.segments.last()
    }
}

impl fmt::Display for IterationCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rank{}:", self.rank)?;
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{}|{}", seg.name, seg.iteration)?;
        }
        Ok(())
    }
}
