use std::fmt;

use gridpath_core::{Bounds, Cell};
use thiserror::Error;

/// Which end of a query a [`QueryError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// An invalid query, rejected before any search work.
///
/// An unreachable goal is not an error: searches report it as `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("{endpoint} {cell} is outside the {bounds} grid")]
    OutOfBounds {
        endpoint: Endpoint,
        cell: Cell,
        bounds: Bounds,
    },

    #[error("{endpoint} {cell} is on an obstacle")]
    Blocked { endpoint: Endpoint, cell: Cell },
}

impl QueryError {
    /// The endpoint that made the query invalid.
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::OutOfBounds { endpoint, .. } | Self::Blocked { endpoint, .. } => *endpoint,
        }
    }
}

pub type QueryResult<T> = Result<T, QueryError>;
