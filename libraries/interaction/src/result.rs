use std::fmt::{self, Display, Formatter};

use chain_ops::node::SmartQueryError;
use thiserror::Error as ThisError;

/// Why a query produced no response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The node could not be reached or the connection broke mid-request.
    Transport,
    /// The request or the contract's response could not be (de)serialized.
    Decode,
    /// The node or the contract refused the query.
    Rejected,
}

impl Display for FailureKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Transport => "transport",
            Self::Decode => "decode",
            Self::Rejected => "rejected",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("Query failed ({kind})! Cause: {reason}")]
pub struct QueryFailure {
    kind: FailureKind,
    reason: Box<str>,
}

impl QueryFailure {
    pub fn new<T>(kind: FailureKind, reason: T) -> Self
    where
        T: Display,
    {
        Self {
            kind,
            reason: reason.to_string().into_boxed_str(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        self.kind
    }

    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl From<SmartQueryError> for QueryFailure {
    fn from(error: SmartQueryError) -> Self {
        let kind = match &error {
            SmartQueryError::Connection(_) | SmartQueryError::Transport(_) => {
                FailureKind::Transport
            },
            SmartQueryError::Rejected(_) => FailureKind::Rejected,
        };

        Self::new(kind, error)
    }
}

/// Outcome of a query: the decoded response, or a tagged absence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum QueryResult<T> {
    Response(T),
    Absent(QueryFailure),
}

impl<T> QueryResult<T> {
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent(_))
    }

    #[must_use]
    pub const fn response(&self) -> Option<&T> {
        match self {
            Self::Response(response) => Some(response),
            Self::Absent(_) => None,
        }
    }

    #[must_use]
    pub fn into_response(self) -> Option<T> {
        match self {
            Self::Response(response) => Some(response),
            Self::Absent(_) => None,
        }
    }

    #[must_use]
    pub const fn failure(&self) -> Option<&QueryFailure> {
        match self {
            Self::Response(_) => None,
            Self::Absent(failure) => Some(failure),
        }
    }

    pub fn map<U, F>(self, f: F) -> QueryResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Response(response) => QueryResult::Response(f(response)),
            Self::Absent(failure) => QueryResult::Absent(failure),
        }
    }
}

impl<T> From<Result<T, QueryFailure>> for QueryResult<T> {
    fn from(result: Result<T, QueryFailure>) -> Self {
        match result {
            Ok(response) => Self::Response(response),
            Err(failure) => Self::Absent(failure),
        }
    }
}
