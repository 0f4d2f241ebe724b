//! Route resolution outcomes.
//!
//! Only 401 and 404 are expected failures with a friendly page; every other
//! status escalates to an unhandled error.

use crate::core::boundary::ERROR_TITLE;
use crate::models::{CaughtRouteFailure, Page, UnhandledError};

/// Route failures rendered by the catch handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedStatus {
    Unauthorized,
    NotFound,
}

impl ExpectedStatus {
    pub fn from_code(status: u16) -> Option<Self> {
        match status {
            401 => Some(Self::Unauthorized),
            404 => Some(Self::NotFound),
            _ => None,
        }
    }

    pub fn code(self) -> u16 {
        match self {
            Self::Unauthorized => 401,
            Self::NotFound => 404,
        }
    }

    /// Friendly explanation shown on the failure page.
    pub fn message(self) -> &'static str {
        match self {
            Self::Unauthorized => {
                "Oops! Looks like you tried to visit a page that you do not have access to."
            }
            Self::NotFound => "Oops! Looks like you tried to visit a page that does not exist.",
        }
    }
}

/// Result of resolving a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Success(Page),
    ExpectedFailure {
        status: ExpectedStatus,
        status_text: String,
    },
    EscalatedFailure(UnhandledError),
}

impl RouteOutcome {
    /// Title the document will carry once this outcome is rendered.
    pub fn document_title(&self) -> Option<String> {
        match self {
            Self::Success(page) => page.meta.title.clone(),
            Self::ExpectedFailure {
                status,
                status_text,
            } => Some(format!("{} {}", status.code(), status_text)),
            Self::EscalatedFailure(_) => Some(ERROR_TITLE.to_string()),
        }
    }
}

impl From<CaughtRouteFailure> for RouteOutcome {
    fn from(failure: CaughtRouteFailure) -> Self {
        match ExpectedStatus::from_code(failure.status) {
            Some(status) => Self::ExpectedFailure {
                status,
                status_text: failure.status_text,
            },
            None => Self::EscalatedFailure(failure.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_expected_statuses() {
        assert_eq!(
            RouteOutcome::from(CaughtRouteFailure::unauthorized()),
            RouteOutcome::ExpectedFailure {
                status: ExpectedStatus::Unauthorized,
                status_text: "Unauthorized".to_string(),
            }
        );
        assert_eq!(
            RouteOutcome::from(CaughtRouteFailure::not_found()),
            RouteOutcome::ExpectedFailure {
                status: ExpectedStatus::NotFound,
                status_text: "Not Found".to_string(),
            }
        );
    }

    #[test]
    fn test_classify_escalates_other_statuses() {
        let failure = CaughtRouteFailure::new(500, "Internal Server Error");
        assert_eq!(
            RouteOutcome::from(failure),
            RouteOutcome::EscalatedFailure(UnhandledError::new("Internal Server Error"))
        );

        let failure = CaughtRouteFailure::new(403, "Forbidden").with_data("no entry");
        assert_eq!(
            RouteOutcome::from(failure),
            RouteOutcome::EscalatedFailure(UnhandledError::new("no entry"))
        );
    }

    #[test]
    fn test_document_title() {
        let outcome = RouteOutcome::from(CaughtRouteFailure::not_found());
        assert_eq!(outcome.document_title().as_deref(), Some("404 Not Found"));

        let outcome = RouteOutcome::EscalatedFailure(UnhandledError::new("boom"));
        assert_eq!(outcome.document_title().as_deref(), Some("Error!"));

        let outcome = RouteOutcome::Success(Page::new(vec![]).with_title("About"));
        assert_eq!(outcome.document_title().as_deref(), Some("About"));
    }
}
