//! Boundary handlers.
//!
//! Alternate render paths for failed routes and render errors. Both produce
//! a [`Screen`] so every failure ends in a fully formed document.

use crate::core::outcome::{ExpectedStatus, RouteOutcome};
use crate::models::{Block, CaughtRouteFailure, Page, Screen, UnhandledError};
use crate::utils::log;

/// Document title of the error page.
pub const ERROR_TITLE: &str = "Error!";

const DEVELOPER_NOTE: &str =
    "Hey, developer, you should replace this with what you want your users to see.";

/// Render any route outcome into a screen.
pub fn render_outcome(outcome: RouteOutcome) -> Screen {
    match outcome {
        RouteOutcome::Success(page) => Screen::page(page),
        RouteOutcome::ExpectedFailure {
            status,
            status_text,
        } => expected_failure(status, &status_text),
        RouteOutcome::EscalatedFailure(error) => error_boundary(&error),
    }
}

/// Catch handler: friendly page for 401/404, error page for anything else.
pub fn catch_boundary(failure: CaughtRouteFailure) -> Screen {
    render_outcome(failure.into())
}

fn expected_failure(status: ExpectedStatus, status_text: &str) -> Screen {
    let code = status.code();
    Screen::titled(
        format!("{code} {status_text}"),
        Page::new(vec![
            Block::heading(format!("{code}: {status_text}")),
            Block::paragraph(status.message()),
        ]),
    )
}

/// Error handler: logs the error and renders the generic error page.
///
/// Terminal; never fails.
pub fn error_boundary(error: &UnhandledError) -> Screen {
    log::error(&format!("unhandled render error: {error}"));
    Screen::titled(
        ERROR_TITLE,
        Page::new(vec![
            Block::heading("There was an error"),
            Block::paragraph(error.message.clone()),
            Block::Rule,
            Block::paragraph(DEVELOPER_NOTE),
        ]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catch_unauthorized() {
        let screen = catch_boundary(CaughtRouteFailure::unauthorized());
        assert_eq!(screen.title.as_deref(), Some("401 Unauthorized"));
        let text = screen.page.text();
        assert!(text.contains("401: Unauthorized"));
        assert!(text.contains("you do not have access to"));
    }

    #[test]
    fn test_catch_not_found() {
        let screen = catch_boundary(CaughtRouteFailure::not_found());
        assert_eq!(screen.title.as_deref(), Some("404 Not Found"));
        let text = screen.page.text();
        assert!(text.contains("404: Not Found"));
        assert!(text.contains("a page that does not exist"));
    }

    #[test]
    fn test_catch_escalates_to_error_page() {
        let screen = catch_boundary(
            CaughtRouteFailure::new(500, "Internal Server Error").with_data("backend exploded"),
        );
        assert_eq!(screen.title.as_deref(), Some(ERROR_TITLE));
        let text = screen.page.text();
        assert!(text.contains("There was an error"));
        assert!(text.contains("backend exploded"));

        let screen = catch_boundary(CaughtRouteFailure::new(500, "Internal Server Error"));
        assert!(screen.page.text().contains("Internal Server Error"));
    }

    #[test]
    fn test_error_boundary_renders_message() {
        let screen = error_boundary(&UnhandledError::new("boom"));
        assert_eq!(screen.document_title(), Some("Error!"));
        assert!(screen.page.body.contains(&Block::paragraph("boom")));
        assert!(screen.page.body.contains(&Block::Rule));
        assert!(screen.page.text().contains(DEVELOPER_NOTE));
    }

    #[test]
    fn test_render_success_keeps_page() {
        let page = Page::new(vec![Block::heading("Hi")]).with_title("Home");
        let screen = render_outcome(RouteOutcome::Success(page.clone()));
        assert_eq!(screen, Screen::page(page));
    }
}
