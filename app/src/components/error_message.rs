//! This module defines the `error_message` component, a fixed panel that shows a
//! caller-supplied message under an "Error" heading together with a button that
//! returns the user to the previous view.
//!
//! The message is inserted as a text node, so markup in it is displayed rather
//! than interpreted.

use leptos::{
    ev,
    html::{button, div, h2, p},
    prelude::*,
};

use crate::{
    components::icons,
    navigation::{self, Navigator, SharedNavigator},
    style::{Panel, panel},
    view_state::DisplayState,
};

pub const HEADING: &str = "Error";
pub const ACTION_LABEL: &str = "Go Back";

/// Sends the user one step back in their history.
pub fn go_back(navigator: &dyn Navigator) {
    navigation::dispatch("history back", navigator.back());
}

/// Renders the error panel for `state`.
///
/// An empty message still produces the full panel with an empty body.
pub fn component(state: impl Into<DisplayState>, navigator: SharedNavigator) -> impl IntoView {
    let DisplayState { message } = state.into();
    let style = panel(Panel::Error);

    // An empty string would be rendered as a placeholder space, which
    // `whitespace-pre-wrap` makes visible.
    let body = if message.is_empty() {
        p().class(style.body).into_any()
    } else {
        p().class(style.body).child(message).into_any()
    };

    div().class(style.container).attr("role", "alert").child((
        icons::warning(),
        h2().class(style.heading).child(HEADING),
        body,
        button()
            .r#type("button")
            .class(style.action.unwrap_or_default())
            .on(ev::click, move |_| go_back(navigator.as_ref()))
            .child(ACTION_LABEL),
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::navigation::{MockNavigator, NavigationError};

    fn render(message: &str) -> String {
        let navigator: SharedNavigator = Arc::new(MockNavigator::new());
        Owner::new().with(|| component(message, navigator).to_html())
    }

    #[test]
    fn test_renders_heading_and_message() {
        let html = render("Network unavailable");
        assert!(html.contains(HEADING));
        assert!(html.contains("Network unavailable"));
        assert!(html.contains(ACTION_LABEL));
    }

    #[test]
    fn test_empty_message_keeps_panel() {
        let html = render("");
        let body = panel(Panel::Error).body;
        assert!(html.contains(HEADING));
        assert!(html.contains(&format!(r#"<p class="{body}"></p>"#)));
        assert!(html.contains(ACTION_LABEL));
    }

    #[test]
    fn test_whitespace_message_kept_verbatim() {
        let html = render("  ");
        let body = panel(Panel::Error).body;
        assert!(html.contains(&format!(r#"<p class="{body}">  </p>"#)));
    }

    #[test]
    fn test_markup_is_escaped() {
        let html = render("<script>alert('hi')</script>");
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_go_back_traverses_history_once() {
        let mut navigator = MockNavigator::new();
        navigator.expect_back().times(1).returning(|| Ok(()));
        navigator.expect_navigate().never();

        go_back(&navigator);
    }

    #[test]
    fn test_go_back_survives_failure() {
        let mut navigator = MockNavigator::new();
        navigator
            .expect_back()
            .times(1)
            .returning(|| Err(NavigationError::NoWindow));

        go_back(&navigator);
    }
}
