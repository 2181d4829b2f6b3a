//! This module defines the `call_to_action` component, the promotional panel that
//! sends visitors to the template gallery.

use leptos::{
    ev,
    html::{a, h2, p, section},
    prelude::*,
};

use crate::{
    navigation::{self, Navigator, SharedNavigator},
    style::{Panel, panel},
};

pub const HEADING: &str = "Create Your Dream Wedding Invitation";
pub const DESCRIPTION: &str =
    "Choose from our collection of beautiful templates and make it yours in minutes.";
pub const ACTION_LABEL: &str = "Browse Templates";
pub const DESTINATION: &str = "/templates";

/// Sends the user to the template gallery.
pub fn activate(navigator: &dyn Navigator) {
    navigation::dispatch("navigate", navigator.navigate(DESTINATION));
}

/// Renders the call-to-action panel.
///
/// The link keeps a real `href` so it still works before hydration; once
/// hydrated, clicks go through `navigator`.
pub fn component(navigator: SharedNavigator) -> impl IntoView {
    let style = panel(Panel::CallToAction);

    section().class(style.container).child((
        h2().class(style.heading).child(HEADING),
        p().class(style.body).child(DESCRIPTION),
        a().href(DESTINATION)
            .class(style.action.unwrap_or_default())
            .on(ev::click, move |event| {
                event.prevent_default();
                activate(navigator.as_ref());
            })
            .child(ACTION_LABEL),
    ))
}
