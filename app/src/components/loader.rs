//! This module defines the `loader` component, which displays an indeterminate
//! progress indicator with a fixed caption.
//!
//! It is shown while the invitation is still being prepared. It sets up no
//! timers or subscriptions, so it can be mounted and dropped any number of times.

use leptos::{
    html::{div, p},
    prelude::*,
};

use crate::style::{Panel, panel};

pub const CAPTION: &str = "Loading your invitation...";

/// Renders the loading screen.
pub fn component() -> impl IntoView {
    let style = panel(Panel::Loading);

    div()
        .class(style.container)
        .attr("role", "status")
        .attr("aria-live", "polite")
        .child((
            div()
                .class(style.heading)
                .attr("role", "progressbar")
                .attr("aria-label", "Loading"),
            p().class(style.body).child(CAPTION),
        ))
}
