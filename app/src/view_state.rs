//! Selection of the panel a page shows.
//!
//! A page is either still loading, failed with a message, or ready to show its
//! own content. [`component`] turns that state into exactly one view.

use std::fmt::Display;

use leptos::prelude::*;

use crate::{
    components::{error_message, loader},
    navigation::SharedNavigator,
};

/// Caller-supplied data for a single render of the error panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayState {
    pub message: String,
}

impl From<String> for DisplayState {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for DisplayState {
    fn from(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Error(DisplayState),
    Ready,
}

impl ViewState {
    pub fn error(message: impl Into<DisplayState>) -> Self {
        Self::Error(message.into())
    }

    /// Derives the state from a pending or finished operation, `None` meaning
    /// it has not finished yet.
    pub fn from_outcome<T, E: Display>(outcome: Option<Result<T, E>>) -> Self {
        match outcome {
            None => Self::Loading,
            Some(Err(err)) => Self::error(err.to_string()),
            Some(Ok(_)) => Self::Ready,
        }
    }
}

/// Renders the view for `state`, calling `ready` only in the ready state.
pub fn component<F, V>(state: ViewState, navigator: SharedNavigator, ready: F) -> AnyView
where
    F: FnOnce() -> V,
    V: IntoView + 'static,
{
    match state {
        ViewState::Loading => loader::component().into_any(),
        ViewState::Error(display) => error_message::component(display, navigator).into_any(),
        ViewState::Ready => ready().into_any(),
    }
}
