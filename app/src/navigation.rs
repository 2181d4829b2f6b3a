//! Navigation capability handed to components that let the user leave the
//! current view.
//!
//! Components never reach for the browser's `window` themselves. They receive a
//! [`SharedNavigator`] when they are built, which keeps them renderable on the
//! server and testable with a mock.

use std::sync::Arc;

use leptos::{logging, prelude::*};
use leptos_router::{NavigateOptions, hooks::use_navigate};
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

/// Reasons a navigation request could not be carried out.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("no browser window is available")]
    NoWindow,
    #[error("history traversal failed: {0}")]
    History(String),
    #[error("location change failed: {0}")]
    Location(String),
    #[error("router is no longer mounted")]
    RouterGone,
}

/// Moves the user between views.
#[cfg_attr(test, automock)]
pub trait Navigator: Send + Sync {
    /// Transitions to the given path.
    fn navigate(&self, path: &str) -> Result<(), NavigationError>;

    /// Returns to the previous entry of the navigation history.
    fn back(&self) -> Result<(), NavigationError>;
}

pub type SharedNavigator = Arc<dyn Navigator>;

/// Runs a navigation request and logs a failure instead of surfacing it.
///
/// Views stay mounted no matter what the hosting environment does with the
/// request.
pub fn dispatch(action: &str, result: Result<(), NavigationError>) {
    if let Err(err) = result {
        logging::warn!("{action} ignored: {err}");
    }
}

/// [`Navigator`] backed by the browser's `window.history` and `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl BrowserNavigator {
    #[must_use]
    pub fn shared() -> SharedNavigator {
        Arc::new(Self)
    }
}

#[cfg(target_arch = "wasm32")]
fn window() -> Result<web_sys::Window, NavigationError> {
    web_sys::window().ok_or(NavigationError::NoWindow)
}

// Imported browser functions abort outside wasm, so native builds have no window.
#[cfg(not(target_arch = "wasm32"))]
fn window() -> Result<web_sys::Window, NavigationError> {
    Err(NavigationError::NoWindow)
}

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) -> Result<(), NavigationError> {
        window()?
            .location()
            .assign(path)
            .map_err(|err| NavigationError::Location(format!("{err:?}")))
    }

    fn back(&self) -> Result<(), NavigationError> {
        let history = window()?
            .history()
            .map_err(|err| NavigationError::History(format!("{err:?}")))?;
        let length = history
            .length()
            .map_err(|err| NavigationError::History(format!("{err:?}")))?;

        // A single entry means there is nowhere to go back to.
        if length <= 1 {
            logging::log!("history is empty, staying on the current view");
            return Ok(());
        }

        history
            .back()
            .map_err(|err| NavigationError::History(format!("{err:?}")))
    }
}

type NavigateFn = Box<dyn Fn(&str, NavigateOptions)>;

/// [`Navigator`] that changes paths through the surrounding `leptos_router`
/// router, so the hydrated app stays mounted. History traversal is left to
/// [`BrowserNavigator`].
///
/// The navigate closure lives in local reactive storage owned by the scope
/// that built the navigator.
#[derive(Clone, Copy)]
pub struct RouterNavigator {
    navigate: StoredValue<NavigateFn, LocalStorage>,
}

impl RouterNavigator {
    /// Wraps an arbitrary path-change function.
    pub fn new(navigate: impl Fn(&str, NavigateOptions) + 'static) -> Self {
        let navigate: NavigateFn = Box::new(navigate);
        Self {
            navigate: StoredValue::new_local(navigate),
        }
    }

    /// Builds a navigator from the current router. Must be called inside a
    /// `Router`.
    #[must_use]
    pub fn shared() -> SharedNavigator {
        Arc::new(Self::new(use_navigate()))
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) -> Result<(), NavigationError> {
        self.navigate
            .try_with_value(|navigate| navigate(path, NavigateOptions::default()))
            .ok_or(NavigationError::RouterGone)
    }

    fn back(&self) -> Result<(), NavigationError> {
        BrowserNavigator.back()
    }
}
