//! Presentation units for the invitation pages.
//!
//! Each sub-module renders one self-contained panel. None of them holds state
//! between renders; the caller decides which one is on screen.

pub mod call_to_action;
pub mod error_message;
pub mod error_template;
pub mod icons;
pub mod loader;
