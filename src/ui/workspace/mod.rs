// SPDX-License-Identifier: MPL-2.0
//! Enhancement workspace: the main screen of the application.
//!
//! Holds the loaded source image, the tuning controls, the before/after
//! comparison panes and the quality metrics panel. The [`component`]
//! submodule owns the session state and update logic; the other submodules
//! are pure view functions.

pub mod component;
mod controls;
mod empty_state;
mod metrics_panel;
mod panes;
pub mod state;

pub use component::{Effect, Message, State};
pub use state::Stage;
