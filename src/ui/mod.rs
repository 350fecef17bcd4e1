// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`workspace`] - Enhancement workspace with the before/after comparison
//! - [`settings`] - Application preferences and configuration
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, sliders, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Navigation bar with the screen tabs
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod settings;
pub mod styles;
pub mod theming;
pub mod workspace;
