// SPDX-License-Identifier: MPL-2.0
//! `med_enhancer` is a desktop client for a medical-image enhancement
//! service, built with the Iced GUI framework.
//!
//! Images are submitted to a remote backend (CLAHE and related algorithms)
//! and the enhanced result is shown side by side with the original, together
//! with quality metrics. The crate demonstrates internationalization with
//! Fluent, user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/med_enhancer/0.1.0")]

pub mod api;
pub mod app;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
