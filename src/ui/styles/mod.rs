// SPDX-License-Identifier: MPL-2.0
//! Shared widget styles built on top of the design tokens.

pub mod button;
pub mod container;
pub mod slider;
pub mod text;
