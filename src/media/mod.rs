// SPDX-License-Identifier: MPL-2.0
//! Image data handling: loading, saving and the data-URI wire encoding.

pub mod data_uri;
pub mod image;

pub use image::{load_image, save_image, ImageData, IMAGE_EXTENSIONS};
