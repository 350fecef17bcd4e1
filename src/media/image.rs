// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for the workspace panes.

use crate::error::{Error, Result};
use crate::media::data_uri;
use iced::widget::image;
use image_rs::{GenericImageView, ImageError};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// File extensions accepted by the open dialog, matching the formats the
/// decoder is built with.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "tif", "tiff", "webp", "bmp"];

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Original encoded bytes (PNG, JPEG, ...) retained so the image can be
    /// re-sent or written to disk without a lossy re-encode.
    /// Stored in Arc to avoid expensive cloning.
    encoded_bytes: Arc<Vec<u8>>,
    /// MIME type of the encoded bytes.
    mime: &'static str,
}

impl ImageData {
    /// Creates a new `ImageData` by decoding the given encoded bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Image`] when the bytes are not a decodable image.
    pub fn from_encoded(encoded_bytes: Vec<u8>) -> Result<Self> {
        let img = image_rs::load_from_memory(&encoded_bytes)
            .map_err(|e| Error::Image(e.to_string()))?;
        let (width, height) = img.dimensions();
        let mime = data_uri::sniff_mime(&encoded_bytes);

        let rgba_img = img.to_rgba8();
        let handle = image::Handle::from_rgba(width, height, rgba_img.into_vec());

        Ok(Self {
            handle,
            width,
            height,
            encoded_bytes: Arc::new(encoded_bytes),
            mime,
        })
    }

    /// Returns a reference to the original encoded bytes.
    pub fn encoded_bytes(&self) -> &[u8] {
        &self.encoded_bytes
    }

    /// Returns the MIME type of the encoded bytes.
    #[must_use]
    pub fn mime(&self) -> &'static str {
        self.mime
    }

    /// Encodes this image as a base64 data URI for the wire contract.
    #[must_use]
    pub fn to_data_uri(&self) -> String {
        data_uri::encode(self.mime, &self.encoded_bytes)
    }
}

/// Load an image from the given path and return its data.
///
/// Supports common raster formats (PNG, JPEG, GIF, TIFF, WebP, BMP).
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The image format is invalid or unsupported ([`Error::Image`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let bytes = fs::read(path.as_ref()).map_err(|e| Error::Io(e.to_string()))?;
    ImageData::from_encoded(bytes)
}

/// Writes the image's encoded bytes to the given path.
///
/// The bytes are written as-is; the caller chooses the file name (and thereby
/// the extension, which should match the image's MIME type).
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be created or written.
pub fn save_image(image: &ImageData, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, image.encoded_bytes())?;
    Ok(())
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_image(&image_path).expect("png should load successfully");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
        assert_eq!(data.mime(), "image/png");
    }

    #[test]
    fn load_missing_image_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load_image(&missing_path) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_png_bytes_returns_image_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_image(&bad_path) {
            Err(Error::Image(message)) => assert!(!message.is_empty()),
            other => panic!("expected Image error for invalid png, got {other:?}"),
        }
    }

    #[test]
    fn data_uri_round_trip_preserves_encoded_bytes() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");
        RgbaImage::from_pixel(2, 2, Rgba([0, 255, 0, 255]))
            .save(&image_path)
            .expect("failed to write png");

        let data = load_image(&image_path).expect("png should load");
        let uri = data.to_data_uri();
        assert!(uri.starts_with("data:image/png;base64,"));

        let (mime, bytes) = crate::media::data_uri::decode(&uri).expect("decode");
        assert_eq!(mime, "image/png");
        assert_eq!(bytes, data.encoded_bytes());
    }

    #[test]
    fn save_image_writes_original_bytes() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");
        RgbaImage::from_pixel(1, 1, Rgba([0, 0, 255, 255]))
            .save(&image_path)
            .expect("failed to write png");

        let data = load_image(&image_path).expect("png should load");
        let out_path = temp_dir.path().join("nested").join("out.png");
        save_image(&data, &out_path).expect("save should succeed");

        let written = fs::read(&out_path).expect("read written file");
        assert_eq!(written, data.encoded_bytes());
    }

    #[test]
    fn from_encoded_rejects_garbage() {
        match ImageData::from_encoded(vec![1, 2, 3, 4]) {
            Err(Error::Image(_)) => {}
            other => panic!("expected Image error, got {other:?}"),
        }
    }
}
