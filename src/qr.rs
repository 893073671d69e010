//! QR rendering and persistence for rollqr.
//!
//! Thin wrapper around the `qrcode` crate with its `image` integration. The
//! symbol parameters are fixed: version 2, error-correction level L, 10
//! pixels per module, a 4-module quiet zone, black modules on white. Version
//! 2 at level L holds at most 32 bytes, so an oversized payload is a fatal
//! encoding error rather than a silently larger symbol.

use std::path::{Path, PathBuf};

use image::{ImageBuffer, Luma};
use qrcode::{EcLevel, QrCode, Version};

/// Fixed symbol size class (QR version 2, 25x25 modules).
const SYMBOL_VERSION: i16 = 2;
/// Pixels per module in the rendered image.
const MODULE_PIXELS: u32 = 10;

/// Rendered grayscale QR image.
pub type CodeImage = ImageBuffer<Luma<u8>, Vec<u8>>;

/// Render `data` as a version-2/L QR code image.
///
/// Returns `Err(String)` if the payload does not fit the fixed size class.
pub fn render_code(data: &str) -> Result<CodeImage, String> {
    let code = QrCode::with_version(data.as_bytes(), Version::Normal(SYMBOL_VERSION), EcLevel::L)
        .map_err(|e| format!("failed to encode payload ({} bytes): {}", data.len(), e))?;

    Ok(code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_PIXELS, MODULE_PIXELS)
        .quiet_zone(true)
        .dark_color(Luma([0u8]))
        .light_color(Luma([255u8]))
        .build())
}

/// Render `data` and save it as `<dir>/<roll>.png`.
///
/// An existing file for the same roll is overwritten. Returns the path of
/// the written file, or `Err(String)` on an encoding or write failure.
pub fn write_code(dir: &Path, roll: &str, data: &str) -> Result<PathBuf, String> {
    let img = render_code(data)?;
    let path = dir.join(format!("{}.png", roll));
    img.save(&path)
        .map_err(|e| format!("failed to write {}: {}", path.display(), e))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_dimensions() {
        // 25 modules + 4 quiet-zone modules per side, 10 px per module.
        let img = render_code("ROLL=101;NAME=Alice").unwrap();
        assert_eq!(img.width(), (25 + 8) * MODULE_PIXELS);
        assert_eq!(img.height(), img.width());
    }

    #[test]
    fn test_render_is_black_on_white() {
        let img = render_code("ROLL=101;NAME=Alice").unwrap();
        // Quiet zone corner is light, and some module must be dark.
        assert_eq!(img.get_pixel(0, 0).0[0], 255);
        assert!(img.pixels().any(|p| p.0[0] == 0));
    }

    #[test]
    fn test_payload_over_capacity_is_fatal() {
        // Version 2 at level L holds 32 bytes; 40 must not fit.
        let data = "a".repeat(40);
        let err = render_code(&data).unwrap_err();
        assert!(err.contains("failed to encode payload"));
    }

    #[test]
    fn test_write_creates_named_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_code(dir.path(), "101", "ROLL=101;NAME=Alice").unwrap();
        assert_eq!(path, dir.path().join("101.png"));
        assert!(path.exists());
    }

    #[test]
    fn test_duplicate_roll_last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        write_code(dir.path(), "101", "ROLL=101;NAME=Alice").unwrap();
        let path = write_code(dir.path(), "101", "ROLL=101;NAME=Bob").unwrap();

        let reference = dir.path().join("ref.png");
        render_code("ROLL=101;NAME=Bob").unwrap().save(&reference).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), std::fs::read(&reference).unwrap());
    }
}
