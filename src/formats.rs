use phf::phf_map;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::keys;
use crate::store::CameraParameters;
use crate::typed::LIST_DELIMITER;

/// Graphics HAL pixel format codes a preview format name can map to
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PixelFormat {
    Rgba8888 = 0x1,
    Rgb565 = 0x4,
    YCbCr422Sp = 0x10, // NV16
    YCrCb420Sp = 0x11, // NV21
    YCbCr422I = 0x14,  // YUY2
    Raw16 = 0x20,
    Yv12 = 0x3231_5659,
}

/// Returned for a format name with no preview mapping
pub const PIXEL_FORMAT_NO_MATCH: i32 = -1;

/// Format assumed when no name is given
pub const DEFAULT_PREVIEW_FORMAT: PixelFormat = PixelFormat::YCrCb420Sp;

static PREVIEW_FORMATS: phf::Map<&'static str, PixelFormat> = phf_map! {
    "yuv422sp" => PixelFormat::YCbCr422Sp,
    "yuv420sp" => PixelFormat::YCrCb420Sp,
    "yuv422i-yuyv" => PixelFormat::YCbCr422I,
    "yuv420p" => PixelFormat::Yv12,
    "rgb565" => PixelFormat::Rgb565,
    "rgba8888" => PixelFormat::Rgba8888,
    "bayer-rggb" => PixelFormat::Raw16,
};

impl PixelFormat {
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Look up a preview format name; `jpeg` and other non-preview names give `None`
    pub fn from_name(name: &str) -> Option<Self> {
        PREVIEW_FORMATS.get(name).copied()
    }
}

/// Map a preview format name to its HAL code
///
/// `None` maps to [`DEFAULT_PREVIEW_FORMAT`]; an unknown name maps to
/// [`PIXEL_FORMAT_NO_MATCH`].
pub fn preview_format_to_enum(format: Option<&str>) -> i32 {
    match format {
        None => DEFAULT_PREVIEW_FORMAT.code(),
        Some(name) => PixelFormat::from_name(name).map_or(PIXEL_FORMAT_NO_MATCH, PixelFormat::code),
    }
}

impl CameraParameters {
    /// HAL codes for the comma-separated format names under `key`
    ///
    /// Names without a mapping are skipped, as are empty items.
    pub fn supported_formats(&self, key: &str) -> Vec<i32> {
        let Some(formats) = self.get(key) else {
            warn!("No supported formats under {}", key);
            return Vec::new();
        };

        formats
            .split(LIST_DELIMITER)
            .filter(|name| !name.is_empty())
            .map(|name| preview_format_to_enum(Some(name)))
            .filter(|&code| code != PIXEL_FORMAT_NO_MATCH)
            .collect()
    }

    pub fn supported_preview_formats(&self) -> Vec<i32> {
        self.supported_formats(keys::KEY_SUPPORTED_PREVIEW_FORMATS)
    }
}
