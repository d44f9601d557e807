use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::errors::{ParamsError, ParamsResult};
use crate::keys::{self, vendor};
use crate::store::CameraParameters;
use crate::utils::{clamp_to_i32, parse_long_prefix};

/// Separates width from height in a size value ("640x480")
pub const SIZE_DELIMITER: char = 'x';

/// Separates low from high in a range value ("15000,30000"), and the items of a list
pub const LIST_DELIMITER: char = ',';

/// Width and height decoded from a `WxH` value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// What size getters return when the key is missing or malformed
    pub const UNSET: Size = Size {
        width: -1,
        height: -1,
    };

    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.width, SIZE_DELIMITER, self.height)
    }
}

impl From<Size> for (i32, i32) {
    fn from(size: Size) -> Self {
        (size.width, size.height)
    }
}

/// Low and high bounds decoded from an `a,b` value
///
/// Frame-rate ranges are frames per second scaled by 1000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub low: i32,
    pub high: i32,
}

impl Range {
    pub const UNSET: Range = Range { low: -1, high: -1 };

    pub fn new(low: i32, high: i32) -> Self {
        Self { low, high }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.low, LIST_DELIMITER, self.high)
    }
}

impl From<Range> for (i32, i32) {
    fn from(range: Range) -> Self {
        (range.low, range.high)
    }
}

/// Parse two base-10 integers joined by `delimiter`, e.g. "640x480"
///
/// The delimiter must follow the first number directly. On success returns
/// both numbers and the byte offset just past the second one, so list parsers
/// can keep scanning from there. A missing first number reads as 0, as with
/// `strtol`.
pub fn parse_pair(text: &str, delimiter: char) -> ParamsResult<(i32, i32, usize)> {
    let (first, first_end) = parse_long_prefix(text, 10);

    if !text[first_end..].starts_with(delimiter) {
        error!("Cannot find delimiter ({}) in str={}", delimiter, text);
        return Err(ParamsError::MissingDelimiter {
            delimiter,
            input: text.to_string(),
        });
    }

    let second_start = first_end + delimiter.len_utf8();
    let (second, second_len) = parse_long_prefix(&text[second_start..], 10);

    Ok((clamp_to_i32(first), clamp_to_i32(second), second_start + second_len))
}

/// Parse a list like "640x480,320x240"
///
/// Stops at the first malformed item but keeps every size parsed before it.
/// `None` gives an empty list.
pub fn parse_size_list(sizes: Option<&str>) -> Vec<Size> {
    let mut parsed = Vec::new();
    let Some(text) = sizes else {
        return parsed;
    };

    let mut pos = 0;
    loop {
        let (width, height, used) = match parse_pair(&text[pos..], SIZE_DELIMITER) {
            Ok(pair) => pair,
            Err(_) => {
                error!("Picture sizes string \"{}\" contains invalid character.", text);
                return parsed;
            },
        };

        let end = pos + used;
        match text.as_bytes().get(end) {
            None => {
                parsed.push(Size::new(width, height));
                return parsed;
            },
            Some(b',') => {
                parsed.push(Size::new(width, height));
                pos = end + 1;
            },
            Some(_) => {
                error!("Picture sizes string \"{}\" contains invalid character.", text);
                return parsed;
            },
        }
    }
}

impl CameraParameters {
    /// Store `"{width}x{height}"` under `key`
    pub fn set_size(&mut self, key: &str, width: i32, height: i32) {
        self.set(key, &Size::new(width, height).to_string());
    }

    /// Size stored under `key`, or [`Size::UNSET`] when missing or malformed
    pub fn get_size(&self, key: &str) -> Size {
        self.get(key)
            .and_then(|v| parse_pair(v, SIZE_DELIMITER).ok())
            .map_or(Size::UNSET, |(width, height, _)| Size::new(width, height))
    }

    /// Store `"{low},{high}"` under `key`
    pub fn set_range(&mut self, key: &str, low: i32, high: i32) {
        self.set(key, &Range::new(low, high).to_string());
    }

    /// Range stored under `key`, or [`Range::UNSET`] when missing or malformed
    pub fn get_range(&self, key: &str) -> Range {
        self.get(key)
            .and_then(|v| parse_pair(v, LIST_DELIMITER).ok())
            .map_or(Range::UNSET, |(low, high, _)| Range::new(low, high))
    }

    /// Sizes listed under `key`; see [`parse_size_list`]
    pub fn get_size_list(&self, key: &str) -> Vec<Size> {
        parse_size_list(self.get(key))
    }

    // Preview

    pub fn set_preview_size(&mut self, width: i32, height: i32) {
        self.set_size(keys::KEY_PREVIEW_SIZE, width, height);
    }

    pub fn preview_size(&self) -> Size {
        self.get_size(keys::KEY_PREVIEW_SIZE)
    }

    pub fn preferred_preview_size_for_video(&self) -> Size {
        self.get_size(keys::KEY_PREFERRED_PREVIEW_SIZE_FOR_VIDEO)
    }

    pub fn supported_preview_sizes(&self) -> Vec<Size> {
        self.get_size_list(keys::KEY_SUPPORTED_PREVIEW_SIZES)
    }

    pub fn set_preview_frame_rate(&mut self, fps: i32) {
        self.set_int(keys::KEY_PREVIEW_FRAME_RATE, fps);
    }

    pub fn preview_frame_rate(&self) -> i32 {
        self.get_int(keys::KEY_PREVIEW_FRAME_RATE)
    }

    /// Bounds are frames per second times 1000
    pub fn set_preview_fps_range(&mut self, min_fps: i32, max_fps: i32) {
        self.set_range(keys::KEY_PREVIEW_FPS_RANGE, min_fps, max_fps);
    }

    pub fn preview_fps_range(&self) -> Range {
        self.get_range(keys::KEY_PREVIEW_FPS_RANGE)
    }

    pub fn set_preview_format(&mut self, format: &str) {
        self.set(keys::KEY_PREVIEW_FORMAT, format);
    }

    pub fn preview_format(&self) -> Option<&str> {
        self.get(keys::KEY_PREVIEW_FORMAT)
    }

    pub fn set_preview_frame_rate_mode(&mut self, mode: &str) {
        self.set(vendor::KEY_PREVIEW_FRAME_RATE_MODE, mode);
    }

    pub fn preview_frame_rate_mode(&self) -> Option<&str> {
        self.get(vendor::KEY_PREVIEW_FRAME_RATE_MODE)
    }

    // Picture

    pub fn set_picture_size(&mut self, width: i32, height: i32) {
        self.set_size(keys::KEY_PICTURE_SIZE, width, height);
    }

    pub fn picture_size(&self) -> Size {
        self.get_size(keys::KEY_PICTURE_SIZE)
    }

    pub fn supported_picture_sizes(&self) -> Vec<Size> {
        self.get_size_list(keys::KEY_SUPPORTED_PICTURE_SIZES)
    }

    pub fn set_picture_format(&mut self, format: &str) {
        self.set(keys::KEY_PICTURE_FORMAT, format);
    }

    pub fn picture_format(&self) -> Option<&str> {
        self.get(keys::KEY_PICTURE_FORMAT)
    }

    // Video

    pub fn set_video_size(&mut self, width: i32, height: i32) {
        self.set_size(keys::KEY_VIDEO_SIZE, width, height);
    }

    pub fn video_size(&self) -> Size {
        self.get_size(keys::KEY_VIDEO_SIZE)
    }

    pub fn supported_video_sizes(&self) -> Vec<Size> {
        self.get_size_list(keys::KEY_SUPPORTED_VIDEO_SIZES)
    }

    // Touch and metering

    pub fn set_touch_index_aec(&mut self, x: i32, y: i32) {
        self.set_size(vendor::KEY_TOUCH_INDEX_AEC, x, y);
    }

    pub fn set_touch_index_af(&mut self, x: i32, y: i32) {
        self.set_size(vendor::KEY_TOUCH_INDEX_AF, x, y);
    }

    /// Half of the `XxY` point under `metering-areas`
    ///
    /// Starts from (-2000, -2000), so a missing or unparseable value yields
    /// (-1000, -1000).
    pub fn metering_area_center(&self) -> (i32, i32) {
        let (x, y) = self
            .get(keys::KEY_METERING_AREAS)
            .and_then(|v| parse_pair(v, SIZE_DELIMITER).ok())
            .map_or((-2000, -2000), |(x, y, _)| (x, y));
        (x / 2, y / 2)
    }
}
