//! Camera Parameter Test Data Generators and Builders
//!
//! Builder pattern implementations for generating parameter stores and the
//! flattened strings providers send, including malformed provider output.

#![allow(dead_code)]

use bytes::BytesMut;
use camera_params::{keys, CameraParameters, ParamsConfig, ParamsResult, ParamsWriter};

/// Main builder for creating parameter stores with a fluent API
#[derive(Debug)]
pub struct ParamsBuilder {
    config: ParamsConfig,
    raw: Vec<(String, String)>,
    sizes: Vec<(String, i32, i32)>,
    ranges: Vec<(String, i32, i32)>,
    ints: Vec<(String, i32)>,
    floats: Vec<(String, f32)>,
}

impl Default for ParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ParamsBuilder {
    pub fn new() -> Self {
        Self {
            config: ParamsConfig::default(),
            raw: Vec::new(),
            sizes: Vec::new(),
            ranges: Vec::new(),
            ints: Vec::new(),
            floats: Vec::new(),
        }
    }

    /// Use a non-default store configuration
    pub fn config(mut self, config: ParamsConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a raw string entry
    pub fn entry<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.raw.push((key.into(), value.into()));
        self
    }

    pub fn size<K: Into<String>>(mut self, key: K, width: i32, height: i32) -> Self {
        self.sizes.push((key.into(), width, height));
        self
    }

    pub fn range<K: Into<String>>(mut self, key: K, low: i32, high: i32) -> Self {
        self.ranges.push((key.into(), low, high));
        self
    }

    pub fn int<K: Into<String>>(mut self, key: K, value: i32) -> Self {
        self.ints.push((key.into(), value));
        self
    }

    pub fn float<K: Into<String>>(mut self, key: K, value: f32) -> Self {
        self.floats.push((key.into(), value));
        self
    }

    /// Advertise supported preview sizes as a comma-separated list
    pub fn preview_sizes(self, sizes: &[(i32, i32)]) -> Self {
        let list = sizes
            .iter()
            .map(|(w, h)| format!("{}x{}", w, h))
            .collect::<Vec<_>>()
            .join(",");
        self.entry(keys::KEY_SUPPORTED_PREVIEW_SIZES, list)
    }

    /// Advertise supported preview formats by name
    pub fn preview_formats(self, names: &[&str]) -> Self {
        self.entry(keys::KEY_SUPPORTED_PREVIEW_FORMATS, names.join(","))
    }

    /// Build the store; entries are applied raw, sizes, ranges, ints, floats
    pub fn build(self) -> CameraParameters {
        let mut params = CameraParameters::with_config(self.config);
        for (key, value) in &self.raw {
            params.set(key, value);
        }
        for (key, width, height) in &self.sizes {
            params.set_size(key, *width, *height);
        }
        for (key, low, high) in &self.ranges {
            params.set_range(key, *low, *high);
        }
        for (key, value) in &self.ints {
            params.set_int(key, *value);
        }
        for (key, value) in &self.floats {
            params.set_float(key, *value);
        }
        params
    }

    /// Build and flatten
    pub fn build_flattened(self) -> String {
        self.build().flatten()
    }

    /// Build as wire bytes
    pub fn build_bytes(self) -> ParamsResult<Vec<u8>> {
        let params = self.build();
        let mut buffer = BytesMut::new();
        params.to_bytes(&mut buffer)?;
        Ok(buffer.to_vec())
    }
}

/// Parameter sets typical providers report
pub struct ProviderProfiles;

impl ProviderProfiles {
    /// Rear camera with several preview sizes and JPEG capture
    pub fn back_camera() -> ParamsBuilder {
        ParamsBuilder::new()
            .preview_sizes(&[(1920, 1080), (1280, 720), (640, 480), (320, 240)])
            .preview_formats(&["yuv420sp", "yuv420p", "rgb565"])
            .entry(keys::KEY_PREVIEW_FORMAT, keys::PIXEL_FORMAT_YUV420SP)
            .entry(keys::KEY_SUPPORTED_PICTURE_SIZES, "4032x3024,2048x1536")
            .entry(keys::KEY_PICTURE_FORMAT, keys::PIXEL_FORMAT_JPEG)
            .entry(keys::KEY_FOCUS_MODE, keys::FOCUS_MODE_CONTINUOUS_PICTURE)
            .entry(keys::KEY_ZOOM_SUPPORTED, keys::TRUE)
            .size(keys::KEY_PREVIEW_SIZE, 1280, 720)
            .size(keys::KEY_PICTURE_SIZE, 4032, 3024)
            .range(keys::KEY_PREVIEW_FPS_RANGE, 15000, 30000)
            .int(keys::KEY_JPEG_QUALITY, 95)
            .int(keys::KEY_MAX_ZOOM, 30)
            .float(keys::KEY_FOCAL_LENGTH, 4.38)
    }

    /// Front camera with a fixed focus and a single preview size
    pub fn front_camera() -> ParamsBuilder {
        ParamsBuilder::new()
            .preview_sizes(&[(640, 480)])
            .preview_formats(&["yuv420sp"])
            .entry(keys::KEY_FOCUS_MODE, keys::FOCUS_MODE_FIXED)
            .entry(keys::KEY_ZOOM_SUPPORTED, keys::FALSE)
            .size(keys::KEY_PREVIEW_SIZE, 640, 480)
            .range(keys::KEY_PREVIEW_FPS_RANGE, 7500, 30000)
    }

    /// Qualcomm provider with vendor extensions
    pub fn qcom_camera() -> ParamsBuilder {
        ParamsBuilder::new()
            .config(ParamsConfig::qcom())
            .entry(keys::vendor::KEY_ISO_MODE, keys::vendor::ISO_AUTO)
            .entry(keys::vendor::KEY_SUPPORTED_ISO_MODES, "auto,ISO100,ISO200,ISO400")
            .entry(keys::vendor::KEY_ZSL, keys::vendor::ZSL_OFF)
            .size(keys::KEY_PREVIEW_SIZE, 1280, 720)
    }
}

/// Flattened strings a misbehaving provider might send
pub struct MalformedWireGenerators;

impl MalformedWireGenerators {
    /// A complete entry followed by text with no `=`
    pub fn truncated_tail() -> String {
        "preview-size=640x480;zoom=2;preview-form".to_string()
    }

    /// Size list with a bad item in the middle
    pub fn bad_size_list() -> String {
        "preview-size-values=640x480,bogus,320x240".to_string()
    }

    /// Same key reported twice
    pub fn duplicate_keys() -> String {
        "zoom=1;flash-mode=off;zoom=5".to_string()
    }

    /// Values that do not parse as the type their key implies
    pub fn wrong_shapes() -> String {
        "preview-size=640*480;preview-fps-range=15000;jpeg-quality=high".to_string()
    }
}
