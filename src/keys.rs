//! Well-known parameter keys and values
//!
//! Pure data. The store accepts any key; these only name the ones providers
//! and typed accessors agree on.

use phf::phf_set;

// Parameter keys
pub const KEY_PREVIEW_SIZE: &str = "preview-size";
pub const KEY_SUPPORTED_PREVIEW_SIZES: &str = "preview-size-values";
pub const KEY_PREVIEW_FORMAT: &str = "preview-format";
pub const KEY_SUPPORTED_PREVIEW_FORMATS: &str = "preview-format-values";
pub const KEY_PREVIEW_FRAME_RATE: &str = "preview-frame-rate";
pub const KEY_SUPPORTED_PREVIEW_FRAME_RATES: &str = "preview-frame-rate-values";
pub const KEY_PREVIEW_FPS_RANGE: &str = "preview-fps-range";
pub const KEY_SUPPORTED_PREVIEW_FPS_RANGE: &str = "preview-fps-range-values";
pub const KEY_PICTURE_SIZE: &str = "picture-size";
pub const KEY_SUPPORTED_PICTURE_SIZES: &str = "picture-size-values";
pub const KEY_PICTURE_FORMAT: &str = "picture-format";
pub const KEY_SUPPORTED_PICTURE_FORMATS: &str = "picture-format-values";
pub const KEY_JPEG_THUMBNAIL_WIDTH: &str = "jpeg-thumbnail-width";
pub const KEY_JPEG_THUMBNAIL_HEIGHT: &str = "jpeg-thumbnail-height";
pub const KEY_SUPPORTED_JPEG_THUMBNAIL_SIZES: &str = "jpeg-thumbnail-size-values";
pub const KEY_JPEG_THUMBNAIL_QUALITY: &str = "jpeg-thumbnail-quality";
pub const KEY_JPEG_QUALITY: &str = "jpeg-quality";
pub const KEY_ROTATION: &str = "rotation";
pub const KEY_GPS_LATITUDE: &str = "gps-latitude";
pub const KEY_GPS_LONGITUDE: &str = "gps-longitude";
pub const KEY_GPS_ALTITUDE: &str = "gps-altitude";
pub const KEY_GPS_TIMESTAMP: &str = "gps-timestamp";
pub const KEY_GPS_PROCESSING_METHOD: &str = "gps-processing-method";
pub const KEY_WHITE_BALANCE: &str = "whitebalance";
pub const KEY_SUPPORTED_WHITE_BALANCE: &str = "whitebalance-values";
pub const KEY_EFFECT: &str = "effect";
pub const KEY_SUPPORTED_EFFECTS: &str = "effect-values";
pub const KEY_ANTIBANDING: &str = "antibanding";
pub const KEY_SUPPORTED_ANTIBANDING: &str = "antibanding-values";
pub const KEY_SCENE_MODE: &str = "scene-mode";
pub const KEY_SUPPORTED_SCENE_MODES: &str = "scene-mode-values";
pub const KEY_FLASH_MODE: &str = "flash-mode";
pub const KEY_SUPPORTED_FLASH_MODES: &str = "flash-mode-values";
pub const KEY_FOCUS_MODE: &str = "focus-mode";
pub const KEY_SUPPORTED_FOCUS_MODES: &str = "focus-mode-values";
pub const KEY_MAX_NUM_FOCUS_AREAS: &str = "max-num-focus-areas";
pub const KEY_FOCUS_AREAS: &str = "focus-areas";
pub const KEY_FOCAL_LENGTH: &str = "focal-length";
pub const KEY_HORIZONTAL_VIEW_ANGLE: &str = "horizontal-view-angle";
pub const KEY_VERTICAL_VIEW_ANGLE: &str = "vertical-view-angle";
pub const KEY_EXPOSURE_COMPENSATION: &str = "exposure-compensation";
pub const KEY_MAX_EXPOSURE_COMPENSATION: &str = "max-exposure-compensation";
pub const KEY_MIN_EXPOSURE_COMPENSATION: &str = "min-exposure-compensation";
pub const KEY_EXPOSURE_COMPENSATION_STEP: &str = "exposure-compensation-step";
pub const KEY_AUTO_EXPOSURE_LOCK: &str = "auto-exposure-lock";
pub const KEY_AUTO_EXPOSURE_LOCK_SUPPORTED: &str = "auto-exposure-lock-supported";
pub const KEY_AUTO_WHITEBALANCE_LOCK: &str = "auto-whitebalance-lock";
pub const KEY_AUTO_WHITEBALANCE_LOCK_SUPPORTED: &str = "auto-whitebalance-lock-supported";
pub const KEY_MAX_NUM_METERING_AREAS: &str = "max-num-metering-areas";
pub const KEY_METERING_AREAS: &str = "metering-areas";
pub const KEY_ZOOM: &str = "zoom";
pub const KEY_MAX_ZOOM: &str = "max-zoom";
pub const KEY_ZOOM_RATIOS: &str = "zoom-ratios";
pub const KEY_ZOOM_SUPPORTED: &str = "zoom-supported";
pub const KEY_SMOOTH_ZOOM_SUPPORTED: &str = "smooth-zoom-supported";
pub const KEY_FOCUS_DISTANCES: &str = "focus-distances";
pub const KEY_VIDEO_FRAME_FORMAT: &str = "video-frame-format";
pub const KEY_VIDEO_SIZE: &str = "video-size";
pub const KEY_SUPPORTED_VIDEO_SIZES: &str = "video-size-values";
pub const KEY_PREFERRED_PREVIEW_SIZE_FOR_VIDEO: &str = "preferred-preview-size-for-video";
pub const KEY_MAX_NUM_DETECTED_FACES_HW: &str = "max-num-detected-faces-hw";
pub const KEY_MAX_NUM_DETECTED_FACES_SW: &str = "max-num-detected-faces-sw";
pub const KEY_RECORDING_HINT: &str = "recording-hint";
pub const KEY_VIDEO_SNAPSHOT_SUPPORTED: &str = "video-snapshot-supported";
pub const KEY_VIDEO_STABILIZATION: &str = "video-stabilization";
pub const KEY_VIDEO_STABILIZATION_SUPPORTED: &str = "video-stabilization-supported";
pub const KEY_LIGHTFX: &str = "light-fx";

// Boolean values
pub const TRUE: &str = "true";
pub const FALSE: &str = "false";
pub const FOCUS_DISTANCE_INFINITY: &str = "Infinity";

// White balance
pub const WHITE_BALANCE_AUTO: &str = "auto";
pub const WHITE_BALANCE_INCANDESCENT: &str = "incandescent";
pub const WHITE_BALANCE_FLUORESCENT: &str = "fluorescent";
pub const WHITE_BALANCE_WARM_FLUORESCENT: &str = "warm-fluorescent";
pub const WHITE_BALANCE_DAYLIGHT: &str = "daylight";
pub const WHITE_BALANCE_CLOUDY_DAYLIGHT: &str = "cloudy-daylight";
pub const WHITE_BALANCE_TWILIGHT: &str = "twilight";
pub const WHITE_BALANCE_SHADE: &str = "shade";

// Color effects
pub const EFFECT_NONE: &str = "none";
pub const EFFECT_MONO: &str = "mono";
pub const EFFECT_NEGATIVE: &str = "negative";
pub const EFFECT_SOLARIZE: &str = "solarize";
pub const EFFECT_SEPIA: &str = "sepia";
pub const EFFECT_POSTERIZE: &str = "posterize";
pub const EFFECT_WHITEBOARD: &str = "whiteboard";
pub const EFFECT_BLACKBOARD: &str = "blackboard";
pub const EFFECT_AQUA: &str = "aqua";

// Antibanding
pub const ANTIBANDING_AUTO: &str = "auto";
pub const ANTIBANDING_50HZ: &str = "50hz";
pub const ANTIBANDING_60HZ: &str = "60hz";
pub const ANTIBANDING_OFF: &str = "off";

// Flash modes
pub const FLASH_MODE_OFF: &str = "off";
pub const FLASH_MODE_AUTO: &str = "auto";
pub const FLASH_MODE_ON: &str = "on";
pub const FLASH_MODE_RED_EYE: &str = "red-eye";
pub const FLASH_MODE_TORCH: &str = "torch";

// Scene modes
pub const SCENE_MODE_AUTO: &str = "auto";
pub const SCENE_MODE_ACTION: &str = "action";
pub const SCENE_MODE_PORTRAIT: &str = "portrait";
pub const SCENE_MODE_LANDSCAPE: &str = "landscape";
pub const SCENE_MODE_NIGHT: &str = "night";
pub const SCENE_MODE_NIGHT_PORTRAIT: &str = "night-portrait";
pub const SCENE_MODE_THEATRE: &str = "theatre";
pub const SCENE_MODE_BEACH: &str = "beach";
pub const SCENE_MODE_SNOW: &str = "snow";
pub const SCENE_MODE_SUNSET: &str = "sunset";
pub const SCENE_MODE_STEADYPHOTO: &str = "steadyphoto";
pub const SCENE_MODE_FIREWORKS: &str = "fireworks";
pub const SCENE_MODE_SPORTS: &str = "sports";
pub const SCENE_MODE_PARTY: &str = "party";
pub const SCENE_MODE_CANDLELIGHT: &str = "candlelight";
pub const SCENE_MODE_BARCODE: &str = "barcode";
pub const SCENE_MODE_HDR: &str = "hdr";

// Pixel formats
pub const PIXEL_FORMAT_YUV422SP: &str = "yuv422sp";
pub const PIXEL_FORMAT_YUV420SP: &str = "yuv420sp";
pub const PIXEL_FORMAT_YUV422I: &str = "yuv422i-yuyv";
pub const PIXEL_FORMAT_YUV420P: &str = "yuv420p";
pub const PIXEL_FORMAT_RGB565: &str = "rgb565";
pub const PIXEL_FORMAT_RGBA8888: &str = "rgba8888";
pub const PIXEL_FORMAT_JPEG: &str = "jpeg";
pub const PIXEL_FORMAT_BAYER_RGGB: &str = "bayer-rggb";
pub const PIXEL_FORMAT_ANDROID_OPAQUE: &str = "android-opaque";

// Focus modes
pub const FOCUS_MODE_AUTO: &str = "auto";
pub const FOCUS_MODE_INFINITY: &str = "infinity";
pub const FOCUS_MODE_MACRO: &str = "macro";
pub const FOCUS_MODE_FIXED: &str = "fixed";
pub const FOCUS_MODE_EDOF: &str = "edof";
pub const FOCUS_MODE_CONTINUOUS_VIDEO: &str = "continuous-video";
pub const FOCUS_MODE_CONTINUOUS_PICTURE: &str = "continuous-picture";

// Light effects
pub const LIGHTFX_LOWLIGHT: &str = "low-light";
pub const LIGHTFX_HDR: &str = "high-dynamic-range";

/// Every standard key above, for telling them apart from vendor extensions
pub static STANDARD_KEYS: phf::Set<&'static str> = phf_set! {
    "preview-size",
    "preview-size-values",
    "preview-format",
    "preview-format-values",
    "preview-frame-rate",
    "preview-frame-rate-values",
    "preview-fps-range",
    "preview-fps-range-values",
    "picture-size",
    "picture-size-values",
    "picture-format",
    "picture-format-values",
    "jpeg-thumbnail-width",
    "jpeg-thumbnail-height",
    "jpeg-thumbnail-size-values",
    "jpeg-thumbnail-quality",
    "jpeg-quality",
    "rotation",
    "gps-latitude",
    "gps-longitude",
    "gps-altitude",
    "gps-timestamp",
    "gps-processing-method",
    "whitebalance",
    "whitebalance-values",
    "effect",
    "effect-values",
    "antibanding",
    "antibanding-values",
    "scene-mode",
    "scene-mode-values",
    "flash-mode",
    "flash-mode-values",
    "focus-mode",
    "focus-mode-values",
    "max-num-focus-areas",
    "focus-areas",
    "focal-length",
    "horizontal-view-angle",
    "vertical-view-angle",
    "exposure-compensation",
    "max-exposure-compensation",
    "min-exposure-compensation",
    "exposure-compensation-step",
    "auto-exposure-lock",
    "auto-exposure-lock-supported",
    "auto-whitebalance-lock",
    "auto-whitebalance-lock-supported",
    "max-num-metering-areas",
    "metering-areas",
    "zoom",
    "max-zoom",
    "zoom-ratios",
    "zoom-supported",
    "smooth-zoom-supported",
    "focus-distances",
    "video-frame-format",
    "video-size",
    "video-size-values",
    "preferred-preview-size-for-video",
    "max-num-detected-faces-hw",
    "max-num-detected-faces-sw",
    "recording-hint",
    "video-snapshot-supported",
    "video-stabilization",
    "video-stabilization-supported",
    "light-fx",
};

/// Whether `key` is one of the standard keys
pub fn is_standard_key(key: &str) -> bool {
    STANDARD_KEYS.contains(key)
}

/// Extensions some Samsung and Qualcomm providers report
pub mod vendor {
    pub const KEY_SUPPORTED_ISO_MODES: &str = "iso-values";
    pub const KEY_QC_FACE_RECOGNITION: &str = "face-recognition";
    pub const KEY_QC_SUPPORTED_FACE_RECOGNITION: &str = "face-recognition-values";
    pub const KEY_QC_SUPPORTED_FACE_RECOGNITION_MODES: &str = "face-recognition-values";
    pub const KEY_QC_FACE_DETECTION: &str = "face-detection";
    pub const KEY_QC_SUPPORTED_FACE_DETECTION: &str = "face-detection-values";
    pub const KEY_FACE_DETECTION: &str = "face-detection";
    pub const KEY_SUPPORTED_FACE_DETECTION: &str = "face-detection-values";
    pub const FACE_DETECTION_OFF: &str = "off";
    pub const FACE_DETECTION_ON: &str = "on";
    pub const KEY_ZSL: &str = "zsl";
    pub const KEY_SUPPORTED_ZSL_MODES: &str = "zsl-values";
    pub const ZSL_OFF: &str = "off";
    pub const ZSL_ON: &str = "on";
    pub const KEY_ISO_MODE: &str = "iso";
    pub const KEY_CAMERA_MODE: &str = "camera-mode";
    pub const KEY_SAMSUNG_CAMERA_MODE: &str = "cam_mode";
    pub const KEY_SELECTABLE_ZONE_AF: &str = "selectable-zone-af";
    pub const KEY_SUPPORTED_SELECTABLE_ZONE_AF: &str = "selectable-zone-af-values";
    pub const SELECTABLE_ZONE_AF_AUTO: &str = "auto";
    pub const SELECTABLE_ZONE_AF_SPOT_METERING: &str = "spot-metering";
    pub const SELECTABLE_ZONE_AF_CENTER_WEIGHTED: &str = "center-weighted";
    pub const SELECTABLE_ZONE_AF_FRAME_AVERAGE: &str = "frame-average";
    pub const KEY_PREVIEW_FRAME_RATE_MODE: &str = "preview-frame-rate-mode";
    pub const KEY_SUPPORTED_PREVIEW_FRAME_RATE_MODES: &str = "preview-frame-rate-modes";
    pub const KEY_PREVIEW_FRAME_RATE_AUTO_MODE: &str = "frame-rate-auto";
    pub const KEY_PREVIEW_FRAME_RATE_FIXED_MODE: &str = "frame-rate-fixed";
    pub const KEY_SHARPNESS: &str = "sharpness";
    pub const KEY_SATURATION: &str = "saturation";
    pub const KEY_CONTRAST: &str = "contrast";
    pub const KEY_SCENE_DETECT: &str = "scene-detect";
    pub const KEY_SUPPORTED_SCENE_DETECT: &str = "scene-detect-values";
    pub const SCENE_DETECT_OFF: &str = "off";
    pub const SCENE_DETECT_ON: &str = "on";
    pub const KEY_WEATHER: &str = "weather";
    pub const KEY_CITYID: &str = "contextualtag-cityid";
    pub const KEY_TOUCH_INDEX_AEC: &str = "touch-index-aec";
    pub const KEY_TOUCH_INDEX_AF: &str = "touch-index-af";
    pub const KEY_TOUCH_AF_AEC: &str = "touch-af-aec";
    pub const KEY_SUPPORTED_TOUCH_AF_AEC: &str = "touch-af-aec-values";
    pub const TOUCH_AF_AEC_OFF: &str = "touch-off";
    pub const TOUCH_AF_AEC_ON: &str = "touch-on";
    pub const KEY_MEMORY_COLOR_ENHANCEMENT: &str = "mce";
    pub const KEY_LENSSHADE: &str = "lensshade";
    pub const KEY_REDEYE_REDUCTION: &str = "redeye-reduction";
    pub const KEY_SUPPORTED_REDEYE_REDUCTION: &str = "redeye-reduction-values";
    pub const REDEYE_REDUCTION_ENABLE: &str = "enable";
    pub const REDEYE_REDUCTION_DISABLE: &str = "disable";
    pub const KEY_GPS_LATITUDE_REF: &str = "gps-latitude-ref";
    pub const KEY_GPS_LONGITUDE_REF: &str = "gps-longitude-ref";
    pub const KEY_GPS_ALTITUDE_REF: &str = "gps-altitude-ref";
    pub const KEY_GPS_STATUS: &str = "gps-status";
    pub const KEY_EXIF_DATETIME: &str = "exif-datetime";
    pub const KEY_AUTO_EXPOSURE: &str = "auto-exposure";
    pub const KEY_SUPPORTED_AUTO_EXPOSURE: &str = "auto-exposure-values";
    pub const KEY_SUPPORTED_LENSSHADE_MODES: &str = "lensshade-values";
    pub const LENSSHADE_ENABLE: &str = "enable";
    pub const LENSSHADE_DISABLE: &str = "disable";
    pub const MCE_ENABLE: &str = "enable";
    pub const MCE_DISABLE: &str = "disable";
    pub const ISO_AUTO: &str = "auto";
    pub const ISO_HJR: &str = "ISO_HJR";
    pub const ISO_100: &str = "ISO100";
    pub const ISO_200: &str = "ISO200";
    pub const ISO_400: &str = "ISO400";
    pub const ISO_800: &str = "ISO800";
    pub const ISO_1600: &str = "ISO1600";
    pub const ISO_3200: &str = "ISO3200";
    pub const ISO_6400: &str = "ISO6400";
    pub const KEY_SUPPORTED_HFR_SIZES: &str = "hfr-size-values";
    pub const KEY_SUPPORTED_MEM_COLOR_ENHANCE_MODES: &str = "mce-values";
    pub const VIDEO_HFR_OFF: &str = "off";
    pub const VIDEO_HFR_2X: &str = "60";
    pub const VIDEO_HFR_3X: &str = "90";
    pub const VIDEO_HFR_4X: &str = "120";
    pub const KEY_VIDEO_HIGH_FRAME_RATE: &str = "video-hfr";
    pub const KEY_SUPPORTED_VIDEO_HIGH_FRAME_RATE_MODES: &str = "video-hfr-values";
    pub const KEY_HISTOGRAM: &str = "histogram";
    pub const KEY_SUPPORTED_HISTOGRAM_MODES: &str = "histogram-values";
    pub const HISTOGRAM_ENABLE: &str = "enable";
    pub const HISTOGRAM_DISABLE: &str = "disable";
    pub const SKIN_TONE_ENHANCEMENT_ENABLE: &str = "enable";
    pub const SKIN_TONE_ENHANCEMENT_DISABLE: &str = "disable";
    pub const KEY_SKIN_TONE_ENHANCEMENT: &str = "skinToneEnhancement";
    pub const KEY_SUPPORTED_SKIN_TONE_ENHANCEMENT_MODES: &str = "skinToneEnhancement-values";
    pub const DENOISE_OFF: &str = "denoise-off";
    pub const DENOISE_ON: &str = "denoise-on";
    pub const KEY_DENOISE: &str = "denoise";
    pub const KEY_SUPPORTED_DENOISE: &str = "denoise-values";
    pub const EFFECT_EMBOSS: &str = "emboss";
    pub const EFFECT_SKETCH: &str = "sketch";
    pub const EFFECT_NEON: &str = "neon";
    pub const SCENE_MODE_FLOWERS: &str = "flowers";
    pub const SCENE_MODE_AR: &str = "AR";
    pub const PIXEL_FORMAT_YUV420SP_ADRENO: &str = "yuv420sp-adreno";
    pub const PIXEL_FORMAT_RAW: &str = "raw";
    pub const PIXEL_FORMAT_YV12: &str = "yuv420p";
    pub const PIXEL_FORMAT_NV12: &str = "nv12";
    pub const EFFECT_CARTOONIZE: &str = "cartoonize";
    pub const EFFECT_POINT_RED_YELLOW: &str = "point-red-yellow";
    pub const EFFECT_POINT_GREEN: &str = "point-green";
    pub const EFFECT_POINT_BLUE: &str = "point-blue";
    pub const EFFECT_VINTAGE_COLD: &str = "vintage-cold";
    pub const EFFECT_VINTAGE_WARM: &str = "vintage-warm";
    pub const EFFECT_WASHED: &str = "washed";
    pub const SCENE_MODE_BACKLIGHT: &str = "backlight";
    pub const SCENE_MODE_ASD: &str = "asd";
}
