use serde::{Deserialize, Serialize};

/// Width applied when nothing else is configured.
pub const DEFAULT_IMAGE_WIDTH: u32 = 150;

/// Per-call settings for the image rewriter.
///
/// Passed explicitly to every transform; the engine keeps no settings of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeSettings {
    /// Target width in pixels written into every image reference.
    pub image_width: u32,
    /// Also rewrite width hints embedded in inline image URLs (`w_424`, `width=300`).
    pub resize_url_width_params: bool,
}

impl ResizeSettings {
    pub fn new(image_width: u32, resize_url_width_params: bool) -> Self {
        Self {
            image_width,
            resize_url_width_params,
        }
    }

    pub fn with_width(self, image_width: u32) -> Self {
        Self {
            image_width,
            ..self
        }
    }
}

impl Default for ResizeSettings {
    fn default() -> Self {
        Self {
            image_width: DEFAULT_IMAGE_WIDTH,
            resize_url_width_params: true,
        }
    }
}
