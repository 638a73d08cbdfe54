pub mod io;
pub mod resize;
pub mod settings;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use resize::{
    ResizeReport, TextDocument, resize_images_in_content, resize_images_in_content_with_report,
    resize_images_in_document,
    url_width::{WidthParam, contains_width_param, replace_url_width_param},
};
pub use settings::*;
