//! # Image Resizing
//!
//! Rewrites image references so each one carries the configured width.
//!
//! ## Passes
//!
//! Content goes through two independent regex passes:
//!
//! 1. **Wiki embeds** (`![[path|width]]`): the path keeps everything before its
//!    first `|`, the width is replaced.
//! 2. **Inline embeds** (`![alt|width](path)`): run over the output of pass 1.
//!    The alt text keeps everything before its first `|`; if URL rewriting is
//!    enabled, width hints inside the path are rewritten too (see [`url_width`]).
//!
//! Existing widths are always stripped and regenerated, so running the
//! transform twice gives the same text as running it once.
//!
//! ## Modules
//!
//! - **`kinds`**: `WikiEmbed` and `InlineEmbed`, owning their delimiters and patterns
//! - **`url_width`**: detection and rewriting of URL width hints
//! - **`document`**: `TextDocument` host abstraction and write-if-changed helper

pub mod document;
pub mod kinds;
pub mod url_width;

#[cfg(test)]
mod tests;

use std::borrow::Cow;

use regex::Captures;

use crate::settings::ResizeSettings;
use kinds::{InlineEmbed, WikiEmbed};

pub use document::{TextDocument, resize_images_in_document};

/// Counts of the references touched by one transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResizeReport {
    pub wiki_images: usize,
    pub inline_images: usize,
    pub url_params_rewritten: usize,
}

impl ResizeReport {
    pub fn total_images(&self) -> usize {
        self.wiki_images + self.inline_images
    }
}

/// Rewrites every image reference in `content` to carry `settings.image_width`.
pub fn resize_images_in_content(content: &str, settings: &ResizeSettings) -> String {
    resize_images_in_content_with_report(content, settings).0
}

/// Like [`resize_images_in_content`], also reporting how many references matched.
///
/// A width of 0 leaves the content untouched.
pub fn resize_images_in_content_with_report(
    content: &str,
    settings: &ResizeSettings,
) -> (String, ResizeReport) {
    let mut report = ResizeReport::default();
    let width = settings.image_width;

    if width == 0 {
        log::warn!("Image width is 0, leaving image references unchanged");
        return (content.to_string(), report);
    }

    let content = WikiEmbed::regex().replace_all(content, |caps: &Captures| {
        report.wiki_images += 1;
        WikiEmbed::render(&caps[1], width)
    });

    let content = InlineEmbed::regex().replace_all(&content, |caps: &Captures| {
        report.inline_images += 1;

        let mut path = Cow::Borrowed(&caps[2]);
        if settings.resize_url_width_params && url_width::contains_width_param(&path) {
            path = Cow::Owned(url_width::replace_url_width_param(&path, width));
            report.url_params_rewritten += 1;
        }

        InlineEmbed::render(&caps[1], &path, width)
    });

    log::debug!(
        "Resized {} wiki and {} inline images ({} URL width params) to {width}px",
        report.wiki_images,
        report.inline_images,
        report.url_params_rewritten
    );

    (content.into_owned(), report)
}
