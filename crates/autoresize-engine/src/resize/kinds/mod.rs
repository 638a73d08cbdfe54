//! # Image Embed Kinds
//!
//! Each embed syntax owns its delimiters and its match pattern.
//!
//! ## Types
//!
//! - **`WikiEmbed`**: `![[path]]`, `![[path|width]]`
//! - **`InlineEmbed`**: `![alt](path)`, `![alt|width](path)`
//!
//! Both recognize the same image extensions, matched case-insensitively.
//! The rewriter calls these types; it never hardcodes `![[` or `](`.

pub mod inline_embed;
pub mod wiki_embed;

pub use inline_embed::InlineEmbed;
pub use wiki_embed::WikiEmbed;

/// File extensions treated as images.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "svg"];

/// Separator between a reference body and its width.
pub const SIZE_SEPARATOR: char = '|';

/// Regex fragment matching `.` followed by any image extension.
fn extension_pattern() -> String {
    format!(r"\.(?i:{})", IMAGE_EXTENSIONS.join("|"))
}

/// Drops everything from the first `|` on.
fn strip_size(body: &str) -> &str {
    body.split_once(SIZE_SEPARATOR)
        .map_or(body, |(head, _)| head)
}
