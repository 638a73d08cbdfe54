use std::sync::OnceLock;

use regex::Regex;

use super::{SIZE_SEPARATOR, extension_pattern, strip_size};

pub struct InlineEmbed;

impl InlineEmbed {
    pub const ALT_OPEN: &'static str = "![";
    pub const ALT_CLOSE: &'static str = "]";
    pub const PATH_OPEN: &'static str = "(";
    pub const PATH_CLOSE: &'static str = ")";

    /// Matches `![<alt>](<path>)` where the path contains an image extension
    /// anywhere before the closing parenthesis, so query strings and fragments
    /// stay part of the path.
    ///
    /// Group 1 is the alt text, group 2 the path.
    pub fn regex() -> &'static Regex {
        static INLINE_EMBED_REGEX: OnceLock<Regex> = OnceLock::new();
        INLINE_EMBED_REGEX.get_or_init(|| {
            Regex::new(&format!(
                r"!\[([^\]]*)\]\(([^)]*{}[^)]*)\)",
                extension_pattern()
            ))
            .expect("Invalid inline embed regex")
        })
    }

    pub fn render(alt: &str, path: &str, width: u32) -> String {
        format!(
            "{}{}{SIZE_SEPARATOR}{width}{}{}{path}{}",
            Self::ALT_OPEN,
            strip_size(alt),
            Self::ALT_CLOSE,
            Self::PATH_OPEN,
            Self::PATH_CLOSE
        )
    }
}
