use std::sync::OnceLock;

use regex::Regex;

use super::{SIZE_SEPARATOR, extension_pattern, strip_size};

pub struct WikiEmbed;

impl WikiEmbed {
    pub const OPEN: &'static str = "![[";
    pub const CLOSE: &'static str = "]]";

    /// Matches `![[<path>.<ext>]]` with an optional `|...` suffix.
    ///
    /// Group 1 is the path. A path containing `]` never matches.
    pub fn regex() -> &'static Regex {
        static WIKI_EMBED_REGEX: OnceLock<Regex> = OnceLock::new();
        WIKI_EMBED_REGEX.get_or_init(|| {
            Regex::new(&format!(
                r"!\[\[([^\]]+{})(?:\|[^\]]+)?\]\]",
                extension_pattern()
            ))
            .expect("Invalid wiki embed regex")
        })
    }

    pub fn render(path: &str, width: u32) -> String {
        format!(
            "{}{}{SIZE_SEPARATOR}{width}{}",
            Self::OPEN,
            strip_size(path),
            Self::CLOSE
        )
    }
}
