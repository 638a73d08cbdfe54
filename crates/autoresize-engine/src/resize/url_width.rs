//! Width hints embedded in image URLs.
//!
//! Three forms are recognized, each as a word-bounded substring:
//!
//! | Form         | Example            | Rewritten as  |
//! |--------------|--------------------|---------------|
//! | `Underscore` | `w_424` (CDN)      | `w_<n>`       |
//! | `Width`      | `width=300`, `Width:300` | `width=<n>` |
//! | `Short`      | `w=300`, `w:300`   | `w=<n>`       |
//!
//! Word boundaries are ASCII-only: a non-ASCII letter next to a hint does not
//! count as part of the word. Only `width` is case-insensitive. When several forms are present, the first
//! one in [`WidthParam::PRECEDENCE`] wins and the others are left alone.

use std::sync::OnceLock;

use regex::{NoExpand, Regex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthParam {
    Underscore,
    Width,
    Short,
}

impl WidthParam {
    pub const PRECEDENCE: [WidthParam; 3] =
        [WidthParam::Underscore, WidthParam::Width, WidthParam::Short];

    fn regex(self) -> &'static Regex {
        static UNDERSCORE_REGEX: OnceLock<Regex> = OnceLock::new();
        static WIDTH_REGEX: OnceLock<Regex> = OnceLock::new();
        static SHORT_REGEX: OnceLock<Regex> = OnceLock::new();

        match self {
            WidthParam::Underscore => UNDERSCORE_REGEX.get_or_init(|| {
                Regex::new(r"(?-u:\b)w_[0-9]+(?-u:\b)").expect("Invalid w_ regex")
            }),
            WidthParam::Width => WIDTH_REGEX.get_or_init(|| {
                Regex::new(r"(?-u:\b)(?i:width)[=:][0-9]+(?-u:\b)")
                    .expect("Invalid width= regex")
            }),
            WidthParam::Short => SHORT_REGEX.get_or_init(|| {
                Regex::new(r"(?-u:\b)w[=:][0-9]+(?-u:\b)").expect("Invalid w= regex")
            }),
        }
    }

    /// Canonical text for this form carrying `width`.
    pub fn render(self, width: u32) -> String {
        match self {
            WidthParam::Underscore => format!("w_{width}"),
            WidthParam::Width => format!("width={width}"),
            WidthParam::Short => format!("w={width}"),
        }
    }

    pub fn is_present_in(self, url: &str) -> bool {
        self.regex().is_match(url)
    }

    /// The highest-precedence form present in `url`.
    pub fn detect(url: &str) -> Option<Self> {
        Self::PRECEDENCE
            .into_iter()
            .find(|param| param.is_present_in(url))
    }

    /// Rewrites every occurrence of this form in `url`.
    pub fn replace_all(self, url: &str, width: u32) -> String {
        self.regex()
            .replace_all(url, NoExpand(&self.render(width)))
            .into_owned()
    }
}

/// Whether `url` carries any recognized width hint.
pub fn contains_width_param(url: &str) -> bool {
    WidthParam::detect(url).is_some()
}

/// Rewrites the highest-precedence width hint in `url` to `width`.
///
/// Returns `url` unchanged if it carries no width hint.
pub fn replace_url_width_param(url: &str, width: u32) -> String {
    match WidthParam::detect(url) {
        Some(param) => param.replace_all(url, width),
        None => url.to_string(),
    }
}
