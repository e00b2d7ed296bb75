//! Output file naming.
//!
//! Destination paths are rendered from a configurable pattern with `{title}`,
//! `{lang}`, and `{height}` tokens. The rendered name never carries an
//! extension: yt-dlp appends the container's native extension through its
//! `%(ext)s` output template. Titles come straight from the library and may
//! contain characters that are not valid in file names, so they are sanitized
//! before substitution.

/// Render a naming pattern for one item.
///
/// Unknown tokens are left untouched so a misspelled pattern stays visible in
/// the produced file name instead of silently disappearing.
///
/// # Example
///
/// ```rust
/// use reelscout::naming::render_pattern;
///
/// let name = render_pattern("{title}-trailer-{lang}-{height}p", "Alien", "en", 1080);
/// assert_eq!(name, "Alien-trailer-en-1080p");
/// ```
pub fn render_pattern(pattern: &str, title: &str, lang: &str, height: u32) -> String {
    pattern
        .replace("{title}", &sanitize_component(title))
        .replace("{lang}", lang)
        .replace("{height}", &height.to_string())
}

/// Strip path separators and characters that are reserved on common
/// filesystems from a single path component.
///
/// Reserved characters are replaced with `_`; leading/trailing whitespace and
/// trailing dots are trimmed (Windows rejects names ending in a dot).
pub fn sanitize_component(component: &str) -> String {
    let cleaned: String = component
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    cleaned.trim().trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_pattern_all_tokens() {
        let name = render_pattern("{title}-trailer-{lang}-{height}p", "Alien", "en", 1080);
        assert_eq!(name, "Alien-trailer-en-1080p");
    }

    #[test]
    fn test_render_pattern_repeated_token() {
        let name = render_pattern("{title}/{title}", "Up", "en", 720);
        assert_eq!(name, "Up/Up");
    }

    #[test]
    fn test_render_pattern_unknown_token_kept() {
        let name = render_pattern("{title}-{year}", "Up", "en", 720);
        assert_eq!(name, "Up-{year}");
    }

    #[test]
    fn test_sanitize_separators() {
        assert_eq!(sanitize_component("AC/DC: Live"), "AC_DC_ Live");
        assert_eq!(sanitize_component("a\\b"), "a_b");
    }

    #[test]
    fn test_sanitize_reserved_characters() {
        assert_eq!(sanitize_component("what?*\"<>|"), "what______");
    }

    #[test]
    fn test_sanitize_trims_whitespace_and_dots() {
        assert_eq!(sanitize_component("  Mission.  "), "Mission");
    }

    #[test]
    fn test_sanitize_plain_title_untouched() {
        assert_eq!(sanitize_component("Alien"), "Alien");
    }
}
