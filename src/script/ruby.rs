//! Plain-text projection of `\ruby{BASE}{READING}` annotations.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Regex matching a complete ruby span, capturing the base text.
#[allow(clippy::expect_used)]
static RE_RUBY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\ruby\{([^}]*)\}\{[^}]*\}").expect("valid regex: RE_RUBY")
});

/// Replace every ruby span with its base text.
///
/// Unterminated spans are left untouched. Borrows when there is nothing
/// to replace.
pub fn plain_text(s: &str) -> Cow<'_, str> {
    RE_RUBY.replace_all(s, "$1")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_plain_text_replaces_spans() {
        assert_eq!(plain_text(r"\ruby{外}{がい}\ruby{景}{けい}"), "外景");
        assert_eq!(plain_text(r"張三說：\ruby{你好}{nǐ hǎo}！"), "張三說：你好！");
    }

    #[test]
    fn test_plain_text_is_idempotent_on_plain_input() {
        let plain = "李四(笑)：你來了";
        assert!(matches!(plain_text(plain), Cow::Borrowed(_)));
        assert_eq!(plain_text(plain), plain);
        let once = plain_text(r"\ruby{海}{うみ}邊").into_owned();
        assert_eq!(plain_text(&once), once);
    }

    #[test]
    fn test_plain_text_leaves_no_markup() {
        let out = plain_text(r"\ruby{周}{zhōu}\ruby{星}{xīng}\ruby{馳}{chí}-");
        assert!(!out.contains(r"\ruby{"));
        assert_eq!(out, "周星馳-");
    }

    #[test]
    fn test_plain_text_keeps_unterminated_span() {
        assert_eq!(plain_text(r"\ruby{張}{zh"), r"\ruby{張}{zh");
    }

    #[test]
    fn test_plain_text_empty_reading() {
        assert_eq!(plain_text(r"\ruby{王}{}五"), "王五");
    }
}
