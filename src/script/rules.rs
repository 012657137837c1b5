//! Static classification data owned by the classifier.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::rules::{DISCARD_PREFIX_PATTERN, DISCARD_SUBSTRINGS, STAGE_KEYWORDS};

/// Regex matching forum boilerplate at the start of a line.
#[allow(clippy::expect_used)]
static RE_DISCARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DISCARD_PREFIX_PATTERN).expect("valid regex: RE_DISCARD")
});

/// Keywords and noise markers used to classify lines.
///
/// All tests are made against the plain-text projection of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    stage_keywords: Vec<String>,
    discard_substrings: Vec<String>,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            stage_keywords: STAGE_KEYWORDS.iter().map(ToString::to_string).collect(),
            discard_substrings: DISCARD_SUBSTRINGS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Rules {
    /// Add speaker names that should be treated as scene headings.
    #[must_use]
    pub fn with_stage_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique(&mut self.stage_keywords, keywords);
        self
    }

    /// Add substrings that mark a line as noise.
    #[must_use]
    pub fn with_discard_substrings<I, S>(mut self, substrings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique(&mut self.discard_substrings, substrings);
        self
    }

    /// Speaker names treated as scene headings.
    pub fn stage_keywords(&self) -> &[String] {
        &self.stage_keywords
    }

    /// Substrings that mark a line as noise.
    pub fn discard_substrings(&self) -> &[String] {
        &self.discard_substrings
    }

    /// Whether a speaker name is really a scene heading.
    pub fn is_stage_keyword(&self, plain_name: &str) -> bool {
        self.stage_keywords.iter().any(|k| k == plain_name)
    }

    /// Whether a line is forum or pagination noise.
    pub fn is_noise(&self, plain_line: &str) -> bool {
        RE_DISCARD.is_match(plain_line)
            || self.discard_substrings.iter().any(|s| plain_line.contains(s.as_str()))
    }
}

fn extend_unique<I, S>(target: &mut Vec<String>, items: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    for item in items {
        let item = item.into();
        if !item.is_empty() && !target.contains(&item) {
            target.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_default_stage_keywords() {
        let rules = Rules::default();
        assert!(rules.is_stage_keyword("外景"));
        assert!(rules.is_stage_keyword("內景"));
        assert!(rules.is_stage_keyword("場景"));
        assert!(!rules.is_stage_keyword("外景二"));
        assert!(!rules.is_stage_keyword("張三"));
    }

    #[test]
    fn test_forum_boilerplate_is_noise() {
        let rules = Rules::default();
        for line in [
            "周星馳-第一部",
            "由 Admin 發表",
            "Admin 在 2010-01-01 發表",
            "Admin",
            "文章數：100",
            "注冊日期：2009",
            "LIKEDISLIKE",
            "回復：好看",
            "網友作了第3頁",
        ] {
            assert!(rules.is_noise(line), "expected noise: {line}");
        }
    }

    #[test]
    fn test_dialogue_is_not_noise() {
        let rules = Rules::default();
        assert!(!rules.is_noise("張三：你好"));
        assert!(!rules.is_noise("Admin說了算"));
        assert!(!rules.is_noise("他回復：好"));
        assert!(!rules.is_noise("周星馳"));
    }

    #[test]
    fn test_extended_rules() {
        let rules = Rules::default()
            .with_stage_keywords(["閃回", "", "外景"])
            .with_discard_substrings(["（待續）"]);
        assert!(rules.is_stage_keyword("閃回"));
        assert_eq!(rules.stage_keywords().len(), 4);
        assert!(rules.is_noise("第一集（待續）"));
    }
}
