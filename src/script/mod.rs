//! Script formatting pipeline.
//!
//! Raw text flows through the line merger, the classifier (which consults
//! the ruby stripper for every decision) and the block renderer.

pub mod classify;
pub mod merge;
pub mod render;
pub mod rules;
pub mod ruby;

pub use classify::{Classifier, ParseOutput};
pub use merge::{merge_parenthetical_lines, split_lines};
pub use render::render_blocks;
pub use rules::Rules;
pub use ruby::plain_text;

use crate::types::Block;

/// Merge and classify a whole document.
pub fn parse_script(text: &str, rules: &Rules) -> ParseOutput {
    let merged = merge_parenthetical_lines(split_lines(text));
    Classifier::new(rules).classify_all(&merged)
}

/// Classify a whole document into blocks.
pub fn parse_blocks(text: &str, rules: &Rules) -> Vec<Block> {
    parse_script(text, rules).blocks
}

/// Reformat a ruby-annotated script into stage-play markup.
pub fn format_script(text: &str, rules: &Rules) -> String {
    render_blocks(&parse_blocks(text, rules))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn format(text: &str) -> String {
        format_script(text, &Rules::default())
    }

    #[test]
    fn test_wrapped_parenthetical_becomes_stage() {
        assert_eq!(format("（他轉身\n離開）\n"), "\\stage{他轉身離開}\n");
    }

    #[test]
    fn test_merged_parenthetical_closes_dialogue() {
        let out = format("張三：你好\n(他\n走了)\n再見");
        assert_eq!(
            out,
            concat!(
                "\\charname{張三}\n\\begin{dialogue}\n你好\n\\end{dialogue}\n\n",
                "\\stage{他走了}\n\n\\stage{再見}\n",
            )
        );
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(format("張三：你好\r\n你好嗎\r\n"), format("張三：你好\n你好嗎\n"));
    }

    #[test]
    fn test_lone_carriage_return_splits_lines() {
        assert_eq!(
            format("張三：你好\r今天"),
            "\\charname{張三}\n\\begin{dialogue}\n你好\n今天\n\\end{dialogue}\n"
        );
    }

    #[test]
    fn test_every_dialogue_has_lines() {
        let text = "張三：\n\n李四：\n（笑）\n王五：好\n接著說";
        for block in parse_blocks(text, &Rules::default()) {
            if let Some(d) = block.as_dialogue() {
                assert!(!d.lines().is_empty());
            }
        }
    }
}
