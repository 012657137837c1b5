//! Block serialization to stage-play markup.

use crate::constants::markup::{CHARNAME, DIALOGUE_ENV, STAGE};
use crate::types::Block;

/// Render blocks to markup text ending in exactly one newline.
pub fn render_blocks(blocks: &[Block]) -> String {
    let mut out_lines: Vec<String> = Vec::new();

    for block in blocks {
        match block {
            Block::Stage { text } => {
                out_lines.push(command(STAGE, text));
            }
            Block::Dialogue(dialogue) => {
                out_lines.push(command(CHARNAME, dialogue.character()));
                if let Some(note) = dialogue.stage_note().filter(|n| !n.is_empty()) {
                    out_lines.push(command(STAGE, note));
                }
                out_lines.push(format!("\\begin{{{DIALOGUE_ENV}}}"));
                out_lines.extend(dialogue.lines().iter().cloned());
                out_lines.push(format!("\\end{{{DIALOGUE_ENV}}}"));
            }
        }
        out_lines.push(String::new());
    }

    let mut rendered = out_lines.join("\n").trim_end().to_string();
    rendered.push('\n');
    rendered
}

fn command(name: &str, arg: &str) -> String {
    format!("\\{name}{{{arg}}}")
}
