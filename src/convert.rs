//! File-level conversion.
//!
//! Reads a whole script, formats it in memory, then writes the result in one
//! piece so a failed run never leaves partial output behind.

use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};
use crate::script::{parse_script, render_blocks, Rules};
use crate::types::Block;

/// Output flavor written by [`convert_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Stage-play markup.
    #[default]
    Markup,
    /// Pretty-printed JSON block list.
    Json,
}

/// Counts describing one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Stage blocks written.
    pub stage_blocks: usize,
    /// Dialogue blocks written.
    pub dialogue_blocks: usize,
    /// Dialogue lines across all dialogue blocks.
    pub dialogue_lines: usize,
    /// Source lines dropped as noise.
    pub discarded_lines: usize,
}

impl Summary {
    fn from_blocks(blocks: &[Block], discarded_lines: usize) -> Self {
        let mut summary = Self { discarded_lines, ..Self::default() };
        for block in blocks {
            match block {
                Block::Stage { .. } => summary.stage_blocks += 1,
                Block::Dialogue(d) => {
                    summary.dialogue_blocks += 1;
                    summary.dialogue_lines += d.lines().len();
                }
            }
        }
        summary
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} stage blocks, {} dialogue blocks ({} lines), {} noise lines dropped",
            self.stage_blocks, self.dialogue_blocks, self.dialogue_lines, self.discarded_lines
        )
    }
}

/// Serialize blocks as pretty JSON with a trailing newline.
pub fn render_json(blocks: &[Block]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(blocks)
        .map_err(|e| Error::Msg(format!("Failed to serialize blocks: {e}")))?;
    json.push('\n');
    Ok(json)
}

/// Read a script file.
pub fn read_script(path: &Path) -> Result<String> {
    fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))
}

/// Convert `input` into `output` using the given rules.
pub fn convert_file(
    input: &Path,
    output: &Path,
    rules: &Rules,
    format: OutputFormat,
) -> Result<Summary> {
    let text = read_script(input)?;
    let parsed = parse_script(&text, rules);

    let rendered = match format {
        OutputFormat::Markup => render_blocks(&parsed.blocks),
        OutputFormat::Json => render_json(&parsed.blocks)?,
    };

    fs_err::write(output, rendered).map_err(|e| Error::io(e, output.to_path_buf()))?;

    let summary = Summary::from_blocks(&parsed.blocks, parsed.discarded_lines);
    tracing::debug!("Converted {} to {}: {summary}", input.display(), output.display());
    Ok(summary)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::types::Dialogue;

    #[test]
    fn test_summary_counts() {
        let mut d = Dialogue::new("張三", None, "你好");
        d.push_line("再見");
        let blocks = vec![Block::stage("外景：海邊"), Block::Dialogue(d)];
        let summary = Summary::from_blocks(&blocks, 2);
        assert_eq!(
            summary,
            Summary { stage_blocks: 1, dialogue_blocks: 1, dialogue_lines: 2, discarded_lines: 2 }
        );
        assert_eq!(
            summary.to_string(),
            "1 stage blocks, 1 dialogue blocks (2 lines), 2 noise lines dropped"
        );
    }

    #[test]
    fn test_render_json_is_array() {
        let json = render_json(&[Block::stage("夜")]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["type"], "stage");
        assert!(json.ends_with('\n'));
    }

    #[test]
    fn test_missing_input_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.tex");
        let output = dir.path().join("out.tex");
        let err =
            convert_file(&input, &output, &Rules::default(), OutputFormat::Markup).unwrap_err();
        assert!(matches!(err, Error::Io { path: Some(ref p), .. } if *p == input));
        assert!(!output.exists());
    }
}
