//! Core block types produced by the classifier.

use serde::{Deserialize, Serialize};

/// One speaker's turn.
///
/// Always holds at least one line: the text that followed the speaker
/// separator on the header line, even when that text was empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDialogue")]
pub struct Dialogue {
    character: String,
    stage_note: Option<String>,
    lines: Vec<String>,
}

/// Unchecked wire form of [`Dialogue`].
#[derive(Deserialize)]
struct RawDialogue {
    character: String,
    #[serde(default)]
    stage_note: Option<String>,
    lines: Vec<String>,
}

impl TryFrom<RawDialogue> for Dialogue {
    type Error = String;

    fn try_from(raw: RawDialogue) -> Result<Self, Self::Error> {
        if raw.lines.is_empty() {
            return Err(format!("dialogue for {} has no lines", raw.character));
        }
        Ok(Self {
            character: raw.character,
            stage_note: raw.stage_note,
            lines: raw.lines,
        })
    }
}

impl Dialogue {
    /// Create a dialogue turn seeded with its first line.
    pub fn new(
        character: impl Into<String>,
        stage_note: Option<String>,
        first_line: impl Into<String>,
    ) -> Self {
        Self {
            character: character.into(),
            stage_note,
            lines: vec![first_line.into()],
        }
    }

    /// Speaker name, annotation markup preserved.
    pub fn character(&self) -> &str {
        &self.character
    }

    /// Parenthetical performance note attached to the header.
    pub fn stage_note(&self) -> Option<&str> {
        self.stage_note.as_deref()
    }

    /// Append a continuation line.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Dialogue lines in source order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// A unit of output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Stand-alone stage direction or scene heading.
    Stage {
        /// Direction text, annotation markup preserved.
        text: String,
    },
    /// A speaker's turn.
    Dialogue(Dialogue),
}

impl Block {
    /// Build a stage block.
    pub fn stage(text: impl Into<String>) -> Self {
        Self::Stage { text: text.into() }
    }

    /// Returns the dialogue turn, if this is one.
    pub const fn as_dialogue(&self) -> Option<&Dialogue> {
        match self {
            Self::Dialogue(d) => Some(d),
            Self::Stage { .. } => None,
        }
    }

    /// Returns the human-readable kind of this block.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Stage { .. } => "Stage",
            Self::Dialogue(_) => "Dialogue",
        }
    }
}
