//! Line classification and block assembly.
//!
//! Each merged line is tested, in order, as blank, noise, speaker line,
//! parenthetical, and finally as dialogue continuation or loose stage text.

use crate::constants::syntax::{BRACKET_PAIRS, CLOSE_BRACKETS, OPEN_BRACKETS, SPEAKER_SEPARATOR};
use crate::types::{Block, Dialogue};

use super::ruby::plain_text;
use super::rules::Rules;

/// Blocks produced from one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutput {
    /// Blocks in source order.
    pub blocks: Vec<Block>,
    /// Number of lines dropped as noise.
    pub discarded_lines: usize,
}

/// Stateful classifier that turns merged lines into blocks.
#[derive(Debug)]
pub struct Classifier<'r> {
    rules: &'r Rules,
    blocks: Vec<Block>,
    /// Index of the dialogue block still accepting continuation lines.
    current_dialogue: Option<usize>,
    blank_seen: bool,
    discarded_lines: usize,
}

impl<'r> Classifier<'r> {
    /// Create a classifier using the given rules.
    pub const fn new(rules: &'r Rules) -> Self {
        Self {
            rules,
            blocks: Vec::new(),
            current_dialogue: None,
            blank_seen: true,
            discarded_lines: 0,
        }
    }

    /// Classify every line and return the finished blocks.
    pub fn classify_all<I, S>(mut self, lines: I) -> ParseOutput
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.push_line(line.as_ref());
        }
        self.finish()
    }

    /// Classify a single merged line.
    pub fn push_line(&mut self, raw: &str) {
        let s = raw.trim();
        if s.is_empty() {
            self.blank_seen = true;
            return;
        }

        if self.rules.is_noise(&plain_text(s)) {
            tracing::debug!("Discarding noise line: {s}");
            self.discarded_lines += 1;
            return;
        }

        if let Some((name, text)) = s.split_once(SPEAKER_SEPARATOR) {
            self.push_speaker_line(name.trim(), text.trim());
        } else if s.starts_with(OPEN_BRACKETS) || s.ends_with(CLOSE_BRACKETS) {
            let inner = s.strip_prefix(OPEN_BRACKETS).unwrap_or(s);
            let inner = inner.strip_suffix(CLOSE_BRACKETS).unwrap_or(inner);
            self.push_stage(inner.trim());
        } else if let Some(dialogue) = self.open_dialogue() {
            dialogue.push_line(s);
        } else {
            self.push_stage(s);
        }
        self.blank_seen = false;
    }

    /// Consume the classifier, returning the blocks built so far.
    pub fn finish(self) -> ParseOutput {
        ParseOutput {
            blocks: self.blocks,
            discarded_lines: self.discarded_lines,
        }
    }

    fn push_speaker_line(&mut self, name: &str, text: &str) {
        if self.rules.is_stage_keyword(&plain_text(name)) {
            let heading = format!("{name}{SPEAKER_SEPARATOR}{text}");
            self.push_stage(heading.trim());
            return;
        }

        let (character, stage_note) = split_stage_note(name);
        self.blocks
            .push(Block::Dialogue(Dialogue::new(character, stage_note, text)));
        self.current_dialogue = Some(self.blocks.len() - 1);
    }

    fn push_stage(&mut self, text: &str) {
        self.blocks.push(Block::stage(text));
        self.current_dialogue = None;
    }

    /// The current dialogue, if no blank line has intervened since it was last extended.
    fn open_dialogue(&mut self) -> Option<&mut Dialogue> {
        if self.blank_seen {
            return None;
        }
        match self.blocks.get_mut(self.current_dialogue?)? {
            Block::Dialogue(d) => Some(d),
            Block::Stage { .. } => None,
        }
    }
}

/// Split `李四（笑）` into the name and its trailing parenthetical note.
///
/// The note starts at the last opening bracket of the first bracket style
/// that both occurs in the name and closes it. Empty notes are dropped.
fn split_stage_note(name: &str) -> (&str, Option<String>) {
    for (open, close) in BRACKET_PAIRS {
        if !name.ends_with(close) {
            continue;
        }
        if let Some(idx) = name.rfind(open) {
            let note = name[idx + open.len_utf8()..name.len() - close.len_utf8()].trim();
            let note = (!note.is_empty()).then(|| note.to_string());
            return (name[..idx].trim(), note);
        }
    }
    (name, None)
}
