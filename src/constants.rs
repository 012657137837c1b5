//! Application constants.
//!
//! Centralizes the separators, brackets and default rule data used by the
//! script formatter.

/// Characters that delimit speakers and stage directions in the source text.
pub mod syntax {
    /// Full-width colon separating a speaker name from the spoken text.
    pub const SPEAKER_SEPARATOR: char = '：';

    /// Opening brackets that introduce a parenthetical (full-width first).
    pub const OPEN_BRACKETS: [char; 2] = ['（', '('];

    /// Closing brackets that end a parenthetical (full-width first).
    pub const CLOSE_BRACKETS: [char; 2] = ['）', ')'];

    /// Bracket pairs tried, in order, when extracting a header stage note.
    pub const BRACKET_PAIRS: [(char, char); 2] = [('（', '）'), ('(', ')')];
}

/// Default classification rules.
pub mod rules {
    /// Speaker names that are really scene headings (exterior, interior, scene).
    pub const STAGE_KEYWORDS: [&str; 3] = ["外景", "內景", "場景"];

    /// Forum boilerplate recognized at the start of a line.
    pub const DISCARD_PREFIX_PATTERN: &str = concat!(
        r"^(周星馳-|\s*由 Admin|\s*Admin 在|\s*Admin$",
        r"|\s*文章數|\s*注冊日期|\s*LIKEDISLIKE|\s*回復：)",
    );

    /// Substrings marking a line as pagination noise.
    pub const DISCARD_SUBSTRINGS: [&str; 1] = ["作了第"];
}

/// Output markup commands.
pub mod markup {
    /// Stage direction command name.
    pub const STAGE: &str = "stage";

    /// Character name command name.
    pub const CHARNAME: &str = "charname";

    /// Environment wrapping dialogue lines.
    pub const DIALOGUE_ENV: &str = "dialogue";
}

/// Process exit codes.
pub mod exit {
    /// Input or output file could not be read or written (`EX_IOERR`).
    pub const IO_ERROR: u8 = 74;

    /// Invalid configuration (`EX_CONFIG`).
    pub const CONFIG_ERROR: u8 = 78;

    /// Any other failure.
    pub const FAILURE: u8 = 1;
}
