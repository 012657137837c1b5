//! `stagefmt` - ruby-annotated script to stage-play markup formatter.
//!
//! This crate classifies the lines of a loosely formatted script into stage
//! directions and dialogue turns, and renders them as `\stage{}`,
//! `\charname{}` and `dialogue` environment markup.

pub mod config;
pub mod constants;
pub mod convert;
pub mod error;
pub mod script;
pub mod types;

pub use convert::{convert_file, OutputFormat, Summary};
pub use error::{Error, Result};
pub use script::{format_script, parse_blocks, parse_script, render_blocks, Rules};
pub use types::{Block, Dialogue};
