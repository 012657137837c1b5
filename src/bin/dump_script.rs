//! Debug tool to dump the classified blocks of a script.
//!
//! Usage:
//!   `cargo run --bin dump_script -- <script.tex>`
//!   `cargo run --bin dump_script -- <script.tex> --json`
//!
//! This tool prints how each line was classified, for debugging scripts
//! that format unexpectedly.

use std::env;
use std::path::Path;

use anyhow::{bail, Context};

use stagefmt::config::Config;
use stagefmt::convert::{read_script, render_json};
use stagefmt::{parse_script, Block};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        bail!("Usage: {} <script.tex> [--json]", args[0]);
    }

    let path = Path::new(&args[1]);
    let rules = Config::load().context("Failed to load config")?.rules();
    let text = read_script(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let parsed = parse_script(&text, &rules);

    if args.iter().any(|a| a == "--json") {
        print!("{}", render_json(&parsed.blocks)?);
        return Ok(());
    }

    println!(
        "📄 {} ({} blocks, {} noise lines dropped)",
        path.display(),
        parsed.blocks.len(),
        parsed.discarded_lines
    );
    for (i, block) in parsed.blocks.iter().enumerate() {
        let is_last = i == parsed.blocks.len() - 1;
        let prefix = if is_last { "└" } else { "├" };
        let child_prefix = if is_last { " " } else { "│" };

        match block {
            Block::Stage { text } => println!("{prefix}─ {i}: {} \"{text}\"", block.kind()),
            Block::Dialogue(d) => {
                println!("{prefix}─ {i}: {} {}", block.kind(), d.character());
                if let Some(note) = d.stage_note() {
                    println!("{child_prefix}  ├─ Note: {note}");
                }
                for (j, line) in d.lines().iter().enumerate() {
                    let line_prefix = if j == d.lines().len() - 1 { "└" } else { "├" };
                    println!("{child_prefix}  {line_prefix}─ {line}");
                }
            }
        }
    }

    Ok(())
}
