//! CMU-style pronunciation dictionary reader.
//!
//! One entry per line: a headword followed by whitespace-separated phonemes.
//! `#` starts a trailing comment and a parenthesized suffix on the headword
//! (`read(2)`) marks a homograph variant.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictEntry {
    pub word: String,
    /// Raw tokens, stress digits kept.
    pub phonemes: Vec<String>,
}

impl DictEntry {
    /// Space-joined phonemes as they appeared in the source line.
    pub fn phoneme_string(&self) -> String {
        self.phonemes.join(" ")
    }
}

/// Parses one dictionary line. Returns `None` for blank, comment-only and
/// headword-only lines.
pub fn parse_line(line: &str) -> Option<DictEntry> {
    let content = strip_comment(line);
    let mut tokens = content.split_whitespace();
    let headword = tokens.next()?;
    let phonemes: Vec<String> = tokens.map(str::to_string).collect();
    if phonemes.is_empty() {
        log::debug!("skipping `{}`: no phonemes", headword);
        return None;
    }

    Some(DictEntry {
        word: strip_homograph_marks(headword),
        phonemes,
    })
}

/// Cuts the line at the first `#` that has something after it.
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) if idx + 1 < line.len() => &line[..idx],
        _ => line,
    }
}

/// Removes every `(...)` group from a headword. An unclosed `(` is kept.
fn strip_homograph_marks(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut rest = word;
    while let Some(open) = rest.find('(') {
        match rest[open..].find(')') {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

/// Reads every parseable entry from `reader`, in source order.
pub fn read_entries<R: BufRead>(reader: R) -> io::Result<Vec<DictEntry>> {
    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for line in reader.lines() {
        let line = line?;
        match parse_line(line.trim_end_matches('\r')) {
            Some(entry) => entries.push(entry),
            None => skipped += 1,
        }
    }

    log::debug!("read {} entries, skipped {} lines", entries.len(), skipped);
    Ok(entries)
}

pub fn load_entries(path: &Path) -> io::Result<Vec<DictEntry>> {
    let file = File::open(path)?;
    read_entries(BufReader::new(file))
}
