//! Output rows: one `(word, phonemes, khmer)` record per dictionary entry.

use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub word: String,
    pub phonemes: String,
    pub khmer: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated values with minimal quoting
    #[default]
    Tsv,
    /// One JSON object per line
    Jsonl,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LineEnding {
    #[default]
    Crlf,
    Lf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Crlf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

/// Appends `field` to `out`, quoting it if it holds a delimiter, a quote or a
/// line break. Inner quotes are doubled.
fn push_tsv_field(out: &mut String, field: &str) {
    if !field.contains(['\t', '"', '\r', '\n']) {
        out.push_str(field);
        return;
    }
    out.push('"');
    for c in field.chars() {
        if c == '"' {
            out.push('"');
        }
        out.push(c);
    }
    out.push('"');
}

pub struct RecordWriter<W: Write> {
    inner: W,
    format: OutputFormat,
    line_ending: LineEnding,
    buffer: String,
    written: usize,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W, format: OutputFormat, line_ending: LineEnding) -> Self {
        RecordWriter {
            inner,
            format,
            line_ending,
            buffer: String::with_capacity(256),
            written: 0,
        }
    }

    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        self.buffer.clear();
        match self.format {
            OutputFormat::Tsv => {
                push_tsv_field(&mut self.buffer, &record.word);
                self.buffer.push('\t');
                push_tsv_field(&mut self.buffer, &record.phonemes);
                self.buffer.push('\t');
                push_tsv_field(&mut self.buffer, &record.khmer);
            }
            OutputFormat::Jsonl => {
                self.buffer.push_str(&serde_json::to_string(record)?);
            }
        }
        self.buffer.push_str(self.line_ending.as_str());
        self.inner.write_all(self.buffer.as_bytes())?;
        self.written += 1;
        Ok(())
    }

    pub fn write_all<'a, I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    /// Number of records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flushes and hands back the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
