use rayon::prelude::*;

use crate::dictionary::DictEntry;
use crate::record::Record;
use crate::transliterator::Transliterator;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub converted: usize,
    /// Entries the transliterator refused (strict policy only).
    pub rejected: usize,
}

/// Converts entries in parallel. Output order follows input order; entries
/// that fail are dropped and counted.
pub fn convert_entries(
    transliterator: &Transliterator,
    entries: &[DictEntry],
) -> (Vec<Record>, BatchStats) {
    let results: Vec<Option<Record>> = entries
        .par_iter()
        .map(|entry| match transliterator.transliterate(&entry.phonemes) {
            Ok(khmer) => Some(Record {
                word: entry.word.clone(),
                phonemes: entry.phoneme_string(),
                khmer,
            }),
            Err(e) => {
                log::warn!("skipping `{}`: {}", entry.word, e);
                None
            }
        })
        .collect();

    let mut stats = BatchStats::default();
    let records: Vec<Record> = results
        .into_iter()
        .filter_map(|r| {
            match r {
                Some(_) => stats.converted += 1,
                None => stats.rejected += 1,
            }
            r
        })
        .collect();

    log::info!(
        "converted {} entries, rejected {}",
        stats.converted,
        stats.rejected
    );
    (records, stats)
}
