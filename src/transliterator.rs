//! Phoneme sequence to Khmer script.
//!
//! A single left-to-right scan over the normalized symbols. Three positional
//! rules look at a short window around the cursor:
//!
//! * a vowel at position 0 takes its independent (word-initial) form,
//! * `IH` followed by `R` collapses into one diphthong sign,
//! * a consonant followed by another non-glide consonant gets the coeng so
//!   the next letter stacks below it.
//!
//! After the scan, a final `AH` + coda consonant gets the bantoc.

use crate::constants::{is_coda_tone_carrier, BANTOC, COENG, DIPHTHONG_IA};
use crate::error::{Result, TranslitError};
use crate::phoneme::{normalize_symbol, Phoneme};
use crate::tables::{consonant_letter, initial_vowel_form, vowel_sign};

/// A normalized input position. `None` means the symbol is in no table.
pub type Slot = Option<Phoneme>;

/// What to do with a symbol that is in neither table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownSymbolPolicy {
    /// Emit nothing for it and keep going.
    #[default]
    Skip,
    /// Fail the whole sequence.
    Reject,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Transliterator {
    policy: UnknownSymbolPolicy,
}

impl Transliterator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: UnknownSymbolPolicy) -> Self {
        Transliterator { policy }
    }

    pub fn policy(&self) -> UnknownSymbolPolicy {
        self.policy
    }

    /// Converts one word's phoneme tokens (stress digits allowed) to Khmer.
    ///
    /// Fails on an empty sequence, and on an unmapped symbol when the policy
    /// is [`UnknownSymbolPolicy::Reject`].
    pub fn transliterate<S: AsRef<str>>(&self, phonemes: &[S]) -> Result<String> {
        Ok(self.fragments(phonemes)?.concat())
    }

    /// Same as [`Transliterator::transliterate`] but returns the emitted
    /// fragments without joining them.
    pub fn fragments<S: AsRef<str>>(&self, phonemes: &[S]) -> Result<Vec<&'static str>> {
        if phonemes.is_empty() {
            return Err(TranslitError::EmptySequence);
        }
        let slots = self.classify(phonemes)?;
        Ok(scan(&slots))
    }

    /// Normalizes every token and resolves it against the symbol set.
    pub fn classify<S: AsRef<str>>(&self, phonemes: &[S]) -> Result<Vec<Slot>> {
        let mut slots = Vec::with_capacity(phonemes.len());
        for (position, raw) in phonemes.iter().enumerate() {
            let symbol = normalize_symbol(raw.as_ref());
            match symbol.parse::<Phoneme>() {
                Ok(p) => slots.push(Some(p)),
                Err(_) if self.policy == UnknownSymbolPolicy::Skip => {
                    log::trace!("dropping unmapped symbol `{}` at {}", symbol, position);
                    slots.push(None);
                }
                Err(_) => {
                    return Err(TranslitError::UnknownSymbol {
                        symbol: symbol.to_string(),
                        position,
                    })
                }
            }
        }
        Ok(slots)
    }
}

/// Runs the scan over already classified slots.
pub fn scan(slots: &[Slot]) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::with_capacity(slots.len() + 2);
    let mut pos = 0;

    if let Some(form) = initial_vowel(slots.first().copied().flatten()) {
        out.push(form);
        pos = 1;
    }

    while pos < slots.len() {
        match &slots[pos..] {
            [current, next, ..] if is_diphthong(*current, *next) => {
                out.push(DIPHTHONG_IA);
                pos += 2;
                continue;
            }
            [Some(p), rest @ ..] => {
                if let Some(letter) = consonant_letter(*p) {
                    out.push(letter);
                    if stacks_below(rest.first().copied().flatten()) {
                        out.push(COENG);
                    }
                } else if let Some(sign) = vowel_sign(*p) {
                    if !sign.is_empty() {
                        out.push(sign);
                    }
                }
            }
            _ => {}
        }
        pos += 1;
    }

    if slots.len() >= 2 && takes_coda_tone(slots[slots.len() - 2], out.last().copied()) {
        out.push(BANTOC);
    }

    out
}

/// Independent vowel form when the word opens with a vowel.
pub fn initial_vowel(first: Slot) -> Option<&'static str> {
    first.and_then(initial_vowel_form)
}

pub fn is_diphthong(current: Slot, next: Slot) -> bool {
    matches!((current, next), (Some(Phoneme::IH), Some(Phoneme::R)))
}

/// Whether a consonant followed by `next` needs the coeng. `None` covers both
/// the end of the word and an unmapped neighbour.
pub fn stacks_below(next: Slot) -> bool {
    matches!(next, Some(p) if p.is_consonant() && !p.is_glide())
}

/// The bantoc rule: `AH` in second-to-last position and a last fragment that
/// is exactly one coda-tone carrier letter.
///
/// The check is on the emitted letter, not the phoneme, so symbols that share
/// a letter (`B` and `P` both give `ប`) behave the same.
pub fn takes_coda_tone(penultimate: Slot, last_fragment: Option<&str>) -> bool {
    if penultimate != Some(Phoneme::AH) {
        return false;
    }
    let Some(fragment) = last_fragment else {
        return false;
    };
    let mut chars = fragment.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if is_coda_tone_carrier(c))
}

/// Transliterates with the default (skipping) policy.
pub fn transliterate<S: AsRef<str>>(phonemes: &[S]) -> Result<String> {
    Transliterator::default().transliterate(phonemes)
}
