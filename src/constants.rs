// Khmer Unicode Ranges
pub const KHMER_START: char = '\u{1780}';
pub const KHMER_END: char = '\u{17FF}';

/// Placeholder consonant carrying an independent (word-initial) vowel.
pub const QAE: char = '\u{17A2}';

/// Subscript-cluster marker: the next consonant stacks below this one.
pub const COENG: &str = "\u{17D2}";

/// Combined vowel emitted for `IH` followed by `R`.
pub const DIPHTHONG_IA: &str = "\u{17C0}";

/// Tone-shortening mark appended after a coda consonant.
pub const BANTOC: &str = "\u{17CB}";

pub fn is_khmer_char(c: char) -> bool {
    (KHMER_START..=KHMER_END).contains(&c)
}

pub fn is_consonant(c: char) -> bool {
    let code = c as u32;
    (0x1780..=0x17A2).contains(&code)
}

// Final consonants that take the bantoc after an `AH` nucleus
pub fn is_coda_tone_carrier(c: char) -> bool {
    matches!(c, 'ក' | 'ង' | 'ច' | 'ញ' | 'ត' | 'ន' | 'ប' | 'ម' | 'យ' | 'រ' | 'ល' | 'វ' | 'ស')
}
