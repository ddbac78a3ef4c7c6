//! Phoneme to grapheme tables.
//!
//! All three tables are total over their domain and compiled in as static
//! data, so there is nothing to load and nothing to mutate.

use crate::phoneme::Phoneme;

/// Dependent vowel sign for a vowel in non-initial position.
///
/// `AA` maps to the empty sign: it is carried by the inherent vowel of the
/// preceding consonant and gets no visible mark.
pub fn vowel_sign(p: Phoneme) -> Option<&'static str> {
    use Phoneme::*;
    let sign = match p {
        AA => "",
        AE => "ែ",
        AH => "ា",
        AO => "ោ",
        AW => "ៅ",
        AY => "ៃ",
        EH => "េ",
        ER => "ើ",
        EY => "េ",
        IH => "ិ",
        IY => "ី",
        OW => "ូ",
        OY => "យ",
        UH => "ុ",
        UW => "ូ",
        _ => return None,
    };
    Some(sign)
}

/// Consonant letter (or letter cluster) for a consonant. Never empty.
pub fn consonant_letter(p: Phoneme) -> Option<&'static str> {
    use Phoneme::*;
    let letter = match p {
        B => "ប",
        CH => "ឆ",
        D => "ដ",
        DH => "ដ",
        F => "ហ្វ",
        G => "គ",
        HH => "ហ",
        JH => "ជ",
        K => "ក",
        L => "ល",
        M => "ម",
        N => "ន",
        NG => "ង",
        P => "ប",
        R => "រ",
        S => "ស",
        SH => "ស",
        T => "ត",
        TH => "ត",
        V => "វ",
        W => "វ",
        Y => "យ",
        Z => "ស",
        ZH => "ស",
        _ => return None,
    };
    Some(letter)
}

/// Independent vowel form used when a vowel opens the word.
pub fn initial_vowel_form(p: Phoneme) -> Option<&'static str> {
    use Phoneme::*;
    let form = match p {
        AA => "អា",
        AE => "អែ",
        AH => "អា",
        AO => "អោ",
        AW => "អៅ",
        AY => "អៃ",
        EH => "អេ",
        ER => "អើ",
        EY => "អេ",
        IH => "អិ",
        IY => "អី",
        OW => "អូ",
        OY => "អយ",
        UH => "អុ",
        UW => "អូ",
        _ => return None,
    };
    Some(form)
}
