//! ARPABET phoneme symbols and stress-digit normalization.

use fxhash::FxHashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// One symbol of the closed ARPABET alphabet, stress digit removed.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phoneme {
    // Vowels
    AA,
    AE,
    AH,
    AO,
    AW,
    AY,
    EH,
    ER,
    EY,
    IH,
    IY,
    OW,
    OY,
    UH,
    UW,
    // Consonants
    B,
    CH,
    D,
    DH,
    F,
    G,
    HH,
    JH,
    K,
    L,
    M,
    N,
    NG,
    P,
    R,
    S,
    SH,
    T,
    TH,
    V,
    W,
    Y,
    Z,
    ZH,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhonemeClass {
    Vowel,
    Consonant,
}

impl Phoneme {
    pub const VOWELS: [Phoneme; 15] = [
        Phoneme::AA,
        Phoneme::AE,
        Phoneme::AH,
        Phoneme::AO,
        Phoneme::AW,
        Phoneme::AY,
        Phoneme::EH,
        Phoneme::ER,
        Phoneme::EY,
        Phoneme::IH,
        Phoneme::IY,
        Phoneme::OW,
        Phoneme::OY,
        Phoneme::UH,
        Phoneme::UW,
    ];

    pub const CONSONANTS: [Phoneme; 24] = [
        Phoneme::B,
        Phoneme::CH,
        Phoneme::D,
        Phoneme::DH,
        Phoneme::F,
        Phoneme::G,
        Phoneme::HH,
        Phoneme::JH,
        Phoneme::K,
        Phoneme::L,
        Phoneme::M,
        Phoneme::N,
        Phoneme::NG,
        Phoneme::P,
        Phoneme::R,
        Phoneme::S,
        Phoneme::SH,
        Phoneme::T,
        Phoneme::TH,
        Phoneme::V,
        Phoneme::W,
        Phoneme::Y,
        Phoneme::Z,
        Phoneme::ZH,
    ];

    pub fn class(self) -> PhonemeClass {
        use Phoneme::*;
        match self {
            AA | AE | AH | AO | AW | AY | EH | ER | EY | IH | IY | OW | OY | UH | UW => {
                PhonemeClass::Vowel
            }
            _ => PhonemeClass::Consonant,
        }
    }

    #[inline]
    pub fn is_vowel(self) -> bool {
        self.class() == PhonemeClass::Vowel
    }

    #[inline]
    pub fn is_consonant(self) -> bool {
        self.class() == PhonemeClass::Consonant
    }

    /// Semivowel glides never stack below the preceding consonant.
    #[inline]
    pub fn is_glide(self) -> bool {
        matches!(self, Phoneme::Y | Phoneme::W)
    }

    pub fn as_str(self) -> &'static str {
        use Phoneme::*;
        match self {
            AA => "AA",
            AE => "AE",
            AH => "AH",
            AO => "AO",
            AW => "AW",
            AY => "AY",
            EH => "EH",
            ER => "ER",
            EY => "EY",
            IH => "IH",
            IY => "IY",
            OW => "OW",
            OY => "OY",
            UH => "UH",
            UW => "UW",
            B => "B",
            CH => "CH",
            D => "D",
            DH => "DH",
            F => "F",
            G => "G",
            HH => "HH",
            JH => "JH",
            K => "K",
            L => "L",
            M => "M",
            N => "N",
            NG => "NG",
            P => "P",
            R => "R",
            S => "S",
            SH => "SH",
            T => "T",
            TH => "TH",
            V => "V",
            W => "W",
            Y => "Y",
            Z => "Z",
            ZH => "ZH",
        }
    }

    /// Every known symbol, vowels first.
    pub fn all() -> impl Iterator<Item = Phoneme> {
        Self::VOWELS.into_iter().chain(Self::CONSONANTS)
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static SYMBOLS: LazyLock<FxHashMap<&'static str, Phoneme>> =
    LazyLock::new(|| Phoneme::all().map(|p| (p.as_str(), p)).collect());

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown phoneme symbol `{0}`")]
pub struct UnknownPhoneme(pub String);

impl FromStr for Phoneme {
    type Err = UnknownPhoneme;

    /// Parses a bare symbol. Stress digits are not accepted here; run
    /// [`normalize_symbol`] first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SYMBOLS
            .get(s)
            .copied()
            .ok_or_else(|| UnknownPhoneme(s.to_string()))
    }
}

/// Strips the trailing stress digits from a raw token (`"AH0"` -> `"AH"`).
/// A digits-only token normalizes to the empty string.
#[inline]
pub fn normalize_symbol(raw: &str) -> &str {
    raw.trim_end_matches(|c: char| c.is_ascii_digit())
}

/// Normalizes and parses one raw token in a single step.
pub fn parse_token(raw: &str) -> Result<Phoneme, UnknownPhoneme> {
    normalize_symbol(raw).parse()
}
