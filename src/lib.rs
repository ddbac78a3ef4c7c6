//! Rule-based transliteration of ARPABET phoneme sequences into Khmer script.
//!
//! ```
//! use khmer_phonetic::Transliterator;
//!
//! let khmer = Transliterator::new().transliterate(&["D", "AO1", "G"]).unwrap();
//! assert_eq!(khmer, "ដោគ");
//! ```

pub mod batch;
pub mod constants;
pub mod dictionary;
pub mod error;
pub mod phoneme;
pub mod record;
pub mod tables;
pub mod transliterator;

pub use error::{Result, TranslitError};
pub use phoneme::{normalize_symbol, Phoneme, UnknownPhoneme};
pub use transliterator::{transliterate, Transliterator, UnknownSymbolPolicy};
