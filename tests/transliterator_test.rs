//! Unit tests for the phoneme transliterator.
//! Golden cases live in `tests/data/test_cases.json`.

use khmer_phonetic::constants::{is_consonant, is_khmer_char, BANTOC, COENG, DIPHTHONG_IA, QAE};
use khmer_phonetic::phoneme::parse_token;
use khmer_phonetic::tables::{consonant_letter, initial_vowel_form, vowel_sign};
use khmer_phonetic::transliterator::{initial_vowel, is_diphthong, stacks_below, takes_coda_tone};
use khmer_phonetic::{normalize_symbol, Phoneme, TranslitError, Transliterator, UnknownSymbolPolicy};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct TestCase {
    id: usize,
    word: String,
    phonemes: Vec<String>,
    description: String,
    expected: String,
}

fn load_cases() -> Vec<TestCase> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/test_cases.json");
    let json = std::fs::read_to_string(&path).expect("Failed to read test cases");
    serde_json::from_str(&json).expect("Failed to parse test cases")
}

fn khmer(phonemes: &[&str]) -> String {
    Transliterator::new()
        .transliterate(phonemes)
        .expect("transliteration failed")
}

fn c(p: Phoneme) -> &'static str {
    consonant_letter(p).unwrap()
}

fn v(p: Phoneme) -> &'static str {
    vowel_sign(p).unwrap()
}

#[test]
fn test_all_cases_match_expected() {
    let cases = load_cases();
    let t = Transliterator::new();
    let mut failures = Vec::new();

    for tc in &cases {
        let result = t.transliterate(&tc.phonemes).unwrap();
        if result != tc.expected {
            failures.push(format!(
                "[{}] {} ({})\n  Phonemes: {:?}\n  Expected: {}\n  Actual: {}",
                tc.id, tc.word, tc.description, tc.phonemes, tc.expected, result
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "{}/{} test cases failed:\n{}",
            failures.len(),
            cases.len(),
            failures.join("\n")
        );
    }
}

#[test]
fn test_deterministic() {
    for tc in load_cases() {
        let first = khmer(&tc.phonemes.iter().map(String::as_str).collect::<Vec<_>>());
        for _ in 0..3 {
            let again = khmer(&tc.phonemes.iter().map(String::as_str).collect::<Vec<_>>());
            assert_eq!(first, again, "{}", tc.word);
        }
    }
}

#[test]
fn test_single_consonant_gives_its_letter() {
    for p in Phoneme::CONSONANTS {
        assert_eq!(khmer(&[p.as_str()]), c(p), "{}", p);
    }
}

#[test]
fn test_single_vowel_takes_initial_form() {
    for p in Phoneme::VOWELS {
        let form = initial_vowel_form(p).unwrap();
        assert_eq!(khmer(&[p.as_str()]), form, "{}", p);
        assert!(form.starts_with(QAE), "{} -> {}", p, form);
    }
}

#[test]
fn test_tables_cover_closed_alphabet() {
    for p in Phoneme::VOWELS {
        assert!(p.is_vowel());
        assert!(vowel_sign(p).is_some());
        assert!(consonant_letter(p).is_none());
    }
    for p in Phoneme::CONSONANTS {
        assert!(p.is_consonant());
        assert!(vowel_sign(p).is_none());
        assert!(initial_vowel_form(p).is_none());
        let letter = c(p);
        assert!(!letter.is_empty());
        assert!(is_consonant(letter.chars().next().unwrap()), "{}", p);
    }
}

#[test]
fn test_non_initial_vowel_uses_dependent_sign() {
    assert_eq!(khmer(&["K", "IY1"]), format!("{}{}", c(Phoneme::K), v(Phoneme::IY)));
    // only position 0 takes the independent form
    assert_eq!(khmer(&["AH0", "B", "AH0"]), "អាបា");
}

#[test]
fn test_empty_vowel_sign_emits_nothing() {
    assert_eq!(v(Phoneme::AA), "");
    assert_eq!(khmer(&["T", "AA1"]), c(Phoneme::T));
    assert_eq!(
        Transliterator::new().fragments(&["T", "AA1"]).unwrap(),
        vec![c(Phoneme::T)]
    );
}

#[test]
fn test_cluster_marker_between_consonants() {
    for first in Phoneme::CONSONANTS {
        for second in Phoneme::CONSONANTS.into_iter().filter(|p| !p.is_glide()) {
            assert_eq!(
                khmer(&[first.as_str(), second.as_str()]),
                format!("{}{}{}", c(first), COENG, c(second)),
                "{} {}",
                first,
                second
            );
        }
    }
}

#[test]
fn test_semivowel_exemption() {
    assert_eq!(khmer(&["K", "Y"]), "កយ");
    assert_eq!(khmer(&["K", "W"]), "កវ");
    assert_eq!(khmer(&["S", "W", "IY1", "T"]), "សវីត");
    // glides stack other consonants under themselves
    assert_eq!(khmer(&["Y", "K"]), format!("យ{}ក", COENG));
}

#[test]
fn test_no_cluster_marker_at_word_end() {
    assert!(!khmer(&["AE1", "K"]).ends_with(COENG));
    assert!(!khmer(&["K"]).contains(COENG));
}

#[test]
fn test_diphthong_shortcut() {
    assert_eq!(khmer(&["B", "IH1", "R"]), format!("{}{}", c(Phoneme::B), DIPHTHONG_IA));
    assert_ne!(
        khmer(&["B", "IH1", "R"]),
        format!("{}{}{}", c(Phoneme::B), v(Phoneme::IH), c(Phoneme::R))
    );
    assert_eq!(khmer(&["K", "IH1", "R", "K"]), "កៀក");
}

#[test]
fn test_word_initial_vowel_precedes_diphthong() {
    assert_eq!(khmer(&["IH1", "R"]), "អិរ");
}

#[test]
fn test_stress_stripping() {
    let bare = khmer(&["AA"]);
    assert_eq!(khmer(&["AA0"]), bare);
    assert_eq!(khmer(&["AA1"]), bare);
    assert_eq!(khmer(&["AA2"]), bare);
    assert_eq!(khmer(&["B", "AH0", "N"]), khmer(&["B", "AH", "N"]));
}

#[test]
fn test_final_tone_mark_trigger() {
    let with = khmer(&["B", "AH0", "N"]);
    assert!(with.ends_with(BANTOC));
    assert_eq!(with, "បាន់");

    let without = khmer(&["B", "AE0", "N"]);
    assert!(!without.ends_with(BANTOC));
    assert_eq!(without, "បែន");
}

#[test]
fn test_final_tone_mark_needs_carrier_letter() {
    // គ and the ហ្វ cluster are not carriers
    assert_eq!(khmer(&["B", "AH1", "G"]), "បាគ");
    assert_eq!(khmer(&["HH", "AH1", "F"]), "ហាហ្វ");
    // B and P share a letter, both take the mark
    assert_eq!(khmer(&["K", "AH1", "B"]), khmer(&["K", "AH1", "P"]));
    assert!(khmer(&["K", "AH1", "P"]).ends_with(BANTOC));
}

#[test]
fn test_final_tone_mark_after_initial_ah() {
    assert_eq!(khmer(&["AH1", "N"]), "អាន់");
}

#[test]
fn test_final_tone_mark_looks_at_emitted_fragment() {
    // last symbol emits nothing, so the last fragment is the AH sign itself
    assert_eq!(khmer(&["N", "AH1", "XX"]), "នា");
    assert_eq!(khmer(&["N", "AH1", "AA1"]), "នា");
}

#[test]
fn test_unmapped_symbol_lookahead_neutral() {
    assert_eq!(khmer(&["K", "AE1", "XX"]), khmer(&["K", "AE1"]));
    assert_eq!(khmer(&["D", "QQ", "AO1", "G"]), khmer(&["D", "AO1", "G"]));
}

#[test]
fn test_unmapped_symbol_lookahead_affecting() {
    // an unmapped neighbour blocks the cluster marker
    assert_eq!(khmer(&["S", "K"]), "ស្ក");
    assert_eq!(khmer(&["S", "XX", "K"]), "សក");
    // and breaks the diphthong
    assert_eq!(khmer(&["B", "IH1", "R"]), "បៀ");
    assert_eq!(khmer(&["B", "IH1", "XX", "R"]), "បិរ");
}

#[test]
fn test_all_unmapped() {
    assert_eq!(khmer(&["XX", "YY"]), "");
    assert_eq!(khmer(&["123"]), "");
    assert_eq!(khmer(&["AH", "XX"]), "អា");
}

#[test]
fn test_symbols_are_case_sensitive() {
    assert_eq!(khmer(&["d", "ao1", "g"]), "");
}

#[test]
fn test_order_preserved() {
    let fragments = Transliterator::new()
        .fragments(&["S", "T", "R", "EH1", "NG", "K", "TH"])
        .unwrap();
    assert_eq!(
        fragments,
        vec!["ស", COENG, "ត", COENG, "រ", "េ", "ង", COENG, "ក", COENG, "ត"]
    );
}

#[test]
fn test_dog_scenario() {
    let expected = format!("{}{}{}", c(Phoneme::D), v(Phoneme::AO), c(Phoneme::G));
    assert_eq!(khmer(&["D", "AO1", "G"]), expected);
    assert!(!khmer(&["D", "AO1", "G"]).contains(COENG));
}

#[test]
fn test_output_is_khmer_script() {
    for tc in load_cases() {
        assert!(tc.expected.chars().all(is_khmer_char), "{}", tc.word);
    }
}

#[test]
fn test_empty_sequence_is_rejected() {
    let empty: [&str; 0] = [];
    let err = Transliterator::new().transliterate(&empty).unwrap_err();
    assert!(matches!(err, TranslitError::EmptySequence));
}

#[test]
fn test_strict_policy_reports_unknown_symbol() {
    let strict = Transliterator::with_policy(UnknownSymbolPolicy::Reject);
    match strict.transliterate(&["D", "QQ1", "G"]) {
        Err(TranslitError::UnknownSymbol { symbol, position }) => {
            assert_eq!(symbol, "QQ");
            assert_eq!(position, 1);
        }
        other => panic!("expected UnknownSymbol, got {:?}", other),
    }
    assert_eq!(strict.transliterate(&["D", "AO1", "G"]).unwrap(), "ដោគ");
}

#[test]
fn test_normalize_symbol() {
    assert_eq!(normalize_symbol("AH0"), "AH");
    assert_eq!(normalize_symbol("AH12"), "AH");
    assert_eq!(normalize_symbol("NG"), "NG");
    assert_eq!(normalize_symbol("42"), "");
    assert_eq!(parse_token("ER1"), Ok(Phoneme::ER));
    assert!(parse_token("Q").is_err());
    assert_eq!("ZH".parse::<Phoneme>(), Ok(Phoneme::ZH));
}

#[test]
fn test_rule_helpers() {
    assert_eq!(initial_vowel(Some(Phoneme::OY)), Some("អយ"));
    assert_eq!(initial_vowel(Some(Phoneme::K)), None);
    assert_eq!(initial_vowel(None), None);

    assert!(is_diphthong(Some(Phoneme::IH), Some(Phoneme::R)));
    assert!(!is_diphthong(Some(Phoneme::IY), Some(Phoneme::R)));
    assert!(!is_diphthong(Some(Phoneme::IH), None));

    assert!(stacks_below(Some(Phoneme::T)));
    assert!(!stacks_below(Some(Phoneme::W)));
    assert!(!stacks_below(Some(Phoneme::Y)));
    assert!(!stacks_below(Some(Phoneme::AE)));
    assert!(!stacks_below(None));

    assert!(takes_coda_tone(Some(Phoneme::AH), Some("ន")));
    assert!(!takes_coda_tone(Some(Phoneme::AE), Some("ន")));
    assert!(!takes_coda_tone(Some(Phoneme::AH), Some("គ")));
    assert!(!takes_coda_tone(Some(Phoneme::AH), Some("ហ្វ")));
    assert!(!takes_coda_tone(Some(Phoneme::AH), None));
}
