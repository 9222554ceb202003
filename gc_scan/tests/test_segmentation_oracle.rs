// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cross check cluster boundaries against the `unicode-segmentation` crate.
//!
//! Scripts that rely on the Indic conjunct rule (a virama linking two consonants) are
//! left out, since those clusters are split here.

use gc_scan::{assert_eq2, clusters, clusters_rev, cluster_count};
use test_case::test_case;
use unicode_segmentation::UnicodeSegmentation;

fn boundaries_from_oracle(text: &str) -> Vec<usize> {
    text.grapheme_indices(true).map(|(offset, _)| offset).collect()
}

fn boundaries_forward(text: &str) -> Vec<usize> {
    clusters(text).map(|(offset, _)| offset.as_usize()).collect()
}

fn boundaries_backward(text: &str) -> Vec<usize> {
    let mut acc: Vec<usize> = clusters_rev(text)
        .map(|(offset, _)| offset.as_usize())
        .collect();
    acc.reverse();
    acc
}

#[test_case("" ; "empty")]
#[test_case("The quick brown fox." ; "ascii")]
#[test_case("Ünïcödé\u{308}\u{301}" ; "latin with stacked marks")]
#[test_case("a\r\nb\rc\nd\u{7}e" ; "controls")]
#[test_case("\r\u{301}\n\u{301}" ; "mark after control")]
#[test_case("🇺🇸🇬🇧🇯🇵🇫" ; "flags and odd indicator")]
#[test_case("x🇺🇸🇬" ; "flag after letter")]
#[test_case("👩\u{200D}💻 👨\u{200D}👩\u{200D}👧\u{200D}👦" ; "zwj sequences")]
#[test_case("👍\u{1F3FD}👋\u{1F3FF}\u{200D}" ; "skin tones and trailing zwj")]
#[test_case("a\u{200D}👩" ; "zwj after letter")]
#[test_case("❤\u{FE0F}☺\u{FE0E}" ; "variation selectors")]
#[test_case("한국어 \u{1100}\u{1161}\u{11A8} \u{1100}\u{1100}각\u{11A8}" ; "hangul")]
#[test_case("\u{600}12 \u{600}\n" ; "prepend")]
#[test_case("हिंदी" ; "devanagari without virama")]
#[test_case("中文，日本語ｶﾀｶﾅ" ; "cjk")]
#[test_case("Ελληνικά и кириллица" ; "greek and cyrillic")]
fn test_boundaries_match_oracle(text: &str) {
    let expected = boundaries_from_oracle(text);
    assert_eq2!(boundaries_forward(text), expected);
    assert_eq2!(boundaries_backward(text), expected);
    assert_eq2!(cluster_count(text), expected.len());
}
