#![allow(clippy::unwrap_used, clippy::expect_used)]

use aoc_common::LINE_DELIMITER;

use super::*;

fn tok(input: &str) -> Tokenizer {
    Tokenizer::new(input, LINE_DELIMITER).unwrap()
}

fn checksum(input: &str) -> String {
    box_checksum(&mut tok(input)).unwrap()
}

// === Part 1 ===

#[test]
fn empty_tokenizer_fails() {
    let err = box_checksum(&mut tok("\n")).unwrap_err();
    assert_eq!(err.to_string(), "Tokenizer is empty.");
}

#[test]
fn triples_not_counted_as_doubles() {
    assert_eq!(checksum("abcbb\nabgtrt"), "1");
}

#[test]
fn multiple_doubles_in_id_counted_once() {
    assert_eq!(checksum("abcbudrr\nabgtrtlot"), "1");
}

#[test]
fn multiple_triples_in_id_counted_once() {
    assert_eq!(checksum("abcbrubdrr\nabgtrtlo"), "1");
}

#[test]
fn id_with_double_and_triple_counts_in_both() {
    assert_eq!(checksum("abcbubdrr"), "1");
}

#[test]
fn more_than_three_occurrences_not_counted() {
    assert_eq!(checksum("abcb\nabcbdb\nabcbdbeb"), "1");
}

#[test]
fn invalid_char_aborts() {
    let err = box_checksum(&mut tok("aftgr\ndr8tuz")).unwrap_err();
    assert_eq!(err.to_string(), "Invalid char \"8\" in \"dr8tuz\".");
}

#[test]
fn invalid_multibyte_char_reported_whole() {
    let err = box_checksum(&mut tok("abé")).unwrap_err();
    assert_eq!(err.to_string(), "Invalid char \"é\" in \"abé\".");
}

#[test]
fn carriage_return_is_invalid_char() {
    let err = box_checksum(&mut tok("abcbb\r\nabgtrt\r\n")).unwrap_err();
    assert_eq!(err.to_string(), "Invalid char \"\r\" in \"abcbb\r\".");
}

#[test]
fn aoc_example_part1() {
    assert_eq!(
        checksum("abcdef\nbababc\nabbcde\nabcccd\naabcdd\nabcdee\nababab"),
        "12"
    );
}

// === Part 2 ===

#[test]
fn aoc_example_part2() {
    let mut t = tok("abcde\nfghij\nklmno\npqrst\nfguij\naxcye\nwvxyz");
    assert_eq!(similar_ids(&mut t).unwrap(), "fgij");
}

#[test]
fn difference_in_last_position() {
    assert_eq!(similar_ids(&mut tok("abcd\nxyzw\nabce")).unwrap(), "abc");
}

#[test]
fn no_similar_ids() {
    let err = similar_ids(&mut tok("abc\nxyz\nab")).unwrap_err();
    assert_eq!(err.to_string(), "No similar IDs found.");
}

#[test]
fn identical_ids_are_not_similar() {
    let err = similar_ids(&mut tok("abc\nabc")).unwrap_err();
    assert_eq!(err.to_string(), "No similar IDs found.");
}

#[test]
fn part2_invalid_char_aborts() {
    let err = similar_ids(&mut tok("abc\nA")).unwrap_err();
    assert_eq!(err.to_string(), "Invalid char \"A\" in \"A\".");
}

#[test]
fn part2_empty_tokenizer_fails() {
    let err = similar_ids(&mut tok("\n")).unwrap_err();
    assert_eq!(err.to_string(), "Tokenizer is empty.");
}

#[test]
fn common_letters_requires_equal_length() {
    assert_eq!(common_letters("abc", "abcd"), None);
    assert_eq!(common_letters("abc", "abd"), Some("ab".to_owned()));
    assert_eq!(common_letters("xbc", "abc"), Some("bc".to_owned()));
}
