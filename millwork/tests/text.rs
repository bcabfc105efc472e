use millwork::utils::text::initials;

#[test]
fn test_empty_name() {
    assert_eq!(initials(""), "");
}

#[test]
fn test_single_word() {
    assert_eq!(initials("Jane"), "J");
}

#[test]
fn test_two_words() {
    assert_eq!(initials("Jane Doe"), "JD");
}

#[test]
fn test_middle_words_are_skipped() {
    assert_eq!(initials("Jane Middle Doe"), "JD");
}

#[test]
fn test_many_middle_words() {
    assert_eq!(initials("a b c d e"), "ae");
}

#[test]
fn test_whitespace_only() {
    assert_eq!(initials(" "), "");
    assert_eq!(initials("   "), "");
}

#[test]
fn test_trailing_space() {
    assert_eq!(initials("Jane "), "J");
}

#[test]
fn test_leading_space() {
    assert_eq!(initials(" Doe"), "D");
}

#[test]
fn test_multibyte_characters() {
    assert_eq!(initials("Éla Öst"), "ÉÖ");
}

#[test]
fn test_lowercase_is_preserved() {
    assert_eq!(initials("jane doe"), "jd");
}
