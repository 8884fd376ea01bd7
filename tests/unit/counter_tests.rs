/*!
 * Tests for character counting
 */

use reflow_mobile::{CharacterCount, count_characters};

/// Test counts of a Korean phrase with one space
#[test]
fn test_countCharacters_withKoreanPhrase_shouldExcludeSpaceFromVisible() {
    assert_eq!(count_characters("안녕 하세요"), CharacterCount { visible: 5, total: 6 });
}

/// Test that newlines and tabs count toward the total only
#[test]
fn test_countCharacters_withNewlinesAndTabs_shouldCountThemInTotalOnly() {
    assert_eq!(count_characters("가\n나\t다"), CharacterCount { visible: 3, total: 5 });
}

/// Test that the empty string counts as zero
#[test]
fn test_countCharacters_withEmptyText_shouldBeZero() {
    assert_eq!(count_characters(""), CharacterCount::default());
}

/// Test that counting is by character, not byte
#[test]
fn test_countCharacters_withMultibyteText_shouldCountCharacters() {
    let count = count_characters("📌 핵심");
    assert_eq!(count.visible, 3);
    assert_eq!(count.total, 4);
}

/// Test the display form used by the CLI and editors
#[test]
fn test_characterCount_display_shouldShowBothCounts() {
    let count = CharacterCount { visible: 5, total: 6 };
    assert_eq!(count.to_string(), "5 visible / 6 total");
}
