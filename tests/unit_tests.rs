// Unit tests for Mentor Match

use mentor_match::core::{
    cleanup::remove_blank_lines,
    filters::is_gender_match,
};
use mentor_match::models::domain::{columns, Participant};

#[test]
fn test_both_no_preference_always_matches() {
    let genders = ["Male", "Female", "Nonbinary", ""];
    for ga in genders {
        for gb in genders {
            assert!(
                is_gender_match(ga, "No preference", gb, "No preference"),
                "expected match for genders ({ga:?}, {gb:?})",
            );
        }
    }
}

#[test]
fn test_no_preference_substring_counts() {
    assert!(is_gender_match(
        "Male",
        "No preference, happy either way",
        "Female",
        "No preference really",
    ));
}

#[test]
fn test_explicit_preferences_require_cross_equality() {
    // Both sides stated a preference: true iff each gender equals the other
    // side's preference
    assert!(is_gender_match("Male", "Female", "Female", "Male"));
    assert!(is_gender_match("Female", "Female", "Female", "Female"));

    assert!(!is_gender_match("Male", "Female", "Female", "Female"));
    assert!(!is_gender_match("Male", "Male", "Female", "Male"));
    assert!(!is_gender_match("Male", "Female", "Male", "Female"));
}

#[test]
fn test_single_no_preference_checks_remaining_side() {
    assert!(is_gender_match("Male", "No preference", "Female", "Male"));
    assert!(!is_gender_match("Male", "No preference", "Female", "Female"));
    assert!(is_gender_match("Female", "Male", "Male", "No preference"));
    assert!(!is_gender_match("Female", "Female", "Male", "No preference"));
}

#[test]
fn test_predicate_stable_under_consistent_argument_swap() {
    let values = ["Male", "Female", "No preference", ""];
    for ga in values {
        for pa in values {
            for gb in values {
                for pb in values {
                    assert_eq!(
                        is_gender_match(ga, pa, gb, pb),
                        is_gender_match(gb, pb, ga, pa),
                        "swap mismatch for ({ga:?}, {pa:?}, {gb:?}, {pb:?})",
                    );
                }
            }
        }
    }
}

#[test]
fn test_malformed_values_fail_to_match() {
    assert!(!is_gender_match("", "", "", ""));
    assert!(!is_gender_match("Male", "???", "Female", "???"));
}

#[test]
fn test_cleanup_removes_blank_lines_only() {
    assert_eq!(remove_blank_lines("a\n\n b \n\nc"), "a\n b \nc");
    assert_eq!(remove_blank_lines(""), "");
    assert_eq!(remove_blank_lines("single"), "single");
}

#[test]
fn test_cleanup_idempotent() {
    let samples = [
        "a\n\n b \n\nc",
        "Mentor; mail;\n\nMentee; mail\n",
        "\n\n\n",
        "  leading and trailing  ",
    ];
    for s in samples {
        let once = remove_blank_lines(s);
        assert_eq!(remove_blank_lines(&once), once);
    }
}

#[test]
fn test_participant_from_row_round_trips_fields() {
    let mut row = vec![String::new(); 41];
    row[columns::ROLE] = "Mentee".to_string();
    row[columns::FIRST_NAME] = "Noa".to_string();
    row[columns::LAST_NAME] = "Bar".to_string();
    row[columns::EMAIL] = "noa@example.com".to_string();
    row[columns::CITY] = "Sunnyvale".to_string();
    row[columns::STATE] = "California".to_string();
    row[columns::GENDER] = "Female".to_string();
    row[columns::GENDER_PREFERENCE] = "Male".to_string();
    row[columns::OCCUPATION] = "Engineer".to_string();

    let p = Participant::from_row(&row);

    assert!(p.is_mentee());
    assert_eq!(p.full_name(), "Noa Bar");
    assert_eq!(p.city, "Sunnyvale");
    assert_eq!(p.gender_preference, "Male");
    assert_eq!(p.occupation, "Engineer");
    // Columns the row never set parse as empty text
    assert_eq!(p.work_history, "");
    assert_eq!(p.anything_else, "");
}
