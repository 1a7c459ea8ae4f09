/// The questionnaire phrase meaning "match me with anyone"
///
/// Checked by containment, not equality: form exports sometimes carry the
/// phrase inside a longer answer ("No preference / rather not say").
const NO_PREFERENCE: &str = "No preference";

/// Check whether a mentor/mentee pairing is permissible under both parties'
/// stated gender preferences
///
/// The rules are an unordered disjunction; the first that holds wins:
/// - both sides have no preference
/// - each side's gender equals the other side's stated preference
/// - one side has no preference and its gender satisfies the other side
///
/// Gender comparison is exact and case-sensitive, so empty or malformed
/// values simply fail to match. The predicate is stable under swapping the
/// two parties as long as each gender stays paired with its own preference.
#[inline]
pub fn is_gender_match(
    gender_mentor: &str,
    gender_pref_mentor: &str,
    gender_mentee: &str,
    gender_pref_mentee: &str,
) -> bool {
    // Both are No preference
    if gender_pref_mentor.contains(NO_PREFERENCE) && gender_pref_mentee.contains(NO_PREFERENCE) {
        return true;
    }

    // Each gender satisfies the other party's preference
    if gender_mentor == gender_pref_mentee && gender_mentee == gender_pref_mentor {
        return true;
    }

    // Mentor is No preference and Mentee has a preference
    if gender_pref_mentor.contains(NO_PREFERENCE) && gender_mentor == gender_pref_mentee {
        return true;
    }

    // Mentee is No preference and Mentor has a preference
    if gender_pref_mentee.contains(NO_PREFERENCE) && gender_mentee == gender_pref_mentor {
        return true;
    }

    false
}
