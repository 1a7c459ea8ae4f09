use crate::core::dossier::Dossier;

/// Scoring rubric sent ahead of every dossier
///
/// The matching formula lives entirely in this text; changing the formula
/// means changing the prompt, not the code.
pub const SCORING_RUBRIC: &str = "\
Below are two sections. The first section contains details about a mentor. \
The second section contains a list of possible mentees. Your job is to find \
the best mentees for this mentor by analyzing the considerations below and \
giving each match a score between 0 and 40. Overall score 0 is no match, \
overall score 40 is a perfect match.\n\
Considerations:\n\
Location and in-person vs. zoom meetings. Use the 'City', 'State', 'Meeting \
location preference' and 'Meeting type preference' categories. If the mentor \
and mentee live no more than 30 miles apart (or in the same metropolitan \
area), their zoom preferences do not matter. If they live more than 30 miles \
apart and either of them is unwilling to meet over video conferencing, the \
match is disqualified completely and receives an overall score of 0.\n\
Scoring: each of the following considerations receives a value between 0 and 10.\n\
1. Occupation and work history similarity (0-10). Use the 'Occupation', \
'Career path', 'Industry' and the mentor's 'Work history' categories. Same \
or adjacent occupations and industries score high; unrelated ones score low.\n\
2. Education similarity (0-10). Use the 'Education', 'Higher education' and \
'Degree' categories. Same subjects score high, adjacent subjects medium, \
unrelated subjects low.\n\
3. Values alignment (0-10). Use the 'Values', 'About me', 'Focus area', \
'Expectations and hopes' and 'Hobbies' categories, and look for alignment in \
the answer about why they want to participate in the mentorship program.\n\
4. Anything else (0-10). Use the 'Would you like to add anything else?', \
'Occupation', 'Work history', 'Values', 'About me', 'Expectations and hopes', \
'Meeting type preference', 'Affiliation' and 'Company' categories to catch \
any additional mismatch; an explicit unmet request scores 0.\n";

/// Strict single-line output contract, split into columns by semicolons
pub const OUTPUT_CONTRACT: &str = "\
When giving the scores, never list mentees with an overall score of 0 or a \
disqualified location consideration. Use the exact following very strict \
format and no other format. Format for a single mentor and mentee line: \
[Mentor full name]; [Mentor email]; [Mentee full name]; [Mentee email]; \
[overall score] / 40; Occupation [score] / 10; Education [score] / 10; \
Values [score] / 10; Anything else [score] / 10; [rationale] \
End of format. There must only be one line per one mentor and one mentee. \
Keep the rationale short, under 500 characters. Do not put '*' or '-' in the \
output. Do not output a bullet list or a numbered list. A record should \
always start with the name of the mentor. Sort the mentees by score, from \
high to low.\n";

/// Assemble the full prompt for one dossier
///
/// `max_matches` caps how many candidate lines the oracle is asked to emit;
/// it may return fewer but never more.
pub fn scoring_prompt(dossier: &Dossier, max_matches: u8) -> String {
    format!(
        "{SCORING_RUBRIC}{OUTPUT_CONTRACT}Please output the top {max} compatible mentees. \
You can list less than {max}, but not more than {max}.\n{text}",
        max = max_matches,
        text = dossier.text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dossier::DossierBuilder;
    use crate::models::Participant;

    #[test]
    fn test_prompt_contains_rubric_cap_and_dossier() {
        let mentor = Participant {
            role: "Mentor".to_string(),
            first_name: "Maya".to_string(),
            last_name: "Cohen".to_string(),
            ..Default::default()
        };
        let dossier = DossierBuilder::for_mentor(&mentor).finish();

        let prompt = scoring_prompt(&dossier, 10);

        assert!(prompt.starts_with(SCORING_RUBRIC));
        assert!(prompt.contains("top 10 compatible mentees"));
        assert!(prompt.contains("First name: Maya"));
        // Dossier text comes last so the rubric reads as instructions
        assert!(prompt.ends_with(&dossier.text));
    }

    #[test]
    fn test_candidate_cap_is_configurable() {
        let dossier = DossierBuilder::for_mentor(&Participant::default()).finish();
        let prompt = scoring_prompt(&dossier, 3);
        assert!(prompt.contains("top 3 compatible mentees"));
        assert!(!prompt.contains("top 10"));
    }
}
