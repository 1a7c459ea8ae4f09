use crate::models::Participant;

/// Section header introducing the mentor block
pub const MENTOR_HEADER: &str = "Here is the Mentor record:";

/// Section header introducing the mentee blocks
pub const MENTEE_HEADER: &str = "And here is the list of Mentee records:";

/// Assembled text block describing one mentor and its compatible mentees
///
/// Ephemeral: built fresh per mentor, handed to the ranking oracle, then
/// dropped. `mentor_name` and `mentor_email` are kept alongside the text so
/// callers can log which mentor a ranking belongs to.
#[derive(Debug, Clone)]
pub struct Dossier {
    pub mentor_name: String,
    pub mentor_email: String,
    pub mentee_count: usize,
    pub text: String,
}

/// Builder that appends labeled lines to a growable buffer
///
/// Replaces ad-hoc string concatenation with one append point, finished into
/// an immutable `Dossier`.
#[derive(Debug)]
pub struct DossierBuilder {
    mentor_name: String,
    mentor_email: String,
    mentee_count: usize,
    buf: String,
}

impl DossierBuilder {
    /// Start a dossier for the given mentor, serializing its block
    pub fn for_mentor(mentor: &Participant) -> Self {
        let mut builder = Self {
            mentor_name: mentor.full_name(),
            mentor_email: mentor.email.clone(),
            mentee_count: 0,
            buf: String::new(),
        };

        builder.buf.push_str(MENTOR_HEADER);
        builder.buf.push('\n');
        builder.participant_block(mentor);
        builder.buf.push_str(MENTEE_HEADER);
        builder.buf.push('\n');
        builder
    }

    /// Append one compatible mentee's block
    pub fn push_mentee(&mut self, mentee: &Participant) {
        self.mentee_count += 1;
        self.participant_block(mentee);
    }

    pub fn finish(self) -> Dossier {
        Dossier {
            mentor_name: self.mentor_name,
            mentor_email: self.mentor_email,
            mentee_count: self.mentee_count,
            text: self.buf,
        }
    }

    fn line(&mut self, label: &str, value: &str) {
        self.buf.push_str(label);
        self.buf.push_str(": ");
        self.buf.push_str(value);
        self.buf.push('\n');
    }

    /// Serialize one participant in the fixed label order the scoring
    /// rubric refers to
    fn participant_block(&mut self, p: &Participant) {
        self.line("First name", &p.first_name);
        self.line("Last name", &p.last_name);
        self.line("email", &p.email);
        self.line("City", &p.city);
        self.line("State", &p.state);
        self.line("Meeting location preference", &p.meeting_location);
        self.line("Meeting type preference", &p.meeting_type);
        self.line("Gender", &p.gender);
        self.line("Gender preference", &p.gender_preference);
        self.line("Occupation", &p.occupation);
        self.line("Affiliation", &p.affiliation);
        self.line("Company", &p.company);
        self.line("Industry", &p.industry);
        self.line("Work history", &p.work_history);
        self.line("Career path", &p.career_path);
        self.line("Education", &p.education);
        self.line("Higher education", &p.higher_education);
        self.line("Degree", &p.degree);
        self.line("Values", &p.values);
        self.line("About me", &p.about_me);
        self.line("Hobbies", &p.hobbies);
        self.line("Focus area", &p.focus_area);
        self.line("Expectations and hopes", &p.expectations);
        self.line("Would you like to add anything else?", &p.anything_else);
    }
}
