use serde::{Deserialize, Serialize};

/// Spreadsheet column positions in the questionnaire response tab
///
/// The form inserts bookkeeping columns between the answer columns, so the
/// positions are sparse. A row shorter than a position yields an empty field.
pub mod columns {
    pub const AFFILIATION: usize = 2;
    pub const ROLE: usize = 3;
    pub const FIRST_NAME: usize = 7;
    pub const LAST_NAME: usize = 8;
    pub const EMAIL: usize = 9;
    pub const CITY: usize = 11;
    pub const STATE: usize = 12;
    pub const GENDER: usize = 14;
    pub const GENDER_PREFERENCE: usize = 15;
    pub const MEETING_LOCATION: usize = 17;
    pub const MEETING_TYPE: usize = 18;
    pub const OCCUPATION: usize = 21;
    pub const COMPANY: usize = 22;
    pub const INDUSTRY: usize = 24;
    pub const WORK_HISTORY: usize = 26;
    pub const CAREER_PATH: usize = 27;
    pub const EDUCATION: usize = 28;
    pub const HIGHER_EDUCATION: usize = 29;
    pub const DEGREE: usize = 30;
    pub const VALUES: usize = 33;
    pub const ABOUT_ME: usize = 34;
    pub const HOBBIES: usize = 35;
    pub const FOCUS_AREA: usize = 36;
    pub const EXPECTATIONS: usize = 39;
    pub const ANYTHING_ELSE: usize = 40;
}

/// One questionnaire submission with named fields
///
/// Parsed once at ingestion so the rest of the pipeline never touches raw
/// column indices. Fields are kept as free text exactly as submitted; no
/// validation or normalization is applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Participant {
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub city: String,
    pub state: String,
    pub meeting_location: String,
    pub meeting_type: String,
    pub gender: String,
    pub gender_preference: String,
    pub occupation: String,
    pub affiliation: String,
    pub company: String,
    pub industry: String,
    pub work_history: String,
    pub career_path: String,
    pub education: String,
    pub higher_education: String,
    pub degree: String,
    pub values: String,
    pub about_me: String,
    pub hobbies: String,
    pub focus_area: String,
    pub expectations: String,
    pub anything_else: String,
}

impl Participant {
    /// Build a participant from a raw spreadsheet row
    ///
    /// Missing cells (short rows) become empty strings and propagate as
    /// empty text into the dossier.
    pub fn from_row(row: &[String]) -> Self {
        let field = |idx: usize| row.get(idx).cloned().unwrap_or_default();

        Self {
            role: field(columns::ROLE),
            first_name: field(columns::FIRST_NAME),
            last_name: field(columns::LAST_NAME),
            email: field(columns::EMAIL),
            city: field(columns::CITY),
            state: field(columns::STATE),
            meeting_location: field(columns::MEETING_LOCATION),
            meeting_type: field(columns::MEETING_TYPE),
            gender: field(columns::GENDER),
            gender_preference: field(columns::GENDER_PREFERENCE),
            occupation: field(columns::OCCUPATION),
            affiliation: field(columns::AFFILIATION),
            company: field(columns::COMPANY),
            industry: field(columns::INDUSTRY),
            work_history: field(columns::WORK_HISTORY),
            career_path: field(columns::CAREER_PATH),
            education: field(columns::EDUCATION),
            higher_education: field(columns::HIGHER_EDUCATION),
            degree: field(columns::DEGREE),
            values: field(columns::VALUES),
            about_me: field(columns::ABOUT_ME),
            hobbies: field(columns::HOBBIES),
            focus_area: field(columns::FOCUS_AREA),
            expectations: field(columns::EXPECTATIONS),
            anything_else: field(columns::ANYTHING_ELSE),
        }
    }

    /// Role classification is substring-based: "Senior Mentor" still counts
    pub fn is_mentor(&self) -> bool {
        self.role.contains("Mentor")
    }

    pub fn is_mentee(&self) -> bool {
        self.role.contains("Mentee")
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
