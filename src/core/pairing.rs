use crate::core::dossier::{Dossier, DossierBuilder};
use crate::core::filters::is_gender_match;
use crate::models::Participant;

/// Pairing engine - classifies participants by role and assembles one
/// dossier per mentor
///
/// For every participant whose role contains "Mentor", the full participant
/// list is scanned again and every "Mentee" that passes the gender
/// compatibility check is appended. Nested iteration is O(M*N) but input
/// sizes are a few hundred questionnaire rows at most.
#[derive(Debug, Clone, Default)]
pub struct PairingEngine;

impl PairingEngine {
    pub fn new() -> Self {
        Self
    }

    /// Assemble the dossier for one mentor against the full participant list
    ///
    /// Rows are never mutated or consumed; the same mentee can appear in
    /// many dossiers, and duplicate submissions are not deduplicated.
    pub fn build_dossier(&self, mentor: &Participant, participants: &[Participant]) -> Dossier {
        let mut builder = DossierBuilder::for_mentor(mentor);

        for candidate in participants {
            if candidate.is_mentee()
                && is_gender_match(
                    &mentor.gender,
                    &mentor.gender_preference,
                    &candidate.gender,
                    &candidate.gender_preference,
                )
            {
                builder.push_mentee(candidate);
            }
        }

        builder.finish()
    }

    /// Build one dossier per mentor, in participant order
    pub fn build_dossiers(&self, participants: &[Participant]) -> Vec<Dossier> {
        participants
            .iter()
            .filter(|p| p.is_mentor())
            .map(|mentor| self.build_dossier(mentor, participants))
            .collect()
    }
}
