// Core pipeline exports
pub mod cleanup;
pub mod dossier;
pub mod filters;
pub mod pairing;
pub mod prompt;

pub use cleanup::remove_blank_lines;
pub use dossier::{Dossier, DossierBuilder};
pub use filters::is_gender_match;
pub use pairing::PairingEngine;
pub use prompt::scoring_prompt;
