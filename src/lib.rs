//! Mentor Match - mentor/mentee pairing pipeline with LLM-ranked suggestions
//!
//! This library reads questionnaire rows from a spreadsheet, pairs every
//! mentor with its gender-compatible mentees, and asks an OpenAI model to
//! rank and score the candidate matches. The ranking formula itself lives in
//! the scoring prompt; the code owns row classification, the gender
//! compatibility filter, and dossier assembly.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{is_gender_match, remove_blank_lines, scoring_prompt, Dossier, DossierBuilder, PairingEngine};
pub use crate::models::Participant;
