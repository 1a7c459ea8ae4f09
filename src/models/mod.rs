// Model exports
pub mod domain;

pub use domain::Participant;
