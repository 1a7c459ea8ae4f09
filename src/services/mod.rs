// Service exports
pub mod openai;
pub mod sheets;

pub use openai::{OpenAiClient, OpenAiError};
pub use sheets::{SheetsClient, SheetsError};
