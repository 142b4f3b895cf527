
pub mod error;
pub mod config;
pub mod phonemes;
pub mod text;
pub mod dictionary;
pub mod forms;
pub mod syllables;
pub mod rhyme;
pub mod poem;

pub use error::{Error, Result};
