// Core algorithm exports
pub mod keywords;
pub mod matcher;
pub mod scoring;
pub mod text;

pub use matcher::{MatchError, MatchOutcome, Matcher};
pub use scoring::score_posting;
pub use text::{extract_key_terms, extract_phrases, normalize_text};
