//! Password strength criteria
//!
//! Each section checks a single criterion of the strength rule set.

mod length;
mod variety;

pub use length::{MIN_LENGTH, length_section, utf16_len};
pub use variety::{case_mix_section, digit_section, symbol_section};

/// Result type for section evaluation functions.
/// - `Some(reason)` - Criterion not met, with a hint for the user
/// - `None` - Criterion met
pub type SectionResult = Option<String>;
