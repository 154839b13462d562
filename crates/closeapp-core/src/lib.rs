//! CloseApp API core library.
//!
//! AI-style helpers to craft deal-closing replies and multi-platform outreach copy
//! for small brands and startups. Copy is template-filled and keyed on tone,
//! platform and language.

pub mod close_response;
pub mod error;
pub mod outreach;
pub mod voice;

pub use close_response::{
    generate_close_response, CloseResponseRequest, CloseResponseResult, CloseResponseVariant,
    VARIANT_LABELS,
};
pub use error::GenerateError;
pub use outreach::{
    generate_outreach, OutreachRequest, OutreachResult, Platform, ACCEPTED_PLATFORMS,
};
pub use voice::{apply_language, tone_prefix, DEFAULT_LANGUAGE, DEFAULT_TONE};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
