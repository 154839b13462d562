//! Close-response generator: three deal-closing reply variants for a customer message.

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;
use crate::voice::{apply_language, or_default, tone_prefix, DEFAULT_LANGUAGE, DEFAULT_TONE};

const DEFAULT_BRAND: &str = "Our brand";
const DEFAULT_OFFER: &str = "our solution";

/// Incoming close-response request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CloseResponseRequest {
    /// Raw message from the customer or prospect.
    pub customer_message: String,
    /// Brand or business name.
    #[serde(default)]
    pub brand_name: Option<String>,
    /// What is being sold (product/service and key value).
    #[serde(default)]
    pub offer: Option<String>,
    /// Tone such as friendly, confident, professional, casual.
    #[serde(default = "default_tone")]
    pub tone: Option<String>,
    /// Output language code like en, es, fr.
    #[serde(default = "default_language")]
    pub language: Option<String>,
}

fn default_tone() -> Option<String> {
    Some(DEFAULT_TONE.to_string())
}

fn default_language() -> Option<String> {
    Some(DEFAULT_LANGUAGE.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CloseResponseVariant {
    pub label: String,
    pub text: String,
}

/// Generated replies. `brand_name` is echoed exactly as received, even when the
/// text fell back to the default brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CloseResponseResult {
    pub brand_name: Option<String>,
    pub tone: String,
    pub language: String,
    pub variants: Vec<CloseResponseVariant>,
}

/// Variant labels, in output order.
pub const VARIANT_LABELS: [&str; 3] = ["Direct Close", "Value-First", "Objection-Ready"];

fn variant_bodies(offer: &str) -> [String; 3] {
    [
        format!(
            "Thanks for reaching out! Based on what you shared, {offer} is a great fit. If it works for you, I can reserve a spot and get you started today. Should I send the quick checkout link or a calendar to pick a time?"
        ),
        format!(
            "Appreciate your message! To make this easy: {offer} helps you get results fast with minimal setup. We can lock in pricing and onboard you in minutes. Would you prefer a short call or to receive the sign-up link?"
        ),
        format!(
            "Totally understand your questions. Most clients like you chose {offer} because it’s simple and proven. Let me remove any roadblocks—what would help you decide today? I can share a quick demo or send the sign-up link."
        ),
    ]
}

/// Builds the three reply variants. Fails only when `customer_message` is blank.
pub fn generate_close_response(
    request: &CloseResponseRequest,
) -> Result<CloseResponseResult, GenerateError> {
    if request.customer_message.trim().is_empty() {
        return Err(GenerateError::MissingField("customer_message"));
    }

    let brand = or_default(request.brand_name.as_deref(), DEFAULT_BRAND);
    let offer = or_default(request.offer.as_deref(), DEFAULT_OFFER);
    let tone = or_default(request.tone.as_deref(), DEFAULT_TONE);
    let language = or_default(request.language.as_deref(), DEFAULT_LANGUAGE);

    let header = format!("{} • {}: ", tone_prefix(tone), brand);
    let variants = VARIANT_LABELS
        .iter()
        .zip(variant_bodies(offer))
        .map(|(label, body)| CloseResponseVariant {
            label: (*label).to_string(),
            text: apply_language(&format!("{header}{body}"), language),
        })
        .collect();

    tracing::debug!(tone, language, "close-response variants generated");

    Ok(CloseResponseResult {
        brand_name: request.brand_name.clone(),
        tone: tone.to_string(),
        language: language.to_string(),
        variants,
    })
}
