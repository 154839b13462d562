//! Outreach generator: platform-specific post/message variations plus posting tips.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;
use crate::voice::{
    apply_language, or_default, title_case, tone_prefix, DEFAULT_LANGUAGE, DEFAULT_TONE,
};

const DEFAULT_BRAND: &str = "We";
const DEFAULT_GOAL: &str = "book a call";

/// Platform names accepted on the wire (compared lower-cased).
pub const ACCEPTED_PLATFORMS: [&str; 6] =
    ["instagram", "linkedin", "twitter", "x", "email", "tiktok"];

/// Incoming outreach request.
#[derive(Debug, Clone, Deserialize)]
pub struct OutreachRequest {
    /// Platform like instagram, linkedin, twitter, email, tiktok.
    pub platform: String,
    #[serde(default)]
    pub brand_name: Option<String>,
    /// What you offer.
    pub offer: String,
    /// Who you want to reach.
    pub target_audience: String,
    /// Desired action, e.g. visit site, reply, book a call, purchase.
    #[serde(default = "default_goal")]
    pub goal: String,
    /// Tone of voice.
    #[serde(default = "default_tone")]
    pub tone: String,
    /// Language code.
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_goal() -> String {
    DEFAULT_GOAL.to_string()
}

fn default_tone() -> String {
    DEFAULT_TONE.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl OutreachRequest {
    /// Request with the wire defaults for goal, tone and language.
    pub fn new(
        platform: impl Into<String>,
        offer: impl Into<String>,
        target_audience: impl Into<String>,
    ) -> Self {
        Self {
            platform: platform.into(),
            brand_name: None,
            offer: offer.into(),
            target_audience: target_audience.into(),
            goal: default_goal(),
            tone: default_tone(),
            language: default_language(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutreachResult {
    /// Lower-cased platform as sent (`x` stays `x`).
    pub platform: String,
    pub tone: String,
    pub language: String,
    pub variations: Vec<String>,
    pub tips: Vec<String>,
}

/// Template family. `twitter` and `x` share [`Platform::Twitter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Instagram,
    LinkedIn,
    Twitter,
    Email,
    TikTok,
}

impl FromStr for Platform {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "instagram" => Ok(Platform::Instagram),
            "linkedin" => Ok(Platform::LinkedIn),
            "twitter" | "x" => Ok(Platform::Twitter),
            "email" => Ok(Platform::Email),
            "tiktok" => Ok(Platform::TikTok),
            _ => Err(GenerateError::UnsupportedPlatform(s.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Instagram => "instagram",
            Platform::LinkedIn => "linkedin",
            Platform::Twitter => "twitter",
            Platform::Email => "email",
            Platform::TikTok => "tiktok",
        };
        f.write_str(name)
    }
}

/// Values interpolated into the platform templates.
struct Fill<'a> {
    brand: &'a str,
    offer: &'a str,
    audience: &'a str,
    goal: &'a str,
}

impl Platform {
    /// Posting tips; static, never tone- or language-tagged.
    pub fn tips(self) -> [&'static str; 3] {
        match self {
            Platform::Instagram => [
                "Keep it short, use an emoji hook",
                "Call to comment or DM for next step",
                "Use carousel to show quick proof",
            ],
            Platform::LinkedIn => [
                "Personalize with their role/company",
                "Lead with outcomes, not features",
                "End with a soft ask",
            ],
            Platform::Twitter => ["One clear benefit", "Invite replies/DMs", "Keep < 280 chars"],
            Platform::Email => [
                "Clear subject line",
                "Keep body 3–5 sentences",
                "One simple ask",
            ],
            Platform::TikTok => [
                "Lead with a strong hook in first 2s",
                "Use captions and on-screen text",
                "Clear CTA to comment or link in bio",
            ],
        }
    }

    fn templates(self, f: &Fill<'_>) -> [String; 2] {
        let Fill { brand, offer, audience, goal } = *f;
        match self {
            Platform::Instagram => [
                format!(
                    "Hey {audience}! {brand} helps you with {offer}. Want a quick before/after and how it works? Drop a 🔥 and I’ll DM details. {} in 2 clicks.",
                    title_case(goal)
                ),
                format!(
                    "Creators/Founders: struggling with {audience}? We’re helping teams with {offer}. Comment ‘GO’ and I’ll send a 20-sec overview and {goal} link."
                ),
            ],
            Platform::LinkedIn => [
                format!(
                    "Hi {audience}, I noticed you’re exploring ways to improve {offer}. We recently helped a team like yours and I’d be glad to share a 2-min summary. Open to a brief chat to {goal}?"
                ),
                format!(
                    "{brand} helps {audience} achieve results with {offer}. If streamlining this is on your roadmap, I can share a concise one-pager and a link to {goal}."
                ),
            ],
            Platform::Twitter => [
                format!(
                    "{audience}, quick win: {offer}. DMs open—happy to share a 60-sec rundown and a link to {goal}."
                ),
                format!(
                    "We’re shipping tools for {audience}: {offer}. Reply ‘info’ and I’ll send the breakdown + {goal} link."
                ),
            ],
            Platform::Email => [
                format!(
                    "Subject: Quick idea for {audience}\n\nHi there — Noticed you’re working on {offer}. We helped similar teams see fast results. If helpful, I can share a 2-min summary and a link to {goal}. Open to it?"
                ),
                format!(
                    "Subject: {offer} in a week\n\nHi — We built a simple way for {audience} to get results from {offer}. Happy to send a one-pager and next steps to {goal}. Interested?"
                ),
            ],
            Platform::TikTok => [
                format!(
                    "Hook: Struggling with {audience}?\n\nShow: 3 quick cuts of {offer} results\nCTA: Comment ‘GO’ and I’ll DM how to {goal}."
                ),
                format!(
                    "POV: You need {offer}.\nB-Roll + captions → Outcome\nCTA: Link in bio to {goal}."
                ),
            ],
        }
    }
}

/// Builds two variations and three tips for the requested platform.
pub fn generate_outreach(request: &OutreachRequest) -> Result<OutreachResult, GenerateError> {
    let platform_name = request.platform.to_lowercase();
    let platform: Platform = platform_name.parse()?;

    let fill = Fill {
        brand: or_default(request.brand_name.as_deref(), DEFAULT_BRAND),
        offer: &request.offer,
        audience: &request.target_audience,
        goal: &request.goal,
    };
    let label = tone_prefix(&request.tone);
    let variations = platform
        .templates(&fill)
        .iter()
        .map(|body| apply_language(&format!("{label} • {body}"), &request.language))
        .collect();
    let tips = platform.tips().iter().map(|t| (*t).to_string()).collect();

    tracing::debug!(%platform, tone = %request.tone, "outreach variations generated");

    Ok(OutreachResult {
        platform: platform_name,
        tone: request.tone.clone(),
        language: request.language.clone(),
        variations,
        tips,
    })
}
