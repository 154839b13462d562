//! Integration test: public generator API.
//!
//! Verifies that:
//! 1. Close responses always carry three variants in fixed order.
//! 2. Outreach always yields two variations and three tips, for every accepted platform.
//! 3. Tone and language tagging behave the same across both generators.

use closeapp_core::{
    apply_language, generate_close_response, generate_outreach, tone_prefix, CloseResponseRequest,
    GenerateError, OutreachRequest, ACCEPTED_PLATFORMS, VARIANT_LABELS,
};

#[test]
fn language_tag_properties() {
    for text in ["", "hello", "Subject: x\n\nbody", "🔥 drop"] {
        assert_eq!(apply_language(text, "en"), text);
        assert_eq!(apply_language(text, ""), text);
        assert!(apply_language(text, "es").starts_with("[ES] "));
    }
}

#[test]
fn tone_lookup_is_case_insensitive() {
    assert_eq!(tone_prefix("FRIENDLY"), tone_prefix("friendly"));
    assert_eq!(tone_prefix("friendly"), "Friendly");
}

#[test]
fn confident_spanish_close_response() {
    let req = CloseResponseRequest {
        customer_message: "hi".into(),
        offer: Some("coaching".into()),
        tone: Some("confident".into()),
        language: Some("es".into()),
        ..Default::default()
    };
    let out = generate_close_response(&req).expect("valid request");

    assert_eq!(out.variants.len(), 3);
    let direct = &out.variants[0];
    assert_eq!(direct.label, "Direct Close");
    assert!(direct
        .text
        .starts_with("[ES] Confident • Our brand: Thanks for reaching out!"));
    assert!(direct.text.contains("coaching"));
    assert_eq!(out.tone, "confident");
    assert_eq!(out.language, "es");
}

#[test]
fn close_response_order_is_stable_across_inputs() {
    for (tone, lang) in [("warm", "en"), ("unknown", "pt"), ("", ""), ("CASUAL", "xx")] {
        let req = CloseResponseRequest {
            customer_message: "Can you tell me more?".into(),
            brand_name: Some("Northwind".into()),
            offer: Some("a logistics audit".into()),
            tone: Some(tone.into()),
            language: Some(lang.into()),
        };
        let out = generate_close_response(&req).unwrap();
        let labels: Vec<&str> = out.variants.iter().map(|v| v.label.as_str()).collect();
        assert_eq!(labels, VARIANT_LABELS);
    }
}

#[test]
fn whitespace_message_yields_no_variants() {
    let req = CloseResponseRequest {
        customer_message: "  \t ".into(),
        ..Default::default()
    };
    assert_eq!(
        generate_close_response(&req),
        Err(GenerateError::MissingField("customer_message"))
    );
}

#[test]
fn every_platform_yields_two_variations_and_three_tips() {
    for name in ACCEPTED_PLATFORMS {
        for spelled in [name.to_string(), name.to_uppercase()] {
            let req = OutreachRequest::new(spelled, "design sprints", "agencies");
            let out = generate_outreach(&req).expect("accepted platform");
            assert_eq!(out.variations.len(), 2, "{name}");
            assert_eq!(out.tips.len(), 3, "{name}");
            assert_eq!(out.platform, name);
        }
    }
}

#[test]
fn twitter_and_x_share_templates() {
    let twitter = generate_outreach(&OutreachRequest::new("Twitter", "CRM", "agents")).unwrap();
    let x = generate_outreach(&OutreachRequest::new("x", "CRM", "agents")).unwrap();
    assert_eq!(twitter.variations, x.variations);
    assert_eq!(twitter.tips, x.tips);
    assert_eq!(twitter.platform, "twitter");
    assert_eq!(x.platform, "x");
}

#[test]
fn email_outreach_embeds_subject_line() {
    let out = generate_outreach(&OutreachRequest::new("email", "SEO audit", "startups")).unwrap();
    assert!(out.variations[0].contains("Subject: Quick idea for startups"));
}

#[test]
fn facebook_is_unsupported() {
    let err = generate_outreach(&OutreachRequest::new("facebook", "ads", "shops")).unwrap_err();
    let msg = err.to_string();
    for name in ["instagram", "linkedin", "twitter/x", "email", "tiktok"] {
        assert!(msg.contains(name), "{msg}");
    }
}
