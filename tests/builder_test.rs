//! Document construction and round-trip tests
//!
//! Verifies the canonical document shape, sentence id invariants, and
//! that serialized output survives a strict re-parse unchanged.

use ssmlkit::{segment, BuildOptions, Locale, SsmlDocument};

fn en() -> Locale {
    Locale::new("en-US")
}

#[test]
fn round_trip_preserves_every_sentence() {
    let text = "Dr. Smith arrived at 3.15 sharp. He said \"Wait here.\" Then we left.";
    let locale = en();
    let spans = segment(text, &locale);
    let doc = SsmlDocument::build(text, &locale, &BuildOptions::default());

    let reparsed = SsmlDocument::parse(&doc.to_ssml()).expect("own output must re-parse");
    assert_eq!(reparsed.sentence_count(), spans.len());
    for (span, sentence) in spans.iter().zip(reparsed.sentences()) {
        assert_eq!(span.text, sentence);
    }
}

#[test]
fn sentence_ids_are_positional_and_unique() {
    let doc = SsmlDocument::build(
        "First one. Second one. Third one. Fourth one.",
        &en(),
        &BuildOptions::default(),
    );
    let elements = doc.sentence_elements();
    assert_eq!(elements.len(), 4);
    for (i, el) in elements.iter().enumerate() {
        assert_eq!(el.attr("id"), Some(format!("sentence-{}", i).as_str()));
    }
}

#[test]
fn empty_input_builds_valid_empty_document() {
    let doc = SsmlDocument::build("", &en(), &BuildOptions::default());
    assert_eq!(doc.sentence_count(), 0);

    let ssml = doc.to_ssml();
    assert!(ssml.contains("<speak"));
    SsmlDocument::parse(&ssml).expect("empty document is still a valid document");
}

#[test]
fn locale_tag_lands_on_root() {
    let doc = SsmlDocument::build("Bonjour.", &Locale::new("fr-FR"), &BuildOptions::default());
    assert_eq!(doc.root().attr("xml:lang"), Some("fr-FR"));
}

#[test]
fn special_characters_survive_the_round_trip() {
    let text = "Salt & pepper cost < 5 dollars. \"Cheap,\" she said.";
    let doc = SsmlDocument::build(text, &en(), &BuildOptions::default());
    let reparsed = SsmlDocument::parse(&doc.to_ssml()).expect("escaped output must re-parse");
    assert_eq!(reparsed.sentences(), doc.sentences());
}

#[test]
fn prosody_options_wrap_the_sentences() {
    let options = BuildOptions {
        flat: false,
        rate: Some("slow".to_string()),
        pitch: None,
    };
    let doc = SsmlDocument::build("Take it slow.", &en(), &options);
    let ssml = doc.to_ssml();
    assert!(ssml.contains("<prosody rate=\"slow\">"));
    // The sentence is still addressable inside the wrapper
    assert_eq!(doc.index_of_text("Take it slow."), Some(0));
}

#[test]
fn japanese_locale_uses_japanese_boundaries() {
    let doc = SsmlDocument::build(
        "おはようございます。今日は晴れです。",
        &Locale::new("ja-JP"),
        &BuildOptions::default(),
    );
    assert_eq!(doc.sentence_count(), 2);
    assert_eq!(doc.root().attr("xml:lang"), Some("ja-JP"));
}
