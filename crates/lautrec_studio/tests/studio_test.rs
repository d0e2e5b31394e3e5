//! Tests for the two-stage generation orchestrator.

mod test_utils;

use lautrec_core::{GenerationBrief, ImageData, Platform, PlatformSelection};
use lautrec_error::{LautrecErrorKind, StudioErrorKind, ValidationErrorKind};
use lautrec_studio::Studio;
use std::sync::Arc;
use std::time::Duration;
use test_utils::{
    ScriptedComposer, ScriptedPainter, captioned_content, linkedin_content, twitter_content,
};

fn brief(excerpt: &str, platforms: PlatformSelection) -> GenerationBrief {
    GenerationBrief::new(excerpt, platforms)
}

#[tokio::test]
async fn whitespace_excerpt_fails_without_calling_composer() {
    let composer = ScriptedComposer::new();
    let painter = ScriptedPainter::new();
    let studio = Studio::new(composer.clone(), painter.clone());

    let err = studio
        .generate(brief("   \n", PlatformSelection::all()))
        .await
        .unwrap_err();

    match err.kind() {
        LautrecErrorKind::Validation(v) => {
            assert_eq!(v.kind, ValidationErrorKind::EmptyExcerpt)
        }
        other => panic!("expected validation error, got {other}"),
    }
    assert_eq!(composer.calls(), 0);
    assert!(painter.captions().is_empty());

    let snapshot = studio.snapshot().await;
    assert!(snapshot.content.is_none());
    assert_eq!(snapshot.error.as_deref(), Some("excerpt required"));
    assert!(!snapshot.composing);
}

#[tokio::test]
async fn empty_selection_fails_regardless_of_excerpt() {
    let composer = ScriptedComposer::new();
    let studio = Studio::new(composer.clone(), ScriptedPainter::new());

    let err = studio
        .generate(brief("Company X launches new product", PlatformSelection::none()))
        .await
        .unwrap_err();

    match err.kind() {
        LautrecErrorKind::Validation(v) => {
            assert_eq!(v.kind, ValidationErrorKind::NoPlatformSelected)
        }
        other => panic!("expected validation error, got {other}"),
    }
    assert_eq!(composer.calls(), 0);
    assert_eq!(studio.error().await.as_deref(), Some("no platform selected"));
}

#[tokio::test]
async fn validation_failure_preserves_previous_content() {
    let composer = ScriptedComposer::new();
    composer.push_ok(linkedin_content("Big news."));
    let studio = Studio::new(composer.clone(), ScriptedPainter::new());

    studio
        .generate(brief("launch", PlatformSelection::only(Platform::LinkedIn)))
        .await
        .unwrap();

    let err = studio
        .generate(brief("", PlatformSelection::all()))
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), LautrecErrorKind::Validation(_)));

    let snapshot = studio.snapshot().await;
    assert!(snapshot.content.is_some(), "previous result must survive");
    assert_eq!(snapshot.error.as_deref(), Some("excerpt required"));
}

#[tokio::test]
async fn caption_triggers_exactly_one_paint_with_that_text() {
    let composer = ScriptedComposer::new();
    let mut content = captioned_content("Launch day");
    content.linkedin_post = linkedin_content("Big news.").linkedin_post;
    composer.push_ok(content);

    let painter = ScriptedPainter::new();
    painter.push_ok(vec![1, 2, 3]);

    let studio = Studio::new(composer, painter.clone());
    studio
        .generate(brief("launch", PlatformSelection::all()))
        .await
        .unwrap();
    studio.settle().await;

    assert_eq!(painter.captions(), ["Launch day"]);
    let content = studio.content().await.unwrap();
    assert_eq!(
        content.graphic_text.unwrap().image_url.as_deref(),
        Some(ImageData::new(None, vec![1, 2, 3]).to_data_url().as_str())
    );
    assert!(!studio.is_painting().await);
}

#[tokio::test]
async fn missing_caption_skips_the_image_stage() {
    let composer = ScriptedComposer::new();
    composer.push_ok(linkedin_content("Big news."));
    let painter = ScriptedPainter::new();

    let studio = Studio::new(composer, painter.clone());
    let content = studio
        .generate(brief(
            "Company X launches new product",
            PlatformSelection::only(Platform::LinkedIn),
        ))
        .await
        .unwrap();
    studio.settle().await;

    assert!(!content.linkedin_post.unwrap().copy.is_empty());
    assert!(content.facebook_post.is_none());
    assert!(content.twitter_post.is_none());
    assert!(content.graphic_text.is_none());
    assert!(painter.captions().is_empty());
    assert!(!studio.is_painting().await);
}

#[tokio::test]
async fn whitespace_caption_skips_the_image_stage() {
    let composer = ScriptedComposer::new();
    composer.push_ok(captioned_content("   "));
    let painter = ScriptedPainter::new();

    let studio = Studio::new(composer, painter.clone());
    studio
        .generate(brief("launch", PlatformSelection::only(Platform::GraphicText)))
        .await
        .unwrap();
    studio.settle().await;

    assert!(painter.captions().is_empty());
}

#[tokio::test]
async fn paint_failure_is_absorbed() {
    let composer = ScriptedComposer::new();
    composer.push_ok(captioned_content("Launch day"));
    let painter = ScriptedPainter::new();
    painter.push_err("image service unavailable");

    let studio = Studio::new(composer, painter.clone());
    studio
        .generate(brief("launch", PlatformSelection::all()))
        .await
        .unwrap();
    studio.settle().await;

    let snapshot = studio.snapshot().await;
    let graphic = snapshot.content.unwrap().graphic_text.unwrap();
    assert_eq!(graphic.text, "Launch day");
    assert!(graphic.image_url.is_none(), "failed paint must leave the result untouched");
    assert!(snapshot.error.is_none(), "image failures are never surfaced");
    assert!(!snapshot.painting);
}

#[tokio::test]
async fn stale_image_result_merges_as_a_noop() {
    let composer = ScriptedComposer::new();
    composer.push_ok(captioned_content("First"));
    composer.push_ok(twitter_content("short"));

    let painter = ScriptedPainter::new();
    painter.push_ok(vec![7, 7, 7]);
    let release_first = painter.gate_caption("First");

    let studio = Studio::new(composer, painter.clone());
    studio
        .generate(brief("one", PlatformSelection::all()))
        .await
        .unwrap();
    // First paint is now blocked on its gate; replace the result.
    studio
        .generate(brief("two", PlatformSelection::only(Platform::Twitter)))
        .await
        .unwrap();

    release_first.send(()).unwrap();
    studio.settle().await;

    let snapshot = studio.snapshot().await;
    let content = snapshot.content.unwrap();
    assert!(content.graphic_text.is_none(), "stale image must not create a field");
    assert_eq!(content.twitter_post.unwrap().copy, "short");
    assert!(snapshot.error.is_none());
}

#[tokio::test]
async fn stale_paint_cannot_clear_a_newer_painting_flag() {
    let composer = ScriptedComposer::new();
    composer.push_ok(captioned_content("First"));
    composer.push_ok(captioned_content("Second"));

    let painter = ScriptedPainter::new();
    painter.push_ok(vec![1]);
    painter.push_ok(vec![2]);
    let release_first = painter.gate_caption("First");
    let release_second = painter.gate_caption("Second");

    let studio = Studio::new(composer, painter.clone());
    studio
        .generate(brief("one", PlatformSelection::all()))
        .await
        .unwrap();
    studio
        .generate(brief("two", PlatformSelection::all()))
        .await
        .unwrap();

    release_first.send(()).unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(
        studio.is_painting().await,
        "stale completion must not clear the newer request's flag"
    );

    release_second.send(()).unwrap();
    studio.settle().await;

    let content = studio.content().await.unwrap();
    assert_eq!(
        content.graphic_text.unwrap().image_url.as_deref(),
        Some(ImageData::new(None, vec![2]).to_data_url().as_str())
    );
    assert!(!studio.is_painting().await);
}

#[tokio::test]
async fn compose_failure_surfaces_message_and_clears_previous_result() {
    let composer = ScriptedComposer::new();
    composer.push_ok(linkedin_content("Big news."));
    composer.push_err("model exploded");

    let studio = Studio::new(composer, ScriptedPainter::new());
    studio
        .generate(brief("launch", PlatformSelection::only(Platform::LinkedIn)))
        .await
        .unwrap();

    let err = studio
        .generate(brief("launch again", PlatformSelection::only(Platform::LinkedIn)))
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), LautrecErrorKind::Compose(_)));

    let snapshot = studio.snapshot().await;
    assert!(snapshot.content.is_none(), "no keep-last-good-result behavior");
    assert!(
        snapshot.error.as_deref().unwrap().contains("model exploded"),
        "failure message must reach the user"
    );
    assert!(!snapshot.composing);
}

#[tokio::test]
async fn second_generate_while_composing_is_rejected() {
    let composer = ScriptedComposer::new();
    composer.push_ok(linkedin_content("Big news."));
    let release = composer.gate_next();

    let studio = Arc::new(Studio::new(composer.clone(), ScriptedPainter::new()));

    let first = {
        let studio = Arc::clone(&studio);
        tokio::spawn(async move {
            studio
                .generate(brief("launch", PlatformSelection::only(Platform::LinkedIn)))
                .await
        })
    };

    // Wait for the first request to reach the composer.
    while composer.calls() == 0 {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let err = studio
        .generate(brief("another", PlatformSelection::only(Platform::Twitter)))
        .await
        .unwrap_err();
    match err.kind() {
        LautrecErrorKind::Studio(s) => assert_eq!(s.kind, StudioErrorKind::Busy),
        other => panic!("expected busy rejection, got {other}"),
    }

    release.send(()).unwrap();
    let content = first.await.unwrap().unwrap();
    assert!(content.linkedin_post.is_some());

    // The rejected call must not have disturbed the in-flight request.
    let snapshot = studio.snapshot().await;
    assert!(snapshot.content.is_some());
    assert!(snapshot.error.is_none());
}
