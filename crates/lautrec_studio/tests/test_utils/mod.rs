//! Scripted composer and painter doubles for studio tests.
#![allow(dead_code)]

use async_trait::async_trait;
use lautrec_core::{
    GeneratedContent, GenerationBrief, GraphicText, ImageData, LinkedinPost, TwitterPost,
};
use lautrec_error::{
    ComposeError, ComposeErrorKind, ImageError, ImageErrorKind, LautrecResult,
};
use lautrec_interface::{ContentComposer, ImagePainter};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

/// A composer that replays scripted responses in order.
///
/// Each call optionally waits on a gate first, so tests can hold the text
/// stage open while asserting on intermediate state.
#[derive(Clone, Default)]
pub struct ScriptedComposer {
    inner: Arc<ComposerInner>,
}

#[derive(Default)]
struct ComposerInner {
    responses: Mutex<VecDeque<LautrecResult<GeneratedContent>>>,
    gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
    calls: AtomicUsize,
}

impl ScriptedComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub fn push_ok(&self, content: GeneratedContent) {
        self.inner
            .responses
            .lock()
            .unwrap()
            .push_back(Ok(content));
    }

    /// Queue a failure with the given message.
    pub fn push_err(&self, message: &str) {
        self.inner.responses.lock().unwrap().push_back(Err(
            ComposeError::new(ComposeErrorKind::Provider(message.to_string())).into(),
        ));
    }

    /// Gate the next call; it blocks until the returned sender fires or drops.
    pub fn gate_next(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.inner.gates.lock().unwrap().push_back(rx);
        tx
    }

    /// How many times `compose` has been invoked.
    pub fn calls(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentComposer for ScriptedComposer {
    async fn compose(&self, _brief: &GenerationBrief) -> LautrecResult<GeneratedContent> {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.inner.gates.lock().unwrap().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.inner
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted compose response left")
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-composer"
    }
}

/// A painter that replays scripted results in completion order.
///
/// Gates are keyed by caption, so a test can release two concurrent paint
/// calls in a chosen order.
#[derive(Clone, Default)]
pub struct ScriptedPainter {
    inner: Arc<PainterInner>,
}

#[derive(Default)]
struct PainterInner {
    results: Mutex<VecDeque<LautrecResult<ImageData>>>,
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    captions: Mutex<Vec<String>>,
}

impl ScriptedPainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful image.
    pub fn push_ok(&self, bytes: Vec<u8>) {
        self.inner
            .results
            .lock()
            .unwrap()
            .push_back(Ok(ImageData::new(None, bytes)));
    }

    /// Queue a failure.
    pub fn push_err(&self, message: &str) {
        self.inner.results.lock().unwrap().push_back(Err(
            ImageError::new(ImageErrorKind::Provider(message.to_string())).into(),
        ));
    }

    /// Gate the call for `caption`; it blocks until the sender fires or drops.
    pub fn gate_caption(&self, caption: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.inner
            .gates
            .lock()
            .unwrap()
            .insert(caption.to_string(), rx);
        tx
    }

    /// The captions `paint` has been invoked with, in call order.
    pub fn captions(&self) -> Vec<String> {
        self.inner.captions.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImagePainter for ScriptedPainter {
    async fn paint(&self, caption: &str) -> LautrecResult<ImageData> {
        self.inner
            .captions
            .lock()
            .unwrap()
            .push(caption.to_string());
        let gate = self.inner.gates.lock().unwrap().remove(caption);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.inner
            .results
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted paint result left")
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-painter"
    }
}

/// Content with only a LinkedIn post.
pub fn linkedin_content(copy: &str) -> GeneratedContent {
    GeneratedContent {
        linkedin_post: Some(LinkedinPost {
            copy: copy.to_string(),
        }),
        ..Default::default()
    }
}

/// Content with only an X/Twitter post.
pub fn twitter_content(copy: &str) -> GeneratedContent {
    GeneratedContent {
        twitter_post: Some(TwitterPost {
            copy: copy.to_string(),
            hashtags: vec![],
        }),
        ..Default::default()
    }
}

/// Content with only a graphic caption.
pub fn captioned_content(caption: &str) -> GeneratedContent {
    GeneratedContent {
        graphic_text: Some(GraphicText {
            text: caption.to_string(),
            image_url: None,
        }),
        ..Default::default()
    }
}
