//! The generation orchestrator.
//!
//! State lives behind a single `RwLock`, so mutations between suspension
//! points are atomic to observers. Every `generate` invocation is tagged with
//! a monotonically increasing request identifier; a stage result is applied
//! only while its identifier is still the latest, which keeps a slow image
//! call from landing on a newer generation's output.

use lautrec_core::{GeneratedContent, GenerationBrief};
use lautrec_error::{LautrecError, LautrecResult, StudioError, StudioErrorKind};
use lautrec_interface::{ContentComposer, ImagePainter};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::instrument;

/// One observable view of the studio.
///
/// `content` and `painting` are independent: a consumer can present
/// "text done, image still loading" by reading both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudioSnapshot {
    /// The stored generation result, if any
    pub content: Option<GeneratedContent>,
    /// The user-visible error from the last attempt, if any
    pub error: Option<String>,
    /// Whether a text stage is in flight
    pub composing: bool,
    /// Whether an image stage is in flight
    pub painting: bool,
}

#[derive(Debug, Default)]
struct StudioState {
    content: Option<GeneratedContent>,
    error: Option<String>,
    composing: bool,
    painting: bool,
    latest_request: u64,
}

/// The generation orchestrator.
///
/// Owns the request lifecycle: validates input, runs the text stage, stores
/// the result so it is observable immediately, then runs the image stage as
/// an independent task that merges into the current result on completion.
///
/// A second `generate` while the text stage is in flight is rejected with
/// [`StudioErrorKind::Busy`]. Image stages do not block new requests; a
/// superseded image call races to a silently-discarded completion.
pub struct Studio<C, P> {
    composer: Arc<C>,
    painter: Arc<P>,
    state: Arc<RwLock<StudioState>>,
    image_tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl<C, P> std::fmt::Debug for Studio<C, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Studio").finish_non_exhaustive()
    }
}

impl<C, P> Studio<C, P>
where
    C: ContentComposer + 'static,
    P: ImagePainter + 'static,
{
    /// Create a studio over a composer and a painter.
    pub fn new(composer: C, painter: P) -> Self {
        Self {
            composer: Arc::new(composer),
            painter: Arc::new(painter),
            state: Arc::new(RwLock::new(StudioState::default())),
            image_tasks: Mutex::new(Vec::new()),
        }
    }

    /// Run one generation cycle.
    ///
    /// Returns the text-stage result; the image stage, when the result
    /// carries a graphic caption, continues in the background and merges into
    /// the stored content. Await [`settle`](Self::settle) to observe the
    /// fully-enhanced state.
    ///
    /// # Errors
    ///
    /// - [`StudioErrorKind::Busy`] when a text stage is already in flight.
    /// - `ValidationError` when the brief fails its preconditions; existing
    ///   content is left untouched and no provider call is made.
    /// - The composer's error when the text stage fails; previous content was
    ///   cleared on entry and is not restored.
    #[instrument(name = "studio_generate", skip(self, brief))]
    pub async fn generate(&self, brief: GenerationBrief) -> LautrecResult<GeneratedContent> {
        let request = {
            let mut state = self.state.write().await;
            if state.composing {
                return Err(StudioError::new(StudioErrorKind::Busy).into());
            }
            if let Err(e) = brief.validate() {
                state.error = Some(e.kind.to_string());
                return Err(e.into());
            }
            state.content = None;
            state.error = None;
            state.composing = true;
            state.painting = false;
            state.latest_request += 1;
            state.latest_request
        };

        tracing::info!(
            request,
            platforms = ?brief.platforms.platforms(),
            "Starting content generation"
        );

        match self.composer.compose(&brief).await {
            Err(e) => {
                let mut state = self.state.write().await;
                if state.latest_request == request {
                    state.error = Some(user_message(&e));
                    state.composing = false;
                }
                Err(e)
            }
            Ok(content) => {
                let caption = content.graphic_caption().map(str::to_string);
                let mut start_paint = false;
                {
                    let mut state = self.state.write().await;
                    if state.latest_request == request {
                        state.content = Some(content.clone());
                        state.composing = false;
                        if caption.is_some() {
                            state.painting = true;
                            start_paint = true;
                        }
                    }
                }
                if start_paint
                    && let Some(caption) = caption
                {
                    self.spawn_paint(request, caption).await;
                }
                Ok(content)
            }
        }
    }

    /// Launch the image stage for `request` without blocking the caller.
    async fn spawn_paint(&self, request: u64, caption: String) {
        let painter = Arc::clone(&self.painter);
        let state = Arc::clone(&self.state);

        let handle = tokio::spawn(async move {
            tracing::info!(request, "Starting image generation");
            let outcome = painter.paint(&caption).await;

            let mut state = state.write().await;
            match outcome {
                Ok(image) if state.latest_request == request => {
                    let url = image.to_data_url();
                    let merged = state
                        .content
                        .as_mut()
                        .is_some_and(|content| content.attach_image_url(url));
                    if merged {
                        tracing::info!(request, "Image merged into generated content");
                    } else {
                        tracing::debug!(
                            request,
                            "Result no longer carries a graphic caption; image discarded"
                        );
                    }
                }
                Ok(_) => {
                    tracing::debug!(request, "Discarding stale image result");
                }
                Err(e) => {
                    // Best-effort enhancement: the caption renders text-only.
                    tracing::warn!(request, error = %e, "Image generation failed");
                }
            }
            if state.latest_request == request {
                state.painting = false;
            }
        });

        self.image_tasks.lock().await.push(handle);
    }

    /// Await any outstanding image-stage tasks.
    pub async fn settle(&self) {
        let handles: Vec<JoinHandle<()>> = {
            let mut tasks = self.image_tasks.lock().await;
            tasks.drain(..).collect()
        };
        for handle in handles {
            let _ = handle.await;
        }
    }

    /// A consistent view of the current state.
    pub async fn snapshot(&self) -> StudioSnapshot {
        let state = self.state.read().await;
        StudioSnapshot {
            content: state.content.clone(),
            error: state.error.clone(),
            composing: state.composing,
            painting: state.painting,
        }
    }

    /// The stored generation result, if any.
    pub async fn content(&self) -> Option<GeneratedContent> {
        self.state.read().await.content.clone()
    }

    /// The user-visible error from the last attempt, if any.
    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    /// Whether a text stage is in flight.
    pub async fn is_composing(&self) -> bool {
        self.state.read().await.composing
    }

    /// Whether an image stage is in flight.
    pub async fn is_painting(&self) -> bool {
        self.state.read().await.painting
    }
}

/// Derive the user-visible message for a failed text stage.
fn user_message(err: &LautrecError) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        "An unknown error occurred.".to_string()
    } else {
        message
    }
}
