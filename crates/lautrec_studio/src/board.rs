//! In-memory schedule simulation.

use chrono::{DateTime, Utc};
use lautrec_core::{Platform, ScheduledPost};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory store of simulated scheduled posts.
///
/// Stores posts in a Vec protected by an RwLock for thread-safe access,
/// kept sorted ascending by scheduled time. All data is lost when the board
/// is dropped; nothing ever fires.
///
/// # Example
/// ```no_run
/// use chrono::Utc;
/// use lautrec_core::Platform;
/// use lautrec_studio::ScheduleBoard;
///
/// #[tokio::main]
/// async fn main() {
///     let board = ScheduleBoard::new();
///     board
///         .schedule(Platform::LinkedIn, "Big news.", Utc::now())
///         .await;
///     assert_eq!(board.len().await, 1);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleBoard {
    /// Scheduled posts, sorted ascending by scheduled time
    posts: Arc<RwLock<Vec<ScheduledPost>>>,
    /// Sequence suffix for id generation
    next_seq: Arc<RwLock<u64>>,
}

impl ScheduleBoard {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self {
            posts: Arc::new(RwLock::new(Vec::new())),
            next_seq: Arc::new(RwLock::new(0)),
        }
    }

    /// Record a post for a future time.
    ///
    /// Constructs a [`ScheduledPost`] with a fresh time-derived id, inserts
    /// it, and re-sorts the whole collection ascending by scheduled time —
    /// fine at the expected scale of a handful of posts per session. Whether
    /// the time actually lies in the future is the caller's concern.
    pub async fn schedule(
        &self,
        platform: Platform,
        content: impl Into<String>,
        scheduled_time: DateTime<Utc>,
    ) -> ScheduledPost {
        let post = ScheduledPost {
            id: self.next_id().await,
            platform,
            content: content.into(),
            scheduled_time,
        };

        let mut posts = self.posts.write().await;
        posts.push(post.clone());
        posts.sort_by_key(|p| p.scheduled_time);

        tracing::info!(
            id = %post.id,
            platform = %post.platform,
            scheduled_time = %post.scheduled_time,
            "Post scheduled"
        );

        post
    }

    /// Generate the next post id: creation-time milliseconds plus a
    /// per-board sequence suffix, so ids stay unique within a session.
    async fn next_id(&self) -> String {
        let mut seq = self.next_seq.write().await;
        *seq += 1;
        format!("{}-{}", Utc::now().timestamp_millis(), seq)
    }

    /// A snapshot of the scheduled posts, sorted ascending by time.
    pub async fn posts(&self) -> Vec<ScheduledPost> {
        self.posts.read().await.clone()
    }

    /// The number of scheduled posts.
    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    /// Check if the board is empty.
    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }

    /// Clear all scheduled posts.
    pub async fn clear(&self) {
        self.posts.write().await.clear();
    }
}

impl Default for ScheduleBoard {
    fn default() -> Self {
        Self::new()
    }
}
