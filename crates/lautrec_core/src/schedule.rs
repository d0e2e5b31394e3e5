//! Scheduled post records.

use crate::Platform;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A simulated scheduled post.
///
/// Lives for the process session only; there is no delivery, editing, or
/// firing — scheduled posts are inert records for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledPost {
    /// Opaque identifier, derived from the creation time
    pub id: String,
    /// Target platform
    pub platform: Platform,
    /// The literal text that will represent the post
    pub content: String,
    /// When the post is simulated to go out
    pub scheduled_time: DateTime<Utc>,
}
