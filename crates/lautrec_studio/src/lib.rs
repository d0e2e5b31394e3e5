//! Generation orchestration and schedule simulation for Lautrec.
//!
//! Two components live here:
//! - [`Studio`] owns the two-stage generation lifecycle: validate the brief,
//!   run the text stage, then progressively enhance the result with an image
//!   as an independent second stage.
//! - [`ScheduleBoard`] is the in-memory, session-lifetime store of simulated
//!   scheduled posts, kept sorted by scheduled time.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod board;
mod studio;

pub use board::ScheduleBoard;
pub use studio::{Studio, StudioSnapshot};
