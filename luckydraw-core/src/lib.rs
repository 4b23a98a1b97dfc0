//! Lucky draw core: a single-slot winner store and the draw policy on
//! top of it.
//!
//! An administrator fixes the first winner once; the first qualifying
//! draw hands it out, every later draw is uniform in a configured
//! window. All state is in-memory and owned by [`WinnerStore`], shared
//! into handlers explicitly rather than through a global.

pub mod config;
pub mod draw;
pub mod error;
pub mod store;

pub use config::DrawConfig;
pub use draw::{AssignOutcome, Draw, DrawService, WinnerInput};
pub use error::{DrawError, Result};
pub use store::{WinnerSlot, WinnerStore};
