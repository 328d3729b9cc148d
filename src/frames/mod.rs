//! Frame structure: locating the current frame and splitting a history
//! into frames.
//!
//! Frames are never stored; they are a view computed by walking the
//! throw history.

pub mod walker;
pub mod view;

pub use walker::{locate, Position};
pub use view::{frames, FrameKind, FrameView, ThrowMark};
