//! create-vibe-template library
//!
//! Two independent pieces:
//!
//! - [`template`]: the embedded project template and the scaffold step the
//!   CLI runs.
//! - [`overlay`]: the host-independent core of the template's custom cursor
//!   (pointer state, background-darkness sampling, render geometry), usable
//!   and testable without a live display.

pub mod overlay;
pub mod template;
