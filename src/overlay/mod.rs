//! Custom cursor overlay core
//!
//! Host-independent logic behind the template's synthetic cursor: pointer
//! state, background-darkness sampling, color selection, and per-mode
//! render geometry. Hosts supply a [`Surface`] for background lookups and
//! a [`Host`] for native-cursor control, then feed [`PointerEvent`]s and
//! read back [`OverlayFrame`]s.

pub mod color;
pub mod frame;
pub mod sampler;
pub mod state;

// Re-exports for library consumers
pub use frame::{Ease, Indicator, OverlayFrame, Transition};
pub use sampler::{Point, Surface};
pub use state::{Host, Mode, Overlay, OverlayConfig, PointerEvent, CLICKABLE_SELECTOR};
