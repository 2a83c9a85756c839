//! Overlay state object and lifecycle
//!
//! The synthetic cursor is an owned state machine driven by explicit pointer
//! events, so hosts (and tests) feed it without a live display. The host
//! wires the actual event sources: one set of document-level listeners for
//! move/down/up/enter/leave, plus per-element enter/leave watchers on every
//! node matching [`CLICKABLE_SELECTOR`]. Events are applied in arrival
//! order and the last writer wins; in particular a pointer-up resets the
//! mode to `Default` even while still over a clickable, until that
//! element's next hover-start fires. That matches the original DOM event
//! ordering and is part of the contract.

use serde::{Deserialize, Serialize};

use super::sampler::{self, Point, Surface};

/// Selector for elements that should flip the overlay into hover mode
pub const CLICKABLE_SELECTOR: &str = r#"a, button, [role="button"], input, select, textarea"#;

/// Overlay colors and adaptation switch, fixed at creation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverlayConfig {
    /// Color used over light backgrounds (and always, when adaptation is off)
    pub color: String,
    /// Color used over dark backgrounds
    pub light_color: String,
    /// Re-sample background darkness on every pointer move
    pub invert_on_dark_mode: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        OverlayConfig {
            color: "#000000".to_string(),
            light_color: "#ffffff".to_string(),
            invert_on_dark_mode: true,
        }
    }
}

/// Interaction mode of the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Default,
    Hover,
    Click,
}

/// A pointer event delivered by the host.
///
/// `HoverStart`/`HoverEnd` come from the per-element watchers on clickable
/// elements; the rest come from the document-level listeners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Move { x: f32, y: f32 },
    Down,
    Up,
    Enter,
    Leave,
    HoverStart,
    HoverEnd,
}

/// Host-side effects the overlay needs during its lifecycle.
///
/// While the overlay is attached the native pointer cursor stays hidden;
/// detaching must restore it. Hosts also tear down their event wiring on
/// detach, which is why a detached overlay ignores any event that still
/// arrives.
pub trait Host {
    fn hide_native_cursor(&mut self);
    fn restore_native_cursor(&mut self);
}

/// The synthetic cursor state: position, visibility, mode, and the latest
/// background-darkness sample.
#[derive(Debug)]
pub struct Overlay {
    config: OverlayConfig,
    position: Point,
    visible: bool,
    mode: Mode,
    over_dark: bool,
    attached: bool,
}

impl Overlay {
    pub fn new(config: OverlayConfig) -> Self {
        Overlay {
            config,
            position: Point::default(),
            visible: false,
            mode: Mode::Default,
            over_dark: false,
            attached: false,
        }
    }

    /// Start the overlay: hides the native cursor and begins accepting
    /// events. Attaching twice is a no-op.
    pub fn attach<H: Host + ?Sized>(&mut self, host: &mut H) {
        if self.attached {
            return;
        }
        host.hide_native_cursor();
        self.attached = true;
    }

    /// Tear the overlay down: restores the native cursor, resets all state,
    /// and stops accepting events. Detaching twice is a no-op.
    pub fn detach<H: Host + ?Sized>(&mut self, host: &mut H) {
        if !self.attached {
            return;
        }
        host.restore_native_cursor();
        self.attached = false;
        self.visible = false;
        self.mode = Mode::Default;
        self.over_dark = false;
    }

    /// Apply one pointer event. Moves re-sample background darkness through
    /// `surface` when adaptation is enabled. Events delivered while
    /// detached are dropped.
    pub fn apply<S: Surface>(&mut self, event: PointerEvent, surface: &S) {
        if !self.attached {
            return;
        }

        match event {
            PointerEvent::Move { x, y } => {
                self.position = Point::new(x, y);
                self.visible = true;
                if self.config.invert_on_dark_mode {
                    self.over_dark = sampler::is_dark_at(surface, self.position);
                }
            }
            PointerEvent::Down => self.mode = Mode::Click,
            PointerEvent::Up => self.mode = Mode::Default,
            PointerEvent::Enter => self.visible = true,
            PointerEvent::Leave => self.visible = false,
            PointerEvent::HoverStart => self.mode = Mode::Hover,
            PointerEvent::HoverEnd => self.mode = Mode::Default,
        }
    }

    /// The color the overlay should currently render with
    pub fn active_color(&self) -> &str {
        if self.config.invert_on_dark_mode && self.over_dark {
            &self.config.light_color
        } else {
            &self.config.color
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_over_dark_background(&self) -> bool {
        self.over_dark
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}
