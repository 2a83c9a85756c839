//! Render-frame geometry for the two-part cursor indicator
//!
//! The overlay renders an outer ring and an inner dot, both centered on the
//! pointer. Geometry varies by mode; transitions between modes are
//! declarative specs (spring for the ring, a fast ease-out tween for the
//! dot) that the host's animation runtime interpolates.

use super::sampler::Point;
use super::state::{Mode, Overlay};

/// Easing curve of a tween transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    BackOut,
}

/// How an indicator should animate towards its target geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Spring {
        damping: f32,
        stiffness: f32,
        mass: f32,
        /// Optional cap on the settle time, in seconds
        max_duration: Option<f32>,
    },
    Tween {
        ease: Ease,
        duration: f32,
    },
}

const RING_SPRING: Transition = Transition::Spring {
    damping: 25.0,
    stiffness: 300.0,
    mass: 0.5,
    max_duration: None,
};

// The click ring snaps faster than the spring would settle on its own
const RING_SPRING_CLICK: Transition = Transition::Spring {
    damping: 25.0,
    stiffness: 300.0,
    mass: 0.5,
    max_duration: Some(0.1),
};

const DOT_TWEEN: Transition = Transition::Tween {
    ease: Ease::BackOut,
    duration: 0.05,
};

/// Target geometry and paint for one indicator
#[derive(Debug, Clone, PartialEq)]
pub struct Indicator {
    /// Top-left corner, so the indicator is centered on the pointer
    pub x: f32,
    pub y: f32,
    /// Width and height in CSS pixels
    pub size: f32,
    pub opacity: f32,
    /// Stroke color; `None` for the borderless dot
    pub border_color: Option<String>,
    pub border_width: f32,
    /// Fill color alpha, applied to the active color (0.0 = transparent)
    pub fill_alpha: f32,
    pub transition: Transition,
}

/// One frame of the overlay: ring plus dot, both in the active color
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayFrame {
    pub color: String,
    pub ring: Indicator,
    pub dot: Indicator,
}

fn centered(position: Point, size: f32) -> (f32, f32) {
    (position.x - size / 2.0, position.y - size / 2.0)
}

impl Overlay {
    /// Compute the current frame, or `None` while the overlay is invisible
    /// (renders nothing at all).
    pub fn frame(&self) -> Option<OverlayFrame> {
        if !self.is_visible() {
            return None;
        }

        let color = self.active_color().to_string();
        let position = self.position();

        let (ring_size, ring_opacity, ring_fill_alpha, ring_transition) = match self.mode() {
            Mode::Default => (24.0, 0.75, 0.0, RING_SPRING),
            Mode::Hover => (36.0, 1.0, 0x20 as f32 / 255.0, RING_SPRING),
            Mode::Click => (16.0, 1.0, 0x50 as f32 / 255.0, RING_SPRING_CLICK),
        };

        let (dot_size, dot_opacity) = match self.mode() {
            Mode::Default => (4.0, 0.75),
            Mode::Hover => (8.0, 1.0),
            Mode::Click => (10.0, 1.0),
        };

        let (ring_x, ring_y) = centered(position, ring_size);
        let (dot_x, dot_y) = centered(position, dot_size);

        Some(OverlayFrame {
            ring: Indicator {
                x: ring_x,
                y: ring_y,
                size: ring_size,
                opacity: ring_opacity,
                border_color: Some(color.clone()),
                border_width: 2.0,
                fill_alpha: ring_fill_alpha,
                transition: ring_transition,
            },
            dot: Indicator {
                x: dot_x,
                y: dot_y,
                size: dot_size,
                opacity: dot_opacity,
                border_color: None,
                border_width: 0.0,
                // The dot is a solid fill of the active color
                fill_alpha: 1.0,
                transition: DOT_TWEEN,
            },
            color,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::sampler::Surface;
    use crate::overlay::state::{Host, OverlayConfig, PointerEvent};

    struct NoSurface;

    impl Surface for NoSurface {
        type Element = ();

        fn element_at(&self, _point: Point) -> Option<()> {
            None
        }

        fn background_of(&self, _element: &()) -> Option<String> {
            None
        }

        fn parent_of(&self, _element: &()) -> Option<()> {
            None
        }

        fn body_background(&self) -> Option<String> {
            None
        }
    }

    struct NullHost;

    impl Host for NullHost {
        fn hide_native_cursor(&mut self) {}
        fn restore_native_cursor(&mut self) {}
    }

    fn overlay_at(x: f32, y: f32) -> Overlay {
        let mut overlay = Overlay::new(OverlayConfig::default());
        overlay.attach(&mut NullHost);
        overlay.apply(PointerEvent::Move { x, y }, &NoSurface);
        overlay
    }

    #[test]
    fn test_invisible_renders_nothing() {
        let mut overlay = Overlay::new(OverlayConfig::default());
        overlay.attach(&mut NullHost);
        assert!(overlay.frame().is_none());

        overlay.apply(PointerEvent::Move { x: 1.0, y: 1.0 }, &NoSurface);
        overlay.apply(PointerEvent::Leave, &NoSurface);
        assert!(overlay.frame().is_none());
    }

    #[test]
    fn test_default_geometry() {
        let overlay = overlay_at(100.0, 100.0);
        let frame = overlay.frame().unwrap();

        assert_eq!(frame.ring.size, 24.0);
        assert_eq!(frame.ring.opacity, 0.75);
        assert_eq!(frame.ring.fill_alpha, 0.0);
        assert_eq!((frame.ring.x, frame.ring.y), (88.0, 88.0));

        assert_eq!(frame.dot.size, 4.0);
        assert_eq!(frame.dot.opacity, 0.75);
        assert_eq!((frame.dot.x, frame.dot.y), (98.0, 98.0));
    }

    #[test]
    fn test_hover_geometry() {
        let mut overlay = overlay_at(50.0, 50.0);
        overlay.apply(PointerEvent::HoverStart, &NoSurface);
        let frame = overlay.frame().unwrap();

        assert_eq!(frame.ring.size, 36.0);
        assert_eq!(frame.ring.opacity, 1.0);
        assert!(frame.ring.fill_alpha > 0.0);
        assert_eq!(frame.dot.size, 8.0);
        assert_eq!((frame.ring.x, frame.ring.y), (32.0, 32.0));
    }

    #[test]
    fn test_click_geometry() {
        let mut overlay = overlay_at(50.0, 50.0);
        overlay.apply(PointerEvent::Down, &NoSurface);
        let frame = overlay.frame().unwrap();

        assert_eq!(frame.ring.size, 16.0);
        assert_eq!(frame.dot.size, 10.0);
        assert!(matches!(
            frame.ring.transition,
            Transition::Spring {
                max_duration: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn test_ring_springs_and_dot_tweens() {
        let frame = overlay_at(0.0, 0.0).frame().unwrap();
        assert!(matches!(frame.ring.transition, Transition::Spring { .. }));
        assert_eq!(
            frame.dot.transition,
            Transition::Tween {
                ease: Ease::BackOut,
                duration: 0.05
            }
        );
    }

    #[test]
    fn test_frame_carries_active_color() {
        let frame = overlay_at(0.0, 0.0).frame().unwrap();
        assert_eq!(frame.color, "#000000");
        assert_eq!(frame.ring.border_color.as_deref(), Some("#000000"));
        assert!(frame.dot.border_color.is_none());
    }
}
