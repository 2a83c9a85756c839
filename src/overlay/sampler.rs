//! Background sampling beneath the pointer
//!
//! The overlay needs to know whether the pixel under the pointer sits on a
//! dark background. Rendering environments differ, so the lookup is behind
//! the [`Surface`] capability: given a point, hand back the topmost element,
//! its computed background color, its parent, and the document fallback.
//! Classification itself is pure and runs without a live display.

use super::color::{self, Rgba};

/// A viewport coordinate in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

/// What the overlay needs from the rendering environment.
///
/// `background_of` returns the *computed* background as a CSS color string,
/// or `None` when the element has none; unset backgrounds typically come
/// back as `rgba(0, 0, 0, 0)`.
pub trait Surface {
    type Element;

    /// Topmost rendered element at a viewport point
    fn element_at(&self, point: Point) -> Option<Self::Element>;

    /// Computed background color of an element, as reported by the host
    fn background_of(&self, element: &Self::Element) -> Option<String>;

    /// Parent in the rendered ancestor chain
    fn parent_of(&self, element: &Self::Element) -> Option<Self::Element>;

    /// The document body's computed background, the fallback of last resort
    fn body_background(&self) -> Option<String>;
}

/// Resolve the effective background color at a point.
///
/// Walks from the topmost element up through its ancestors until a
/// non-transparent background is found, then falls back to the document
/// body. Returns `None` when nothing under the point yields a parsable,
/// visible color.
pub fn effective_background_at<S: Surface>(surface: &S, point: Point) -> Option<Rgba> {
    let mut element = surface.element_at(point)?;

    loop {
        if let Some(raw) = surface.background_of(&element) {
            match color::parse(&raw) {
                Ok(c) if !c.is_transparent() => return Some(c),
                Ok(_) => {}
                // Unparsable backgrounds are treated as absent
                Err(_) => return None,
            }
        }

        match surface.parent_of(&element) {
            Some(parent) => element = parent,
            None => break,
        }
    }

    surface
        .body_background()
        .and_then(|raw| color::parse(&raw).ok())
        .filter(|c| !c.is_transparent())
}

/// Classify the background beneath a point as dark or light.
///
/// Anything that cannot be resolved to a color degrades to "light".
pub fn is_dark_at<S: Surface>(surface: &S, point: Point) -> bool {
    effective_background_at(surface, point).is_some_and(|c| c.is_dark())
}
