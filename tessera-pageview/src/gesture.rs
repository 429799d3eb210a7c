//! Touch translation into single-axis drag offsets.
//!
//! ## Usage
//!
//! Feed move events through [`GestureTranslator::translate`] to obtain the
//! offset handed to the clamped scroller, and route touches that began on a
//! child widget through [`GestureTranslator::intercept`].

use glam::Vec2;

use crate::orientation::{Orientation, ScrollDirection};

/// Default distance a child-initiated touch must travel before the pager
/// takes it over.
pub const DEFAULT_CHILD_FOCUS_CANCEL_OFFSET: f32 = 5.0;

/// A single touch as delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Touch {
    /// Where the touch is now.
    pub location: Vec2,
    /// Where the touch was at the previous event.
    pub previous_location: Vec2,
}

impl Touch {
    /// Creates a touch from its current and previous locations.
    pub const fn new(location: Vec2, previous_location: Vec2) -> Self {
        Self {
            location,
            previous_location,
        }
    }

    /// Creates a touch that hasn't moved yet.
    pub const fn at(location: Vec2) -> Self {
        Self::new(location, location)
    }

    /// Movement since the previous event.
    pub fn delta(&self) -> Vec2 {
        self.location - self.previous_location
    }
}

/// Phase of a touch forwarded by a child widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// The touch went down on the child.
    Began,
    /// The touch moved.
    Moved,
    /// The touch was lifted.
    Ended,
    /// The host cancelled the touch.
    Cancelled,
}

/// What the pager did with an intercepted child touch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interception {
    /// The touch stays with the child.
    Ignored,
    /// The pager started or continued dragging; the child should drop its
    /// pressed highlight.
    Dragging,
    /// The touch ended and the pager ran its release logic.
    Released,
}

/// Tracks the drag intent of the current gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureTranslator {
    intent: ScrollDirection,
    child_focus_cancel_offset: f32,
    intercepted_from: Option<Vec2>,
}

impl Default for GestureTranslator {
    fn default() -> Self {
        Self::new(Orientation::default(), DEFAULT_CHILD_FOCUS_CANCEL_OFFSET)
    }
}

impl GestureTranslator {
    /// Creates a translator for drags along `orientation` with the given
    /// child focus cancel distance.
    pub fn new(orientation: Orientation, child_focus_cancel_offset: f32) -> Self {
        Self {
            intent: orientation.advancing_direction(),
            child_focus_cancel_offset,
            intercepted_from: None,
        }
    }

    /// Last observed drag direction.
    ///
    /// Always lies on the axis the translator was last created or reset for.
    pub fn intent(&self) -> ScrollDirection {
        self.intent
    }

    /// Distance a child touch must travel before the pager takes over.
    pub fn child_focus_cancel_offset(&self) -> f32 {
        self.child_focus_cancel_offset
    }

    /// Converts a move event into an offset on `orientation`'s axis.
    ///
    /// The intent only changes when the touch actually moved along the axis.
    pub fn translate(&mut self, orientation: Orientation, touch: &Touch) -> Vec2 {
        let delta = touch.delta();
        if let Some(direction) = orientation.drag_direction(delta) {
            self.intent = direction;
        }
        orientation.constrain(delta)
    }

    /// Classifies a touch a child widget forwarded to the pager.
    ///
    /// Returns [`Interception::Dragging`] for moves the pager should apply.
    pub fn intercept(
        &mut self,
        orientation: Orientation,
        phase: TouchPhase,
        touch: &Touch,
    ) -> Interception {
        match phase {
            TouchPhase::Began => {
                self.intercepted_from = Some(touch.location);
                Interception::Ignored
            }
            TouchPhase::Moved => {
                let began = self.intercepted_from.unwrap_or(touch.previous_location);
                let travelled = orientation.component(touch.location - began).abs();
                if travelled > self.child_focus_cancel_offset {
                    Interception::Dragging
                } else {
                    Interception::Ignored
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.intercepted_from = None;
                Interception::Released
            }
        }
    }

    /// Forgets the current gesture's intent and interception state.
    pub fn reset(&mut self, orientation: Orientation) {
        self.intent = orientation.advancing_direction();
        self.intercepted_from = None;
    }
}
