// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer sensor: tell clicks from drags with a minimum travel distance.
//!
//! ## Usage
//!
//! 1) Call [`PointerSensor::press`] with the position where the pointer went down.
//! 2) On each move event, call [`PointerSensor::move_to`]. It reports
//!    [`SensorStep::Pending`] until the pointer has travelled further than the
//!    [`ActivationConstraint`] distance, then [`SensorStep::Activated`] exactly
//!    once, then [`SensorStep::Dragging`] with the delta since the last move.
//! 3) Call [`PointerSensor::release`] on pointer up. It returns `true` if the
//!    gesture had activated (a drag), `false` if it was a click.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use kanban_event_state::sensor::{PointerSensor, SensorStep};
//!
//! let mut sensor = PointerSensor::default();
//!
//! sensor.press(Point::new(10.0, 20.0));
//! assert_eq!(sensor.move_to(Point::new(12.0, 21.0)), SensorStep::Pending);
//!
//! // Travel past the default 5-unit threshold.
//! assert_eq!(sensor.move_to(Point::new(16.0, 20.0)), SensorStep::Activated);
//! assert_eq!(
//!     sensor.move_to(Point::new(18.0, 25.0)),
//!     SensorStep::Dragging(Vec2::new(2.0, 5.0))
//! );
//!
//! assert_eq!(sensor.total_offset(Point::new(18.0, 25.0)), Some(Vec2::new(8.0, 5.0)));
//! assert!(sensor.release());
//! ```

use kurbo::{Point, Vec2};

/// Default minimum pointer travel, in pointer units, before a drag starts.
pub const DEFAULT_ACTIVATION_DISTANCE: f64 = 5.0;

/// When a pressed pointer turns into a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActivationConstraint {
    /// Distance the pointer must travel from the press point, exclusive.
    pub distance: f64,
}

impl ActivationConstraint {
    /// Returns a constraint with the given travel distance.
    #[must_use]
    pub const fn with_distance(distance: f64) -> Self {
        Self { distance }
    }

    fn is_met(&self, offset: Vec2) -> bool {
        offset.hypot2() > self.distance * self.distance
    }
}

impl Default for ActivationConstraint {
    fn default() -> Self {
        Self::with_distance(DEFAULT_ACTIVATION_DISTANCE)
    }
}

/// What a pointer move meant to the sensor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SensorStep {
    /// No pointer is pressed.
    Idle,
    /// Pressed, but still within the activation distance.
    Pending,
    /// This move crossed the activation distance; the drag starts now.
    Activated,
    /// Already dragging; carries the delta since the previous move.
    Dragging(Vec2),
}

/// Tracks a pressed pointer until it activates a drag.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerSensor {
    /// Activation rule applied on every move.
    pub constraint: ActivationConstraint,
    /// Position where the pointer went down.
    pub start_pos: Option<Point>,
    /// Last recorded pointer position.
    pub last_pos: Option<Point>,
    active: bool,
}

impl PointerSensor {
    /// Creates an idle sensor using `constraint`.
    #[must_use]
    pub const fn new(constraint: ActivationConstraint) -> Self {
        Self {
            constraint,
            start_pos: None,
            last_pos: None,
            active: false,
        }
    }

    /// Starts tracking a press at `pos`, discarding any previous gesture.
    pub fn press(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.active = false;
    }

    /// Feeds a pointer move and reports what it meant.
    pub fn move_to(&mut self, pos: Point) -> SensorStep {
        let Some(start) = self.start_pos else {
            return SensorStep::Idle;
        };
        let last = self.last_pos.replace(pos).unwrap_or(start);

        if self.active {
            SensorStep::Dragging(pos - last)
        } else if self.constraint.is_met(pos - start) {
            self.active = true;
            SensorStep::Activated
        } else {
            SensorStep::Pending
        }
    }

    /// Returns the offset from the press point.
    #[must_use]
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current_pos - start)
    }

    /// Ends the gesture, returning `true` if it had activated.
    pub fn release(&mut self) -> bool {
        let was_active = self.active;
        self.cancel();
        was_active
    }

    /// Abandons the gesture without reporting anything.
    pub fn cancel(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
        self.active = false;
    }

    /// Returns `true` while the pointer is pressed.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Returns `true` once the pressed pointer has activated a drag.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}
