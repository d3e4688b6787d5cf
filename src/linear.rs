//! Linear gradient state and syntax builder.

use std::fmt::Write as _;

use crate::stops::ColorStopList;
use crate::syntax::{self, LinearDirection, RepeatSettings};

/// A coordinate slider pair. The host keeps both unit interpretations live
/// and `from_uses_pixel_units` picks which one reaches the output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointPair {
    pub pixel: i32,
    pub percent: i32,
}

impl PointPair {
    pub fn value(self, pixel_units: bool) -> i32 {
        if pixel_units { self.pixel } else { self.percent }
    }
}

/// The "direction/point" selector is a two-state machine: DIRECTION emits
/// `to <keyword>`, POINT emits `from x y to x y`. Only the setters below
/// enforce the transitions; the fields stay public for the builder and for
/// host rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearGradientState {
    pub use_from_point: bool,
    pub from_uses_pixel_units: bool,
    pub from_x: PointPair,
    pub from_y: PointPair,
    pub use_to_point: bool,
    pub to_x: PointPair,
    pub to_y: PointPair,
    pub to_direction: Option<LinearDirection>,
    pub repeat: RepeatSettings,
}

impl Default for LinearGradientState {
    fn default() -> Self {
        // Startup state: direction mode, "to bottom", to-coordinates parked
        // at their slider defaults.
        Self {
            use_from_point: false,
            from_uses_pixel_units: false,
            from_x: PointPair::default(),
            from_y: PointPair::default(),
            use_to_point: true,
            to_x: PointPair { pixel: 50, percent: 50 },
            to_y: PointPair { pixel: 50, percent: 50 },
            to_direction: Some(LinearDirection::Bottom),
            repeat: RepeatSettings::default(),
        }
    }
}

impl LinearGradientState {
    /// Entering POINT mode forces the "to" clause into coordinate form and
    /// locks its toggle; leaving it unlocks the toggle again.
    pub fn set_use_from_point(&mut self, on: bool) {
        self.use_from_point = on;
        if on {
            self.use_to_point = true;
        }
    }

    /// No-op while a from point is active: the "to" toggle is locked in
    /// POINT mode.
    pub fn set_use_to_point(&mut self, on: bool) {
        if self.use_from_point {
            log::debug!("ignoring use_to_point={} while the from point is active", on);
            return;
        }
        self.use_to_point = on;
    }

    /// Pure function of the state: same inputs, same string. Starts with
    /// `linear-gradient(`, ends with `);`, and never fails.
    pub fn build_syntax(&self, stops: &ColorStopList) -> String {
        let mut out = String::from(syntax::LINEAR_START);

        if self.use_from_point {
            let pixel = self.from_uses_pixel_units;
            let unit = if pixel { syntax::PIXEL_UNIT } else { syntax::PERCENT_UNIT };
            out.push_str(syntax::FROM);
            let _ = write!(out, "{}{unit} {}{unit} ", self.from_x.value(pixel), self.from_y.value(pixel));
            out.push_str(syntax::TO);
            let _ = write!(out, "{}{unit} {}{unit}", self.to_x.value(pixel), self.to_y.value(pixel));
            out.push_str(syntax::SEPARATOR);
        } else if self.use_to_point {
            // No direction selected means no clause at all.
            if let Some(direction) = self.to_direction {
                out.push_str(syntax::TO);
                out.push_str(direction.keyword());
                out.push_str(syntax::SEPARATOR);
            }
        }

        if let Some(keyword) = self.repeat.active_keyword() {
            out.push_str(keyword);
            out.push_str(syntax::SEPARATOR);
        }

        stops.write_syntax(&mut out);
        out.push_str(syntax::GRADIENT_END);
        out
    }
}
