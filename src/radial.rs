//! Radial gradient state and syntax builder.
//!
//! Unlike the linear builder there is no state machine here: every clause is
//! an independent boolean gate, except the radius clause which always fires
//! in whichever unit mode is selected.

use std::fmt::Write as _;

use crate::stops::ColorStopList;
use crate::syntax::{self, RepeatSettings};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RadialGradientState {
    pub use_focus_angle: bool,
    pub focus_angle_deg: i32,
    pub use_focus_distance: bool,
    pub focus_distance_percent: i32,
    pub use_center: bool,
    pub center_x: i32,
    pub center_y: i32,
    pub use_radius_pixel: bool,
    pub radius_pixel: i32,
    pub radius_percent: i32,
    pub repeat: RepeatSettings,
}

impl Default for RadialGradientState {
    fn default() -> Self {
        // Startup state: all three optional clauses checked, sliders at
        // their defaults.
        Self {
            use_focus_angle: true,
            focus_angle_deg: 0,
            use_focus_distance: true,
            focus_distance_percent: 0,
            use_center: true,
            center_x: 50,
            center_y: 50,
            use_radius_pixel: false,
            radius_pixel: 100,
            radius_percent: 50,
            repeat: RepeatSettings::default(),
        }
    }
}

impl RadialGradientState {
    /// Pure function of the state: same inputs, same string. Starts with
    /// `radial-gradient(`, ends with `);`, and never fails.
    pub fn build_syntax(&self, stops: &ColorStopList) -> String {
        let mut out = String::from(syntax::RADIAL_START);

        if self.use_focus_angle {
            out.push_str(syntax::FOCUS_ANGLE_START);
            let _ = write!(out, "{}", self.focus_angle_deg);
            out.push_str(syntax::FOCUS_ANGLE_UNIT);
            out.push_str(syntax::SEPARATOR);
        }

        if self.use_focus_distance {
            out.push_str(syntax::FOCUS_DIST_START);
            let _ = write!(out, "{}", self.focus_distance_percent);
            out.push_str(syntax::FOCUS_DIST_UNIT);
            out.push_str(syntax::SEPARATOR);
        }

        if self.use_center {
            out.push_str(syntax::CENTER_START);
            let _ = write!(out, "{}", self.center_x);
            out.push_str(syntax::CENTER_UNIT);
            let _ = write!(out, "{}", self.center_y);
            out.push_str(syntax::CENTER_UNIT);
            out.push_str(syntax::SEPARATOR);
        }

        // The radius clause has no enabling flag; it always fires.
        out.push_str(syntax::RADIUS_START);
        if self.use_radius_pixel {
            let _ = write!(out, "{}", self.radius_pixel);
            out.push_str(syntax::RADIUS_PIXEL_UNIT);
        } else {
            let _ = write!(out, "{}", self.radius_percent);
            out.push_str(syntax::RADIUS_PERCENT_UNIT);
        }
        out.push_str(syntax::SEPARATOR);

        if let Some(keyword) = self.repeat.active_keyword() {
            out.push_str(keyword);
            out.push_str(syntax::SPACER);
            out.push_str(syntax::SEPARATOR);
        }

        stops.write_syntax(&mut out);
        out.push_str(syntax::GRADIENT_END);
        out
    }
}
