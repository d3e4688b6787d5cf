//! Presenters tie a state bag and a stop list to a style sink.
//!
//! The flow is strictly synchronous: one message mutates the state fully,
//! then the syntax is rebuilt once and pushed to the sink, in that order,
//! before control returns to the event source. Messages also parse from
//! strings (`"from-x:10"`, `"stop-color:2:#aabbcc"`) so a host can forward
//! raw widget events without depending on the message types.

use std::str::FromStr;

#[cfg(feature = "profile")]
use coarse_prof::profile;

#[cfg(not(feature = "profile"))]
macro_rules! profile {
    ($($tt:tt)*) => {};
}

use crate::color;
use crate::linear::LinearGradientState;
use crate::radial::RadialGradientState;
use crate::stops::{ColorStop, ColorStopList, StopId};
use crate::syntax::{LinearDirection, RepeatMode};

/// Receives every freshly built syntax string. A GUI host sets it as
/// `-fx-background-color:` on its preview shapes; tests record it.
pub trait StyleSink {
    fn apply_style(&mut self, style: &str);
}

// Slider ranges of the composer UI. Clamping happens here, at the input
// boundary; the builders never re-validate.
const FOCUS_ANGLE_RANGE: (i32, i32) = (0, 360);
const OFFSET_RANGE: (i32, i32) = (-120, 120);
const TO_PIXEL_RANGE: (i32, i32) = (0, 300);
const RADIUS_PIXEL_RANGE: (i32, i32) = (0, 300);
const RADIUS_PERCENT_RANGE: (i32, i32) = (0, 120);
const STOP_PERCENT_RANGE: (i32, i32) = (0, 100);

fn clamp((lo, hi): (i32, i32), value: i32) -> i32 {
    value.clamp(lo, hi)
}

/// Stop-list edits shared by both gradient kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StopMsg {
    Color(StopId, String),
    Percent(StopId, i32),
    AddAfter(StopId),
    Remove(StopId),
}

fn parse_stop_msg(name: &str, value: &str) -> Option<StopMsg> {
    match name {
        "stop-color" => {
            let (id, code) = value.split_once(':')?;
            Some(StopMsg::Color(StopId::from_raw(id.parse().ok()?), code.to_string()))
        }
        "stop-percent" => {
            let (id, percent) = value.split_once(':')?;
            Some(StopMsg::Percent(StopId::from_raw(id.parse().ok()?), percent.parse().ok()?))
        }
        "stop-add-after" => Some(StopMsg::AddAfter(StopId::from_raw(value.parse().ok()?))),
        "stop-remove" => Some(StopMsg::Remove(StopId::from_raw(value.parse().ok()?))),
        _ => None,
    }
}

fn apply_stop_msg(stops: &mut ColorStopList, msg: StopMsg) {
    match msg {
        StopMsg::Color(id, input) => {
            if input.is_empty() {
                stops.set_color(id, String::new());
            } else {
                match color::normalize(&input) {
                    Some(code) => {
                        stops.set_color(id, code);
                    }
                    None => log::warn!("rejected color {:?} for stop {}", input, id),
                }
            }
        }
        StopMsg::Percent(id, value) => {
            stops.set_percent(id, clamp(STOP_PERCENT_RANGE, value));
        }
        StopMsg::AddAfter(id) => {
            stops.insert_after(id);
        }
        StopMsg::Remove(id) => {
            if let Err(err) = stops.remove(id) {
                log::warn!("refused removal of stop {}: {}", id, err);
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinearMsg {
    UseFromPoint(bool),
    FromPixelUnits(bool),
    FromX(i32),
    FromY(i32),
    UseToPoint(bool),
    ToX(i32),
    ToY(i32),
    ToDirection(LinearDirection),
    Repeat(bool),
    Mode(RepeatMode),
    Stop(StopMsg),
}

impl FromStr for LinearMsg {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = s.split_once(':').ok_or(())?;
        if let Some(stop) = parse_stop_msg(name, value) {
            return Ok(LinearMsg::Stop(stop));
        }
        match name {
            "use-from" => Ok(LinearMsg::UseFromPoint(value.parse().map_err(|_| ())?)),
            "from-pixel-units" => Ok(LinearMsg::FromPixelUnits(value.parse().map_err(|_| ())?)),
            "from-x" => Ok(LinearMsg::FromX(value.parse().map_err(|_| ())?)),
            "from-y" => Ok(LinearMsg::FromY(value.parse().map_err(|_| ())?)),
            "use-to" => Ok(LinearMsg::UseToPoint(value.parse().map_err(|_| ())?)),
            "to-x" => Ok(LinearMsg::ToX(value.parse().map_err(|_| ())?)),
            "to-y" => Ok(LinearMsg::ToY(value.parse().map_err(|_| ())?)),
            "to-direction" => value.parse().map(LinearMsg::ToDirection),
            "repeat" => Ok(LinearMsg::Repeat(value.parse().map_err(|_| ())?)),
            "repeat-mode" => value.parse().map(LinearMsg::Mode),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RadialMsg {
    UseFocusAngle(bool),
    FocusAngle(i32),
    UseFocusDistance(bool),
    FocusDistance(i32),
    UseCenter(bool),
    CenterX(i32),
    CenterY(i32),
    RadiusPixelUnits(bool),
    RadiusPixel(i32),
    RadiusPercent(i32),
    Repeat(bool),
    Mode(RepeatMode),
    Stop(StopMsg),
}

impl FromStr for RadialMsg {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = s.split_once(':').ok_or(())?;
        if let Some(stop) = parse_stop_msg(name, value) {
            return Ok(RadialMsg::Stop(stop));
        }
        match name {
            "use-focus-angle" => Ok(RadialMsg::UseFocusAngle(value.parse().map_err(|_| ())?)),
            "focus-angle" => Ok(RadialMsg::FocusAngle(value.parse().map_err(|_| ())?)),
            "use-focus-distance" => Ok(RadialMsg::UseFocusDistance(value.parse().map_err(|_| ())?)),
            "focus-distance" => Ok(RadialMsg::FocusDistance(value.parse().map_err(|_| ())?)),
            "use-center" => Ok(RadialMsg::UseCenter(value.parse().map_err(|_| ())?)),
            "center-x" => Ok(RadialMsg::CenterX(value.parse().map_err(|_| ())?)),
            "center-y" => Ok(RadialMsg::CenterY(value.parse().map_err(|_| ())?)),
            "radius-pixel-units" => Ok(RadialMsg::RadiusPixelUnits(value.parse().map_err(|_| ())?)),
            "radius-pixel" => Ok(RadialMsg::RadiusPixel(value.parse().map_err(|_| ())?)),
            "radius-percent" => Ok(RadialMsg::RadiusPercent(value.parse().map_err(|_| ())?)),
            "repeat" => Ok(RadialMsg::Repeat(value.parse().map_err(|_| ())?)),
            "repeat-mode" => value.parse().map(RadialMsg::Mode),
            _ => Err(()),
        }
    }
}

pub struct LinearPresenter<S: StyleSink> {
    state: LinearGradientState,
    stops: ColorStopList,
    sink: S,
    syntax: String,
}

impl<S: StyleSink> LinearPresenter<S> {
    /// Seeds the two default stops and pushes the initial style.
    pub fn new(sink: S) -> Self {
        let mut stops = ColorStopList::new();
        stops.insert(ColorStop::new("#ffb6c1", 0), None);
        stops.insert(ColorStop::new("#ffa500", 0), None);
        let mut presenter = Self {
            state: LinearGradientState::default(),
            stops,
            sink,
            syntax: String::new(),
        };
        presenter.recompute();
        presenter
    }

    pub fn update(&mut self, msg: LinearMsg) {
        let pixel = self.state.from_uses_pixel_units;
        match msg {
            LinearMsg::UseFromPoint(on) => self.state.set_use_from_point(on),
            LinearMsg::FromPixelUnits(on) => self.state.from_uses_pixel_units = on,
            LinearMsg::FromX(v) => set_from(&mut self.state.from_x, pixel, v),
            LinearMsg::FromY(v) => set_from(&mut self.state.from_y, pixel, v),
            LinearMsg::UseToPoint(on) => self.state.set_use_to_point(on),
            LinearMsg::ToX(v) => set_to(&mut self.state.to_x, pixel, v),
            LinearMsg::ToY(v) => set_to(&mut self.state.to_y, pixel, v),
            LinearMsg::ToDirection(direction) => self.state.to_direction = Some(direction),
            LinearMsg::Repeat(on) => self.state.repeat.enabled = on,
            LinearMsg::Mode(mode) => self.state.repeat.mode = mode,
            LinearMsg::Stop(stop) => apply_stop_msg(&mut self.stops, stop),
        }
        self.recompute();
    }

    /// Last computed string. Derived state only; [`update`] refreshes it.
    ///
    /// [`update`]: LinearPresenter::update
    pub fn syntax(&self) -> &str {
        &self.syntax
    }

    pub fn state(&self) -> &LinearGradientState {
        &self.state
    }

    pub fn stops(&self) -> &ColorStopList {
        &self.stops
    }

    pub fn can_delete(&self) -> bool {
        self.stops.can_delete()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn recompute(&mut self) {
        profile!("build_linear");
        self.syntax = self.state.build_syntax(&self.stops);
        self.sink.apply_style(&self.syntax);
    }
}

fn set_from(pair: &mut crate::linear::PointPair, pixel_units: bool, value: i32) {
    // Both from-sliders share the -120..120 range.
    let value = clamp(OFFSET_RANGE, value);
    if pixel_units {
        pair.pixel = value;
    } else {
        pair.percent = value;
    }
}

fn set_to(pair: &mut crate::linear::PointPair, pixel_units: bool, value: i32) {
    if pixel_units {
        pair.pixel = clamp(TO_PIXEL_RANGE, value);
    } else {
        pair.percent = clamp(OFFSET_RANGE, value);
    }
}

pub struct RadialPresenter<S: StyleSink> {
    state: RadialGradientState,
    stops: ColorStopList,
    sink: S,
    syntax: String,
}

impl<S: StyleSink> RadialPresenter<S> {
    /// Seeds the two default stops and pushes the initial style.
    pub fn new(sink: S) -> Self {
        let mut stops = ColorStopList::new();
        stops.insert(ColorStop::new("#ffe4c4", 0), None);
        stops.insert(ColorStop::new("#d2691e", 0), None);
        let mut presenter = Self {
            state: RadialGradientState::default(),
            stops,
            sink,
            syntax: String::new(),
        };
        presenter.recompute();
        presenter
    }

    pub fn update(&mut self, msg: RadialMsg) {
        match msg {
            RadialMsg::UseFocusAngle(on) => self.state.use_focus_angle = on,
            RadialMsg::FocusAngle(v) => self.state.focus_angle_deg = clamp(FOCUS_ANGLE_RANGE, v),
            RadialMsg::UseFocusDistance(on) => self.state.use_focus_distance = on,
            RadialMsg::FocusDistance(v) => {
                self.state.focus_distance_percent = clamp(OFFSET_RANGE, v)
            }
            RadialMsg::UseCenter(on) => self.state.use_center = on,
            RadialMsg::CenterX(v) => self.state.center_x = clamp(OFFSET_RANGE, v),
            RadialMsg::CenterY(v) => self.state.center_y = clamp(OFFSET_RANGE, v),
            RadialMsg::RadiusPixelUnits(on) => self.state.use_radius_pixel = on,
            RadialMsg::RadiusPixel(v) => self.state.radius_pixel = clamp(RADIUS_PIXEL_RANGE, v),
            RadialMsg::RadiusPercent(v) => {
                self.state.radius_percent = clamp(RADIUS_PERCENT_RANGE, v)
            }
            RadialMsg::Repeat(on) => self.state.repeat.enabled = on,
            RadialMsg::Mode(mode) => self.state.repeat.mode = mode,
            RadialMsg::Stop(stop) => apply_stop_msg(&mut self.stops, stop),
        }
        self.recompute();
    }

    /// Last computed string. Derived state only; [`update`] refreshes it.
    ///
    /// [`update`]: RadialPresenter::update
    pub fn syntax(&self) -> &str {
        &self.syntax
    }

    pub fn state(&self) -> &RadialGradientState {
        &self.state
    }

    pub fn stops(&self) -> &ColorStopList {
        &self.stops
    }

    pub fn can_delete(&self) -> bool {
        self.stops.can_delete()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn recompute(&mut self) {
        profile!("build_radial");
        self.syntax = self.state.build_syntax(&self.stops);
        self.sink.apply_style(&self.syntax);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        applied: Vec<String>,
    }

    impl StyleSink for RecordingSink {
        fn apply_style(&mut self, style: &str) {
            self.applied.push(style.to_string());
        }
    }

    #[test]
    fn initial_build_is_pushed_on_construction() {
        let presenter = LinearPresenter::new(RecordingSink::default());
        assert_eq!(
            presenter.sink().applied,
            vec!["linear-gradient(to bottom, #ffb6c1, #ffa500);"]
        );
        assert_eq!(presenter.syntax(), presenter.sink().applied[0]);
    }

    #[test]
    fn one_message_one_apply() {
        let mut presenter = LinearPresenter::new(RecordingSink::default());
        presenter.update(LinearMsg::ToDirection(LinearDirection::Right));
        presenter.update(LinearMsg::Repeat(false));
        // One apply for the constructor, one per message.
        assert_eq!(presenter.sink().applied.len(), 3);
        assert_eq!(
            presenter.sink().applied.last().unwrap(),
            "linear-gradient(to right, #ffb6c1, #ffa500);"
        );
    }

    #[test]
    fn point_mode_locks_the_to_toggle() {
        let mut presenter = LinearPresenter::new(RecordingSink::default());
        presenter.update(LinearMsg::UseFromPoint(true));
        presenter.update(LinearMsg::UseToPoint(false));
        assert!(presenter.state().use_to_point);

        presenter.update(LinearMsg::FromX(10));
        presenter.update(LinearMsg::FromY(20));
        assert_eq!(
            presenter.syntax(),
            "linear-gradient(from 10% 20% to 50% 50%, #ffb6c1, #ffa500);"
        );
    }

    #[test]
    fn values_clamp_at_the_input_boundary() {
        let mut presenter = LinearPresenter::new(RecordingSink::default());
        presenter.update(LinearMsg::UseFromPoint(true));
        presenter.update(LinearMsg::FromX(999));
        assert_eq!(presenter.state().from_x.percent, 120);

        let mut radial = RadialPresenter::new(RecordingSink::default());
        radial.update(RadialMsg::FocusAngle(-5));
        assert_eq!(radial.state().focus_angle_deg, 0);
        radial.update(RadialMsg::RadiusPercent(500));
        assert_eq!(radial.state().radius_percent, 120);
    }

    #[test]
    fn pixel_units_route_to_the_pixel_members() {
        let mut presenter = LinearPresenter::new(RecordingSink::default());
        presenter.update(LinearMsg::UseFromPoint(true));
        presenter.update(LinearMsg::FromPixelUnits(true));
        presenter.update(LinearMsg::FromX(-30));
        presenter.update(LinearMsg::ToX(290));
        assert_eq!(presenter.state().from_x.pixel, -30);
        assert_eq!(presenter.state().to_x.pixel, 290);
        // The percent members are untouched.
        assert_eq!(presenter.state().from_x.percent, 0);
        assert_eq!(presenter.state().to_x.percent, 50);
    }

    #[test]
    fn stop_edits_flow_through_normalization() {
        let mut presenter = LinearPresenter::new(RecordingSink::default());
        let first = presenter.stops().iter().next().unwrap().0;
        presenter.update(LinearMsg::Stop(StopMsg::Color(first, "orange".into())));
        presenter.update(LinearMsg::Stop(StopMsg::Percent(first, 45)));
        assert_eq!(
            presenter.syntax(),
            "linear-gradient(to bottom, #FFA500 45%, #ffa500);"
        );

        // A rejected color leaves the stop untouched but still reapplies.
        let before = presenter.sink().applied.len();
        presenter.update(LinearMsg::Stop(StopMsg::Color(first, "nonsense".into())));
        assert_eq!(presenter.sink().applied.len(), before + 1);
        assert_eq!(presenter.stops().get(first).unwrap().color_code, "#FFA500");
    }

    #[test]
    fn stop_removal_respects_the_minimum() {
        let mut presenter = RadialPresenter::new(RecordingSink::default());
        let first = presenter.stops().iter().next().unwrap().0;
        assert!(!presenter.can_delete());
        presenter.update(RadialMsg::Stop(StopMsg::Remove(first)));
        assert_eq!(presenter.stops().len(), 2);

        presenter.update(RadialMsg::Stop(StopMsg::AddAfter(first)));
        assert!(presenter.can_delete());
        presenter.update(RadialMsg::Stop(StopMsg::Remove(first)));
        assert_eq!(presenter.stops().len(), 2);
        assert!(!presenter.can_delete());
    }

    #[test]
    fn messages_parse_from_strings() {
        assert_eq!("use-from:true".parse(), Ok(LinearMsg::UseFromPoint(true)));
        assert_eq!("from-x:10".parse(), Ok(LinearMsg::FromX(10)));
        assert_eq!(
            "to-direction:bottom-right".parse(),
            Ok(LinearMsg::ToDirection(LinearDirection::BottomRight))
        );
        assert_eq!("repeat-mode:reflect".parse(), Ok(LinearMsg::Mode(RepeatMode::Reflect)));
        assert_eq!(
            "stop-color:2:#aabbcc".parse(),
            Ok(LinearMsg::Stop(StopMsg::Color(StopId::from_raw(2), "#aabbcc".into())))
        );
        assert_eq!("focus-angle:45".parse(), Ok(RadialMsg::FocusAngle(45)));
        assert_eq!(
            "stop-percent:0:30".parse(),
            Ok(RadialMsg::Stop(StopMsg::Percent(StopId::from_raw(0), 30)))
        );
        assert!("frobnicate:1".parse::<LinearMsg>().is_err());
        assert!("from-x".parse::<LinearMsg>().is_err());
    }
}
