//! The ordered color-stop list backing both gradient builders.

use std::fmt;

use thiserror::Error;

use crate::syntax::{PERCENT_UNIT, SEPARATOR, SPACER};

/// A gradient keeps at least this many stops; removal below it is refused.
pub const MIN_STOPS: usize = 2;

/// Stable handle for one stop row. Indices shift on insert/remove, ids never
/// do, so hosts keep an id per row widget and translate via [`ColorStopList::position_of`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StopId(u32);

impl StopId {
    pub fn raw(self) -> u32 {
        self.0
    }

    pub(crate) fn from_raw(raw: u32) -> Self {
        StopId(raw)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One `(color, position%)` pair. An empty `color_code` means the stop is
/// unset and contributes nothing to the output. `percent == 0` means "no
/// position given" and the suffix is omitted, so a genuine 0% stop cannot
/// be expressed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorStop {
    pub color_code: String,
    pub percent: i32,
}

impl ColorStop {
    pub fn new(color_code: impl Into<String>, percent: i32) -> Self {
        Self { color_code: color_code.into(), percent }
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum StopError {
    #[error("a gradient keeps at least {MIN_STOPS} color stops")]
    MinimumStops,
    #[error("unknown color stop")]
    UnknownStop,
}

/// Insertion order is output order; stops are never reordered.
#[derive(Clone, Debug, Default)]
pub struct ColorStopList {
    entries: Vec<(StopId, ColorStop)>,
    next_id: u32,
}

impl ColorStopList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StopId, &ColorStop)> {
        self.entries.iter().map(|(id, stop)| (*id, stop))
    }

    pub fn get(&self, id: StopId) -> Option<&ColorStop> {
        self.entries.iter().find(|(e, _)| *e == id).map(|(_, stop)| stop)
    }

    pub fn position_of(&self, id: StopId) -> Option<usize> {
        self.entries.iter().position(|(e, _)| *e == id)
    }

    /// Inserts at `at` (clamped to the current length), or appends.
    pub fn insert(&mut self, stop: ColorStop, at: Option<usize>) -> StopId {
        let id = StopId(self.next_id);
        self.next_id += 1;
        let index = at.unwrap_or(self.entries.len()).min(self.entries.len());
        self.entries.insert(index, (id, stop));
        id
    }

    /// Adds a blank stop below the given row: appended when the row is last
    /// or unknown, otherwise inserted right after it. Backs the "+" button
    /// on each stop row.
    pub fn insert_after(&mut self, id: StopId) -> StopId {
        let at = match self.position_of(id) {
            Some(pos) if pos + 1 < self.entries.len() => Some(pos + 1),
            _ => None,
        };
        self.insert(ColorStop::default(), at)
    }

    /// Refused when the list would drop below [`MIN_STOPS`]. The host keeps
    /// delete affordances disabled in that case (see [`can_delete`]), so an
    /// error here means the host skipped that check.
    ///
    /// [`can_delete`]: ColorStopList::can_delete
    pub fn remove(&mut self, id: StopId) -> Result<ColorStop, StopError> {
        let pos = self.position_of(id).ok_or(StopError::UnknownStop)?;
        if self.entries.len() <= MIN_STOPS {
            return Err(StopError::MinimumStops);
        }
        Ok(self.entries.remove(pos).1)
    }

    /// Whether any row may currently be deleted. Crossing the threshold
    /// flips deletability for every row at once, so hosts re-read this for
    /// the whole list after each insert or remove.
    pub fn can_delete(&self) -> bool {
        self.entries.len() > MIN_STOPS
    }

    pub fn set_color(&mut self, id: StopId, code: impl Into<String>) -> bool {
        match self.entry_mut(id) {
            Some(stop) => {
                stop.color_code = code.into();
                true
            }
            None => false,
        }
    }

    pub fn set_percent(&mut self, id: StopId, percent: i32) -> bool {
        match self.entry_mut(id) {
            Some(stop) => {
                stop.percent = percent;
                true
            }
            None => false,
        }
    }

    fn entry_mut(&mut self, id: StopId) -> Option<&mut ColorStop> {
        self.entries.iter_mut().find(|(e, _)| *e == id).map(|(_, stop)| stop)
    }

    /// Emits the stop clauses: unset stops are skipped, bare hex codes gain
    /// a `#`, and the separator only lands between stops that actually
    /// produced output.
    pub fn write_syntax(&self, out: &mut String) {
        let mut first = true;
        for (_, stop) in self.iter() {
            if stop.color_code.is_empty() {
                continue;
            }
            if !first {
                out.push_str(SEPARATOR);
            }
            first = false;
            if !stop.color_code.starts_with('#') {
                out.push('#');
            }
            out.push_str(&stop.color_code);
            if stop.percent > 0 {
                out.push_str(SPACER);
                out.push_str(&stop.percent.to_string());
                out.push_str(PERCENT_UNIT);
            }
        }
    }
}
