//! Tokens and keyword enums for the gradient grammar.
//!
//! The output grammar is the JavaFX flavour of CSS gradients:
//! `linear-gradient(to bottom, #ffb6c1, #ffa500);` and
//! `radial-gradient(radius 50% , #ffe4c4);`. Note the asymmetry: radial
//! clauses keep a space between the clause and its separator, linear clauses
//! do not.

pub const SEPARATOR: &str = ", ";
pub const SPACER: &str = " ";

pub const LINEAR_START: &str = "linear-gradient(";
pub const RADIAL_START: &str = "radial-gradient(";
pub const GRADIENT_END: &str = ");";

/// Style property the host prepends before handing the string to a node.
pub const BACKGROUND_PROP: &str = "-fx-background-color:";

// Linear point-clause tokens.
pub const FROM: &str = "from ";
pub const TO: &str = "to ";
pub const PIXEL_UNIT: &str = "px";
pub const PERCENT_UNIT: &str = "%";

// Radial clause tokens carry their trailing space.
pub const FOCUS_ANGLE_START: &str = "focus-angle ";
pub const FOCUS_ANGLE_UNIT: &str = "deg ";
pub const FOCUS_DIST_START: &str = "focus-distance ";
pub const FOCUS_DIST_UNIT: &str = "% ";
pub const CENTER_START: &str = "center ";
pub const CENTER_UNIT: &str = "% ";
pub const RADIUS_START: &str = "radius ";
pub const RADIUS_PERCENT_UNIT: &str = "% ";
pub const RADIUS_PIXEL_UNIT: &str = "px ";

/// Tiling behaviour appended after the positional clauses. `None` is a real
/// choice in the host's choice widget but emits nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RepeatMode {
    #[default]
    None,
    Repeat,
    Reflect,
}

impl RepeatMode {
    /// Ordered variants for populating a host selection control.
    pub const ALL: [RepeatMode; 3] = [RepeatMode::None, RepeatMode::Repeat, RepeatMode::Reflect];

    pub fn keyword(self) -> Option<&'static str> {
        match self {
            RepeatMode::None => None,
            RepeatMode::Repeat => Some("repeat"),
            RepeatMode::Reflect => Some("reflect"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RepeatMode::None => "None",
            RepeatMode::Repeat => "repeat",
            RepeatMode::Reflect => "reflect",
        }
    }
}

impl std::str::FromStr for RepeatMode {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" | "None" => Ok(RepeatMode::None),
            "repeat" => Ok(RepeatMode::Repeat),
            "reflect" => Ok(RepeatMode::Reflect),
            _ => Err(()),
        }
    }
}

/// Direction keyword for the linear `to <keyword>` clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinearDirection {
    Top,
    Left,
    Bottom,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl LinearDirection {
    pub const ALL: [LinearDirection; 8] = [
        LinearDirection::Top,
        LinearDirection::Left,
        LinearDirection::Bottom,
        LinearDirection::Right,
        LinearDirection::TopLeft,
        LinearDirection::TopRight,
        LinearDirection::BottomLeft,
        LinearDirection::BottomRight,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            LinearDirection::Top => "top",
            LinearDirection::Left => "left",
            LinearDirection::Bottom => "bottom",
            LinearDirection::Right => "right",
            LinearDirection::TopLeft => "top left",
            LinearDirection::TopRight => "top right",
            LinearDirection::BottomLeft => "bottom left",
            LinearDirection::BottomRight => "bottom right",
        }
    }
}

impl std::str::FromStr for LinearDirection {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(LinearDirection::Top),
            "left" => Ok(LinearDirection::Left),
            "bottom" => Ok(LinearDirection::Bottom),
            "right" => Ok(LinearDirection::Right),
            "top-left" | "top left" => Ok(LinearDirection::TopLeft),
            "top-right" | "top right" => Ok(LinearDirection::TopRight),
            "bottom-left" | "bottom left" => Ok(LinearDirection::BottomLeft),
            "bottom-right" | "bottom right" => Ok(LinearDirection::BottomRight),
            _ => Err(()),
        }
    }
}

/// The repeat/reflect clause state, shared by both gradient kinds. The
/// checkbox starts checked with the mode on `None`, so the default still
/// emits nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepeatSettings {
    pub enabled: bool,
    pub mode: RepeatMode,
}

impl Default for RepeatSettings {
    fn default() -> Self {
        Self { enabled: true, mode: RepeatMode::None }
    }
}

impl RepeatSettings {
    /// Keyword to emit, or `None` when the clause is off or the mode is `None`.
    pub fn active_keyword(&self) -> Option<&'static str> {
        if self.enabled { self.mode.keyword() } else { None }
    }
}

/// Which of the two builders drives the shared preview target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
}

impl GradientKind {
    pub const ALL: [GradientKind; 2] = [GradientKind::Linear, GradientKind::Radial];

    pub fn label(self) -> &'static str {
        match self {
            GradientKind::Linear => "Linear",
            GradientKind::Radial => "Radial",
        }
    }
}

impl std::str::FromStr for GradientKind {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" | "Linear" => Ok(GradientKind::Linear),
            "radial" | "Radial" => Ok(GradientKind::Radial),
            _ => Err(()),
        }
    }
}
