//! Alignment: three semantic positions plus adapters for host alignment names.
//!
//! Host toolkits expose many alignment cases (leading, top, baselines, list
//! separators, ...) that all collapse onto start, center, or end. The
//! adapters here are the only place those names are interpreted; the engine
//! itself only ever sees [`Align`].

use serde::{Deserialize, Serialize};

/// Position of a child along one axis of its container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Align {
    /// Child's minimum edge on the container's minimum edge.
    #[default]
    Start,
    /// Child centered in the container.
    Center,
    /// Child's maximum edge on the container's maximum edge.
    End,
}

impl Align {
    /// Resolve a host alignment name.
    ///
    /// Matching ignores case, `_` and `-`, so `firstTextBaseline`,
    /// `first_text_baseline` and `FIRST-TEXT-BASELINE` are the same name.
    /// Unrecognized names resolve to [`Align::Center`]; debug builds log a
    /// warning naming the value.
    pub fn from_name(name: &str) -> Self {
        let key: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "start" | "leading" | "left" | "top" | "listrowseparatorleading" => Self::Start,
            "end" | "trailing" | "right" | "bottom" | "listrowseparatortrailing" => Self::End,
            "center" | "centre" | "firsttextbaseline" | "lasttextbaseline" => Self::Center,
            _ => {
                if cfg!(debug_assertions) {
                    log::warn!("unknown alignment '{name}', using center");
                }
                Self::Center
            },
        }
    }

    /// Offset of a `child`-long span placed in a `container`-long span
    /// starting at `origin`.
    ///
    /// A child longer than its container overflows past the start edge for
    /// `End` and on both sides for `Center`.
    pub fn offset(self, origin: f32, container: f32, child: f32) -> f32 {
        match self {
            Self::Start => origin,
            Self::Center => origin + (container - child) / 2.0,
            Self::End => origin + container - child,
        }
    }
}

impl From<&str> for Align {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for Align {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Host-side horizontal alignment cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    Leading,
    Center,
    Trailing,
    ListRowSeparatorLeading,
    ListRowSeparatorTrailing,
}

/// Host-side vertical alignment cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
    FirstTextBaseline,
    LastTextBaseline,
}

impl From<HorizontalAlignment> for Align {
    fn from(h: HorizontalAlignment) -> Self {
        match h {
            HorizontalAlignment::Leading | HorizontalAlignment::ListRowSeparatorLeading => {
                Self::Start
            },
            HorizontalAlignment::Trailing | HorizontalAlignment::ListRowSeparatorTrailing => {
                Self::End
            },
            HorizontalAlignment::Center => Self::Center,
        }
    }
}

impl From<VerticalAlignment> for Align {
    fn from(v: VerticalAlignment) -> Self {
        match v {
            VerticalAlignment::Top => Self::Start,
            VerticalAlignment::Bottom => Self::End,
            VerticalAlignment::Center
            | VerticalAlignment::FirstTextBaseline
            | VerticalAlignment::LastTextBaseline => Self::Center,
        }
    }
}
