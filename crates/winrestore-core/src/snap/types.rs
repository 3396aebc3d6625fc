use serde::{Deserialize, Serialize};

/// One of the eight canonical half/quarter placements relative to a work area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapZone {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl SnapZone {
    pub const ALL: [SnapZone; 8] = [
        SnapZone::Left,
        SnapZone::Right,
        SnapZone::Top,
        SnapZone::Bottom,
        SnapZone::TopLeft,
        SnapZone::TopRight,
        SnapZone::BottomLeft,
        SnapZone::BottomRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SnapZone::Left => "left",
            SnapZone::Right => "right",
            SnapZone::Top => "top",
            SnapZone::Bottom => "bottom",
            SnapZone::TopLeft => "top_left",
            SnapZone::TopRight => "top_right",
            SnapZone::BottomLeft => "bottom_left",
            SnapZone::BottomRight => "bottom_right",
        }
    }
}

impl std::fmt::Display for SnapZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
