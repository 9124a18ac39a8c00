//! Panel and separator identities
//!
//! The layout is fixed at three panels laid out left to right with one
//! separator between each adjacent pair.

use serde::{Deserialize, Serialize};

/// Identifies one of the three panels, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelId {
    First,
    Second,
    Third,
}

impl PanelId {
    /// All panels for iteration, in layout order
    pub const ALL: [PanelId; 3] = [PanelId::First, PanelId::Second, PanelId::Third];

    /// Position of this panel in layout order (0-based)
    pub fn index(self) -> usize {
        match self {
            PanelId::First => 0,
            PanelId::Second => 1,
            PanelId::Third => 2,
        }
    }

    /// Get the display name for this panel
    pub fn display_name(self) -> &'static str {
        match self {
            PanelId::First => "first",
            PanelId::Second => "second",
            PanelId::Third => "third",
        }
    }

    /// The neighbor that gives way first when this panel changes size.
    ///
    /// On collapse it absorbs the freed space; on expand it shrinks first.
    /// Both edge panels lean on the middle one, the middle one on the third.
    pub fn give_way(self) -> PanelId {
        match self {
            PanelId::First | PanelId::Third => PanelId::Second,
            PanelId::Second => PanelId::Third,
        }
    }

    /// The panel that is neither this one nor its give-way neighbor
    pub fn far(self) -> PanelId {
        match self {
            PanelId::First => PanelId::Third,
            PanelId::Second | PanelId::Third => PanelId::First,
        }
    }
}

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} panel", self.display_name())
    }
}

/// Identifies one of the two draggable separators
///
/// `First` sits between the first and second panels, `Second` between the
/// second and third.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparatorId {
    First,
    Second,
}

impl SeparatorId {
    pub const ALL: [SeparatorId; 2] = [SeparatorId::First, SeparatorId::Second];

    pub fn index(self) -> usize {
        match self {
            SeparatorId::First => 0,
            SeparatorId::Second => 1,
        }
    }
}

impl std::fmt::Display for SeparatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeparatorId::First => write!(f, "first separator"),
            SeparatorId::Second => write!(f, "second separator"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_give_way_and_far_partition_the_other_panels() {
        for panel in PanelId::ALL {
            let give_way = panel.give_way();
            let far = panel.far();
            assert_ne!(give_way, panel);
            assert_ne!(far, panel);
            assert_ne!(give_way, far);
        }
    }

    #[test]
    fn test_edge_panels_give_way_to_middle() {
        assert_eq!(PanelId::First.give_way(), PanelId::Second);
        assert_eq!(PanelId::Third.give_way(), PanelId::Second);
        assert_eq!(PanelId::Second.give_way(), PanelId::Third);
    }

    #[test]
    fn test_indices_follow_layout_order() {
        let indices: Vec<usize> = PanelId::ALL.iter().map(|p| p.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
