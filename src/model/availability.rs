//! Separator and collapse-button availability
//!
//! A pure function of which panels are collapsed. Recomputed after every
//! state change and pushed to the geometry; never cached between operations.

use crate::geometry::GeometryProvider;
use crate::panel::{PanelId, SeparatorId};

/// Which separators and collapse buttons are disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Availability {
    pub separators_disabled: [bool; 2],
    pub buttons_disabled: [bool; 3],
}

impl Availability {
    /// Derive availability from the collapsed flags, in layout order
    ///
    /// - two or more collapsed: both separators disabled, and the button of
    ///   the one expanded panel disabled so it cannot collapse too
    /// - one collapsed edge panel: the separator touching it is disabled
    /// - only the middle panel collapsed: both separators stay usable, since
    ///   either one then resizes the two edge panels
    /// - none collapsed: everything enabled
    pub fn from_collapsed(collapsed: [bool; 3]) -> Self {
        let count = collapsed.iter().filter(|c| **c).count();
        let mut availability = Self::default();

        match count {
            0 => {}
            1 => {
                if collapsed[PanelId::First.index()] {
                    availability.separators_disabled[SeparatorId::First.index()] = true;
                } else if collapsed[PanelId::Third.index()] {
                    availability.separators_disabled[SeparatorId::Second.index()] = true;
                }
            }
            _ => {
                availability.separators_disabled = [true; 2];
                // With all three collapsed (not reachable through the
                // controller) every button stays enabled so any panel can
                // be expanded again.
                if count == 2 {
                    for (disabled, is_collapsed) in
                        availability.buttons_disabled.iter_mut().zip(collapsed)
                    {
                        *disabled = !is_collapsed;
                    }
                }
            }
        }

        availability
    }

    pub fn separator_enabled(&self, separator: SeparatorId) -> bool {
        !self.separators_disabled[separator.index()]
    }

    pub fn button_enabled(&self, panel: PanelId) -> bool {
        !self.buttons_disabled[panel.index()]
    }

    /// Write every marker to the geometry
    pub fn publish<G: GeometryProvider + ?Sized>(&self, geometry: &mut G) {
        for separator in SeparatorId::ALL {
            geometry.set_separator_disabled(separator, !self.separator_enabled(separator));
        }
        for panel in PanelId::ALL {
            geometry.set_button_disabled(panel, !self.button_enabled(panel));
        }
    }
}
