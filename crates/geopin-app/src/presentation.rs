//! Button visual projection.
//!
//! Presentation is a pure function of the acquisition state; there is no
//! hidden memory behind the affordance.

use crate::controller::LocateState;

/// Colors (ARGB format)
pub mod colors {
    pub const IDLE: u32 = 0xFF2D2D2D;
    pub const LOADING: u32 = 0xFF4A9EFF;
    pub const SUCCESS: u32 = 0xFF34C759;
    pub const ERROR: u32 = 0xFFE5484D;
}

/// What the locate button shows for one state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonVisual {
    pub icon: &'static str,
    pub label: &'static str,
    pub color: u32,
}

/// Project an acquisition state onto its visual
pub fn project(state: LocateState) -> ButtonVisual {
    match state {
        LocateState::Idle => ButtonVisual {
            icon: "◎",
            label: "Locate me",
            color: colors::IDLE,
        },
        LocateState::Loading => ButtonVisual {
            icon: "…",
            label: "Locating",
            color: colors::LOADING,
        },
        LocateState::Success => ButtonVisual {
            icon: "✓",
            label: "Location found",
            color: colors::SUCCESS,
        },
        LocateState::Error => ButtonVisual {
            icon: "!",
            label: "Location failed",
            color: colors::ERROR,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_is_keyed_off_state() {
        assert_eq!(project(LocateState::Idle).label, "Locate me");
        assert_eq!(project(LocateState::Loading).color, colors::LOADING);
        assert_eq!(project(LocateState::Success).icon, "✓");
        assert_eq!(project(LocateState::Error).color, colors::ERROR);
    }

    #[test]
    fn test_projection_is_stable() {
        // Pure function: same state, same visual.
        assert_eq!(project(LocateState::Loading), project(LocateState::Loading));
    }
}
