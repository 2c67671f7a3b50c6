//! Add-Idea Mode
//!
//! Two-state toggle deciding whether map clicks open the add-idea modal.

/// Whether the map is armed for adding ideas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddIdeaMode {
    #[default]
    Inactive,
    Active,
}

/// Label and style of the toggle button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonAffordance {
    pub label: &'static str,
    pub class: &'static str,
}

/// Hint shown in the attribution corner while armed
pub const ADD_MODE_HINT: &str = "Кликните на карте для добавления идеи";

impl AddIdeaMode {
    pub fn toggled(self) -> Self {
        match self {
            AddIdeaMode::Inactive => AddIdeaMode::Active,
            AddIdeaMode::Active => AddIdeaMode::Inactive,
        }
    }

    pub fn is_active(self) -> bool {
        self == AddIdeaMode::Active
    }

    pub fn button(self) -> ButtonAffordance {
        match self {
            AddIdeaMode::Inactive => ButtonAffordance {
                label: "Добавить идею на карте",
                class: "btn btn-success",
            },
            AddIdeaMode::Active => ButtonAffordance {
                label: "Отменить добавление",
                class: "btn btn-warning",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_inactive() {
        let mode = AddIdeaMode::default();
        assert!(!mode.is_active());
        assert_eq!(mode.button().class, "btn btn-success");
    }

    #[test]
    fn test_toggle_arms_and_changes_button() {
        let mode = AddIdeaMode::default().toggled();
        assert!(mode.is_active());
        assert_eq!(mode.button().label, "Отменить добавление");
        assert_eq!(mode.button().class, "btn btn-warning");
    }

    #[test]
    fn test_double_toggle_restores_original_state() {
        let start = AddIdeaMode::default();
        let end = start.toggled().toggled();
        assert_eq!(end, start);
        assert_eq!(end.button(), start.button());
    }
}
