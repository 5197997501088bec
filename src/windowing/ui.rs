use std::fmt::{Display, Formatter};

/// The buttons of the sketch's page.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UiAction {
    ToggleCubeRotation,
    ToggleImportedOpacity,
}

impl UiAction {
    pub const ALL: [UiAction; 2] = [UiAction::ToggleCubeRotation, UiAction::ToggleImportedOpacity];

    pub fn from_callback(name: &str) -> Option<UiAction> {
        Self::ALL.into_iter().find(|a| a.callback_name() == name)
    }

    pub fn callback_name(&self) -> &'static str {
        match self {
            UiAction::ToggleCubeRotation => "toggleCubeRotation",
            UiAction::ToggleImportedOpacity => "toggleImportedOpacity",
        }
    }
}

impl Display for UiAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.callback_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callbacks_map_to_actions() {
        assert_eq!(
            UiAction::from_callback("toggleCubeRotation"),
            Some(UiAction::ToggleCubeRotation)
        );
        assert_eq!(
            UiAction::from_callback("toggleImportedOpacity"),
            Some(UiAction::ToggleImportedOpacity)
        );
        assert_eq!(UiAction::from_callback("toggleCuberotation"), None);
        assert_eq!(UiAction::from_callback(""), None);
    }
}
