//! Actions bound to scroll directions and the seam that performs them.

use serde::{Deserialize, Serialize};

/// A single input action a profile can bind to a scroll direction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Do nothing
    #[default]
    None,
    /// Click a pointer button (4/5 scroll vertically, 6/7 horizontally)
    Button { button: u8 },
    /// Send a key combination, e.g. "Control+Page_Down"
    Keys { keys: String },
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Button { button } => write!(f, "button {}", button),
            Self::Keys { keys } => write!(f, "keys {}", keys),
        }
    }
}

/// Which halves of an action to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMode {
    Press,
    Release,
    /// Press immediately followed by release
    Both,
}

impl ExecuteMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Press => "press",
            Self::Release => "release",
            Self::Both => "both",
        }
    }
}

/// Performs actions on behalf of the easing worker
///
/// Implementations are called from the worker thread and should return
/// quickly; a slow dispatch delays every following step.
pub trait ActionDispatcher: Send + Sync {
    fn execute(&self, action: &Action, mode: ExecuteMode);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_toml() {
        #[derive(Debug, Serialize, Deserialize, PartialEq)]
        struct Holder {
            action: Action,
        }

        let parsed: Holder = toml::from_str(
            r#"
            [action]
            type = "keys"
            keys = "Control+Page_Down"
            "#,
        )
        .unwrap();
        assert_eq!(
            parsed.action,
            Action::Keys {
                keys: "Control+Page_Down".to_string()
            }
        );

        let button: Holder = toml::from_str("action = { type = \"button\", button = 5 }").unwrap();
        assert_eq!(button.action, Action::Button { button: 5 });
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::None.to_string(), "none");
        assert_eq!(Action::Button { button: 4 }.to_string(), "button 4");
        assert!(Action::None.is_none());
        assert!(!Action::Button { button: 4 }.is_none());
    }

    #[test]
    fn test_action_hashes_by_value() {
        let mut seen = std::collections::HashSet::new();
        assert!(seen.insert(Action::Button { button: 4 }));
        assert!(!seen.insert(Action::Button { button: 4 }));
        assert!(seen.insert(Action::Keys {
            keys: "Page_Up".to_string()
        }));
    }
}
