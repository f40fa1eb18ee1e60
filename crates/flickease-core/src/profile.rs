use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::{Error, Result};

/// The four scroll actions a profile binds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollAction {
    Up,
    Down,
    Left,
    Right,
}

impl ScrollAction {
    pub const ALL: [ScrollAction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "scroll_up",
            Self::Down => "scroll_down",
            Self::Left => "scroll_left",
            Self::Right => "scroll_right",
        }
    }
}

/// Scroll bindings for one application or window class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default = "default_profile_name")]
    pub name: String,
    /// Use the default profile's scroll actions instead of this profile's own
    #[serde(default)]
    pub scroll_inherit: bool,
    #[serde(default = "default_scroll_up")]
    pub scroll_up: Action,
    #[serde(default = "default_scroll_down")]
    pub scroll_down: Action,
    #[serde(default = "default_scroll_left")]
    pub scroll_left: Action,
    #[serde(default = "default_scroll_right")]
    pub scroll_right: Action,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: default_profile_name(),
            scroll_inherit: false,
            scroll_up: default_scroll_up(),
            scroll_down: default_scroll_down(),
            scroll_left: default_scroll_left(),
            scroll_right: default_scroll_right(),
        }
    }
}

impl Profile {
    /// Create a profile that inherits its scroll actions from the default profile
    pub fn inheriting(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scroll_inherit: true,
            scroll_up: Action::None,
            scroll_down: Action::None,
            scroll_left: Action::None,
            scroll_right: Action::None,
        }
    }

    pub fn scroll_action(&self, which: ScrollAction) -> &Action {
        match which {
            ScrollAction::Up => &self.scroll_up,
            ScrollAction::Down => &self.scroll_down,
            ScrollAction::Left => &self.scroll_left,
            ScrollAction::Right => &self.scroll_right,
        }
    }
}

fn default_profile_name() -> String {
    "default".to_string()
}

// X11 pointer buttons 4-7 are wheel up/down/left/right
fn default_scroll_up() -> Action {
    Action::Button { button: 4 }
}

fn default_scroll_down() -> Action {
    Action::Button { button: 5 }
}

fn default_scroll_left() -> Action {
    Action::Button { button: 6 }
}

fn default_scroll_right() -> Action {
    Action::Button { button: 7 }
}

/// Supplies the process-wide fallback profile for `scroll_inherit`
pub trait ProfileSource: Send + Sync {
    fn default_profile(&self) -> Arc<Profile>;
}

/// The default profile plus any named profiles from configuration
#[derive(Debug, Clone)]
pub struct ProfileSet {
    default: Arc<Profile>,
    named: BTreeMap<String, Arc<Profile>>,
}

impl Default for ProfileSet {
    fn default() -> Self {
        Self::new(Profile::default(), BTreeMap::new())
    }
}

impl ProfileSet {
    pub fn new(default: Profile, named: BTreeMap<String, Profile>) -> Self {
        let named = named
            .into_iter()
            .map(|(key, mut profile)| {
                // Table keys win over an explicit `name` so lookups stay consistent
                profile.name = key.clone();
                (key, Arc::new(profile))
            })
            .collect();

        Self {
            default: Arc::new(default),
            named,
        }
    }

    /// Look up a profile by name; "default" always resolves
    pub fn get(&self, name: &str) -> Result<Arc<Profile>> {
        if let Some(profile) = self.named.get(name) {
            return Ok(Arc::clone(profile));
        }
        if name == self.default.name || name == "default" {
            return Ok(Arc::clone(&self.default));
        }
        Err(Error::ProfileNotFound(name.to_string()))
    }

    /// Names of the configured non-default profiles, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.named.keys().map(String::as_str)
    }
}

impl ProfileSource for ProfileSet {
    fn default_profile(&self) -> Arc<Profile> {
        Arc::clone(&self.default)
    }
}
