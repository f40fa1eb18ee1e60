use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Local};
use serde_json::json;

use flickease_core::{Action, ActionDispatcher, ExecuteMode};

/// Prints dispatched actions instead of injecting input events
pub struct ConsoleDispatcher {
    json: bool,
    dispatched: AtomicUsize,
}

impl ConsoleDispatcher {
    pub fn new(json: bool) -> Self {
        Self {
            json,
            dispatched: AtomicUsize::new(0),
        }
    }

    /// Number of actions dispatched so far
    pub fn dispatched(&self) -> usize {
        self.dispatched.load(Ordering::SeqCst)
    }

    fn render(&self, action: &Action, mode: ExecuteMode, at: DateTime<Local>) -> String {
        if self.json {
            json!({
                "time": at.to_rfc3339(),
                "action": action,
                "mode": mode,
            })
            .to_string()
        } else {
            format!("{}  {:<7} {}", at.format("%H:%M:%S%.3f"), mode.as_str(), action)
        }
    }
}

impl ActionDispatcher for ConsoleDispatcher {
    fn execute(&self, action: &Action, mode: ExecuteMode) {
        if action.is_none() {
            return;
        }
        self.dispatched.fetch_add(1, Ordering::SeqCst);
        println!("{}", self.render(action, mode, Local::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 1, 12, 30, 15).unwrap()
    }

    #[test]
    fn test_render_text() {
        let dispatcher = ConsoleDispatcher::new(false);
        let line = dispatcher.render(&Action::Button { button: 5 }, ExecuteMode::Both, at());
        assert_eq!(line, "12:30:15.000  both    button 5");
    }

    #[test]
    fn test_render_json() {
        let dispatcher = ConsoleDispatcher::new(true);
        let line = dispatcher.render(
            &Action::Keys {
                keys: "Page_Down".to_string(),
            },
            ExecuteMode::Both,
            at(),
        );
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["action"]["type"], "keys");
        assert_eq!(value["action"]["keys"], "Page_Down");
        assert_eq!(value["mode"], "both");
    }

    #[test]
    fn test_none_actions_are_skipped() {
        let dispatcher = ConsoleDispatcher::new(false);
        dispatcher.execute(&Action::None, ExecuteMode::Both);
        assert_eq!(dispatcher.dispatched(), 0);
        dispatcher.execute(&Action::Button { button: 4 }, ExecuteMode::Both);
        assert_eq!(dispatcher.dispatched(), 1);
    }
}
