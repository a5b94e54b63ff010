//! Navigation controller between the UI page and the history core.
//!
//! The shell page only reports user intent; all navigation state lives here
//! in a single `NavigationHistory` instance. Every request is answered with
//! the complete render state so the page never keeps state of its own.

use serde::{Deserialize, Serialize};

use crate::browser::address;
use crate::browser::NavigationHistory;

/// User intent posted by the shell page over the webview IPC channel.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ShellRequest {
    Navigate { input: String },
    Back,
    Forward,
    Refresh,
}

/// Render state handed back to the shell page after every request.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellUpdate {
    /// URL the content frame should load; absent when nothing moved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load: Option<String>,
    pub address: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub struct Shell {
    history: NavigationHistory<String>,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            history: NavigationHistory::new(),
        }
    }

    pub fn handle(&mut self, request: ShellRequest) -> ShellUpdate {
        match request {
            ShellRequest::Navigate { input } => match address::resolve(&input) {
                Some(url) => {
                    self.history.push(url.clone());
                    self.update(Some(url), Some("Loading..."), None)
                }
                None => self.update(None, None, Some("Please enter a URL".to_string())),
            },
            ShellRequest::Back => match self.history.back().cloned() {
                Some(url) => self.update(Some(url), Some("Loading..."), None),
                None => self.update(None, None, None),
            },
            ShellRequest::Forward => match self.history.forward().cloned() {
                Some(url) => self.update(Some(url), Some("Loading..."), None),
                None => self.update(None, None, None),
            },
            ShellRequest::Refresh => match self.history.current().cloned() {
                Some(url) => self.update(Some(url), Some("Reloading..."), None),
                None => self.update(None, None, None),
            },
        }
    }

    fn update(
        &self,
        load: Option<String>,
        status: Option<&str>,
        error: Option<String>,
    ) -> ShellUpdate {
        ShellUpdate {
            load,
            address: self.history.current().cloned().unwrap_or_default(),
            can_go_back: self.history.can_go_back(),
            can_go_forward: self.history.can_go_forward(),
            status: status.map(str::to_string),
            error,
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigate(shell: &mut Shell, input: &str) -> ShellUpdate {
        shell.handle(ShellRequest::Navigate {
            input: input.to_string(),
        })
    }

    #[test]
    fn navigate_loads_resolved_url() {
        let mut shell = Shell::new();
        let update = navigate(&mut shell, "example.com");

        assert_eq!(update.load.as_deref(), Some("https://example.com"));
        assert_eq!(update.address, "https://example.com");
        assert!(!update.can_go_back);
        assert!(!update.can_go_forward);
        assert_eq!(update.status.as_deref(), Some("Loading..."));
    }

    #[test]
    fn second_navigation_enables_back() {
        let mut shell = Shell::new();
        navigate(&mut shell, "https://a.example");
        let update = navigate(&mut shell, "https://b.example");

        assert!(update.can_go_back);
        assert!(!update.can_go_forward);
        assert_eq!(update.address, "https://b.example");
    }

    #[test]
    fn empty_input_reports_error_without_navigating() {
        let mut shell = Shell::new();
        navigate(&mut shell, "https://a.example");
        let update = navigate(&mut shell, "   ");

        assert_eq!(update.load, None);
        assert_eq!(update.error.as_deref(), Some("Please enter a URL"));
        assert_eq!(update.address, "https://a.example");
        assert!(!update.can_go_back);
    }

    #[test]
    fn back_loads_previous_page() {
        let mut shell = Shell::new();
        navigate(&mut shell, "https://a.example");
        navigate(&mut shell, "https://b.example");

        let update = shell.handle(ShellRequest::Back);
        assert_eq!(update.load.as_deref(), Some("https://a.example"));
        assert_eq!(update.address, "https://a.example");
        assert!(!update.can_go_back);
        assert!(update.can_go_forward);
    }

    #[test]
    fn back_at_boundary_loads_nothing() {
        let mut shell = Shell::new();
        navigate(&mut shell, "https://a.example");

        let update = shell.handle(ShellRequest::Back);
        assert_eq!(update.load, None);
        assert_eq!(update.status, None);
        assert_eq!(update.address, "https://a.example");
    }

    #[test]
    fn forward_on_fresh_shell_is_a_no_op() {
        let mut shell = Shell::new();
        let update = shell.handle(ShellRequest::Forward);

        assert_eq!(update.load, None);
        assert_eq!(update.address, "");
        assert!(!update.can_go_back);
        assert!(!update.can_go_forward);
    }

    #[test]
    fn navigating_after_back_discards_forward_history() {
        let mut shell = Shell::new();
        navigate(&mut shell, "https://a.example");
        navigate(&mut shell, "https://b.example");
        navigate(&mut shell, "https://c.example");
        shell.handle(ShellRequest::Back);

        let update = navigate(&mut shell, "https://d.example");
        assert!(!update.can_go_forward);

        let update = shell.handle(ShellRequest::Forward);
        assert_eq!(update.load, None);
        assert_eq!(update.address, "https://d.example");
    }

    #[test]
    fn refresh_reloads_current_page() {
        let mut shell = Shell::new();
        navigate(&mut shell, "https://a.example");

        let update = shell.handle(ShellRequest::Refresh);
        assert_eq!(update.load.as_deref(), Some("https://a.example"));
        assert_eq!(update.status.as_deref(), Some("Reloading..."));
        assert!(!update.can_go_back);
    }

    #[test]
    fn refresh_before_any_navigation_loads_nothing() {
        let mut shell = Shell::new();
        let update = shell.handle(ShellRequest::Refresh);
        assert_eq!(update.load, None);
    }

    #[test]
    fn requests_parse_from_page_json() {
        let request: ShellRequest =
            serde_json::from_str(r#"{"op":"navigate","input":"example.com"}"#).unwrap();
        assert!(matches!(request, ShellRequest::Navigate { input } if input == "example.com"));

        assert!(matches!(
            serde_json::from_str::<ShellRequest>(r#"{"op":"back"}"#).unwrap(),
            ShellRequest::Back
        ));
        assert!(matches!(
            serde_json::from_str::<ShellRequest>(r#"{"op":"forward"}"#).unwrap(),
            ShellRequest::Forward
        ));
        assert!(matches!(
            serde_json::from_str::<ShellRequest>(r#"{"op":"refresh"}"#).unwrap(),
            ShellRequest::Refresh
        ));
    }

    #[test]
    fn updates_serialize_with_camel_case_keys() {
        let mut shell = Shell::new();
        let update = navigate(&mut shell, "https://a.example");

        let json = serde_json::to_string(&update).unwrap();
        assert!(json.contains("\"load\":\"https://a.example\""));
        assert!(json.contains("\"canGoBack\":false"));
        assert!(json.contains("\"canGoForward\":false"));
        assert!(!json.contains("\"error\""));
    }
}
