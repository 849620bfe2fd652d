use std::sync::Arc;

/// Something able to show a modal message on behalf of the core, usually
/// the active emulation screen.
pub trait AlertHost: Send + Sync {
    /// Shows the message and blocks until it is dismissed. Returns the
    /// user's answer for yes/no prompts.
    fn show_alert(&self, caption: &str, text: &str, yes_no: bool) -> bool;
}

/// Routes core alerts to whichever host is currently registered.
///
/// The host is set explicitly when an emulation screen comes up and must be
/// cleared when it goes away.
#[derive(Default)]
pub struct AlertRouter {
    host: Option<Arc<dyn AlertHost>>,
}

impl AlertRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, host: Arc<dyn AlertHost>) {
        tracing::debug!("registering alert host");
        self.host = Some(host);
    }

    pub fn clear(&mut self) {
        tracing::debug!("clearing alert host");
        self.host = None;
    }

    pub fn has_host(&self) -> bool {
        self.host.is_some()
    }

    /// Returns `true` only when a yes/no prompt was answered with yes.
    pub fn display_alert(&self, caption: &str, text: &str, yes_no: bool) -> bool {
        tracing::error!(caption, "alert: {text}");
        let Some(host) = self.host.as_ref() else {
            tracing::warn!("no alert host registered, dropping alert");
            return false;
        };
        let answer = host.show_alert(caption, text, yes_no);
        yes_no && answer
    }
}

impl std::fmt::Debug for AlertRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertRouter")
            .field("has_host", &self.has_host())
            .finish()
    }
}
