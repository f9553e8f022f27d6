#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Severity tag of a status banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    /// CSS modifier suffix for the banner element.
    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// A transient user-facing status message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusBanner {
    /// Monotonic id so a stale auto-clear timer never wipes a newer banner.
    pub seq: u64,
    pub severity: Severity,
    pub text: String,
}

/// Cross-view UI state: the current status banner, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub banner: Option<StatusBanner>,
    next_seq: u64,
}

impl UiState {
    /// Show a banner, replacing any current one. Returns the banner's
    /// sequence number for use by its auto-clear timer.
    pub fn announce(&mut self, severity: Severity, text: impl Into<String>) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.banner = Some(StatusBanner {
            seq,
            severity,
            text: text.into(),
        });
        seq
    }

    /// Clear the banner only if it is still the one identified by `seq`.
    pub fn clear_if(&mut self, seq: u64) -> bool {
        if self.banner.as_ref().is_some_and(|b| b.seq == seq) {
            self.banner = None;
            return true;
        }
        false
    }
}
