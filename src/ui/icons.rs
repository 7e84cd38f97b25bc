//! Unified status vocabulary for consistent CLI output.
//!
//! `StatusKind` provides a single canonical set of status icons and
//! colors used by the progress indicator and the error summary.

use super::progress::StepState;
use super::theme::FormTheme;

/// Canonical status kinds used across all output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Step finished or entry accepted.
    Success,
    /// Entry rejected.
    Failed,
    /// Step not reached yet.
    Pending,
    /// Step currently shown.
    Active,
    /// Non-fatal warning.
    Warning,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Pending => "◌",
            Self::Active => "◆",
            Self::Warning => "⚠",
        }
    }

    /// Bracketed text for non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Success => "[done]",
            Self::Failed => "[invalid]",
            Self::Pending => "[pending]",
            Self::Active => "[current]",
            Self::Warning => "[warn]",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &FormTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Pending => theme.dim.apply_to(icon).to_string(),
            Self::Active => theme.active.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
        }
    }

    /// Format a status line for non-TTY: bracketed + message.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.bracketed(), msg)
    }
}

impl From<StepState> for StatusKind {
    fn from(state: StepState) -> Self {
        match state {
            StepState::Completed => Self::Success,
            StepState::Active => Self::Active,
            StepState::Pending => Self::Pending,
        }
    }
}
