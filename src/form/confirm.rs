#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Info,
    #[default]
    Warning,
    Danger,
}

/// Copy and tone for a confirmation prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
    pub severity: Severity,
}

impl ConfirmRequest {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_text: "Delete".to_string(),
            cancel_text: "Cancel".to_string(),
            severity: Severity::default(),
        }
    }

    pub fn with_buttons(mut self, confirm: impl Into<String>, cancel: impl Into<String>) -> Self {
        self.confirm_text = confirm.into();
        self.cancel_text = cancel.into();
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

/// Asks the user to confirm a destructive action. `true` means confirmed;
/// a dismissed prompt answers `false`.
pub trait ConfirmationService {
    fn confirm(&mut self, request: &ConfirmRequest) -> bool;
}

impl<F> ConfirmationService for F
where
    F: FnMut(&ConfirmRequest) -> bool,
{
    fn confirm(&mut self, request: &ConfirmRequest) -> bool {
        self(request)
    }
}
