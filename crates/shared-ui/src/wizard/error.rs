use shared_types::{AppError, ControlType};

/// Failure to map values onto, or out of, a rendered Wizard control.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("no control labelled \"{0}\"")]
    LabelNotFound(String),
    #[error("\"{label}\" is a {found}, not a {expected}")]
    WrongKind {
        label: String,
        found: &'static str,
        expected: &'static str,
    },
    #[error("\"{control}\" has no option labelled \"{option}\"")]
    OptionNotFound { control: String, option: String },
    #[error("invalid value \"{value}\" for \"{label}\": {reason}")]
    InvalidValue {
        label: String,
        value: String,
        reason: &'static str,
    },
    #[error("unexpected labels/values combination for {0}")]
    UnexpectedShape(ControlType),
    #[error("unsupported control type [{0}]")]
    UnsupportedControlType(ControlType),
}

impl From<WizardError> for AppError {
    fn from(err: WizardError) -> Self {
        AppError::bad_request(err.to_string())
    }
}
