use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Malformed version string: '{0}'")]
    MalformedVersionString(String),

    #[error("Non-numeric {component} component '{value}' in '{input}'")]
    NonNumericComponent {
        input: String,
        component: &'static str,
        value: String,
    },

    #[error("Invalid date '{date}' in '{input}'")]
    InvalidDate { input: String, date: String },

    #[error("Invalid snapshot suffix '{0}': expected one lowercase ASCII letter")]
    InvalidSuffix(char),

    #[error("Missing required {component} component in '{input}'")]
    MissingRequiredComponent {
        input: String,
        component: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),
}
