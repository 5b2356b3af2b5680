use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid integer input: {token:?}")]
    InputParseError {
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Input ended before two integers were read")]
    InputExhaustedError,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CalcError::InputParseError { .. } => ErrorSeverity::High,
            CalcError::InputExhaustedError => ErrorSeverity::High,
            CalcError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::InputParseError { token, .. } => {
                format!("\"{}\" is not a valid integer", token)
            }
            CalcError::InputExhaustedError => {
                "Expected two integers but the input ended early".to_string()
            }
            CalcError::IoError(e) => format!("Could not read or write the terminal: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::InputParseError { .. } => "Enter a whole number such as 42 or -7",
            CalcError::InputExhaustedError => {
                "Provide both integers, separated by whitespace or newlines"
            }
            CalcError::IoError(_) => "Check that stdin and stdout are connected and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
