use std::fmt;

pub mod executor;

pub use executor::{ProcessExecutor, Termination};

#[derive(Debug)]
pub enum ProcessError {
    /// Nothing named `program` on the search path.
    NotFound(String),
    Spawn {
        program: String,
        source: std::io::Error,
    },
    Wait {
        program: String,
        source: std::io::Error,
    },
    EmptyCommand,
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::NotFound(program) => write!(f, "command not found: {}", program),
            ProcessError::Spawn { program, source } => write!(f, "{}: {}", program, source),
            ProcessError::Wait { program, source } => {
                write!(f, "{}: failed to wait for child: {}", program, source)
            }
            ProcessError::EmptyCommand => write!(f, "no command to launch"),
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::Spawn { source, .. } | ProcessError::Wait { source, .. } => Some(source),
            _ => None,
        }
    }
}
