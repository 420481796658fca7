//! Table error types
//!
//! Error types for sound table operations.

/// Table operation that looked up a sound by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Play,
    Pause,
    Stop,
    Unload,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::Play => "play",
            Operation::Pause => "pause",
            Operation::Stop => "stop",
            Operation::Unload => "unload",
        };
        f.write_str(name)
    }
}

/// Error type for table operations
///
/// `E` is the engine's error type. Engine failures are carried unchanged.
#[derive(Debug)]
pub enum TableError<E> {
    /// No loaded sound is registered under `name`
    NotFound { op: Operation, name: String },
    /// Sounds cannot be registered under an empty name
    EmptyName,
    /// The audio engine reported an error
    Engine(E),
    /// One or more handles failed to stop during `stop_all_sounds`
    StopAll(Vec<(String, E)>),
    /// The named sounds were registered and counted, but the handles they
    /// replaced failed to unload
    ReplacedUnload(Vec<(String, E)>),
}

impl<E> TableError<E> {
    /// Name of the missing sound, for `NotFound` errors
    pub fn missing_name(&self) -> Option<&str> {
        match self {
            TableError::NotFound { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Check if this is a `NotFound` error
    pub fn is_not_found(&self) -> bool {
        matches!(self, TableError::NotFound { .. })
    }

    /// Check if the sound (or every sound, for a collection) was registered
    /// despite the error
    pub fn is_registered(&self) -> bool {
        matches!(self, TableError::ReplacedUnload(_))
    }
}

impl<E> From<E> for TableError<E> {
    fn from(err: E) -> Self {
        TableError::Engine(err)
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TableError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::NotFound { op, name } => write!(f, "{}: sound not found: {}", op, name),
            TableError::EmptyName => write!(f, "Sound name must not be empty"),
            TableError::Engine(err) => write!(f, "Audio engine error: {}", err),
            TableError::StopAll(failures) => {
                write!(f, "Failed to stop {} sound(s):", failures.len())?;
                for (name, err) in failures {
                    write!(f, " {} ({})", name, err)?;
                }
                Ok(())
            }
            TableError::ReplacedUnload(failures) => {
                write!(f, "Registered, but failed to unload replaced sound(s):")?;
                for (name, err) in failures {
                    write!(f, " {} ({})", name, err)?;
                }
                Ok(())
            }
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for TableError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::Engine(err) => Some(err),
            TableError::ReplacedUnload(failures) => failures
                .first()
                .map(|(_, err)| err as &(dyn std::error::Error + 'static)),
            _ => None,
        }
    }
}
