use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("State not registered: {type_name}")]
    StateNotFound { type_name: &'static str },
    #[error("Command not registered: {type_name}")]
    CommandNotFound { type_name: &'static str },
}

impl StateError {
    pub fn state_not_found<T: ?Sized>() -> Self {
        Self::StateNotFound {
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn command_not_found<T: ?Sized>() -> Self {
        Self::CommandNotFound {
            type_name: std::any::type_name::<T>(),
        }
    }
}
