use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

use crate::{State, StateError};

/// Cloned view of every snapshot-able state, taken at dispatch time.
#[derive(Default)]
pub struct CommandSnapshot {
    states: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl CommandSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_boxed(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.states.insert(id, value);
    }

    pub fn try_state<T: State>(&self) -> Result<&T, StateError> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .ok_or_else(StateError::state_not_found::<T>)
    }

    /// # Panics
    /// Panics if `T` was not registered or does not implement `snapshot`.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>()
            .unwrap_or_else(|_| panic!("State snapshot for {} is missing", type_name::<T>()))
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl std::fmt::Debug for CommandSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSnapshot")
            .field("states", &self.states.len())
            .finish()
    }
}
