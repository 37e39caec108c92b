//! Task identity and cooperative cancellation for dispatched commands.
//!
//! Every dispatch of a command type gets a fresh generation number. A `TaskId` is the pair
//! (command type, generation); newer generations supersede older ones when the command was
//! dispatched as latest-only.

use std::any::TypeId;
use std::collections::HashMap;

use tokio_util::sync::CancellationToken;

/// Identifies one dispatch of a command type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Higher means dispatched later.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Handle returned from `StateCtx::dispatch*`.
///
/// Cancellation is cooperative: the spawned future stops at its next await point once the
/// token fires.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

/// Per-command-type generation counters plus the handle of the newest task.
#[derive(Debug, Default)]
pub(crate) struct TaskGenerations {
    latest: HashMap<TypeId, TaskHandle>,
}

impl TaskGenerations {
    /// Allocates the next `TaskHandle` for `type_id` and returns the one it replaces.
    pub(crate) fn next(&mut self, type_id: TypeId) -> (TaskHandle, Option<TaskHandle>) {
        let generation = self
            .latest
            .get(&type_id)
            .map_or(1, |handle| handle.id().generation() + 1);
        let handle = TaskHandle::new(TaskId::new(type_id, generation), CancellationToken::new());
        let previous = self.latest.insert(type_id, handle.clone());
        (handle, previous)
    }

    /// A task is stale once a later dispatch of the same command type exists.
    pub(crate) fn is_stale(&self, id: TaskId) -> bool {
        self.latest
            .get(&id.type_id())
            .is_some_and(|latest| latest.id().generation() > id.generation())
    }

    pub(crate) fn latest(&self, type_id: TypeId) -> Option<&TaskHandle> {
        self.latest.get(&type_id)
    }
}
