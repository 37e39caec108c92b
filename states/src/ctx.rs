use std::any::{TypeId, type_name};
use std::collections::BTreeMap;
use std::sync::Arc;

use log::{debug, trace};

use crate::command::spawn;
use crate::runtime::{Change, StateRuntime};
use crate::task::TaskGenerations;
use crate::{Command, CommandSnapshot, State, StateError, TaskHandle, Updater};

/// How a dispatched command's write-backs relate to later dispatches of the same command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchPolicy {
    /// Every completion is applied, in completion order.
    #[default]
    Concurrent,
    /// Only the newest dispatch may write back; the previous task is cancelled.
    LatestOnly,
}

/// Owner of all application states and registered commands.
#[derive(Default)]
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    commands: BTreeMap<TypeId, Arc<dyn Command>>,
    runtime: StateRuntime,
    tasks: TaskGenerations,
}

impl StateCtx {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(TypeId::of::<T>(), Arc::new(command));
    }

    pub fn try_state<T: State>(&self) -> Result<&T, StateError> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(StateError::state_not_found::<T>)
    }

    pub fn try_state_mut<T: State>(&mut self) -> Result<&mut T, StateError> {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .ok_or_else(StateError::state_not_found::<T>)
    }

    /// # Panics
    /// Panics if `T` was never added.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>()
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// # Panics
    /// Panics if `T` was never added.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.try_state_mut::<T>()
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Registers a hook invoked whenever a command sends an update.
    pub fn set_repaint_hook(&mut self, hook: impl Fn() + Send + Sync + 'static) {
        self.runtime.set_repaint(Arc::new(hook));
    }

    /// Updater not bound to any task. Its messages are never considered stale.
    pub fn updater(&self) -> Updater {
        self.runtime.updater(None)
    }

    pub fn dispatch<C: Command>(&mut self) -> Result<TaskHandle, StateError> {
        self.dispatch_with::<C>(DispatchPolicy::Concurrent)
    }

    pub fn dispatch_latest_only<C: Command>(&mut self) -> Result<TaskHandle, StateError> {
        self.dispatch_with::<C>(DispatchPolicy::LatestOnly)
    }

    pub fn dispatch_with<C: Command>(
        &mut self,
        policy: DispatchPolicy,
    ) -> Result<TaskHandle, StateError> {
        let type_id = TypeId::of::<C>();
        let command = self
            .commands
            .get(&type_id)
            .cloned()
            .ok_or_else(StateError::command_not_found::<C>)?;

        let (handle, previous) = self.tasks.next(type_id);
        let origin = match policy {
            DispatchPolicy::Concurrent => None,
            DispatchPolicy::LatestOnly => {
                if let Some(previous) = previous {
                    debug!(
                        "Cancelling {} generation {}",
                        type_name::<C>(),
                        previous.id().generation()
                    );
                    previous.cancel();
                }
                Some(handle.id())
            }
        };

        debug!(
            "Dispatching {} generation {} ({policy:?})",
            type_name::<C>(),
            handle.id().generation()
        );

        let cancel = handle.cancellation_token();
        let future = command.run(self.snapshot(), self.runtime.updater(origin), cancel.clone());
        spawn(Box::pin(async move {
            tokio::select! {
                () = cancel.cancelled() => trace!("command future cancelled"),
                () = future => {}
            }
        }));

        Ok(handle)
    }

    /// Newest handle dispatched for `C`, if any.
    pub fn latest_task<C: Command>(&self) -> Option<&TaskHandle> {
        self.tasks.latest(TypeId::of::<C>())
    }

    /// Applies every pending update. Returns how many were applied.
    pub fn sync_states(&mut self) -> usize {
        let mut applied = 0;
        while let Some(message) = self.runtime.try_recv() {
            if let Some(origin) = message.origin
                && self.tasks.is_stale(origin)
            {
                debug!(
                    "Dropping stale update for {} from generation {}",
                    message.target_name,
                    origin.generation()
                );
                continue;
            }

            let Some(state) = self.states.get_mut(&message.target) else {
                debug!("Dropping update for unregistered {}", message.target_name);
                continue;
            };

            match message.change {
                Change::Assign(value) => state.assign_box(value),
                Change::Modify(modify) => modify(state.as_any_mut()),
            }
            applied += 1;
        }
        applied
    }

    fn snapshot(&self) -> CommandSnapshot {
        let mut snap = CommandSnapshot::new();
        for (id, state) in &self.states {
            if let Some(boxed) = state.snapshot() {
                snap.insert_boxed(*id, boxed);
            }
        }
        snap
    }
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("commands", &self.commands.len())
            .finish()
    }
}
