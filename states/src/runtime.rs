use std::any::{Any, TypeId, type_name};
use std::sync::Arc;

use flume::{Receiver, Sender};
use log::warn;

use crate::{State, TaskId};

/// Called after every message sent through an [`Updater`], e.g. `egui::Context::request_repaint`.
pub type RepaintHook = Arc<dyn Fn() + Send + Sync>;

pub(crate) enum Change {
    Assign(Box<dyn Any + Send>),
    Modify(Box<dyn FnOnce(&mut dyn Any) + Send>),
}

pub(crate) struct Message {
    pub(crate) target: TypeId,
    pub(crate) target_name: &'static str,
    pub(crate) origin: Option<TaskId>,
    pub(crate) change: Change,
}

/// Write side of the state channel, owned by running commands.
///
/// Messages are applied on the UI thread by `StateCtx::sync_states`.
#[derive(Clone)]
pub struct Updater {
    send: Sender<Message>,
    origin: Option<TaskId>,
    repaint: Option<RepaintHook>,
}

impl Updater {
    pub(crate) fn new(
        send: Sender<Message>,
        origin: Option<TaskId>,
        repaint: Option<RepaintHook>,
    ) -> Self {
        Self {
            send,
            origin,
            repaint,
        }
    }

    /// Replaces the whole `T`.
    pub fn set<T: State>(&self, state: T) {
        self.push(Message {
            target: TypeId::of::<T>(),
            target_name: type_name::<T>(),
            origin: self.origin,
            change: Change::Assign(Box::new(state)),
        });
    }

    /// Applies `f` to the current `T` when the message is synced.
    pub fn update<T: State>(&self, f: impl FnOnce(&mut T) + Send + 'static) {
        let modify = move |any: &mut dyn Any| {
            if let Some(state) = any.downcast_mut::<T>() {
                f(state);
            }
        };
        self.push(Message {
            target: TypeId::of::<T>(),
            target_name: type_name::<T>(),
            origin: self.origin,
            change: Change::Modify(Box::new(modify)),
        });
    }

    fn push(&self, message: Message) {
        let name = message.target_name;
        if self.send.send(message).is_err() {
            warn!("Updater: state context dropped, discarding update for {name}");
            return;
        }
        if let Some(repaint) = &self.repaint {
            repaint();
        }
    }
}

impl std::fmt::Debug for Updater {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Updater")
            .field("origin", &self.origin)
            .field("repaint", &self.repaint.is_some())
            .finish()
    }
}

pub(crate) struct StateRuntime {
    send: Sender<Message>,
    recv: Receiver<Message>,
    repaint: Option<RepaintHook>,
}

impl Default for StateRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl StateRuntime {
    pub(crate) fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            send,
            recv,
            repaint: None,
        }
    }

    pub(crate) fn updater(&self, origin: Option<TaskId>) -> Updater {
        Updater::new(self.send.clone(), origin, self.repaint.clone())
    }

    pub(crate) fn set_repaint(&mut self, hook: RepaintHook) {
        self.repaint = Some(hook);
    }

    pub(crate) fn try_recv(&self) -> Option<Message> {
        self.recv.try_recv().ok()
    }
}
