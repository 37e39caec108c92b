//! Typed state container with async commands.
//!
//! - [`State`]: values owned by [`StateCtx`] on the UI thread.
//! - [`Command`]: manual-only side effects; they read a [`CommandSnapshot`] and write back
//!   through an [`Updater`].
//! - [`StateCtx::sync_states`]: applies pending write-backs, usually once per frame.

mod command;
mod ctx;
mod error;
mod runtime;
mod snapshot;
mod state;
mod task;

pub use command::{Command, CommandFuture};
pub use ctx::{DispatchPolicy, StateCtx};
pub use error::StateError;
pub use runtime::{RepaintHook, Updater};
pub use snapshot::CommandSnapshot;
pub use state::{State, state_assign_impl};
pub use task::{TaskHandle, TaskId};
pub use tokio_util::sync::CancellationToken;
