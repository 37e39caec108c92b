use std::any::Any;
use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::{CommandSnapshot, Updater};

pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// A manual-only side effect, run via `StateCtx::dispatch`.
///
/// `run` is called on the UI thread and must only capture owned data from `snap`; the
/// returned future is spawned and reports back through `updater`.
pub trait Command: Any + Send + Sync {
    fn run(&self, snap: CommandSnapshot, updater: Updater, cancel: CancellationToken)
    -> CommandFuture;
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn spawn(future: CommandFuture) {
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            drop(handle.spawn(future));
        }
        Err(err) => log::error!("Cannot spawn command outside a tokio runtime: {err}"),
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn spawn(future: CommandFuture) {
    wasm_bindgen_futures::spawn_local(future);
}
