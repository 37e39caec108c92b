use std::any::{Any, type_name};

use log::warn;

/// A value owned by [`crate::StateCtx`].
///
/// States live on the UI thread. Commands never touch them directly: they read a
/// [`crate::CommandSnapshot`] and write back through an [`crate::Updater`].
pub trait State: Any + Send {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Cloned copy handed to commands. States returning `None` are invisible to commands.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `assign_box` body: replace `this` wholesale when the box holds a `T`.
pub fn state_assign_impl<T: State>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *this = *value,
        Err(_) => warn!("assign_box: payload is not a {}", type_name::<T>()),
    }
}
