//! Fetch-users command.
//!
//! The fetch is a side effect, so it lives in a manual-only command:
//! - `FetchUsersInput` holds the request the next dispatch sends. Handlers write it right
//!   before dispatching.
//! - `FetchUsersCommand` performs the request and writes the batch back into
//!   `UsersViewState` through the `Updater`.
//!
//! Failures are logged and swallowed: the table keeps showing the previous batch.

use std::any::Any;

use log::{error, info};
use peoplegrid_states::{
    CancellationToken, Command, CommandFuture, CommandSnapshot, State, Updater, state_assign_impl,
};

use super::api;
use super::query::UsersQuery;
use super::view_state::UsersViewState;
use crate::BusinessConfig;

/// Parameters for the next `FetchUsersCommand` dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchUsersInput {
    pub query: UsersQuery,
}

impl State for FetchUsersInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

/// Dispatch via `ctx.dispatch::<FetchUsersCommand>()` after setting `FetchUsersInput`.
#[derive(Debug, Default)]
pub struct FetchUsersCommand;

impl Command for FetchUsersCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        let (query, endpoint) = match (
            snap.try_state::<FetchUsersInput>(),
            snap.try_state::<BusinessConfig>(),
        ) {
            (Ok(input), Ok(config)) => (input.query.clone(), config.users_endpoint()),
            (Err(err), _) | (_, Err(err)) => {
                error!("FetchUsersCommand: {err}");
                return Box::pin(async {});
            }
        };

        Box::pin(async move {
            info!(
                "FetchUsersCommand: fetching page {} size {}",
                query.effective_page(),
                query.effective_size()
            );

            match api::list_users(endpoint.as_str(), &query).await {
                Ok(users) => {
                    info!("FetchUsersCommand: fetched {} users", users.len());
                    updater.update::<UsersViewState>(move |view| view.apply_batch(users, &query));
                }
                Err(err) => {
                    error!("FetchUsersCommand: {err}");
                }
            }
        })
    }
}
