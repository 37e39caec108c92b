#![allow(dead_code)]

use std::time::Duration;

use egui_kittest::Harness;
use peoplegrid_business::UsersViewState;
use peoplegrid_ui::PeopleGridApp;
use peoplegrid_ui::state::State;
use wiremock::MockServer;

/// Time given to the mock server between frames.
pub const API_RESPONSE_WAIT_MS: u64 = 20;

pub struct TestCtx<'a> {
    /// Mock server must be retained to keep HTTP endpoints alive during tests.
    pub mock_server: MockServer,
    harness: Harness<'a, PeopleGridApp>,
}

impl<'a> TestCtx<'a> {
    /// Builds the app against `mock_server`. Mount the mocks before calling this: the first
    /// frame already fetches.
    pub fn new(mock_server: MockServer) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let state = State::test(mock_server.uri());
        let app = PeopleGridApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, PeopleGridApp> {
        &mut self.harness
    }

    pub fn view(&self) -> &UsersViewState {
        self.harness.state().state().ctx.state::<UsersViewState>()
    }

    /// Steps frames until `done` holds for the view state.
    pub async fn wait_for(&mut self, max_frames: usize, done: impl Fn(&UsersViewState) -> bool) {
        for _ in 0..max_frames {
            self.harness.step();
            tokio::time::sleep(Duration::from_millis(API_RESPONSE_WAIT_MS)).await;
            if done(self.view()) {
                // One more frame so widgets reflect the new state.
                self.harness.step();
                return;
            }
        }
        panic!("Timed out waiting for users view state: {:?}", self.view());
    }

    /// Steps frames for a while without expecting anything in particular.
    pub async fn settle(&mut self, frames: usize) {
        for _ in 0..frames {
            self.harness.step();
            tokio::time::sleep(Duration::from_millis(API_RESPONSE_WAIT_MS)).await;
        }
    }
}

/// A randomuser-shaped body with `count` records named `{prefix}{i}`.
pub fn users_body(prefix: &str, count: usize) -> serde_json::Value {
    let results: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "gender": if i % 2 == 0 { "female" } else { "male" },
                "name": { "first": format!("{prefix}First{i}"), "last": format!("Last{i}") },
                "email": format!("{prefix}{i}@example.com"),
                "login": { "username": format!("{prefix}{i}") },
                "registered": { "date": "2007-07-09T05:51:59.390Z" }
            })
        })
        .collect();
    serde_json::json!({ "results": results })
}
