//! Failed fetches leave the table untouched and leave an error in the log.

mod common;

use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use common::{settle_for, settle_until, users_body};
use log::{Level, LevelFilter, Log, Metadata, Record};
use peoplegrid_business::{
    BusinessConfig, StaleResponsePolicy, TableAction, UsersViewState, apply_action,
    register_users_table,
};
use peoplegrid_states::StateCtx;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct CaptureLogger {
    errors: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Error
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut errors) = self.errors.lock() {
                errors.push(record.args().to_string());
            }
        }
    }

    fn flush(&self) {}
}

fn logger() -> &'static CaptureLogger {
    static LOGGER: OnceLock<CaptureLogger> = OnceLock::new();
    let logger = LOGGER.get_or_init(|| CaptureLogger {
        errors: Mutex::new(Vec::new()),
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(LevelFilter::Error);
    }
    logger
}

fn logged_error_containing(needle: &str) -> bool {
    logger()
        .errors
        .lock()
        .map(|errors| errors.iter().any(|line| line.contains(needle)))
        .unwrap_or(false)
}

fn ctx_with_base(base_url: impl Into<String>) -> StateCtx {
    logger();
    let mut ctx = StateCtx::new();
    ctx.add_state(BusinessConfig::new(base_url).with_stale_responses(StaleResponsePolicy::Apply));
    register_users_table(&mut ctx);
    ctx
}

#[tokio::test]
async fn server_error_keeps_previous_batch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("page", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_body("kept", 10)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let mut ctx = ctx_with_base(server.uri());
    apply_action(&mut ctx, TableAction::Mount).expect("registered");
    assert!(settle_until(&mut ctx, |ctx| ctx.state::<UsersViewState>().users.len() == 10).await);

    apply_action(&mut ctx, TableAction::ChangePage(1)).expect("registered");
    settle_for(&mut ctx, Duration::from_millis(300)).await;

    let view = ctx.state::<UsersViewState>();
    assert_eq!(view.users.len(), 10);
    assert_eq!(view.users[0].username, "kept0");
    // The optimistic page change stays; nothing rolls it back.
    assert_eq!(view.page, 1);
    assert!(logged_error_containing("status: 500"));
}

#[tokio::test]
async fn undecodable_body_is_logged_and_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let mut ctx = ctx_with_base(server.uri());
    apply_action(&mut ctx, TableAction::Mount).expect("registered");
    settle_for(&mut ctx, Duration::from_millis(300)).await;

    assert!(ctx.state::<UsersViewState>().users.is_empty());
    assert!(logged_error_containing("failed to decode users response"));
}

#[tokio::test]
async fn unreachable_host_is_logged_and_ignored() {
    // Nothing listens on the discard port.
    let mut ctx = ctx_with_base("http://127.0.0.1:9");
    apply_action(&mut ctx, TableAction::Search).expect("registered");
    settle_for(&mut ctx, Duration::from_millis(500)).await;

    let view = ctx.state::<UsersViewState>();
    assert!(view.users.is_empty());
    assert_eq!(view.page, 0);
    assert!(logged_error_containing("HTTP error"));
}
