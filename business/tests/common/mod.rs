#![allow(dead_code)]

use std::time::Duration;

use peoplegrid_business::{BusinessConfig, StaleResponsePolicy, register_users_table};
use peoplegrid_states::StateCtx;
use wiremock::MockServer;

/// A randomuser-shaped body with `count` records named `{prefix}{i}`.
pub fn users_body(prefix: &str, count: usize) -> serde_json::Value {
    let results: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "gender": if i % 2 == 0 { "female" } else { "male" },
                "name": { "title": "Mx", "first": format!("{prefix}First{i}"), "last": format!("Last{i}") },
                "email": format!("{prefix}{i}@example.com"),
                "login": { "uuid": format!("uuid-{i}"), "username": format!("{prefix}{i}") },
                "registered": { "date": "2012-03-04T10:00:00.000Z", "age": 10 }
            })
        })
        .collect();
    serde_json::json!({ "results": results, "info": { "results": count, "page": 1 } })
}

pub fn ctx_for(server: &MockServer, policy: StaleResponsePolicy) -> StateCtx {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut ctx = StateCtx::new();
    ctx.add_state(BusinessConfig::new(server.uri()).with_stale_responses(policy));
    register_users_table(&mut ctx);
    ctx
}

/// Syncs every 20ms until `done` holds. Returns whether it did within ~2s.
pub async fn settle_until(ctx: &mut StateCtx, mut done: impl FnMut(&StateCtx) -> bool) -> bool {
    for _ in 0..100 {
        tokio::time::sleep(Duration::from_millis(20)).await;
        ctx.sync_states();
        if done(ctx) {
            return true;
        }
    }
    false
}

/// Syncs repeatedly for `duration`.
pub async fn settle_for(ctx: &mut StateCtx, duration: Duration) {
    let steps = (duration.as_millis() / 20).max(1);
    for _ in 0..steps {
        tokio::time::sleep(Duration::from_millis(20)).await;
        ctx.sync_states();
    }
}
