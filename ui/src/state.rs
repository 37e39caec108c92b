use peoplegrid_business::{BusinessConfig, register_users_table};
use peoplegrid_states::StateCtx;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(config);
        register_users_table(&mut ctx);

        Self { ctx }
    }

    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(base_url))
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}
