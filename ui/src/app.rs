use log::error;
use peoplegrid_business::{TableAction, apply_action};

use crate::{state::State, widgets};

pub struct PeopleGridApp {
    state: State,
    mounted: bool,
}

impl PeopleGridApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            mounted: false,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    fn dispatch(&mut self, action: TableAction) {
        if let Err(err) = apply_action(&mut self.state.ctx, action) {
            error!("Failed to apply table action: {err}");
        }
    }
}

impl eframe::App for PeopleGridApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.mounted {
            self.mounted = true;
            let repaint = ctx.clone();
            self.state
                .ctx
                .set_repaint_hook(move || repaint.request_repaint());
            self.dispatch(TableAction::Mount);
        }

        // Apply finished fetches before rendering
        self.state.ctx.sync_states();

        let mut actions = Vec::new();

        egui::TopBottomPanel::top("toolbar_panel").show(ctx, |ui| {
            widgets::users_toolbar(&self.state.ctx, ui, &mut actions);
        });

        egui::TopBottomPanel::bottom("pagination_panel").show(ctx, |ui| {
            widgets::users_pagination(&self.state.ctx, ui, &mut actions);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::users_table(&self.state.ctx, ui, &mut actions);
        });

        for action in actions {
            self.dispatch(action);
        }
    }
}
