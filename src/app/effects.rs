use crate::app::{App, Message, Model};

use super::event_loop::RefreshTimer;

impl App {
    /// Work that happens outside `update`: scheduling the simulated reload.
    pub(super) fn handle_message_side_effects(
        model: &Model,
        refresh_timer: &mut RefreshTimer,
        msg: &Message,
        now_ms: u64,
    ) {
        match msg {
            Message::Refresh | Message::PullEnd => {
                if model.pull.is_refreshing() && !refresh_timer.is_pending() {
                    tracing::info!(notes = model.notes.len(), "refresh started");
                    refresh_timer.queue(now_ms);
                }
            }
            Message::RefreshComplete => {
                refresh_timer.cancel();
                tracing::info!(generation = model.generation, "refresh complete");
            }
            Message::SimulateSaveError => {
                tracing::warn!("simulated save failure");
            }
            Message::Quit => {
                refresh_timer.cancel();
            }
            _ => {}
        }
    }
}
