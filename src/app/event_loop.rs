use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::announce::{LiveRegionProvider, MonotonicClock};
use crate::app::{App, Message, Model, sample_notes, update};
use crate::gesture::PullToRefresh;

/// How long the simulated reload takes.
const REFRESH_DURATION_MS: u64 = 700;
/// Spinner frame interval while refreshing.
const SPINNER_INTERVAL_MS: u64 = 120;

pub(super) struct ResizeDebouncer {
    delay_ms: u64,
    pending: Option<(u16, u16, u64)>,
}

impl ResizeDebouncer {
    pub(super) const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub(super) const fn queue(&mut self, width: u16, height: u16, now_ms: u64) {
        self.pending = Some((width, height, now_ms));
    }

    pub(super) fn take_ready(&mut self, now_ms: u64) -> Option<(u16, u16)> {
        let (width, height, queued_at) = self.pending?;
        if now_ms.saturating_sub(queued_at) >= self.delay_ms {
            self.pending = None;
            Some((width, height))
        } else {
            None
        }
    }

    pub(super) const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Fires once, `delay_ms` after the refresh was queued.
pub(super) struct RefreshTimer {
    delay_ms: u64,
    started_at: Option<u64>,
}

impl RefreshTimer {
    pub(super) const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            started_at: None,
        }
    }

    pub(super) const fn queue(&mut self, now_ms: u64) {
        self.started_at = Some(now_ms);
    }

    pub(super) fn take_ready(&mut self, now_ms: u64) -> bool {
        let Some(started_at) = self.started_at else {
            return false;
        };
        if now_ms.saturating_sub(started_at) >= self.delay_ms {
            self.started_at = None;
            true
        } else {
            false
        }
    }

    pub(super) const fn cancel(&mut self) {
        self.started_at = None;
    }

    pub(super) const fn is_pending(&self) -> bool {
        self.started_at.is_some()
    }
}

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or the event loop
    /// encounters an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal; hark requires an interactive terminal")?;
        let size = terminal.size()?;

        let start = Instant::now();
        let provider = LiveRegionProvider::with_clock(
            self.announcer_config,
            MonotonicClock::from_epoch(start),
        );

        let mut model = Model::new(
            sample_notes(self.note_count, 0),
            (size.width, size.height),
        )
        .with_announcer(provider.announcer())
        .with_pull(PullToRefresh::new(self.pull_threshold));
        model.virtualize_threshold = self.virtualize_threshold;
        model.show_regions = self.show_regions;
        model
            .config_global_path
            .clone_from(&self.config_global_path);
        model.config_local_path.clone_from(&self.config_local_path);

        tracing::debug!(
            notes = model.notes.len(),
            virtualized = model.is_virtualized(),
            config = ?provider.config(),
            "starting"
        );
        model.announcer.announce_loaded("Notes");

        execute!(stdout(), EnableMouseCapture)?;
        let result = Self::event_loop(&mut terminal, &mut model, &provider, start);

        // Restore terminal
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();

        result
    }

    fn dispatch(
        model: &mut Model,
        msg: Message,
        refresh_timer: &mut RefreshTimer,
        now_ms: u64,
    ) {
        tracing::trace!(?msg, "message");
        let side_msg = msg.clone();
        *model = update(std::mem::take(model), msg);
        Self::handle_message_side_effects(model, refresh_timer, &side_msg, now_ms);
    }

    fn event_loop(
        terminal: &mut DefaultTerminal,
        model: &mut Model,
        provider: &LiveRegionProvider,
        start: Instant,
    ) -> Result<()> {
        let elapsed_ms = || u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        let mut resize_debouncer = ResizeDebouncer::new(100);
        let mut refresh_timer = RefreshTimer::new(REFRESH_DURATION_MS);
        let mut last_spin_ms = 0_u64;
        let mut needs_render = true;
        // Region write count as of the last frame drawn.
        let mut drawn_writes = u64::MAX;

        loop {
            if provider.poll() {
                needs_render = true;
            }

            let now_ms = elapsed_ms();

            if let Some((width, height)) = resize_debouncer.take_ready(now_ms) {
                tracing::debug!(width, height, "resize applied");
                Self::dispatch(
                    model,
                    Message::Resize(width, height),
                    &mut refresh_timer,
                    now_ms,
                );
                needs_render = true;
            }

            if refresh_timer.take_ready(now_ms) {
                Self::dispatch(model, Message::RefreshComplete, &mut refresh_timer, now_ms);
                needs_render = true;
            }

            if model.pull.is_refreshing() && now_ms.saturating_sub(last_spin_ms) >= SPINNER_INTERVAL_MS
            {
                last_spin_ms = now_ms;
                Self::dispatch(model, Message::Tick, &mut refresh_timer, now_ms);
                needs_render = true;
            }

            let poll_ms = if needs_render {
                0
            } else {
                let mut wait = 250_u64;
                if resize_debouncer.is_pending() {
                    wait = wait.min(10);
                }
                if model.pull.is_refreshing() {
                    wait = wait.min(SPINNER_INTERVAL_MS);
                }
                if let Some(until_clear) = provider.time_until_clear() {
                    let until_clear = u64::try_from(until_clear.as_millis()).unwrap_or(u64::MAX);
                    wait = wait.min(until_clear);
                }
                wait
            };

            if event::poll(Duration::from_millis(poll_ms))? {
                // Refresh timestamp after poll wait so timers use accurate times.
                let event_ms = elapsed_ms();
                let msg = Self::handle_event(&event::read()?, model, event_ms, &mut resize_debouncer);
                if let Some(msg) = msg {
                    Self::dispatch(model, msg, &mut refresh_timer, event_ms);
                    needs_render = true;
                }

                // Coalesce key repeat bursts into a single render.
                while event::poll(Duration::from_millis(0))? {
                    let drain_ms = elapsed_ms();
                    let msg =
                        Self::handle_event(&event::read()?, model, drain_ms, &mut resize_debouncer);
                    if let Some(msg) = msg {
                        Self::dispatch(model, msg, &mut refresh_timer, drain_ms);
                        needs_render = true;
                    }
                }
            }

            let regions = provider.snapshot();
            if regions.writes != drawn_writes {
                needs_render = true;
            }

            if needs_render {
                terminal.draw(|frame| crate::ui::render(model, &regions, frame))?;
                drawn_writes = regions.writes;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }
}
