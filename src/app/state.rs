use crossterm::event::KeyCode;
use tracing::{debug, info, warn};

use crate::color::{ColorSampler, ColorSource};
use crate::palette::{Palette, SLOT_COUNT};

use super::{AppEvent, slot_for_key};

const QUIT_MESSAGE: &str = "Are you sure you want to quit?";

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub palette: Palette,
    sampler: Box<dyn ColorSource>,
    pub selected: usize,
    pub show_help: bool,
    pub confirm_quit: Option<ConfirmPopup>,
    pub status: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmPopup {
    pub message: String,
}

impl App {
    pub fn new(seed: Option<u64>) -> Self {
        let sampler = match seed {
            Some(seed) => ColorSampler::from_seed(seed),
            None => ColorSampler::from_entropy(),
        };
        Self::with_source(Box::new(sampler))
    }

    pub fn with_source(mut sampler: Box<dyn ColorSource>) -> Self {
        let palette = Palette::new(&mut sampler);
        Self {
            running: true,
            palette,
            sampler,
            selected: 0,
            show_help: false,
            confirm_quit: None,
            status: None,
        }
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => {}
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.confirm_quit.is_some() {
            self.handle_confirm_key(key);
            return;
        }
        if self.show_help {
            if matches!(key, KeyCode::Char('?') | KeyCode::Esc) {
                self.show_help = false;
            }
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.confirm_quit = Some(ConfirmPopup {
                    message: QUIT_MESSAGE.to_string(),
                });
            }
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('g') | KeyCode::Enter => self.regenerate(),
            KeyCode::Char(' ') => self.toggle_lock(self.selected),
            KeyCode::Left | KeyCode::Char('h') => self.move_selection_left(),
            KeyCode::Right | KeyCode::Char('l') => self.move_selection_right(),
            KeyCode::Char(c) => {
                if let Some(index) = slot_for_key(c) {
                    self.selected = index;
                    self.toggle_lock(index);
                }
            }
            _ => {}
        }
    }

    fn handle_confirm_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                info!("quit confirmed");
                self.confirm_quit = None;
                self.running = false;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.confirm_quit = None;
            }
            _ => {}
        }
    }

    fn toggle_lock(&mut self, index: usize) {
        match self.palette.toggle_lock(index) {
            Ok(locked) => {
                debug!(slot = index, locked, "toggled lock");
                let verb = if locked { "locked" } else { "unlocked" };
                self.status = Some(format!("Slot {} {verb}", index + 1));
            }
            Err(err) => {
                warn!(%err, "rejected lock toggle");
                self.status = Some(err.to_string());
            }
        }
    }

    fn regenerate(&mut self) {
        let replaced = self.palette.regenerate(&mut self.sampler);
        info!(replaced, locked = self.palette.locked_count(), "regenerated palette");
        self.status = Some(match replaced {
            0 => "All slots locked, nothing to generate".to_string(),
            1 => "Generated 1 new color".to_string(),
            n => format!("Generated {n} new colors"),
        });
    }

    fn move_selection_left(&mut self) {
        if self.selected == 0 {
            self.selected = SLOT_COUNT - 1;
        } else {
            self.selected -= 1;
        }
    }

    fn move_selection_right(&mut self) {
        self.selected = (self.selected + 1) % SLOT_COUNT;
    }
}
