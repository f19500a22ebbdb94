//! Application state and core logic

use crate::acceptor::{resolve_endpoint, AcceptorClient, AcceptorClientTrait, SubmissionOutcome};
use crate::config::StoreConfig;
use crate::state::{AppState, Form, FormStatus, SubmitPhase, SuccessBanner, View};
use crate::validate::{apply_validation, validate_form};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Furthest a section can be scrolled
const MAX_SCROLL: u16 = 40;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the form acceptor
    acceptor: Box<dyn AcceptorClientTrait>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new() -> Result<Self> {
        let config = StoreConfig::load()?;
        let endpoint = resolve_endpoint(&config);
        tracing::info!("form acceptor endpoint: {endpoint}");
        Ok(Self::with_acceptor(Box::new(AcceptorClient::new(endpoint))))
    }

    /// Create an App with an explicit acceptor client (used by tests)
    pub fn with_acceptor(acceptor: Box<dyn AcceptorClientTrait>) -> Self {
        Self {
            state: AppState::default(),
            acceptor,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Per-tick housekeeping: drop the success banner once it expires
    pub fn update(&mut self) {
        if let Some(ref banner) = self.state.success_banner {
            if banner.is_expired() {
                self.state.success_banner = None;
            }
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.state.nav_menu_open {
            self.handle_menu_key(key);
            return Ok(());
        }

        match self.state.current_view {
            View::Contact => self.handle_contact_key(key).await,
            View::Plans => self.handle_plans_key(key),
            View::Home | View::Services => self.handle_browse_key(key),
        }
        Ok(())
    }

    /// Keys while the nav menu overlay is open. Any key that is not
    /// navigation closes it, like a click outside the menu.
    fn handle_menu_key(&mut self, key: KeyEvent) {
        let entries = View::all();
        match key.code {
            KeyCode::Up => {
                if self.state.nav_menu_index == 0 {
                    self.state.nav_menu_index = entries.len() - 1;
                } else {
                    self.state.nav_menu_index -= 1;
                }
            }
            KeyCode::Down => {
                self.state.nav_menu_index = (self.state.nav_menu_index + 1) % entries.len();
            }
            KeyCode::Enter => {
                self.state.navigate(entries[self.state.nav_menu_index]);
            }
            _ => {
                self.state.nav_menu_open = false;
            }
        }
    }

    /// Keys in the read-only sections (Home, Services)
    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('m') => self.open_menu(),
            KeyCode::Char(c) => self.navigate_by_shortcut(c),
            KeyCode::Up => {
                self.state.scroll_offset = self.state.scroll_offset.saturating_sub(1);
            }
            KeyCode::Down => {
                self.state.scroll_offset = (self.state.scroll_offset + 1).min(MAX_SCROLL);
            }
            KeyCode::PageUp => {
                self.state.scroll_offset = self.state.scroll_offset.saturating_sub(10);
            }
            KeyCode::PageDown => {
                self.state.scroll_offset = (self.state.scroll_offset + 10).min(MAX_SCROLL);
            }
            _ => {}
        }
    }

    /// Keys in the Plans view: tab switching plus plan card selection
    fn handle_plans_key(&mut self, key: KeyEvent) {
        let plans = crate::state::plans_for_tier(self.state.active_tier);
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('m') => self.open_menu(),
            KeyCode::Left => {
                let tier = self.state.active_tier.prev();
                self.state.activate_tier(tier);
            }
            KeyCode::Right | KeyCode::Tab => {
                let tier = self.state.active_tier.next();
                self.state.activate_tier(tier);
            }
            KeyCode::Up => {
                self.state.selected_plan = self.state.selected_plan.saturating_sub(1);
            }
            KeyCode::Down => {
                self.state.selected_plan = (self.state.selected_plan + 1).min(plans.len() - 1);
            }
            KeyCode::Enter => {
                // Picking a plan pre-fills the contact form
                if let Some(plan) = plans.get(self.state.selected_plan) {
                    self.state.contact_form.prefill_for_plan(plan.name);
                    self.state.navigate(View::Contact);
                }
            }
            KeyCode::Char(c) => self.navigate_by_shortcut(c),
            _ => {}
        }
    }

    /// Keys in the Contact view: field editing and submission
    async fn handle_contact_key(&mut self, key: KeyEvent) {
        let on_select = self.state.contact_form.active_field_index == 3;
        match key.code {
            KeyCode::Tab => self.leave_field_forward(),
            KeyCode::BackTab => self.leave_field_backward(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_contact().await;
            }
            KeyCode::Esc => self.open_menu(),
            KeyCode::Up if on_select => {
                self.state.contact_form.prev_service();
                self.state.contact_form.service.clear_error();
            }
            KeyCode::Down if on_select => {
                self.state.contact_form.next_service();
                self.state.contact_form.service.clear_error();
            }
            KeyCode::Enter if on_select => {
                self.state.contact_form.next_service();
                self.state.contact_form.service.clear_error();
            }
            KeyCode::Enter => {
                if self.state.contact_form.get_active_field_mut().is_multiline() {
                    self.form_input('\n');
                }
            }
            KeyCode::Char(c)
                if !on_select && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.form_input(c)
            }
            KeyCode::Backspace if !on_select => {
                let field = self.state.contact_form.get_active_field_mut();
                field.pop_char();
                field.clear_error();
            }
            _ => {}
        }
    }

    fn open_menu(&mut self) {
        self.state.nav_menu_open = true;
        self.state.nav_menu_index = View::all()
            .iter()
            .position(|v| *v == self.state.current_view)
            .unwrap_or(0);
    }

    fn navigate_by_shortcut(&mut self, c: char) {
        if let Some(view) = View::all().iter().find(|v| v.shortcut() == c) {
            self.state.navigate(*view);
        }
    }

    /// Type into the active field. Input clears the field's annotation,
    /// mirroring re-validation on the next field-leave.
    fn form_input(&mut self, c: char) {
        self.state.success_banner = None;
        let field = self.state.contact_form.get_active_field_mut();
        field.push_char(c);
        field.clear_error();
    }

    /// Move focus forward, validating the field being left
    fn leave_field_forward(&mut self) {
        apply_validation(self.state.contact_form.get_active_field_mut());
        self.state.contact_form.next_field();
    }

    /// Move focus backward, validating the field being left
    fn leave_field_backward(&mut self) {
        apply_validation(self.state.contact_form.get_active_field_mut());
        self.state.contact_form.prev_field();
    }

    /// Run one submission episode of the workflow.
    ///
    /// Idle -> Submitting is guarded twice: a submit while one is already
    /// in flight is rejected outright, and a form that fails validation
    /// never leaves Idle. Exactly one outbound request per episode.
    pub async fn submit_contact(&mut self) {
        if self.state.submit_phase == SubmitPhase::Submitting {
            tracing::debug!("submit ignored: one already in flight");
            return;
        }

        // Replace any status left over from a prior attempt
        self.state.form_status = FormStatus::None;
        self.state.success_banner = None;

        if !validate_form(&mut self.state.contact_form) {
            return;
        }

        self.state.submit_phase = SubmitPhase::Submitting;
        self.state.form_status = FormStatus::Sending;

        let submission = self.state.contact_form.to_submission();
        let outcome = self.acceptor.submit(&submission).await;

        match outcome {
            SubmissionOutcome::Accepted => {
                tracing::info!("submission accepted");
                self.state.form_status = FormStatus::Sent;
                self.state.contact_form.clear_values();
                self.state.success_banner = Some(SuccessBanner::new());
            }
            SubmissionOutcome::Rejected { status } => {
                tracing::warn!("submission rejected with status {status}");
                self.state.form_status = FormStatus::Rejected;
            }
            SubmissionOutcome::Failed { reason } => {
                tracing::warn!("submission failed: {reason}");
                self.state.form_status = FormStatus::Failed;
            }
        }

        self.state.submit_phase = SubmitPhase::Idle;
    }
}
