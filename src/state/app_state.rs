//! Application state definitions

use super::forms::ContactForm;
use std::time::{Duration, Instant};

/// Scroll depth at which the nav bar switches to its condensed styling
pub const NAV_SCROLL_THRESHOLD: u16 = 4;

/// How long the success banner stays on screen
const SUCCESS_BANNER_TTL: Duration = Duration::from_secs(5);

/// Current view in the application, one per page section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Services,
    Plans,
    Contact,
}

impl View {
    /// All views in nav bar order
    pub fn all() -> [View; 4] {
        [View::Home, View::Services, View::Plans, View::Contact]
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Services => "Services",
            View::Plans => "Plans",
            View::Contact => "Contact",
        }
    }

    /// Nav shortcut key shown next to the label
    pub fn shortcut(&self) -> char {
        match self {
            View::Home => '1',
            View::Services => '2',
            View::Plans => '3',
            View::Contact => '4',
        }
    }
}

/// Pricing plan tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanTier {
    #[default]
    Residential,
    Business,
    Enterprise,
}

impl PlanTier {
    pub fn all() -> [PlanTier; 3] {
        [
            PlanTier::Residential,
            PlanTier::Business,
            PlanTier::Enterprise,
        ]
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Residential => Self::Business,
            Self::Business => Self::Enterprise,
            Self::Enterprise => Self::Residential,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Residential => Self::Enterprise,
            Self::Business => Self::Residential,
            Self::Enterprise => Self::Business,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Business => "Business",
            Self::Enterprise => "Enterprise",
        }
    }
}

/// One pricing plan card
#[derive(Debug, Clone, Copy)]
pub struct Plan {
    pub name: &'static str,
    pub speed: &'static str,
    pub price: &'static str,
}

/// Plans shown in the panel for a tier
pub fn plans_for_tier(tier: PlanTier) -> &'static [Plan] {
    match tier {
        PlanTier::Residential => &[
            Plan {
                name: "Fiber 300",
                speed: "300 Mbps",
                price: "$25/mo",
            },
            Plan {
                name: "Fiber 600",
                speed: "600 Mbps",
                price: "$35/mo",
            },
            Plan {
                name: "Fiber 1000",
                speed: "1 Gbps",
                price: "$50/mo",
            },
        ],
        PlanTier::Business => &[
            Plan {
                name: "Office 600",
                speed: "600 Mbps",
                price: "$60/mo",
            },
            Plan {
                name: "Office 1000",
                speed: "1 Gbps",
                price: "$85/mo",
            },
        ],
        PlanTier::Enterprise => &[
            Plan {
                name: "Dedicated 1G",
                speed: "1 Gbps symmetric",
                price: "quote",
            },
            Plan {
                name: "Dedicated 10G",
                speed: "10 Gbps symmetric",
                price: "quote",
            },
        ],
    }
}

/// Submission workflow phase; the terminal branches land back in Idle
/// with a [`FormStatus`] describing what happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Status shown in the form response region. At most one at a time;
/// setting a new one replaces the previous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    None,
    Sending,
    Sent,
    Rejected,
    Failed,
}

impl FormStatus {
    pub fn message(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Sending => "Sending message...",
            Self::Sent => "Message sent! We'll be in touch with you soon.",
            Self::Rejected => "Something went wrong, please try again.",
            Self::Failed => "Connection error.",
        }
    }
}

/// Transient success banner shown above the form after acceptance
#[derive(Debug, Clone, Copy)]
pub struct SuccessBanner {
    shown_at: Instant,
}

impl SuccessBanner {
    pub fn new() -> Self {
        Self {
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= SUCCESS_BANNER_TTL
    }
}

impl Default for SuccessBanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Current view
    pub current_view: View,
    /// Whether the compact nav menu overlay is open
    pub nav_menu_open: bool,
    /// Highlighted entry in the nav menu overlay
    pub nav_menu_index: usize,
    /// Vertical scroll offset of the current view's content
    pub scroll_offset: u16,
    /// Active pricing tab
    pub active_tier: PlanTier,
    /// Highlighted plan card within the active tab
    pub selected_plan: usize,
    /// Contact form state
    pub contact_form: ContactForm,
    /// Submission workflow phase
    pub submit_phase: SubmitPhase,
    /// Status shown in the form response region
    pub form_status: FormStatus,
    /// Transient success banner, cleared once expired
    pub success_banner: Option<SuccessBanner>,
}

impl AppState {
    /// Switch views, closing the nav menu and resetting scroll
    pub fn navigate(&mut self, view: View) {
        self.current_view = view;
        self.nav_menu_open = false;
        self.scroll_offset = 0;
        if view == View::Plans {
            self.selected_plan = 0;
        }
    }

    /// Whether the nav bar should render in its condensed "scrolled" style
    pub fn navbar_scrolled(&self) -> bool {
        self.scroll_offset > NAV_SCROLL_THRESHOLD
    }

    /// Switch the pricing tab; exactly one tab and panel stay active
    pub fn activate_tier(&mut self, tier: PlanTier) {
        self.active_tier = tier;
        self.selected_plan = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_home() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Home);
        assert_eq!(state.submit_phase, SubmitPhase::Idle);
        assert_eq!(state.form_status, FormStatus::None);
    }

    #[test]
    fn test_navigate_closes_menu_and_resets_scroll() {
        let mut state = AppState {
            nav_menu_open: true,
            scroll_offset: 12,
            ..Default::default()
        };
        state.navigate(View::Contact);
        assert_eq!(state.current_view, View::Contact);
        assert!(!state.nav_menu_open);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_navbar_scrolled_threshold() {
        let mut state = AppState::default();
        assert!(!state.navbar_scrolled());
        state.scroll_offset = NAV_SCROLL_THRESHOLD;
        assert!(!state.navbar_scrolled());
        state.scroll_offset = NAV_SCROLL_THRESHOLD + 1;
        assert!(state.navbar_scrolled());
    }

    #[test]
    fn test_activate_tier_is_exclusive() {
        let mut state = AppState::default();
        state.selected_plan = 2;
        state.activate_tier(PlanTier::Business);
        assert_eq!(state.active_tier, PlanTier::Business);
        assert_eq!(state.selected_plan, 0);
        // Exactly one tier is active by construction
        let active: Vec<_> = PlanTier::all()
            .into_iter()
            .filter(|t| *t == state.active_tier)
            .collect();
        assert_eq!(active.len(), 1);
    }

    #[test]
    fn test_tier_cycle_round_trips() {
        for tier in PlanTier::all() {
            assert_eq!(tier.next().prev(), tier);
        }
    }

    #[test]
    fn test_every_tier_has_plans() {
        for tier in PlanTier::all() {
            assert!(!plans_for_tier(tier).is_empty());
        }
    }

    #[test]
    fn test_fresh_success_banner_is_not_expired() {
        let banner = SuccessBanner::new();
        assert!(!banner.is_expired());
    }

    #[test]
    fn test_form_status_messages_are_distinct() {
        let statuses = [
            FormStatus::Sending,
            FormStatus::Sent,
            FormStatus::Rejected,
            FormStatus::Failed,
        ];
        for (i, a) in statuses.iter().enumerate() {
            for b in &statuses[i + 1..] {
                assert_ne!(a.message(), b.message());
            }
        }
    }
}
