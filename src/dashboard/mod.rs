//! Role-specific dashboards.
//!
//! Which variant renders is decided once, from the session role, when the
//! dashboard is created. Each variant owns its own listings; nothing is
//! shared between them or persisted.

pub mod catalog;
pub mod saved;

use crate::auth::Role;
use catalog::{Decision, Product, Proposal, StatCard};
use saved::SavedProducts;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Overview,
    Products,
    Proposals,
    Analytics,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 4] = [
        DashboardTab::Overview,
        DashboardTab::Products,
        DashboardTab::Proposals,
        DashboardTab::Analytics,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Products => "Products",
            DashboardTab::Proposals => "Proposals",
            DashboardTab::Analytics => "Analytics",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone)]
pub struct AdvertiserView {
    pub stats: Vec<StatCard>,
    pub proposals: Vec<Proposal>,
}

#[derive(Debug, Clone)]
pub struct DeveloperView {
    pub stats: Vec<StatCard>,
    pub products: Vec<Product>,
    pub proposals: Vec<Proposal>,
    pub saved: SavedProducts,
}

#[derive(Debug, Clone)]
pub enum DashboardView {
    Advertiser(AdvertiserView),
    Developer(DeveloperView),
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    view: DashboardView,
    tab: DashboardTab,
    selected: usize,
}

impl Dashboard {
    pub fn new(role: Role) -> Self {
        let view = match role {
            Role::Advertiser => DashboardView::Advertiser(AdvertiserView {
                stats: catalog::advertiser_stats(),
                proposals: catalog::recent_proposals(),
            }),
            Role::Developer => DashboardView::Developer(DeveloperView {
                stats: catalog::developer_stats(),
                products: catalog::recent_products(),
                proposals: catalog::recent_proposals(),
                saved: SavedProducts::new(),
            }),
        };
        Self {
            view,
            tab: DashboardTab::Overview,
            selected: 0,
        }
    }

    pub fn role(&self) -> Role {
        match self.view {
            DashboardView::Advertiser(_) => Role::Advertiser,
            DashboardView::Developer(_) => Role::Developer,
        }
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn tab(&self) -> DashboardTab {
        self.tab
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn next_tab(&mut self) {
        let idx = (self.tab.index() + 1) % DashboardTab::ALL.len();
        self.tab = DashboardTab::ALL[idx];
        self.selected = 0;
    }

    pub fn prev_tab(&mut self) {
        let len = DashboardTab::ALL.len();
        let idx = (self.tab.index() + len - 1) % len;
        self.tab = DashboardTab::ALL[idx];
        self.selected = 0;
    }

    /// Number of rows the cursor can move over on the current tab.
    fn selectable_len(&self) -> usize {
        if self.tab != DashboardTab::Overview {
            return 0;
        }
        match &self.view {
            DashboardView::Advertiser(v) => v.proposals.len(),
            DashboardView::Developer(v) => v.products.len(),
        }
    }

    pub fn select_next(&mut self) {
        let len = self.selectable_len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Approve or reject the highlighted proposal (advertiser overview only).
    /// Returns the proposal id when its status changed.
    pub fn decide_selected(&mut self, decision: Decision) -> Option<String> {
        if self.tab != DashboardTab::Overview {
            return None;
        }
        let DashboardView::Advertiser(view) = &mut self.view else {
            return None;
        };
        let proposal = view.proposals.get_mut(self.selected)?;
        if !proposal.decide(decision) {
            return None;
        }
        info!(proposal = %proposal.id, status = proposal.status.label(), "proposal decided");
        Some(proposal.id.clone())
    }

    /// Save or unsave the highlighted product (developer overview only).
    /// Returns the product id and its new saved state.
    pub fn toggle_save_selected(&mut self) -> Option<(String, bool)> {
        if self.tab != DashboardTab::Overview {
            return None;
        }
        let DashboardView::Developer(view) = &mut self.view else {
            return None;
        };
        let id = view.products.get(self.selected)?.id.clone();
        let saved = view.saved.toggle(&id);
        info!(product = %id, saved, "product save toggled");
        Some((id, saved))
    }

    /// Label of the role's primary create action.
    pub fn new_item_label(&self) -> &'static str {
        match self.role() {
            Role::Advertiser => "New Product",
            Role::Developer => "New Proposal",
        }
    }

    pub fn tab_description(&self) -> &'static str {
        match (self.tab, self.role()) {
            (DashboardTab::Overview, _) => "Welcome back! Here's what's happening.",
            (DashboardTab::Products, Role::Advertiser) => {
                "Manage your products available for integration."
            }
            (DashboardTab::Products, Role::Developer) => {
                "Browse products available for integration in your games."
            }
            (DashboardTab::Proposals, Role::Advertiser) => {
                "Review and manage proposals from game developers."
            }
            (DashboardTab::Proposals, Role::Developer) => {
                "Manage your submitted proposals to advertisers."
            }
            (DashboardTab::Analytics, _) => "View performance metrics and insights.",
        }
    }
}
