//! Marketplace records shown on the dashboards, and the built-in listings.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ProposalStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProposalStatus::Pending => "Pending",
            ProposalStatus::Approved => "Approved",
            ProposalStatus::Rejected => "Rejected",
        }
    }
}

/// An advertiser's decision on a pending proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    fn outcome(self) -> ProposalStatus {
        match self {
            Decision::Approve => ProposalStatus::Approved,
            Decision::Reject => ProposalStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Developer {
    pub id: String,
    pub name: String,
    pub game: String,
}

/// A developer's pitch to integrate a product into one of their games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub id: String,
    pub product_id: String,
    pub product_title: String,
    pub developer: Developer,
    pub description: String,
    pub submitted_at: String,
    pub status: ProposalStatus,
    pub integration_plan: String,
    pub budget: String,
}

impl Proposal {
    /// Apply `decision` if the proposal is still pending. Returns whether the
    /// status changed.
    pub fn decide(&mut self, decision: Decision) -> bool {
        if self.status != ProposalStatus::Pending {
            return false;
        }
        self.status = decision.outcome();
        true
    }
}

/// A product an advertiser has listed for in-game placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: String,
    pub budget: String,
    pub duration: String,
    pub category: String,
    pub advertiser: String,
    pub proposals: u32,
    pub views: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trend {
    pub value: String,
    pub is_positive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub trend: Option<Trend>,
}

impl StatCard {
    fn new(title: &str, value: &str, trend: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            value: value.to_string(),
            trend: trend.map(|t| Trend {
                value: t.to_string(),
                is_positive: true,
            }),
        }
    }
}

pub fn recent_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".into(),
            title: "Sports Energy Drink".into(),
            description: "Looking for integration of our new energy drink as consumable items in sports or action games.".into(),
            budget: "$5,000 - $10,000".into(),
            duration: "3 months".into(),
            category: "Beverages".into(),
            advertiser: "PowerBoost".into(),
            proposals: 12,
            views: 245,
        },
        Product {
            id: "2".into(),
            title: "Premium Sneakers".into(),
            description: "Our latest sneaker line would be perfect for character customization in open world games.".into(),
            budget: "$8,000 - $15,000".into(),
            duration: "6 months".into(),
            category: "Apparel".into(),
            advertiser: "StrideFashion".into(),
            proposals: 8,
            views: 189,
        },
    ]
}

pub fn recent_proposals() -> Vec<Proposal> {
    vec![
        Proposal {
            id: "1".into(),
            product_id: "1".into(),
            product_title: "Sports Energy Drink".into(),
            developer: Developer {
                id: "dev1".into(),
                name: "GameMaster Studios".into(),
                game: "RaceTurbo 3000".into(),
            },
            description: "We'd like to integrate the energy drink as power-ups in our racing game, providing speed boosts to players.".into(),
            submitted_at: "2 days ago".into(),
            status: ProposalStatus::Pending,
            integration_plan: "The energy drink will be placed as collectible items on the race track, giving players a temporary speed boost.".into(),
            budget: "$7,500".into(),
        },
        Proposal {
            id: "2".into(),
            product_id: "2".into(),
            product_title: "Premium Sneakers".into(),
            developer: Developer {
                id: "dev2".into(),
                name: "OpenWorld Creations".into(),
                game: "City Explorer".into(),
            },
            description: "We'll add your sneakers as special collectible items that give players enhanced parkour abilities.".into(),
            submitted_at: "5 days ago".into(),
            status: ProposalStatus::Approved,
            integration_plan: "The sneakers will be available in our in-game stores and as rewards for completing certain missions.".into(),
            budget: "$12,000".into(),
        },
    ]
}

pub fn advertiser_stats() -> Vec<StatCard> {
    vec![
        StatCard::new("Active Campaigns", "3", Some("20%")),
        StatCard::new("Total Products", "8", None),
        StatCard::new("New Proposals", "12", Some("5%")),
        StatCard::new("Total Impressions", "24.5K", Some("12%")),
    ]
}

pub fn developer_stats() -> Vec<StatCard> {
    vec![
        StatCard::new("Active Integrations", "2", None),
        StatCard::new("Submitted Proposals", "5", Some("30%")),
        StatCard::new("Available Products", "24", Some("8%")),
        StatCard::new("Total Revenue", "$18,500", Some("15%")),
    ]
}

/// Advertiser sidebar: upcoming campaign dates.
pub const UPCOMING_DEADLINES: [(&str, &str); 2] = [
    ("Sports Drink Campaign", "Ends in 12 days"),
    ("Sneakers Integration", "Starts in 5 days"),
];

/// Developer sidebar: earnings from placements.
pub const REVENUE_OVERVIEW: [(&str, &str); 3] = [
    ("This Month", "$4,200"),
    ("Last Month", "$3,800"),
    ("Total YTD", "$18,500"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_pending_proposals_can_be_decided() {
        let mut proposals = recent_proposals();
        assert!(proposals[0].decide(Decision::Reject));
        assert_eq!(proposals[0].status, ProposalStatus::Rejected);
        assert!(!proposals[0].decide(Decision::Approve));
        assert_eq!(proposals[0].status, ProposalStatus::Rejected);

        assert_eq!(proposals[1].status, ProposalStatus::Approved);
        assert!(!proposals[1].decide(Decision::Reject));
    }
}
