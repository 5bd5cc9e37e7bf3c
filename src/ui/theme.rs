use crate::auth::Role;
use crate::dashboard::catalog::ProposalStatus;
use crate::notifications::Category;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

/// Icon glyph and accent colour per notification category, indexed by
/// [`Category::index`].
const CATEGORY_STYLE: [(&str, Color); 3] = [
    ("✉", Color::Blue),
    ("◆", Color::Magenta),
    ("●", Color::Green),
];

impl Theme {
    pub const ACCENT: Color = Color::Rgb(147, 112, 219);
    pub const BG_SURFACE: Color = Color::Rgb(24, 24, 32);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn muted() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn selected() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_active() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn error() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn info() -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    pub fn trend_up() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn unread_badge() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD)
    }

    pub fn role(role: Role) -> Style {
        match role {
            Role::Advertiser => Style::default().fg(Color::Cyan),
            Role::Developer => Style::default().fg(Color::Yellow),
        }
    }

    pub fn proposal_status(status: ProposalStatus) -> Style {
        match status {
            ProposalStatus::Pending => Style::default().fg(Color::Yellow),
            ProposalStatus::Approved => Style::default().fg(Color::Green),
            ProposalStatus::Rejected => Style::default().fg(Color::Red),
        }
    }

    pub fn category_icon(category: Category) -> &'static str {
        CATEGORY_STYLE[category.index()].0
    }

    pub fn category(category: Category) -> Style {
        Style::default().fg(CATEGORY_STYLE[category.index()].1)
    }
}
