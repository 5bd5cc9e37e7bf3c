use crate::app::state::NotificationPanel;
use crate::notifications::Filter;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

const PANEL_WIDTH: u16 = 56;
const PANEL_HEIGHT: u16 = 20;

/// Dropdown anchored to the top-right corner of `area`.
pub fn render(frame: &mut Frame, area: Rect, panel: &NotificationPanel) {
    let w = PANEL_WIDTH.min(area.width);
    let h = PANEL_HEIGHT.min(area.height);
    let popup = Rect::new(area.right().saturating_sub(w), area.y, w, h);
    frame.render_widget(Clear, popup);

    let unread = panel.center.unread_count();
    let mut title = vec![Span::styled(" Notifications ", Theme::title())];
    if unread > 0 {
        title.push(Span::styled(format!(" {} new ", unread), Theme::unread_badge()));
        title.push(Span::raw(" "));
    }
    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused())
        .style(Style::default().bg(Theme::BG_SURFACE));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    if inner.height < 3 {
        return;
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    render_filter_tabs(frame, rows[0], panel.filter);

    let visible = panel.visible();
    if visible.is_empty() {
        let empty = Paragraph::new(Span::styled("No notifications to display", Theme::muted()))
            .alignment(Alignment::Center);
        frame.render_widget(empty, rows[1]);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|n| {
            let title_style = if n.is_read() {
                Theme::text()
            } else {
                Theme::title()
            };
            let dot = if n.is_read() { "  " } else { "• " };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(dot, Theme::unread_badge().bg(Color::Reset)),
                    Span::styled(
                        format!("{} ", Theme::category_icon(n.category())),
                        Theme::category(n.category()),
                    ),
                    Span::styled(n.title().to_string(), title_style),
                    Span::styled(format!("  {}", n.created_at()), Theme::muted()),
                ]),
                Line::from(Span::styled(format!("    {}", n.body()), Theme::muted())),
            ])
        })
        .collect();

    let mut list_state = ListState::default().with_selected(Some(panel.selected));
    let list = List::new(items).highlight_style(Style::default().bg(Color::Rgb(45, 45, 60)));
    frame.render_stateful_widget(list, rows[1], &mut list_state);
}

fn render_filter_tabs(frame: &mut Frame, area: Rect, active: Filter) {
    let mut spans = Vec::new();
    for filter in Filter::TABS {
        let style = if filter == active {
            Theme::tab_active()
        } else {
            Theme::tab_inactive()
        };
        spans.push(Span::styled(filter.label(), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
