use crate::auth::Role;
use crate::dashboard::catalog::{self, Product, Proposal, StatCard};
use crate::dashboard::saved::SavedProducts;
use crate::dashboard::{Dashboard, DashboardTab, DashboardView};
use crate::ui::layout::dashboard_layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, dash: &Dashboard) {
    let layout = dashboard_layout(area);

    render_header(frame, layout.header, dash);
    render_tabs(frame, layout.tabs, dash.tab());

    let stats = match dash.view() {
        DashboardView::Advertiser(v) => &v.stats,
        DashboardView::Developer(v) => &v.stats,
    };
    render_stats(frame, layout.stats, stats);

    if dash.tab() == DashboardTab::Overview {
        match dash.view() {
            DashboardView::Advertiser(v) => {
                render_proposals(frame, layout.main, &v.proposals, dash.selected())
            }
            DashboardView::Developer(v) => {
                render_products(frame, layout.main, &v.products, &v.saved, dash.selected())
            }
        }
    } else {
        let block = panel(dash.tab().label());
        let text = Paragraph::new(Span::styled(dash.tab_description(), Theme::muted()))
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(text, layout.main);
    }

    render_sidebar(frame, layout.sidebar, dash);
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
}

fn render_header(frame: &mut Frame, area: Rect, dash: &Dashboard) {
    let role = dash.role();
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} Dashboard", role.title()),
                Theme::role(role).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(format!("[+ {}]", dash.new_item_label()), Theme::muted()),
        ]),
        Line::from(Span::styled(
            format!(" {}", dash.tab_description()),
            Theme::muted(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, active: DashboardTab) {
    let mut spans = vec![Span::raw(" ")];
    for tab in DashboardTab::ALL {
        let style = if tab == active {
            Theme::tab_active()
        } else {
            Theme::tab_inactive()
        };
        spans.push(Span::styled(tab.label(), style));
        spans.push(Span::raw("   "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_stats(frame: &mut Frame, area: Rect, stats: &[StatCard]) {
    if stats.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, stats.len() as u32); stats.len()];
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints(constraints)
        .split(area);

    for (card, cell) in stats.iter().zip(cells.iter()) {
        let mut value = vec![Span::styled(card.value.clone(), Theme::title())];
        if let Some(trend) = &card.trend {
            let arrow = if trend.is_positive { "↑" } else { "↓" };
            value.push(Span::styled(
                format!("  {} {}", arrow, trend.value),
                Theme::trend_up(),
            ));
        }
        let block = Block::default()
            .title(format!(" {} ", card.title))
            .title_style(Theme::muted())
            .borders(Borders::ALL)
            .border_type(Theme::border_type())
            .border_style(Theme::border());
        frame.render_widget(Paragraph::new(Line::from(value)).block(block), *cell);
    }
}

fn render_proposals(frame: &mut Frame, area: Rect, proposals: &[Proposal], selected: usize) {
    let items: Vec<ListItem> = proposals
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let title_style = if i == selected { Theme::selected() } else { Theme::title() };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!(" {} ", p.product_title), title_style),
                    Span::raw(" "),
                    Span::styled(
                        format!("[{}]", p.status.label()),
                        Theme::proposal_status(p.status),
                    ),
                ]),
                Line::from(Span::styled(
                    format!(
                        "   {} · {} · {} · {}",
                        p.developer.name, p.developer.game, p.budget, p.submitted_at
                    ),
                    Theme::muted(),
                )),
                Line::from(Span::styled(format!("   {}", p.description), Theme::text())),
            ])
        })
        .collect();

    let block = panel("Recent Proposals (a approve · r reject)");
    frame.render_widget(List::new(items).block(block), area);
}

fn render_products(
    frame: &mut Frame,
    area: Rect,
    products: &[Product],
    saved: &SavedProducts,
    selected: usize,
) {
    let items: Vec<ListItem> = products
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let title_style = if i == selected { Theme::selected() } else { Theme::title() };
            let marker = if saved.contains(&p.id) { "★" } else { "☆" };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!(" {} ", marker), Theme::role(Role::Developer)),
                    Span::styled(format!(" {} ", p.title), title_style),
                    Span::styled(format!("  {}", p.category), Theme::muted()),
                ]),
                Line::from(Span::styled(
                    format!(
                        "    {} · {} · {} · {} proposals · {} views",
                        p.advertiser, p.budget, p.duration, p.proposals, p.views
                    ),
                    Theme::muted(),
                )),
                Line::from(Span::styled(format!("    {}", p.description), Theme::text())),
            ])
        })
        .collect();

    let title = if saved.is_empty() {
        "Recommended Products (s to save)".to_string()
    } else {
        format!("Recommended Products ({} saved)", saved.len())
    };
    frame.render_widget(List::new(items).block(panel(&title)), area);
}

fn render_sidebar(frame: &mut Frame, area: Rect, dash: &Dashboard) {
    let (title, rows): (&str, &[(&str, &str)]) = match dash.view() {
        DashboardView::Advertiser(_) => ("Upcoming Deadlines", &catalog::UPCOMING_DEADLINES[..]),
        DashboardView::Developer(_) => ("Revenue Overview", &catalog::REVENUE_OVERVIEW[..]),
    };
    let mut lines: Vec<Line> = Vec::new();
    for (label, value) in rows {
        lines.push(Line::from(Span::styled(*label, Theme::text())));
        lines.push(Line::from(Span::styled(format!("  {}", value), Theme::muted())));
    }

    if let DashboardView::Developer(v) = dash.view() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("My Proposals", Theme::title())));
        for p in &v.proposals {
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", p.product_title), Theme::text()),
                Span::styled(p.status.label(), Theme::proposal_status(p.status)),
            ]));
        }
    }

    frame.render_widget(
        Paragraph::new(lines).block(panel(title)).wrap(Wrap { trim: true }),
        area,
    );
}
