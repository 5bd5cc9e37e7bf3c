mod auth_form;
mod dashboard;
mod layout;
mod notification_panel;
mod status_bar;
mod theme;

use crate::app::state::{AppState, Screen, Toast, ToastKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let app_layout = layout::compute_layout(frame.area());

    match &state.screen {
        Screen::Auth(auth) => auth_form::render(frame, app_layout.body, auth),
        Screen::Dashboard(screen) => {
            dashboard::render(frame, app_layout.body, &screen.dashboard);
            if let Some(panel) = &screen.notifications {
                notification_panel::render(frame, app_layout.body, panel);
            }
        }
    }
    status_bar::render(frame, app_layout.status_bar, state);

    if let Some(toast) = &state.toast {
        render_toast(frame, app_layout.body, toast);
    }
}

/// Bottom-right overlay for the current toast.
fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast) {
    let w = 44u16.min(area.width);
    let h = 4u16.min(area.height);
    let rect = Rect::new(area.right().saturating_sub(w), area.bottom().saturating_sub(h), w, h);
    frame.render_widget(Clear, rect);

    let accent = match toast.kind {
        ToastKind::Info => Theme::info(),
        ToastKind::Error => Theme::error(),
    };
    let block = Block::default()
        .title(format!(" {} ", toast.title))
        .title_style(accent)
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(accent)
        .style(Style::default().bg(Theme::BG_SURFACE));
    let text = Paragraph::new(toast.text.as_str())
        .style(Theme::text())
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(text, rect);
}
