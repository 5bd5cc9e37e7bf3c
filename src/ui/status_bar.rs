use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    let (label, hint) = match &state.screen {
        Screen::Auth(_) => (
            "AUTH",
            "Enter submit · Tab field · Esc back · Ctrl+Q quit",
        ),
        Screen::Dashboard(screen) if screen.notifications.is_some() => (
            "INBOX",
            "←/→ tab · ↑/↓ select · Enter read · Esc close",
        ),
        Screen::Dashboard(_) => (
            "DASHBOARD",
            "Tab page · n inbox · a/r decide · s save · L logout",
        ),
    };

    parts.push(Span::styled(
        format!(" [{}] ", label),
        Style::default().fg(Theme::ACCENT).bg(Color::DarkGray),
    ));
    let status = format!(" {} ", state.status_line());
    parts.push(Span::styled(status, Theme::status_bar()));

    // Pad so the key hints sit on the right
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let hint = format!(" {} ", hint);
    let remaining = (area.width as usize).saturating_sub(used + hint.chars().count());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        hint,
        Style::default().fg(Color::Gray).bg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
