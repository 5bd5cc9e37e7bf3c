use crate::app::state::{AuthScreen, AuthTab};
use crate::auth::{CredentialField, Role, SignInStep, SignUpStep, TextField};
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

const CARD_WIDTH: u16 = 64;
const CARD_HEIGHT: u16 = 22;

pub fn render(frame: &mut Frame, area: Rect, auth: &AuthScreen) {
    let card = centered(area, CARD_WIDTH, CARD_HEIGHT);
    frame.render_widget(Clear, card);

    let block = Block::default()
        .title(" GameAdConnect ")
        .title_style(Theme::title())
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused())
        .padding(Padding::horizontal(2))
        .style(Style::default().bg(Theme::BG_SURFACE));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tabs
            Constraint::Length(1),
            Constraint::Min(5), // Form body
        ])
        .split(inner);

    render_tabs(frame, rows[0], auth);
    match auth.tab {
        AuthTab::SignIn => render_sign_in(frame, rows[2], auth),
        AuthTab::SignUp => render_sign_up(frame, rows[2], auth),
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, auth: &AuthScreen) {
    let mut spans = Vec::new();
    for tab in [AuthTab::SignIn, AuthTab::SignUp] {
        let style = if tab == auth.tab {
            Theme::tab_active()
        } else {
            Theme::tab_inactive()
        };
        spans.push(Span::styled(format!(" {} ", tab.label()), style));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled("(F2)", Theme::muted()));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_sign_in(frame: &mut Frame, area: Rect, auth: &AuthScreen) {
    let form = &auth.sign_in;
    let editable = form.step() == SignInStep::Idle;
    let chunks = field_rows(area, form.fields().len());

    for (i, which) in form.fields().into_iter().enumerate() {
        let focused = editable && form.focus() == which;
        render_field(frame, chunks[i], which, form.field(which), focused);
    }

    let button = match form.step() {
        SignInStep::Submitting => "Signing in...",
        _ => "Sign In",
    };
    let footer = vec![
        button_line(button, form.step() == SignInStep::Submitting),
        Line::from(Span::styled(
            "Forgot password? Ctrl+R",
            Theme::muted(),
        )),
    ];
    frame.render_widget(Paragraph::new(footer), chunks[form.fields().len()]);
}

fn render_sign_up(frame: &mut Frame, area: Rect, auth: &AuthScreen) {
    let wizard = &auth.sign_up;
    match wizard.step() {
        SignUpStep::Credentials => {
            let chunks = field_rows(area, wizard.fields().len());
            for (i, which) in wizard.fields().into_iter().enumerate() {
                let focused = wizard.focus() == which;
                render_field(frame, chunks[i], which, wizard.field(which), focused);
            }
            let footer = vec![
                button_line("Continue", false),
                Line::from(Span::styled("Step 1 of 2", Theme::muted())),
            ];
            frame.render_widget(Paragraph::new(footer), chunks[wizard.fields().len()]);
        }
        SignUpStep::RoleSelection | SignUpStep::Submitting | SignUpStep::Complete => {
            render_role_step(frame, area, wizard.role(), wizard.step());
        }
    }
}

fn render_role_step(frame: &mut Frame, area: Rect, chosen: Option<Role>, step: SignUpStep) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(6),
            Constraint::Length(2),
        ])
        .split(area);

    let heading = vec![
        Line::from(Span::styled("Choose your account type", Theme::title())),
        Line::from(Span::styled("←/→ or 1/2 to pick", Theme::muted())),
    ];
    frame.render_widget(Paragraph::new(heading), rows[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    for (i, role) in Role::ALL.into_iter().enumerate() {
        let selected = chosen == Some(role);
        let block = Block::default()
            .title(format!(" {} {} ", i + 1, role.title()))
            .title_style(Theme::role(role).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_type(Theme::border_type())
            .border_style(if selected {
                Theme::border_focused()
            } else {
                Theme::border()
            });
        let marker = if selected { "● selected" } else { "○" };
        let text = vec![
            Line::from(Span::styled(role.description(), Theme::text())),
            Line::from(""),
            Line::from(Span::styled(marker, Theme::role(role))),
        ];
        frame.render_widget(
            Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
            cards[i],
        );
    }

    let submitting = step == SignUpStep::Submitting;
    let label = if submitting {
        "Creating Account..."
    } else {
        "Create Account"
    };
    let footer = vec![
        button_line(label, submitting),
        Line::from(Span::styled(
            if submitting { "Esc to cancel" } else { "Esc back · Step 2 of 2" },
            Theme::muted(),
        )),
    ];
    frame.render_widget(Paragraph::new(footer), rows[2]);
}

/// One 3-row slot per field followed by a footer slot.
fn field_rows(area: Rect, fields: usize) -> Vec<Rect> {
    let mut constraints = vec![Constraint::Length(3); fields];
    constraints.push(Constraint::Min(2));
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    which: CredentialField,
    field: &TextField,
    focused: bool,
) {
    let block = Block::default()
        .title(format!(" {} ", which.label()))
        .title_style(if focused { Theme::title() } else { Theme::muted() })
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (content, column) = if which.is_secret() {
        (field.masked(), field.masked_cursor_column())
    } else {
        (field.value().to_string(), field.cursor_column())
    };
    let line = if content.is_empty() && !focused {
        Line::from(Span::styled(which.placeholder(), Theme::muted()))
    } else {
        Line::from(Span::styled(content, Theme::text()))
    };
    frame.render_widget(Paragraph::new(line), inner);

    if focused && inner.width > 0 {
        let x = inner.x + (column as u16).min(inner.width - 1);
        frame.set_cursor_position((x, inner.y));
    }
}

fn button_line(label: &str, busy: bool) -> Line<'static> {
    let style = if busy { Theme::muted() } else { Theme::selected() };
    Line::from(vec![
        Span::styled(format!("[ {} ]", label), style),
        Span::styled("  Enter", Theme::muted()),
    ])
}
