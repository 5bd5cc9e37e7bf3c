use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::auth::{Role, SignUpStep, SubmissionOutcome, SubmitRequest, ValidationError};
use crate::dashboard::catalog::Decision;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;
use tracing::debug;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::AuthFinished(outcome) => handle_auth_outcome(state, outcome),
        AppEvent::Tick => {
            state.expire_toast(Instant::now());
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
        return vec![Action::Quit];
    }

    match state.screen {
        Screen::Auth(_) => handle_auth_key(state, key),
        Screen::Dashboard(_) => handle_dashboard_key(state, key),
    }
}

/// What an auth-screen keystroke asks of the app once the screen borrow ends.
enum AuthInput {
    Nothing,
    Submit(SubmitRequest),
    Invalid(ValidationError),
    Cancelled,
    ResetHint,
}

fn handle_auth_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let Some(auth) = state.auth_mut() else {
        return vec![];
    };
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    let input = match (key.code, auth.tab) {
        (KeyCode::F(2), _) => {
            auth.switch_tab();
            AuthInput::Nothing
        }
        (KeyCode::Esc, _) if auth.is_submitting() => {
            auth.cancel();
            AuthInput::Cancelled
        }
        (KeyCode::Esc, AuthTab::SignUp) => {
            auth.sign_up.back();
            AuthInput::Nothing
        }
        (KeyCode::Enter, AuthTab::SignIn) => match auth.sign_in.submit() {
            Ok(Some(credentials)) => AuthInput::Submit(SubmitRequest::SignIn(credentials)),
            Ok(None) => AuthInput::Nothing,
            Err(e) => AuthInput::Invalid(e),
        },
        (KeyCode::Enter, AuthTab::SignUp) => match auth.sign_up.submit() {
            Ok(Some(registration)) => AuthInput::Submit(SubmitRequest::SignUp(registration)),
            Ok(None) => AuthInput::Nothing,
            Err(e) => AuthInput::Invalid(e),
        },
        (KeyCode::Char('r'), AuthTab::SignIn) if ctrl => AuthInput::ResetHint,
        (code, AuthTab::SignUp) if auth.sign_up.step() == SignUpStep::RoleSelection => {
            match code {
                KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                    auth.sign_up.toggle_role()
                }
                KeyCode::Char('1') => auth.sign_up.select_role(Role::Advertiser),
                KeyCode::Char('2') => auth.sign_up.select_role(Role::Developer),
                _ => {}
            }
            AuthInput::Nothing
        }
        (KeyCode::Tab | KeyCode::Down, tab) => {
            match tab {
                AuthTab::SignIn => auth.sign_in.focus_next(),
                AuthTab::SignUp => auth.sign_up.focus_next(),
            }
            AuthInput::Nothing
        }
        (KeyCode::BackTab | KeyCode::Up, tab) => {
            match tab {
                AuthTab::SignIn => auth.sign_in.focus_prev(),
                AuthTab::SignUp => auth.sign_up.focus_prev(),
            }
            AuthInput::Nothing
        }
        (code, tab) => {
            let field = match tab {
                AuthTab::SignIn => auth.sign_in.focused_field_mut(),
                AuthTab::SignUp => auth.sign_up.focused_field_mut(),
            };
            if let Some(field) = field {
                match code {
                    KeyCode::Char('w') if ctrl => field.delete_word_back(),
                    KeyCode::Char(c) if !ctrl => field.insert_char(c),
                    KeyCode::Backspace => field.delete_back(),
                    KeyCode::Delete => field.delete_forward(),
                    KeyCode::Left => field.move_left(),
                    KeyCode::Right => field.move_right(),
                    KeyCode::Home => field.move_home(),
                    KeyCode::End => field.move_end(),
                    _ => {}
                }
            }
            AuthInput::Nothing
        }
    };

    match input {
        AuthInput::Nothing => vec![],
        AuthInput::Submit(request) => {
            let id = state.allocate_submission_id();
            vec![Action::Submit { id, request }]
        }
        AuthInput::Invalid(e) => {
            state.error_toast("Error", e.to_string());
            vec![]
        }
        AuthInput::Cancelled => {
            state.info_toast("Cancelled", "The request was cancelled.");
            vec![]
        }
        AuthInput::ResetHint => {
            state.info_toast(
                "Password Reset",
                "Check your email for password reset instructions.",
            );
            vec![]
        }
    }
}

fn handle_auth_outcome(state: &mut AppState, outcome: SubmissionOutcome) -> Vec<Action> {
    let Some(auth) = state.auth_mut() else {
        debug!(id = outcome.id, "auth screen gone, dropping outcome");
        return vec![];
    };
    let Some(tab) = auth.take_pending(outcome.id) else {
        debug!(id = outcome.id, "stale submission outcome");
        return vec![];
    };
    let finished = match tab {
        AuthTab::SignIn => auth.sign_in.finish(outcome.result),
        AuthTab::SignUp => auth.sign_up.finish(outcome.result),
    };

    match finished {
        Some(Ok(role)) => {
            match tab {
                AuthTab::SignIn => {
                    state.info_toast("Welcome back!", "You have successfully signed in.")
                }
                AuthTab::SignUp => state.info_toast(
                    "Account created!",
                    "Your account has been successfully created.",
                ),
            }
            state.show_dashboard(role);
            vec![Action::PersistLogin { role }]
        }
        Some(Err(e)) => {
            state.error_toast("Error", e.to_string());
            vec![]
        }
        None => vec![],
    }
}

fn handle_dashboard_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let Screen::Dashboard(screen) = &mut state.screen else {
        return vec![];
    };

    if screen.notifications.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('n')) {
            screen.toggle_notifications();
        } else if let Some(panel) = screen.notifications.as_mut() {
            match key.code {
                KeyCode::Left | KeyCode::Char('h') => panel.prev_filter(),
                KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => panel.next_filter(),
                KeyCode::Up | KeyCode::Char('k') => panel.select_prev(),
                KeyCode::Down | KeyCode::Char('j') => panel.select_next(),
                KeyCode::Enter => {
                    panel.open_selected();
                }
                _ => {}
            }
        }
        return vec![];
    }

    let mut saved_toast = None;
    match key.code {
        KeyCode::Char('n') => screen.toggle_notifications(),
        KeyCode::Tab => screen.dashboard.next_tab(),
        KeyCode::BackTab => screen.dashboard.prev_tab(),
        KeyCode::Up | KeyCode::Char('k') => screen.dashboard.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => screen.dashboard.select_next(),
        KeyCode::Char('a') => {
            screen.dashboard.decide_selected(Decision::Approve);
        }
        KeyCode::Char('r') => {
            screen.dashboard.decide_selected(Decision::Reject);
        }
        KeyCode::Char('s') => {
            saved_toast = screen.dashboard.toggle_save_selected().map(|(_, saved)| saved);
        }
        KeyCode::Char('L') => {
            state.show_auth();
            return vec![Action::Logout];
        }
        KeyCode::Char('q') => return vec![Action::Quit],
        _ => {}
    }

    if let Some(saved) = saved_toast {
        let text = if saved { "Product saved." } else { "Product removed from saved." };
        state.info_toast("Saved Products", text);
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::error::AuthError;
    use crate::auth::SignInStep;
    use crate::config::AppConfig;
    use crate::session::Session;

    fn logged_out() -> AppState {
        AppState::new(AppConfig::default(), Session { logged_in: false, role: None })
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    fn auth(state: &mut AppState) -> &mut AuthScreen {
        state.auth_mut().expect("auth screen")
    }

    fn finish(state: &mut AppState, id: u64, result: Result<Role, AuthError>) -> Vec<Action> {
        handle_event(state, AppEvent::AuthFinished(SubmissionOutcome { id, result }))
    }

    /// Fill the sign-up form and reach the role step.
    fn to_role_step(state: &mut AppState) {
        press(state, KeyCode::F(2));
        type_text(state, "Jane");
        press(state, KeyCode::Tab);
        type_text(state, "jane@x.com");
        press(state, KeyCode::Tab);
        type_text(state, "pw");
        press(state, KeyCode::Enter);
    }

    #[test]
    fn test_sign_up_flow_persists_role() {
        let mut state = logged_out();
        to_role_step(&mut state);
        assert_eq!(auth(&mut state).sign_up.step(), SignUpStep::RoleSelection);

        // Confirm without a role.
        assert!(press(&mut state, KeyCode::Enter).is_empty());
        assert_eq!(auth(&mut state).sign_up.step(), SignUpStep::RoleSelection);
        let toast = state.toast.as_ref().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.text, "Please select an account type");

        press(&mut state, KeyCode::Char('2'));
        let actions = press(&mut state, KeyCode::Enter);
        let [Action::Submit { id, request: SubmitRequest::SignUp(reg) }] = actions.as_slice() else {
            panic!("expected a sign-up submission, got {:?}", actions);
        };
        assert_eq!(reg.role, Role::Developer);
        assert_eq!(auth(&mut state).sign_up.step(), SignUpStep::Submitting);

        // Attach as the main loop would; a runtime is needed for the task.
        let id = *id;
        let rt = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
        rt.block_on(async {
            let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
            let backend = std::sync::Arc::new(crate::auth::SimulatedBackend::new(
                std::time::Duration::from_secs(60),
                Role::Advertiser,
            ));
            let submission = crate::auth::Submission::spawn(
                id,
                SubmitRequest::SignUp(reg.clone()),
                backend,
                std::time::Duration::from_secs(120),
                tx,
            );
            auth(&mut state).attach(submission);

            let actions = finish(&mut state, id, Ok(Role::Developer));
            assert!(matches!(
                actions.as_slice(),
                [Action::PersistLogin { role: Role::Developer }]
            ));
        });
        let Screen::Dashboard(screen) = &state.screen else {
            panic!("expected dashboard");
        };
        assert_eq!(screen.dashboard.role(), Role::Developer);
        assert_eq!(state.toast.as_ref().unwrap().title, "Account created!");
    }

    #[test]
    fn test_empty_email_shows_validation_error() {
        let mut state = logged_out();
        press(&mut state, KeyCode::F(2));
        type_text(&mut state, "Jane");
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "pw");

        assert!(press(&mut state, KeyCode::Enter).is_empty());
        assert_eq!(auth(&mut state).sign_up.step(), SignUpStep::Credentials);
        assert!(state.toast.as_ref().unwrap().text.contains("Email"));
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_outcome_after_leaving_auth_screen_is_ignored() {
        let mut state = logged_out();
        type_text(&mut state, "jane@x.com");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "pw");
        let actions = press(&mut state, KeyCode::Enter);
        let [Action::Submit { id, request }] = actions.as_slice() else {
            panic!("expected a sign-in submission");
        };

        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let backend = std::sync::Arc::new(crate::auth::SimulatedBackend::new(
            std::time::Duration::from_millis(1500),
            Role::Advertiser,
        ));
        let submission = crate::auth::Submission::spawn(
            *id,
            request.clone(),
            backend,
            std::time::Duration::from_secs(10),
            tx,
        );
        auth(&mut state).attach(submission);
        tokio::task::yield_now().await;

        // Navigate away mid-submission: the screen and its task are dropped.
        state.show_dashboard(Role::Advertiser);
        tokio::time::advance(std::time::Duration::from_secs(5)).await;
        assert!(rx.recv().await.is_none());

        // Even a late outcome for that id changes nothing.
        let actions = finish(&mut state, *id, Ok(Role::Advertiser));
        assert!(actions.is_empty());
    }

    #[test]
    fn test_stale_outcome_is_ignored() {
        let mut state = logged_out();
        type_text(&mut state, "jane@x.com");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "pw");
        press(&mut state, KeyCode::Enter);
        assert_eq!(auth(&mut state).sign_in.step(), SignInStep::Submitting);

        // No submission attached under id 42.
        assert!(finish(&mut state, 42, Ok(Role::Advertiser)).is_empty());
        assert_eq!(auth(&mut state).sign_in.step(), SignInStep::Submitting);

        press(&mut state, KeyCode::Esc);
        assert_eq!(auth(&mut state).sign_in.step(), SignInStep::Idle);
        assert_eq!(state.toast.as_ref().unwrap().title, "Cancelled");
    }

    #[test]
    fn test_tab_switch_blocked_while_submitting() {
        let mut state = logged_out();
        to_role_step(&mut state);
        press(&mut state, KeyCode::Char('1'));
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::F(2));
        assert_eq!(auth(&mut state).tab, AuthTab::SignUp);

        press(&mut state, KeyCode::Esc);
        assert_eq!(auth(&mut state).sign_up.step(), SignUpStep::RoleSelection);
        press(&mut state, KeyCode::Esc);
        assert_eq!(auth(&mut state).sign_up.step(), SignUpStep::Credentials);
        press(&mut state, KeyCode::F(2));
        assert_eq!(auth(&mut state).tab, AuthTab::SignIn);
    }

    #[test]
    fn test_password_reset_hint() {
        let mut state = logged_out();
        handle_event(
            &mut state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(
                KeyCode::Char('r'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert_eq!(state.toast.as_ref().unwrap().title, "Password Reset");
        assert_eq!(auth(&mut state).sign_in.field(crate::auth::CredentialField::Email).value(), "");
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut state = logged_out();
        let actions = handle_event(
            &mut state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert!(matches!(actions.as_slice(), [Action::Quit]));
    }

    #[test]
    fn test_dashboard_notifications_and_logout() {
        let mut state = AppState::new(
            AppConfig::default(),
            Session { logged_in: true, role: Some(Role::Advertiser) },
        );
        press(&mut state, KeyCode::Char('n'));
        press(&mut state, KeyCode::Enter);
        {
            let Screen::Dashboard(screen) = &state.screen else {
                panic!("expected dashboard");
            };
            let panel = screen.notifications.as_ref().unwrap();
            assert_eq!(panel.center.unread_count(), 1);
        }
        assert!(state.status_line().contains("1 new"));

        press(&mut state, KeyCode::Esc);
        let actions = press(&mut state, KeyCode::Char('L'));
        assert!(matches!(actions.as_slice(), [Action::Logout]));
        assert!(matches!(state.screen, Screen::Auth(_)));
    }

    #[test]
    fn test_developer_save_toast() {
        let mut state = AppState::new(
            AppConfig::default(),
            Session { logged_in: true, role: Some(Role::Developer) },
        );
        press(&mut state, KeyCode::Char('s'));
        assert_eq!(state.toast.as_ref().unwrap().text, "Product saved.");
    }
}
