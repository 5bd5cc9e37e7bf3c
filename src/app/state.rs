use crate::auth::{SignInForm, SignUpWizard, Submission, SubmissionId};
use crate::auth::{Role, SignInStep, SignUpStep};
use crate::config::AppConfig;
use crate::dashboard::Dashboard;
use crate::notifications::{Filter, Notification, NotificationCenter};
use crate::session::Session;
use std::time::Instant;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

/// Transient message shown over the current screen.
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub text: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthTab {
    SignIn,
    SignUp,
}

impl AuthTab {
    pub fn label(self) -> &'static str {
        match self {
            AuthTab::SignIn => "Sign In",
            AuthTab::SignUp => "Sign Up",
        }
    }
}

/// Sign-in / sign-up screen. Created fresh on every visit; dropping it
/// aborts any outstanding account call.
#[derive(Debug)]
pub struct AuthScreen {
    pub tab: AuthTab,
    pub sign_in: SignInForm,
    pub sign_up: SignUpWizard,
    pending: Option<(Submission, AuthTab)>,
}

impl Default for AuthScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthScreen {
    pub fn new() -> Self {
        Self {
            tab: AuthTab::SignIn,
            sign_in: SignInForm::new(),
            sign_up: SignUpWizard::new(),
            pending: None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        match self.tab {
            AuthTab::SignIn => self.sign_in.step() == SignInStep::Submitting,
            AuthTab::SignUp => self.sign_up.step() == SignUpStep::Submitting,
        }
    }

    pub fn pending_id(&self) -> Option<SubmissionId> {
        self.pending.as_ref().map(|(s, _)| s.id())
    }

    /// Attach the task started for the current tab's submission.
    pub fn attach(&mut self, submission: Submission) {
        self.pending = Some((submission, self.tab));
    }

    /// Claim the pending submission if `id` is the one outstanding. Returns
    /// the tab whose flow started it.
    pub fn take_pending(&mut self, id: SubmissionId) -> Option<AuthTab> {
        if self.pending_id() != Some(id) {
            return None;
        }
        self.pending.take().map(|(_, tab)| tab)
    }

    /// Abort the outstanding call and put the flow back where it was.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.sign_in.cancel();
        self.sign_up.cancel();
    }

    /// Toggle between sign-in and sign-up. Ignored while submitting.
    pub fn switch_tab(&mut self) {
        if self.is_submitting() {
            return;
        }
        self.tab = match self.tab {
            AuthTab::SignIn => AuthTab::SignUp,
            AuthTab::SignUp => AuthTab::SignIn,
        };
        self.sign_up.restart();
    }
}

/// Notification dropdown. Opening it mounts a fresh inbox; closing it drops
/// the inbox together with its read state.
#[derive(Debug, Clone)]
pub struct NotificationPanel {
    pub center: NotificationCenter,
    pub filter: Filter,
    pub selected: usize,
}

impl Default for NotificationPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationPanel {
    pub fn new() -> Self {
        Self::with_center(NotificationCenter::with_defaults())
    }

    pub fn with_center(center: NotificationCenter) -> Self {
        Self {
            center,
            filter: Filter::All,
            selected: 0,
        }
    }

    pub fn visible(&self) -> Vec<&Notification> {
        self.center.list_visible(self.filter)
    }

    pub fn next_filter(&mut self) {
        self.filter = self.filter.next();
        self.selected = 0;
    }

    pub fn prev_filter(&mut self) {
        self.filter = self.filter.prev();
        self.selected = 0;
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Open the highlighted notification, marking it read. Returns whether
    /// the read state changed.
    pub fn open_selected(&mut self) -> bool {
        let Some(id) = self.visible().get(self.selected).map(|n| n.id().to_string()) else {
            return false;
        };
        let changed = self.center.mark_read(&id);
        self.clamp_selection();
        changed
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

#[derive(Debug)]
pub struct DashboardScreen {
    pub dashboard: Dashboard,
    pub notifications: Option<NotificationPanel>,
}

impl DashboardScreen {
    pub fn new(role: Role) -> Self {
        Self {
            dashboard: Dashboard::new(role),
            notifications: None,
        }
    }

    pub fn toggle_notifications(&mut self) {
        self.notifications = match self.notifications {
            Some(_) => None,
            None => Some(NotificationPanel::new()),
        };
    }
}

#[derive(Debug)]
pub enum Screen {
    Auth(AuthScreen),
    Dashboard(DashboardScreen),
}

pub struct AppState {
    pub config: AppConfig,
    pub screen: Screen,
    pub toast: Option<Toast>,
    pub next_submission_id: SubmissionId,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    /// Route to the dashboard when the stored session is logged in,
    /// otherwise to the auth screen.
    pub fn new(config: AppConfig, session: Session) -> Self {
        let screen = if session.logged_in {
            Screen::Dashboard(DashboardScreen::new(session.dashboard_role()))
        } else {
            Screen::Auth(AuthScreen::new())
        };
        Self {
            config,
            screen,
            toast: None,
            next_submission_id: 0,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn allocate_submission_id(&mut self) -> SubmissionId {
        let id = self.next_submission_id;
        self.next_submission_id += 1;
        id
    }

    pub fn show_dashboard(&mut self, role: Role) {
        info!(role = %role, "showing dashboard");
        self.screen = Screen::Dashboard(DashboardScreen::new(role));
        self.dirty = true;
    }

    pub fn show_auth(&mut self) {
        info!("showing auth screen");
        self.screen = Screen::Auth(AuthScreen::new());
        self.dirty = true;
    }

    pub fn auth_mut(&mut self) -> Option<&mut AuthScreen> {
        match &mut self.screen {
            Screen::Auth(auth) => Some(auth),
            Screen::Dashboard(_) => None,
        }
    }

    fn push_toast(&mut self, kind: ToastKind, title: &str, text: String) {
        self.toast = Some(Toast {
            title: title.to_string(),
            text,
            kind,
            expires_at: Instant::now() + self.config.ui.toast_duration(),
        });
        self.dirty = true;
    }

    pub fn info_toast(&mut self, title: &str, text: impl Into<String>) {
        self.push_toast(ToastKind::Info, title, text.into());
    }

    pub fn error_toast(&mut self, title: &str, text: impl Into<String>) {
        self.push_toast(ToastKind::Error, title, text.into());
    }

    /// Drop the toast once it has expired.
    pub fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| now >= t.expires_at) {
            self.toast = None;
            self.dirty = true;
        }
    }

    pub fn status_line(&self) -> String {
        match &self.screen {
            Screen::Auth(auth) if auth.is_submitting() => match auth.tab {
                AuthTab::SignIn => "Signing in...".to_string(),
                AuthTab::SignUp => "Creating Account...".to_string(),
            },
            Screen::Auth(auth) => format!("{} | F2 switch tab", auth.tab.label()),
            Screen::Dashboard(screen) => {
                let dash = &screen.dashboard;
                let mut s = format!("{} | {}", dash.role().title(), dash.tab().label());
                if let Some(panel) = &screen.notifications {
                    let unread = panel.center.unread_count();
                    if unread > 0 {
                        s.push_str(&format!(" | {} new", unread));
                    }
                }
                s
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::Category;
    use std::time::Duration;

    #[test]
    fn test_initial_screen_follows_session() {
        let logged_out = AppState::new(
            AppConfig::default(),
            Session { logged_in: false, role: None },
        );
        assert!(matches!(logged_out.screen, Screen::Auth(_)));

        let developer = AppState::new(
            AppConfig::default(),
            Session { logged_in: true, role: Some(Role::Developer) },
        );
        let Screen::Dashboard(screen) = &developer.screen else {
            panic!("expected dashboard");
        };
        assert_eq!(screen.dashboard.role(), Role::Developer);

        let no_role = AppState::new(AppConfig::default(), Session { logged_in: true, role: None });
        let Screen::Dashboard(screen) = &no_role.screen else {
            panic!("expected dashboard");
        };
        assert_eq!(screen.dashboard.role(), Role::Advertiser);
    }

    #[test]
    fn test_panel_open_selected_in_unread_tab_clamps() {
        let mut panel = NotificationPanel::new();
        panel.next_filter();
        assert_eq!(panel.filter, Filter::Unread);
        panel.select_next();
        assert_eq!(panel.selected, 1);

        assert!(panel.open_selected());
        assert_eq!(panel.visible().len(), 1);
        assert_eq!(panel.selected, 0);

        assert!(panel.open_selected());
        assert!(panel.visible().is_empty());
        assert_eq!(panel.selected, 0);
        assert!(!panel.open_selected());
        assert_eq!(panel.center.unread_count(), 0);
    }

    #[test]
    fn test_panel_filter_switch_keeps_read_state() {
        let mut panel = NotificationPanel::new();
        panel.open_selected();
        for _ in Filter::TABS {
            panel.next_filter();
        }
        assert_eq!(panel.filter, Filter::All);
        assert_eq!(panel.center.unread_count(), 1);

        panel.prev_filter();
        assert_eq!(panel.filter, Filter::Category(Category::System));
    }

    #[test]
    fn test_reopening_panel_resets_inbox() {
        let mut screen = DashboardScreen::new(Role::Advertiser);
        screen.toggle_notifications();
        screen.notifications.as_mut().unwrap().open_selected();
        assert_eq!(screen.notifications.as_ref().unwrap().center.unread_count(), 1);

        screen.toggle_notifications();
        assert!(screen.notifications.is_none());
        screen.toggle_notifications();
        assert_eq!(screen.notifications.as_ref().unwrap().center.unread_count(), 2);
    }

    #[test]
    fn test_toast_expiry() {
        let mut state = AppState::new(
            AppConfig::default(),
            Session { logged_in: false, role: None },
        );
        state.error_toast("Error", "Please fill in all fields");
        let expires = state.toast.as_ref().unwrap().expires_at;

        state.expire_toast(expires - Duration::from_millis(1));
        assert!(state.toast.is_some());
        state.expire_toast(expires);
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_huge_toast_setting_does_not_overflow() {
        let mut config = AppConfig::default();
        config.ui.toast_secs = u64::MAX;
        let mut state = AppState::new(config, Session { logged_in: false, role: None });
        state.error_toast("Error", "Please fill in all fields");
        let toast = state.toast.as_ref().unwrap();
        assert!(toast.expires_at > Instant::now());
    }

    #[test]
    fn test_submission_ids_increase() {
        let mut state = AppState::new(
            AppConfig::default(),
            Session { logged_in: false, role: None },
        );
        assert_eq!(state.allocate_submission_id(), 0);
        assert_eq!(state.allocate_submission_id(), 1);
    }
}
