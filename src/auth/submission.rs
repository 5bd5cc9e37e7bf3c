//! Background account calls.
//!
//! A [`Submission`] owns the task running the call. Dropping it aborts the
//! task, so a flow that is torn down mid-call never sees its completion. The
//! outcome is tagged with the submission id; the receiver discards outcomes
//! whose id is no longer pending.

use super::backend::{AuthBackend, Credentials, Registration};
use super::error::AuthError;
use super::Role;
use crate::app::event::AppEvent;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

pub type SubmissionId = u64;

#[derive(Debug, Clone)]
pub enum SubmitRequest {
    SignIn(Credentials),
    SignUp(Registration),
}

impl SubmitRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            SubmitRequest::SignIn(_) => "sign-in",
            SubmitRequest::SignUp(_) => "sign-up",
        }
    }
}

#[derive(Debug)]
pub struct SubmissionOutcome {
    pub id: SubmissionId,
    pub result: Result<Role, AuthError>,
}

#[derive(Debug)]
pub struct Submission {
    id: SubmissionId,
    handle: JoinHandle<()>,
}

impl Submission {
    /// Start the account call on the runtime. The outcome is delivered as
    /// [`AppEvent::AuthFinished`]; a call that outlives `timeout` resolves to
    /// [`AuthError::Timeout`].
    pub fn spawn(
        id: SubmissionId,
        request: SubmitRequest,
        backend: Arc<dyn AuthBackend>,
        timeout: Duration,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        debug!(id, kind = request.kind(), "spawning submission");
        let handle = tokio::spawn(async move {
            let call = async {
                match request {
                    SubmitRequest::SignIn(credentials) => backend.sign_in(credentials).await,
                    SubmitRequest::SignUp(registration) => backend.sign_up(registration).await,
                }
            };
            let result = tokio::time::timeout(timeout, call)
                .await
                .unwrap_or(Err(AuthError::Timeout));
            let _ = event_tx.send(AppEvent::AuthFinished(SubmissionOutcome { id, result }));
        });
        Self { id, handle }
    }

    pub fn id(&self) -> SubmissionId {
        self.id
    }
}

impl Drop for Submission {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            debug!(id = self.id, "aborting submission");
        }
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::backend::SimulatedBackend;
    use async_trait::async_trait;

    struct NeverAnswers;

    #[async_trait]
    impl AuthBackend for NeverAnswers {
        async fn sign_in(&self, _: Credentials) -> Result<Role, AuthError> {
            std::future::pending().await
        }

        async fn sign_up(&self, _: Registration) -> Result<Role, AuthError> {
            std::future::pending().await
        }
    }

    fn registration() -> SubmitRequest {
        SubmitRequest::SignUp(Registration {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            password: "pw".into(),
            role: Role::Developer,
        })
    }

    fn simulated() -> Arc<dyn AuthBackend> {
        Arc::new(SimulatedBackend::new(
            Duration::from_millis(1500),
            Role::Advertiser,
        ))
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_outcome_arrives_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let submission = Submission::spawn(
            7,
            registration(),
            simulated(),
            Duration::from_secs(10),
            tx,
        );
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(1499)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());

        let Some(AppEvent::AuthFinished(outcome)) = rx.recv().await else {
            panic!("expected an auth outcome");
        };
        assert_eq!(outcome.id, submission.id());
        assert_eq!(outcome.result, Ok(Role::Developer));
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_dropping_submission_suppresses_outcome() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let submission = Submission::spawn(
            1,
            registration(),
            simulated(),
            Duration::from_secs(10),
            tx,
        );
        tokio::task::yield_now().await;
        drop(submission);

        tokio::time::advance(Duration::from_secs(5)).await;
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
        // The aborted task dropped its sender without sending.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_slow_backend_times_out() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _submission = Submission::spawn(
            3,
            registration(),
            Arc::new(NeverAnswers),
            Duration::from_millis(200),
            tx,
        );

        let Some(AppEvent::AuthFinished(outcome)) = rx.recv().await else {
            panic!("expected an auth outcome");
        };
        assert_eq!(outcome.id, 3);
        assert_eq!(outcome.result, Err(AuthError::Timeout));
    }
}
