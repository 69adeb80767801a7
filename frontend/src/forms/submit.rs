use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use thiserror::Error;

/// Where a form is in its submit round-trip.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

impl SubmitState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmitState::Pending)
    }

    /// A finished outcome is stale once the visitor edits the form again.
    pub fn cleared_by_edit(&self) -> bool {
        matches!(self, SubmitState::Succeeded | SubmitState::Failed(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmitState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not encode the {form} form: {source}")]
    Encode {
        form: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Arms the auto-hide timer of a post-submit notice, only while the notice is showing.
/// Dropping the returned handle cancels the timer.
pub fn notice_timer<T>(showing: bool, arm: impl FnOnce() -> T) -> Option<T> {
    showing.then(arm)
}

pub fn encode_submission<T: Serialize>(form: &'static str, payload: &T) -> Result<String, SubmitError> {
    serde_json::to_string(payload).map_err(|source| SubmitError::Encode { form, source })
}

/// Stands in for a network request: waits `delay_ms`, then logs the payload to the console.
pub async fn simulate_submit<T: Serialize>(
    form: &'static str,
    payload: &T,
    delay_ms: u32,
) -> Result<(), SubmitError> {
    let body = encode_submission(form, payload)?;
    TimeoutFuture::new(delay_ms).await;
    gloo_console::log!(format!("{} form submitted:", form), body);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::BTreeMap;
    use std::rc::Rc;

    #[test]
    fn pending_and_error_accessors() {
        assert!(SubmitState::Pending.is_pending());
        assert!(!SubmitState::Idle.is_pending());
        assert_eq!(SubmitState::Failed("boom".into()).error(), Some("boom"));
        assert_eq!(SubmitState::Succeeded.error(), None);
        assert_eq!(SubmitState::default(), SubmitState::Idle);
    }

    #[test]
    fn editing_clears_finished_outcomes_only() {
        assert!(SubmitState::Succeeded.cleared_by_edit());
        assert!(SubmitState::Failed("x".into()).cleared_by_edit());
        assert!(!SubmitState::Pending.cleared_by_edit());
        assert!(!SubmitState::Idle.cleared_by_edit());
    }

    #[test]
    fn notice_timer_arms_only_while_showing() {
        let armed = Cell::new(0);
        assert!(notice_timer(false, || armed.set(armed.get() + 1)).is_none());
        assert_eq!(armed.get(), 0);

        // The flag is read before the state handle moves into the hide callback.
        let shown = Rc::new(Cell::new(true));
        let showing_now = shown.get();
        let hide = {
            let shown = shown.clone();
            move || shown.set(false)
        };
        let timer = notice_timer(showing_now, || hide);
        assert!(shown.get());
        if let Some(fire) = timer {
            fire();
        }
        assert!(!shown.get());
    }

    #[test]
    fn encodes_payload_as_json() {
        let mut payload = BTreeMap::new();
        payload.insert("email", "dana@example.com");
        assert_eq!(
            encode_submission("newsletter", &payload).unwrap(),
            r#"{"email":"dana@example.com"}"#
        );
    }

    #[test]
    fn encode_failure_names_the_form() {
        let mut payload = BTreeMap::new();
        payload.insert((1, 2), "tuple keys are not valid JSON object keys");
        let err = encode_submission("contact", &payload).unwrap_err();
        assert!(err.to_string().starts_with("could not encode the contact form"));
    }
}
