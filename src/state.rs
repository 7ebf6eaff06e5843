use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use log::{debug, error};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiError;
use crate::utils::error_text;

#[derive(Clone, Debug, PartialEq)]
pub enum Submission<T> {
    Idle,
    Submitting,
    Success(T),
    Failed(String),
}

impl<T> Default for Submission<T> {
    fn default() -> Self {
        Submission::Idle
    }
}

impl<T> Submission<T> {
    pub fn begin(self) -> Self {
        Submission::Submitting
    }

    pub fn succeed(self, value: T) -> Self {
        Submission::Success(value)
    }

    pub fn fail(self, message: impl Into<String>) -> Self {
        Submission::Failed(message.into())
    }

    pub fn edited(self) -> Self {
        match self {
            Submission::Success(_) | Submission::Failed(_) => Submission::Idle,
            other => other,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, Submission::Submitting)
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, Submission::Success(_) | Submission::Failed(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Submission::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Submission::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[hook]
pub fn use_mounted() -> Rc<RefCell<bool>> {
    let mounted = use_mut_ref(|| true);
    {
        let mounted = mounted.clone();
        use_effect_with((), move |_| {
            *mounted.borrow_mut() = true;
            move || *mounted.borrow_mut() = false
        });
    }
    mounted
}

pub fn edit_callback<T: Clone + 'static>(
    field: UseStateHandle<String>,
    status: UseStateHandle<Submission<T>>,
) -> Callback<String> {
    Callback::from(move |value: String| {
        field.set(value);
        if status.is_settled() {
            status.set((*status).clone().edited());
        }
    })
}

pub fn reject<T: Clone + 'static>(status: &UseStateHandle<Submission<T>>, message: impl Into<String>) {
    status.set((**status).clone().fail(message));
}

/// Runs one backend call for a page and stores its outcome, unless the page is gone.
pub fn dispatch<T, F>(
    status: UseStateHandle<Submission<T>>,
    mounted: Rc<RefCell<bool>>,
    fallback: &'static str,
    call: F,
) where
    T: Clone + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    let pending = (*status).clone().begin();
    status.set(pending.clone());
    spawn_local(async move {
        let result = call.await;
        if !*mounted.borrow() {
            debug!("Discarding response for unmounted page");
            return;
        }
        match result {
            Ok(value) => status.set(pending.succeed(value)),
            Err(e) => {
                error!("{} {}", fallback, e);
                status.set(pending.fail(error_text(&e, fallback)));
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_clears_previous_result() {
        let done: Submission<String> = Submission::Success("txid".into());
        assert_eq!(done.begin(), Submission::Submitting);
        let failed: Submission<String> = Submission::Failed("boom".into());
        assert_eq!(failed.begin(), Submission::Submitting);
    }

    #[test]
    fn success_and_error_are_exclusive() {
        let states: Vec<Submission<u32>> = vec![
            Submission::Idle,
            Submission::Submitting,
            Submission::Success(1),
            Submission::Failed("x".into()),
        ];
        for state in states {
            assert!(!(state.success().is_some() && state.error().is_some()));
        }
    }

    #[test]
    fn success_replaces_error_and_error_replaces_success() {
        let state = Submission::Failed("old".to_string()).begin().succeed(7);
        assert_eq!(state.success(), Some(&7));
        assert_eq!(state.error(), None);

        let state = state.begin().fail("new");
        assert_eq!(state.error(), Some("new"));
        assert_eq!(state.success(), None);
    }

    #[test]
    fn validation_failure_skips_submitting() {
        let state: Submission<()> = Submission::Idle.fail("Wallet name cannot be empty.");
        assert!(!state.is_busy());
        assert_eq!(state.error(), Some("Wallet name cannot be empty."));
    }

    #[test]
    fn editing_returns_settled_states_to_idle() {
        assert_eq!(Submission::Success(1).edited(), Submission::Idle);
        assert_eq!(Submission::<u8>::Failed("e".into()).edited(), Submission::Idle);
        assert_eq!(Submission::<u8>::Submitting.edited(), Submission::Submitting);
        assert_eq!(Submission::<u8>::Idle.edited(), Submission::Idle);
    }

    #[test]
    fn only_submitting_is_busy() {
        assert!(Submission::<u8>::Submitting.is_busy());
        assert!(!Submission::<u8>::Idle.is_busy());
        assert!(!Submission::Success(0u8).is_busy());
        assert!(Submission::Success(0u8).is_settled());
        assert!(!Submission::<u8>::Submitting.is_settled());
    }
}
