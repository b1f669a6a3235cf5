#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::pages::password_reset::repository::{PasswordResetError, PasswordResetService};
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    type Outcome = Result<(), PasswordResetError>;

    /// Resolves immediately with scripted outcomes and records every email.
    #[derive(Default)]
    pub struct FakeResetService {
        outcomes: RefCell<VecDeque<Outcome>>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeResetService {
        pub fn scripted(outcomes: Vec<Outcome>) -> Self {
            Self {
                outcomes: RefCell::new(outcomes.into()),
                calls: RefCell::default(),
            }
        }

        pub fn succeeding() -> Self {
            Self::scripted(vec![Ok(())])
        }

        pub fn failing(code: Option<&str>, detail: &str) -> Self {
            Self::scripted(vec![Err(PasswordResetError::from_code(code, detail))])
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        pub fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl PasswordResetService for FakeResetService {
        async fn reset_user_password(&self, email: &str) -> Result<(), PasswordResetError> {
            self.calls.borrow_mut().push(email.to_string());
            self.outcomes.borrow_mut().pop_front().unwrap_or(Ok(()))
        }
    }

    /// Stays pending until the test sends the outcome.
    pub struct GatedResetService {
        gate: RefCell<Option<oneshot::Receiver<Outcome>>>,
        calls: RefCell<usize>,
    }

    impl GatedResetService {
        pub fn new() -> (Self, oneshot::Sender<Outcome>) {
            let (tx, rx) = oneshot::channel();
            let service = Self {
                gate: RefCell::new(Some(rx)),
                calls: RefCell::new(0),
            };
            (service, tx)
        }

        pub fn call_count(&self) -> usize {
            *self.calls.borrow()
        }
    }

    #[async_trait(?Send)]
    impl PasswordResetService for GatedResetService {
        async fn reset_user_password(&self, _email: &str) -> Result<(), PasswordResetError> {
            *self.calls.borrow_mut() += 1;
            let gate = self.gate.borrow_mut().take();
            match gate {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(PasswordResetError::from_code(None, "gate dropped"))),
                None => Err(PasswordResetError::from_code(None, "gate already used")),
            }
        }
    }
}
