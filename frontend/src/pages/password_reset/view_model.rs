use super::{
    repository::{PasswordResetError, PasswordResetRepository},
    types::{failure_message, ResetFormValues, ResetState, ScreenSection},
    utils::collect_reset_form,
};
use crate::{
    api::ApiClient,
    i18n::{use_messages, Messages},
};
use leptos::*;
use std::{cell::Cell, future::Future, rc::Rc};

/// Owns the reset screen state; the only writer of [`ResetState`].
#[derive(Clone)]
pub struct PasswordResetController {
    state: RwSignal<ResetState>,
    repository: PasswordResetRepository,
    messages: Messages,
    disposed: Rc<Cell<bool>>,
}

impl PasswordResetController {
    pub fn new(repository: PasswordResetRepository, messages: Messages) -> Self {
        Self {
            state: create_rw_signal(ResetState::Idle),
            repository,
            messages,
            disposed: Rc::new(Cell::new(false)),
        }
    }

    pub fn state(&self) -> Signal<ResetState> {
        self.state.into()
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(ResetState::is_loading))
    }

    /// Moves to `Submitting` right away; the returned future performs the
    /// request and applies its outcome.
    pub fn submit(&self, values: ResetFormValues) -> impl Future<Output = ()> + 'static {
        self.state.set(ResetState::Submitting);
        log::info!("Requesting password reset email");
        let controller = self.clone();
        async move {
            let outcome = controller.repository.request_reset(&values.email).await;
            controller.apply(outcome);
        }
    }

    fn apply(&self, outcome: Result<(), PasswordResetError>) {
        if self.disposed.get() {
            log::debug!("Discarding password reset result for a closed screen");
            return;
        }
        let next = match outcome {
            Ok(()) => ResetState::Sent,
            Err(err) => {
                log::warn!(
                    "Password reset request failed (code: {})",
                    err.code().unwrap_or("none")
                );
                ResetState::Failed(failure_message(&err, &*self.messages))
            }
        };
        if self.state.try_set(next).is_some() {
            log::debug!("Password reset state was already disposed");
        }
    }

    /// Marks the screen as gone; results arriving afterwards are dropped.
    pub fn dispose(&self) {
        self.disposed.set(true);
    }
}

#[derive(Clone)]
pub struct PasswordResetViewModel {
    pub email: RwSignal<String>,
    pub field_error: RwSignal<Option<String>>,
    pub controller: PasswordResetController,
    pub messages: Messages,
}

impl PasswordResetViewModel {
    pub fn new(repository: PasswordResetRepository, messages: Messages) -> Self {
        Self {
            email: create_rw_signal(String::new()),
            field_error: create_rw_signal(None),
            controller: PasswordResetController::new(repository, messages.clone()),
            messages,
        }
    }

    /// Builds the view model under the current reactive owner. Once that owner
    /// is cleaned up, a request still in flight no longer touches the screen.
    pub fn scoped(repository: PasswordResetRepository, messages: Messages) -> Self {
        let vm = Self::new(repository, messages);
        let controller = vm.controller.clone();
        on_cleanup(move || controller.dispose());
        vm
    }

    pub fn section(&self) -> Signal<ScreenSection> {
        let state = self.controller.state();
        Signal::derive(move || state.with(|state| ScreenSection::from(state)))
    }

    pub fn on_submit(&self) {
        if let Some(task) = self.prepare_submit() {
            spawn_local(task);
        }
    }

    /// Validates the form and starts the request, unless the form is not
    /// accepting input (request in flight or email already sent).
    pub(crate) fn prepare_submit(&self) -> Option<impl Future<Output = ()> + 'static> {
        if !self.controller.state.with_untracked(ResetState::shows_form) {
            log::debug!("Ignoring password reset submit while the form is hidden");
            return None;
        }
        match collect_reset_form(&self.email.get_untracked()) {
            Ok(values) => {
                self.field_error.set(None);
                Some(self.controller.submit(values))
            }
            Err(rejection) => {
                self.field_error
                    .set(Some(self.messages.t(rejection.message_key())));
                None
            }
        }
    }
}

pub fn use_password_reset_view_model() -> PasswordResetViewModel {
    let repository = use_context::<PasswordResetRepository>().unwrap_or_else(|| {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        PasswordResetRepository::new_with_client(Rc::new(api))
    });
    PasswordResetViewModel::scoped(repository, use_messages())
}
