use leptos::*;
use leptos_router::*;

use crate::{
    i18n::{provide_messages, I18nResolver},
    pages::{PasswordResetPage, ProfileSummaryPage},
};
use std::rc::Rc;

pub const PASSWORD_RESET_PATH: &str = "/profile/_edit/passwordReset";
pub const PROFILE_SUMMARY_PATH: &str = "/profile/_edit/summary";

/// Sign-in screen, served outside this app.
pub const SIGN_IN_PATH: &str = "/auth/login";
/// Next step of the profile editing flow, served outside this app.
pub const PROFILE_CONTINUE_PATH: &str = "/profile/edit/standOut";

pub const ROUTE_PATHS: &[&str] = &[PASSWORD_RESET_PATH, PROFILE_SUMMARY_PATH];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    provide_messages(Rc::new(I18nResolver::from_config()));
    view! {
        <Router>
            <Routes>
                <Route path=PASSWORD_RESET_PATH view=PasswordResetPage/>
                <Route path=PROFILE_SUMMARY_PATH view=ProfileSummaryPage/>
            </Routes>
        </Router>
    }
}
