use leptos::*;

mod panel;
pub mod repository;
pub mod types;
pub mod utils;
pub mod view_model;

use panel::PasswordResetPanel;

#[component]
pub fn PasswordResetPage() -> impl IntoView {
    view! { <PasswordResetPanel /> }
}
