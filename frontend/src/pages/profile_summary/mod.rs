use leptos::*;

mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

use panel::ProfileSummaryPanel;

#[component]
pub fn ProfileSummaryPage() -> impl IntoView {
    view! { <ProfileSummaryPanel /> }
}
