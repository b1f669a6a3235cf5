use super::{
    utils::{SummaryItem, SummaryStatus},
    view_model::use_profile_summary_view_model,
};
use crate::{
    components::{
        common::LinkButton,
        layout::{Container, ErrorMessage, LoadingSpinner},
    },
    i18n::Messages,
    router::PROFILE_CONTINUE_PATH,
};
use leptos::*;

#[component]
pub fn ProfileSummaryPanel() -> impl IntoView {
    let vm = use_profile_summary_view_model();
    let status = vm.status();
    view! { <ProfileSummaryView status=status messages=vm.messages /> }
}

#[component]
pub fn ProfileSummaryView(
    #[prop(into)] status: Signal<SummaryStatus>,
    messages: Messages,
) -> impl IntoView {
    view! {
        <Container>
            {move || match status.get() {
                SummaryStatus::Loading => view! { <LoadingSpinner /> }.into_view(),
                SummaryStatus::Failed(message) => view! { <ErrorMessage message=message /> }.into_view(),
                SummaryStatus::Ready(items) => {
                    view! { <SummaryGrid items=items messages=messages.clone() /> }.into_view()
                }
            }}
        </Container>
    }
}

#[component]
fn SummaryGrid(items: Vec<SummaryItem>, messages: Messages) -> impl IntoView {
    let continue_label = messages.t("profile_summary.continue");
    let rows = items
        .into_iter()
        .map(|item| match item {
            SummaryItem::Link { icon, text, href } => view! {
                <h3>
                    <i class=icon.class() aria-label=messages.t(icon.label_key())></i>
                </h3>
                <a href=href class="text-left text-primary underline">{text}</a>
            }
            .into_view(),
            SummaryItem::Field { label, value } => view! {
                <h3>{label}</h3>
                <p class="text-left text-primary">{value}</p>
            }
            .into_view(),
            SummaryItem::Divider => view! { <div class="col-span-2"></div> }.into_view(),
        })
        .collect_view();

    view! {
        <div class="grid grid-cols-[max-content_max-content] text-right gap-x-8 gap-y-4 mx-auto mt-8 w-auto justify-center">
            {rows}
        </div>
        <div class="flex flex-row gap-4 self-center justify-center my-8">
            <LinkButton href=PROFILE_CONTINUE_PATH>{continue_label}</LinkButton>
        </div>
    }
}
