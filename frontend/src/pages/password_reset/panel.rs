use super::{
    types::ScreenSection,
    view_model::{use_password_reset_view_model, PasswordResetViewModel},
};
use crate::{
    components::{
        common::{Button, LinkButton},
        layout::{Container, ErrorMessage, LoadingSpinner, SuccessMessage},
    },
    router::SIGN_IN_PATH,
};
use leptos::*;

#[component]
pub fn PasswordResetPanel() -> impl IntoView {
    let vm = use_password_reset_view_model();
    view! { <PasswordResetView vm=vm /> }
}

#[component]
pub fn PasswordResetView(vm: PasswordResetViewModel) -> impl IntoView {
    let messages = vm.messages.clone();
    let title = messages.t("password_reset.title");
    let instructions = messages.t("password_reset.instructions");
    let section = vm.section();

    view! {
        <Container>
            <h1 class="mb-8 text-secondary text-4xl">{title}</h1>
            <p class="mb-4">{instructions}</p>
            {move || match section.get() {
                ScreenSection::Progress => view! { <LoadingSpinner /> }.into_view(),
                ScreenSection::Form { error } => {
                    view! { <ResetForm vm=vm.clone() error=error /> }.into_view()
                }
                ScreenSection::Confirmation => {
                    let sign_in = messages.t("password_reset.sign_in");
                    view! {
                        <SuccessMessage message=messages.t("password_reset.sent") />
                        <LinkButton href=SIGN_IN_PATH>{sign_in}</LinkButton>
                    }
                        .into_view()
                }
            }}
        </Container>
    }
}

#[component]
fn ResetForm(vm: PasswordResetViewModel, error: Option<String>) -> impl IntoView {
    let email = vm.email;
    let field_error = vm.field_error;
    let email_label = vm.messages.t("password_reset.email_label");
    let submit_label = vm.messages.t("password_reset.submit");

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.on_submit();
    };

    view! {
        {error.map(|message| {
            view! {
                <ErrorMessage message=message />
                <div class="my-4"></div>
            }
        })}
        <form
            on:submit=on_submit
            class="grid md:grid-cols-[min-content_1fr] flex-wrap gap-4 justify-center text-left items-center max-w-md mx-auto"
        >
            <label for="email">{email_label}</label>
            <input
                type="email"
                id="email"
                name="email"
                autocomplete="email"
                required
                class="appearance-none rounded-md block w-full px-3 py-2 border border-form-control-border bg-form-control-bg text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus sm:text-sm"
                prop:value=email
                on:input=move |ev| {
                    email.set(event_target_value(&ev));
                }
            />
            {move || {
                field_error
                    .get()
                    .map(|msg| {
                        view! { <p class="col-span-full text-sm text-status-error-text">{msg}</p> }
                    })
            }}
            <Button submit=true class="col-span-full mx-auto w-fit">
                {submit_label}
            </Button>
        </form>
    }
}
