use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional)] submit: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=if submit { "submit" } else { "button" }
            class=move || {
                format!(
                    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold transition-colors duration-200 {} {}",
                    variant.classes(),
                    class
                )
            }
        >
            {children()}
        </button>
    }
}

/// Styled anchor for navigation to screens owned elsewhere.
#[component]
pub fn LinkButton(#[prop(into)] href: String, children: Children) -> impl IntoView {
    view! {
        <a
            href=href
            class=format!(
                "max-w-xs mx-auto mt-4 block rounded-md px-4 py-2 font-bold {}",
                ButtonVariant::Primary.classes(),
            )
        >
            {children()}
        </a>
    }
}
