use super::{
    repository::ProfileRepository,
    utils::{summary_status, SummaryStatus},
};
use crate::{
    api::{ApiClient, ApiError, ProfileResponse},
    i18n::{use_messages, Messages},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct ProfileSummaryViewModel {
    pub profile: Resource<(), Result<Option<ProfileResponse>, ApiError>>,
    pub messages: Messages,
}

impl ProfileSummaryViewModel {
    pub fn status(&self) -> Signal<SummaryStatus> {
        let profile = self.profile;
        let messages = self.messages.clone();
        Signal::derive(move || summary_status(profile.get().as_ref(), &*messages))
    }
}

pub fn use_profile_summary_view_model() -> ProfileSummaryViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ProfileRepository::new_with_client(Rc::new(api));

    let profile = create_local_resource(
        || (),
        move |_| {
            let repo = repository.clone();
            async move {
                let loaded = repo.load_current().await;
                if let Err(err) = &loaded {
                    log::error!("Failed to load profile summary: {}", err);
                }
                loaded
            }
        },
    );

    ProfileSummaryViewModel {
        profile,
        messages: use_messages(),
    }
}
