use crate::api::{ApiError, ProfileResponse};
use crate::i18n::MessageResolver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryIcon {
    Email,
    Phone,
}

impl SummaryIcon {
    pub fn class(&self) -> &'static str {
        match self {
            SummaryIcon::Email => "fas fa-envelope",
            SummaryIcon::Phone => "fas fa-phone",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            SummaryIcon::Email => "profile_summary.email",
            SummaryIcon::Phone => "profile_summary.phone",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryItem {
    Link {
        icon: SummaryIcon,
        text: String,
        href: String,
    },
    Field {
        label: String,
        value: String,
    },
    Divider,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryStatus {
    Loading,
    Failed(String),
    Ready(Vec<SummaryItem>),
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn field(messages: &dyn MessageResolver, key: &str, value: impl Into<String>) -> SummaryItem {
    SummaryItem::Field {
        label: messages.t(key),
        value: value.into(),
    }
}

/// Title for an activity, in its gendered form when the catalog has one.
fn activity_title(activity: &str, gender: Option<&str>, messages: &dyn MessageResolver) -> String {
    if let Some(gender) = gender {
        let gendered = format!("{}_{}", activity, gender);
        let title = messages.resolve(&gendered, Some("activities"));
        if title != gendered {
            return title;
        }
    }
    messages.resolve(activity, Some("activities"))
}

pub fn summary_items(profile: &ProfileResponse, messages: &dyn MessageResolver) -> Vec<SummaryItem> {
    let mut items = vec![
        SummaryItem::Link {
            icon: SummaryIcon::Email,
            text: profile.primary_email.clone(),
            href: format!("mailto:{}", profile.primary_email),
        },
        SummaryItem::Divider,
    ];

    let name_key = if profile.is_legal_entity() {
        "profile_summary.company_name"
    } else {
        "profile_summary.name"
    };
    items.push(field(messages, name_key, profile.full_name.clone()));

    if let Some(nickname) = present(&profile.nickname) {
        items.push(field(messages, "profile_summary.nickname", nickname));
    }
    let gender = present(&profile.gender).filter(|_| !profile.is_legal_entity());
    if let Some(gender) = gender {
        items.push(field(
            messages,
            "profile_summary.gender",
            messages.resolve(gender, Some("genders")),
        ));
    }
    items.push(SummaryItem::Divider);

    let activity = present(&profile.primary_activity)
        .map(|activity| activity_title(activity, gender, messages))
        .unwrap_or_default();
    items.push(field(messages, "profile_summary.primary_activity", activity));
    items.push(SummaryItem::Divider);

    items.push(field(messages, "profile_summary.city", profile.city.clone()));
    items.push(field(messages, "profile_summary.state", profile.state.clone()));
    items.push(field(
        messages,
        "profile_summary.country",
        messages.resolve(&profile.country, Some("countries")),
    ));

    let phone = profile.primary_phone().unwrap_or_default();
    items.push(SummaryItem::Link {
        icon: SummaryIcon::Phone,
        text: phone.to_string(),
        href: format!("tel:{}", phone),
    });
    items
}

pub fn summary_status(
    loaded: Option<&Result<Option<ProfileResponse>, ApiError>>,
    messages: &dyn MessageResolver,
) -> SummaryStatus {
    match loaded {
        None => SummaryStatus::Loading,
        Some(Err(err)) => SummaryStatus::Failed(err.to_string()),
        Some(Ok(None)) => SummaryStatus::Failed(messages.t("profile_summary.not_found")),
        Some(Ok(Some(profile))) => SummaryStatus::Ready(summary_items(profile, messages)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::I18nResolver;

    fn person() -> ProfileResponse {
        ProfileResponse {
            primary_email: "ana@example.com".into(),
            full_name: "Ana López".into(),
            nickname: Some("Anita".into()),
            kind: "physical".into(),
            gender: Some("female".into()),
            primary_activity: Some("music".into()),
            city: "Guadalajara".into(),
            state: "Jalisco".into(),
            country: "MX".into(),
            phone_numbers: vec!["+52 33 1234 5678".into()],
        }
    }

    fn labels(items: &[SummaryItem]) -> Vec<String> {
        items
            .iter()
            .filter_map(|item| match item {
                SummaryItem::Field { label, .. } => Some(label.clone()),
                _ => None,
            })
            .collect()
    }

    fn value_of(items: &[SummaryItem], wanted: &str) -> Option<String> {
        items.iter().find_map(|item| match item {
            SummaryItem::Field { label, value } if label == wanted => Some(value.clone()),
            _ => None,
        })
    }

    #[test]
    fn person_summary_lists_identity_and_contact() {
        let en = I18nResolver::new("en");
        let items = summary_items(&person(), &en);
        assert_eq!(
            items.first(),
            Some(&SummaryItem::Link {
                icon: SummaryIcon::Email,
                text: "ana@example.com".into(),
                href: "mailto:ana@example.com".into(),
            })
        );
        assert_eq!(
            labels(&items),
            vec![
                "Name",
                "Nickname",
                "Gender",
                "Primary activity",
                "City",
                "State",
                "Country"
            ]
        );
        assert_eq!(value_of(&items, "Gender").as_deref(), Some("Female"));
        assert_eq!(value_of(&items, "Primary activity").as_deref(), Some("Music"));
        assert_eq!(value_of(&items, "Country").as_deref(), Some("Mexico"));
        assert_eq!(
            items.last(),
            Some(&SummaryItem::Link {
                icon: SummaryIcon::Phone,
                text: "+52 33 1234 5678".into(),
                href: "tel:+52 33 1234 5678".into(),
            })
        );
    }

    #[test]
    fn legal_entity_uses_company_name_and_hides_gender() {
        let en = I18nResolver::new("en");
        let profile = ProfileResponse {
            kind: "moral".into(),
            nickname: None,
            ..person()
        };
        let items = summary_items(&profile, &en);
        let labels = labels(&items);
        assert_eq!(labels[0], "Company name");
        assert!(!labels.contains(&"Gender".to_string()));
        assert!(!labels.contains(&"Nickname".to_string()));
    }

    #[test]
    fn absent_optional_fields_are_suppressed() {
        let en = I18nResolver::new("en");
        let profile = ProfileResponse {
            nickname: Some("  ".into()),
            gender: None,
            primary_activity: None,
            phone_numbers: vec![],
            ..person()
        };
        let items = summary_items(&profile, &en);
        let labels = labels(&items);
        assert!(!labels.contains(&"Nickname".to_string()));
        assert!(!labels.contains(&"Gender".to_string()));
        assert_eq!(value_of(&items, "Primary activity").as_deref(), Some(""));
        assert!(matches!(
            items.last(),
            Some(SummaryItem::Link { text, .. }) if text.is_empty()
        ));
    }

    #[test]
    fn primary_activity_uses_gendered_title_when_available() {
        let es = I18nResolver::new("es");
        let profile = ProfileResponse {
            primary_activity: Some("dance".into()),
            ..person()
        };
        let items = summary_items(&profile, &es);
        assert_eq!(value_of(&items, "Actividad Principal").as_deref(), Some("Bailarina"));

        let profile = ProfileResponse {
            gender: Some("other".into()),
            ..profile
        };
        let items = summary_items(&profile, &es);
        assert_eq!(value_of(&items, "Actividad Principal").as_deref(), Some("Danza"));
    }

    #[test]
    fn legal_entity_activity_ignores_gender() {
        let es = I18nResolver::new("es");
        let profile = ProfileResponse {
            kind: "moral".into(),
            primary_activity: Some("dance".into()),
            ..person()
        };
        let items = summary_items(&profile, &es);
        assert_eq!(value_of(&items, "Actividad Principal").as_deref(), Some("Danza"));
    }

    #[test]
    fn summary_status_covers_every_load_outcome() {
        let en = I18nResolver::new("en");
        assert_eq!(summary_status(None, &en), SummaryStatus::Loading);
        assert_eq!(
            summary_status(Some(&Err(ApiError::unknown("boom"))), &en),
            SummaryStatus::Failed("boom".into())
        );
        assert_eq!(
            summary_status(Some(&Ok(None)), &en),
            SummaryStatus::Failed("No user could be found".into())
        );
        assert!(matches!(
            summary_status(Some(&Ok(Some(person()))), &en),
            SummaryStatus::Ready(items) if !items.is_empty()
        ));
    }
}
