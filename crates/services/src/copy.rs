//! Fixed strings the core writes into posts and toasts, resolved from the
//! Fluent resources under `locales/`.

use domains::{Locale, Notification};
use fluent_bundle::{FluentBundle, FluentResource};
use tracing::warn;
use unic_langid::{langid, LanguageIdentifier};

const EN_FTL: &str = include_str!("../locales/en.ftl");
const RU_FTL: &str = include_str!("../locales/ru.ftl");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCopy {
    /// Author recorded on posts created from the page.
    pub admin_author: String,
    /// Timestamp marker for freshly created posts.
    pub just_now: String,
    pub post_published: (String, String),
    pub post_deleted: (String, String),
    pub user_banned: (String, String),
    pub filters_saved: (String, String),
}

impl PageCopy {
    pub fn for_locale(locale: Locale) -> Self {
        let bundle = match locale {
            Locale::En => bundle(langid!("en"), EN_FTL),
            Locale::Ru => bundle(langid!("ru"), RU_FTL),
        };
        let pair = |title: &str, body: &str| (message(&bundle, title), message(&bundle, body));
        Self {
            admin_author: message(&bundle, "admin-author"),
            just_now: message(&bundle, "timestamp-just-now"),
            post_published: pair("post-published-title", "post-published-body"),
            post_deleted: pair("post-deleted-title", "post-deleted-body"),
            user_banned: pair("user-banned-title", "user-banned-body"),
            filters_saved: pair("filters-saved-title", "filters-saved-body"),
        }
    }

    pub fn english() -> Self {
        Self::for_locale(Locale::En)
    }

    pub fn russian() -> Self {
        Self::for_locale(Locale::Ru)
    }

    pub(crate) fn published_toast(&self) -> Notification {
        Notification::new(&self.post_published.0, &self.post_published.1)
    }

    pub(crate) fn deleted_toast(&self) -> Notification {
        Notification::new(&self.post_deleted.0, &self.post_deleted.1)
    }

    pub(crate) fn banned_toast(&self) -> Notification {
        Notification::destructive(&self.user_banned.0, &self.user_banned.1)
    }

    pub(crate) fn filters_saved_toast(&self) -> Notification {
        Notification::new(&self.filters_saved.0, &self.filters_saved.1)
    }
}

impl Default for PageCopy {
    fn default() -> Self {
        Self::english()
    }
}

fn bundle(lang: LanguageIdentifier, source: &str) -> FluentBundle<FluentResource> {
    let resource = FluentResource::try_new(source.to_string()).unwrap_or_else(|(res, errors)| {
        warn!(%lang, ?errors, "locale resource parsed with errors");
        res
    });
    let mut bundle = FluentBundle::new(vec![lang]);
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        warn!(?errors, "locale resource has duplicate messages");
    }
    bundle
}

/// Missing messages fall back to their id so the page still renders.
fn message(bundle: &FluentBundle<FluentResource>, id: &str) -> String {
    let Some(pattern) = bundle.get_message(id).and_then(|m| m.value()) else {
        warn!(id, "locale message missing");
        return id.to_string();
    };
    let mut errors = Vec::new();
    let text = bundle.format_pattern(pattern, None, &mut errors);
    if !errors.is_empty() {
        warn!(id, ?errors, "locale message formatted with errors");
    }
    text.into_owned()
}
