use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::i18n::{t, use_locale, Msg};
use crate::models::search::SearchRecord;
use crate::search_state::store::SearchStore;
use crate::search_state::url::{record_to_pairs, to_query_string};

/// Keyword/location search form shown in the top navigation.
///
/// Submitting writes a fresh [`SearchRecord`] to the store (mirroring it
/// to local storage) and navigates to the results page, where the URL
/// becomes authoritative. A CV context already present on the record is
/// carried over.
#[component]
pub fn SearchBar() -> impl IntoView {
    let locale = use_locale();
    let store = expect_context::<SearchStore>();
    let navigate = use_navigate();

    let (keyword, set_keyword) = signal(String::new());
    let (location, set_location) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let current = store.read_untracked();
        let record = SearchRecord {
            keyword: Some(keyword.get_untracked().trim().to_string()).filter(|s| !s.is_empty()),
            location: Some(location.get_untracked().trim().to_string()).filter(|s| !s.is_empty()),
            file_reference: current.as_ref().and_then(|r| r.file_reference.clone()),
            candidate_label: current.as_ref().and_then(|r| r.candidate_label.clone()),
            created_at: store.now_millis(),
        };

        if !record.is_active() {
            return;
        }

        let query = to_query_string(&record_to_pairs(&record));
        store.write(Some(record));
        navigate(
            &format!("{}?{}", locale.href("/search"), query),
            NavigateOptions::default(),
        );
    };

    view! {
        <form class="search-bar" on:submit=on_submit>
            <input
                type="text"
                placeholder=t(locale, Msg::SearchPlaceholderKeyword)
                on:input=move |ev| set_keyword.set(event_target_value(&ev))
                prop:value=keyword
            />
            <input
                type="text"
                placeholder=t(locale, Msg::SearchPlaceholderLocation)
                on:input=move |ev| set_location.set(event_target_value(&ev))
                prop:value=location
            />
            <button type="submit">{t(locale, Msg::SearchSubmit)}</button>
        </form>
    }
}
