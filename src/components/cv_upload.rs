use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::i18n::{t, use_locale, Msg};
use crate::models::search::SearchRecord;
use crate::search_state::store::SearchStore;
use crate::search_state::url::{record_to_pairs, to_query_string};
use crate::services::cv::parse_cv_upload;

/// CV upload control.
///
/// A successful parse produces a file reference, writes it to the search
/// record and navigates to the results page so the ranking reflects the
/// CV. Rejected files show an inline retry card instead.
#[component]
pub fn CvUpload() -> impl IntoView {
    let locale = use_locale();
    let store = expect_context::<SearchStore>();
    let navigate = use_navigate();

    let (error, set_error) = signal(None::<String>);

    let on_change = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        match parse_cv_upload(&file.name(), file.size() as u64) {
            Ok(upload) => {
                set_error.set(None);

                let current = store.read_untracked();
                let record = SearchRecord {
                    keyword: current.as_ref().and_then(|r| r.keyword.clone()),
                    location: current.as_ref().and_then(|r| r.location.clone()),
                    file_reference: Some(upload.file_reference),
                    candidate_label: Some(upload.candidate_label),
                    created_at: store.now_millis(),
                };

                let query = to_query_string(&record_to_pairs(&record));
                store.write(Some(record));
                navigate(
                    &format!("{}?{}", locale.href("/search"), query),
                    NavigateOptions::default(),
                );
            }
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    view! {
        <div class="cv-upload">
            <label>
                {t(locale, Msg::CvUploadLabel)}
                <input type="file" accept=".pdf,.doc,.docx" on:change=on_change/>
            </label>
            {move || error.get().map(|message| view! {
                <div class="cv-upload-error">
                    <p class="error">{t(locale, Msg::CvUploadRejected)} ": " {message}</p>
                    <button type="button" on:click=move |_| set_error.set(None)>
                        {t(locale, Msg::CvUploadRetry)}
                    </button>
                </div>
            })}
        </div>
    }
}
