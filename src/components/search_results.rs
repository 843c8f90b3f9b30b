use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;

use crate::components::cv_upload::CvUpload;
use crate::components::filter_panel::FilterPanel;
use crate::i18n::{t, use_locale, Locale, Msg};
use crate::models::job::JobListing;
use crate::models::search::SearchParams;
use crate::search_state::url::{pairs_from_query_map, params_from_pairs, params_to_pairs, to_query_string};
use crate::services::directory::JobDirectory;

/// Href of the results page for the given params, facets included.
pub fn search_page_href(locale: Locale, params: &SearchParams) -> String {
    let query = to_query_string(&params_to_pairs(params));
    if query.is_empty() {
        locale.href("/search")
    } else {
        format!("{}?{}", locale.href("/search"), query)
    }
}

/// The job-search results page.
///
/// All search intent lives in the URL: params are reconstructed fresh
/// from the query map on every render and the result resource is keyed by
/// them, so the latest navigation always wins over in-flight responses.
#[component]
pub fn SearchResultsPage() -> impl IntoView {
    let locale = use_locale();
    let query = use_query_map();
    let directory = expect_context::<Arc<dyn JobDirectory>>();
    let navigate = use_navigate();

    let params = Memo::new(move |_| params_from_pairs(&pairs_from_query_map(&query.get())));

    let results = Resource::new(
        move || params.get(),
        move |params| {
            let directory = directory.clone();
            async move { directory.search_jobs(&params).await }
        },
    );

    // Page changes are regular navigations: history push plus the scroll
    // reset the rest of the adapter's writes suppress.
    let go_to_page = move |page: u32| {
        let mut next = params.get_untracked();
        next.page = page.max(1);
        navigate(&search_page_href(locale, &next), NavigateOptions::default());
    };
    let go_prev = go_to_page.clone();
    let go_next = go_to_page;

    view! {
        <div class="search-page">
            <FilterPanel params=params/>
            <section class="search-results">
                {move || params.get().candidate_label.map(|label| view! {
                    <p class="cv-banner">"Ranking results for " <strong>{label}</strong></p>
                })}
                <CvUpload/>
                <Suspense fallback=move || view! { <p>{t(locale, Msg::SearchLoading)}</p> }>
                    {move || results.get().map(|res| match res {
                        Ok(page) => {
                            let total_pages = page.total_pages;
                            let current = page.page;
                            let has_next = page.has_next_page;
                            let listings = page.items.clone();
                            let prev = go_prev.clone();
                            let next = go_next.clone();
                            view! {
                                <div class="result-list">
                                <p class="result-count">{page.total_count} " results"</p>
                                {if listings.is_empty() {
                                    Some(view! { <p>{t(locale, Msg::SearchNoResults)}</p> })
                                } else {
                                    None
                                }}
                                <ul class="job-list">
                                    {listings.into_iter().map(|job| view! {
                                        <JobCard job=job/>
                                    }).collect_view()}
                                </ul>
                                <nav class="pagination">
                                    <button
                                        disabled=move || current <= 1
                                        on:click=move |_| prev(current - 1)
                                    >
                                        {t(locale, Msg::PagePrevious)}
                                    </button>
                                    <span>"Page " {current} " / " {total_pages.max(1)}</span>
                                    <button
                                        disabled=move || !has_next
                                        on:click=move |_| next(current + 1)
                                    >
                                        {t(locale, Msg::PageNext)}
                                    </button>
                                </nav>
                                </div>
                            }.into_any()
                        }
                        Err(e) => view! {
                            <p class="error">{t(locale, Msg::ErrorGeneric)} " (" {e.to_string()} ")"</p>
                        }.into_any(),
                    })}
                </Suspense>
            </section>
        </div>
    }
}

/// One result-list entry linking to the details page. The CV context is
/// carried along in the link so details resolve against the same CV.
#[component]
fn JobCard(job: JobListing) -> impl IntoView {
    let locale = use_locale();
    let query = use_query_map();

    let href = {
        let id = job.id.clone();
        move || {
            let params = params_from_pairs(&pairs_from_query_map(&query.get()));
            let mut pairs = Vec::new();
            if let Some(file_reference) = params.file_reference {
                pairs.push(("fileId".to_string(), file_reference));
            }
            if let Some(label) = params.candidate_label {
                pairs.push(("cv".to_string(), label));
            }
            let base = locale.href(&format!("/job-details/{id}"));
            if pairs.is_empty() {
                base
            } else {
                format!("{}?{}", base, to_query_string(&pairs))
            }
        }
    };

    view! {
        <li class="job-card">
            <a href=href>
                <h4>{job.title}</h4>
                <p>{job.company} " — " {job.location}</p>
                <p class="job-meta">
                    {job.industry} " · " {job.experience_level.as_str()} " · "
                    {job.salary_min} "–" {job.salary_max} " EUR"
                </p>
            </a>
        </li>
    }
}
