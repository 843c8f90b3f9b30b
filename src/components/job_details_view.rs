use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::components::ai_panel::AiPanel;
use crate::i18n::{t, use_locale, Msg};
use crate::models::job::{CompanyRelationship, JobDetails};
use crate::services::directory::JobDirectory;
use crate::util::generation::GenerationCounter;

/// Job details page: full posting, favorite toggle, company relationship
/// and the AI panel.
#[component]
pub fn JobDetailsPage() -> impl IntoView {
    let locale = use_locale();
    let params = use_params_map();
    let query = use_query_map();
    let directory = expect_context::<Arc<dyn JobDirectory>>();

    let job_id = Memo::new(move |_| params.get().get("id").unwrap_or_default());

    let details = Resource::new(
        move || (job_id.get(), query.get().get("fileId")),
        move |(id, file_reference)| {
            let directory = directory.clone();
            async move { directory.job_details(&id, file_reference.as_deref()).await }
        },
    );

    view! {
        <div class="job-details-page">
            <Suspense fallback=move || view! { <p>{t(locale, Msg::SearchLoading)}</p> }>
                {move || details.get().map(|res| match res {
                    Ok(Some(details)) => view! { <DetailsBody details=details/> }.into_any(),
                    Ok(None) => view! { <p>"Job posting not found."</p> }.into_any(),
                    Err(e) => view! {
                        <p class="error">{t(locale, Msg::ErrorGeneric)} " (" {e.to_string()} ")"</p>
                    }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

/// The resolved details, with optimistic favorite/relationship updates.
///
/// Mutations are optimistic: the UI flips immediately, the directory call
/// runs in the background and the view is reverted if it fails. Responses
/// are gated by a generation counter so rapid toggling cannot land out of
/// order.
#[component]
fn DetailsBody(details: JobDetails) -> impl IntoView {
    let locale = use_locale();
    let directory = expect_context::<Arc<dyn JobDirectory>>();

    let job_id = details.listing.id.clone();
    let favorite = RwSignal::new(details.listing.favorite);
    let relationship = RwSignal::new(details.listing.relationship);
    let favorite_generations = GenerationCounter::new();
    let relationship_generations = GenerationCounter::new();

    let toggle_favorite = {
        let directory = directory.clone();
        let job_id = job_id.clone();
        let generations = favorite_generations.clone();
        move |_| {
            let token = generations.begin();
            let was = favorite.get_untracked();
            favorite.set(!was);

            let directory = directory.clone();
            let job_id = job_id.clone();
            let generations = generations.clone();
            spawn_local(async move {
                let result = directory.toggle_favorite(&job_id).await;
                if !generations.is_current(token) {
                    return;
                }
                match result {
                    Ok(value) => favorite.set(value),
                    Err(err) => {
                        tracing::warn!("favorite toggle failed: {err}");
                        favorite.set(was);
                    }
                }
            });
        }
    };

    let change_relationship = {
        let directory = directory.clone();
        let job_id = job_id.clone();
        let generations = relationship_generations.clone();
        move |ev: leptos::ev::Event| {
            let Some(next) = CompanyRelationship::from_str_ci(&event_target_value(&ev)) else {
                return;
            };
            let token = generations.begin();
            let was = relationship.get_untracked();
            relationship.set(next);

            let directory = directory.clone();
            let job_id = job_id.clone();
            let generations = generations.clone();
            spawn_local(async move {
                let result = directory.set_relationship(&job_id, next).await;
                if !generations.is_current(token) {
                    return;
                }
                if let Err(err) = result {
                    tracing::warn!("relationship update failed: {err}");
                    relationship.set(was);
                }
            });
        }
    };

    let listing = details.listing.clone();

    view! {
        <article class="job-details">
            <header>
                <h2>{listing.title.clone()}</h2>
                <p>{listing.company.clone()} " — " {listing.location.clone()}</p>
                <p class="job-meta">
                    {listing.industry.clone()} " · " {listing.experience_level.as_str()} " · "
                    {listing.contract_type.clone()} " · "
                    {listing.salary_min} "–" {listing.salary_max} " EUR"
                </p>
                {details.match_score.map(|score| view! {
                    <p class="match-score">"CV match: " {score} "%"</p>
                })}
            </header>

            <div class="job-actions">
                <button on:click=toggle_favorite>
                    {move || if favorite.get() {
                        t(locale, Msg::DetailsUnfavorite)
                    } else {
                        t(locale, Msg::DetailsFavorite)
                    }}
                </button>
                <label>
                    {t(locale, Msg::DetailsRelationship)}
                    <select on:change=change_relationship prop:value=move || relationship.get().as_str()>
                        <option value="none">"None"</option>
                        <option value="existing_client">"Existing client"</option>
                        <option value="follow">"Follow"</option>
                        <option value="blacklist">"Blacklist"</option>
                    </select>
                </label>
            </div>

            <p class="description">{details.description.clone()}</p>

            <h3>{t(locale, Msg::DetailsRequirements)}</h3>
            <ul>
                {details.requirements.clone().into_iter().map(|r| view! { <li>{r}</li> }).collect_view()}
            </ul>

            <p class="contact">{details.contact_name.clone()} " · " {details.contact_email.clone()}</p>

            <AiPanel job_id=job_id/>
        </article>
    }
}
