use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::feedback::submit_summary_feedback;
use crate::i18n::{t, use_locale, Msg};
use crate::models::job::{AiSummary, SalesPitch};
use crate::services::directory::JobDirectory;
use crate::util::generation::GenerationCounter;

/// AI summary and sales pitch section of the job details page.
///
/// Generation runs on demand. Every spawned call carries a generation
/// token; a response only lands if its token is still the latest, so
/// hammering the button cannot interleave stale responses.
#[component]
pub fn AiPanel(job_id: String) -> impl IntoView {
    let locale = use_locale();
    let directory = expect_context::<Arc<dyn JobDirectory>>();

    let summary = RwSignal::new(None::<AiSummary>);
    let summary_busy = RwSignal::new(false);
    let summary_error = RwSignal::new(None::<String>);
    let summary_generations = GenerationCounter::new();

    let pitch = RwSignal::new(None::<SalesPitch>);
    let pitch_busy = RwSignal::new(false);
    let pitch_error = RwSignal::new(None::<String>);
    let pitch_generations = GenerationCounter::new();

    let feedback_done = RwSignal::new(false);

    let generate_summary = {
        let directory = directory.clone();
        let job_id = job_id.clone();
        let generations = summary_generations.clone();
        move |_| {
            let token = generations.begin();
            let directory = directory.clone();
            let job_id = job_id.clone();
            let generations = generations.clone();
            summary_busy.set(true);
            summary_error.set(None);
            feedback_done.set(false);
            spawn_local(async move {
                let result = directory.ai_summary(&job_id).await;
                if !generations.is_current(token) {
                    return;
                }
                summary_busy.set(false);
                match result {
                    Ok(generated) => summary.set(Some(generated)),
                    Err(err) => summary_error.set(Some(err.to_string())),
                }
            });
        }
    };

    let generate_pitch = {
        let directory = directory.clone();
        let job_id = job_id.clone();
        let generations = pitch_generations.clone();
        move |_| {
            let token = generations.begin();
            let directory = directory.clone();
            let job_id = job_id.clone();
            let generations = generations.clone();
            pitch_busy.set(true);
            pitch_error.set(None);
            spawn_local(async move {
                let result = directory.sales_pitch(&job_id).await;
                if !generations.is_current(token) {
                    return;
                }
                pitch_busy.set(false);
                match result {
                    Ok(generated) => pitch.set(Some(generated)),
                    Err(err) => pitch_error.set(Some(err.to_string())),
                }
            });
        }
    };

    let send_feedback = move |positive: bool| {
        let Some(current) = summary.get_untracked() else {
            return;
        };
        let rating = Some(if positive { "positive" } else { "negative" }.to_string());
        spawn_local(async move {
            let sent = submit_summary_feedback(
                current.summary_id.clone(),
                rating,
                chrono::Utc::now().timestamp_millis(),
            )
            .await;
            match sent {
                Ok(_) => feedback_done.set(true),
                Err(err) => tracing::warn!("feedback submission failed: {err}"),
            }
        });
    };
    let feedback_up = send_feedback.clone();
    let feedback_down = send_feedback;

    view! {
        <section class="ai-panel">
            <div class="ai-summary">
                <h3>{t(locale, Msg::AiSummaryHeadline)}</h3>
                <button on:click=generate_summary disabled=move || summary_busy.get()>
                    {move || if summary_busy.get() {
                        t(locale, Msg::AiGenerating)
                    } else {
                        t(locale, Msg::AiGenerate)
                    }}
                </button>
                {move || summary_error.get().map(|err| view! {
                    <p class="error">{t(locale, Msg::ErrorGeneric)} " (" {err} ")"</p>
                })}
                {move || summary.get().map(|generated| view! {
                    <div class="summary-body">
                        <p>{generated.text}</p>
                        <ul>
                            {generated.highlights.into_iter().map(|h| view! { <li>{h}</li> }).collect_view()}
                        </ul>
                    </div>
                })}
                {move || summary.get().is_some().then(|| {
                    let up = feedback_up.clone();
                    let down = feedback_down.clone();
                    if feedback_done.get() {
                        view! { <p class="feedback-thanks">{t(locale, Msg::FeedbackThanks)}</p> }.into_any()
                    } else {
                        view! {
                            <div class="feedback-buttons">
                                <button on:click=move |_| up(true)>
                                    {t(locale, Msg::FeedbackHelpful)}
                                </button>
                                <button on:click=move |_| down(false)>
                                    {t(locale, Msg::FeedbackNotHelpful)}
                                </button>
                            </div>
                        }.into_any()
                    }
                })}
            </div>

            <div class="sales-pitch">
                <h3>{t(locale, Msg::AiPitchHeadline)}</h3>
                <button on:click=generate_pitch disabled=move || pitch_busy.get()>
                    {move || if pitch_busy.get() {
                        t(locale, Msg::AiGenerating)
                    } else {
                        t(locale, Msg::AiGenerate)
                    }}
                </button>
                {move || pitch_error.get().map(|err| view! {
                    <p class="error">{t(locale, Msg::ErrorGeneric)} " (" {err} ")"</p>
                })}
                {move || pitch.get().map(|generated| view! {
                    <div class="pitch-body">
                        <h4>{generated.subject}</h4>
                        {generated.paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
                    </div>
                })}
            </div>
        </section>
    }
}
