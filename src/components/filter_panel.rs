use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::components::search_results::search_page_href;
use crate::i18n::{t, use_locale, Msg};
use crate::models::search::{ExperienceLevel, SearchParams};

const INDUSTRIES: &[&str] = &[
    "software",
    "fintech",
    "automotive",
    "healthcare",
    "logistics",
    "consulting",
];
const CONTRACT_TYPES: &[&str] = &["festanstellung", "befristet", "freelance"];
const EDUCATION_LEVELS: &[&str] = &["bachelor", "master", "ausbildung", "none"];
const POSTING_PERIODS: &[&str] = &["1d", "7d", "30d"];
const PLACED_SCORES: &[&str] = &["high", "medium", "low"];
const CLIENT_STATUS: &[&str] = &["existing_client", "follow", "none"];
const WATCH_LISTS: &[&str] = &["favoriten"];

/// Facet filter sidebar for the results page.
///
/// Every change rewrites the URL (history replace, no scroll reset) and
/// resets pagination; the result list reacts to the URL, never to local
/// component state.
#[component]
pub fn FilterPanel(params: Memo<SearchParams>) -> impl IntoView {
    let locale = use_locale();
    let navigate = use_navigate();

    let apply = move |mut next: SearchParams| {
        next.page = 1;
        navigate(
            &search_page_href(locale, &next),
            NavigateOptions {
                replace: true,
                scroll: false,
                ..Default::default()
            },
        );
    };

    let toggle_facet = {
        let apply = apply.clone();
        Callback::new(move |(key, value): (&'static str, String)| {
            let mut next = params.get_untracked();
            let list = match key {
                "industry" => &mut next.filters.industry,
                "contract" => &mut next.filters.contract_type,
                "education" => &mut next.filters.education,
                "period" => &mut next.filters.posting_period,
                "score" => &mut next.filters.placed_score,
                "client" => &mut next.filters.client_status,
                "watch" => &mut next.filters.watch_lists,
                _ => return,
            };
            toggle(list, &value);
            apply(next);
        })
    };

    let toggle_level = {
        let apply = apply.clone();
        move |level: ExperienceLevel| {
            let mut next = params.get_untracked();
            if let Some(pos) = next.filters.experience_level.iter().position(|l| *l == level) {
                next.filters.experience_level.remove(pos);
            } else {
                next.filters.experience_level.push(level);
            }
            apply(next);
        }
    };

    let toggle_flag = {
        let apply = apply.clone();
        move |key: &'static str| {
            let mut next = params.get_untracked();
            match key {
                "paid" => next.filters.only_paid_ads = !next.filters.only_paid_ads,
                "headhunters" => {
                    next.filters.exclude_headhunters = !next.filters.exclude_headhunters
                }
                "clients" => next.filters.exclude_my_clients = !next.filters.exclude_my_clients,
                _ => return,
            }
            apply(next);
        }
    };

    let set_salary = {
        let apply = apply.clone();
        move |min: bool, raw: String| {
            let mut next = params.get_untracked();
            let value = raw.parse::<u32>().ok();
            if min {
                next.filters.salary.min = value;
            } else {
                next.filters.salary.max = value;
            }
            apply(next);
        }
    };

    let set_radius = {
        let apply = apply.clone();
        move |raw: String| {
            let mut next = params.get_untracked();
            next.filters.location_radius = raw.parse::<u32>().ok();
            apply(next);
        }
    };

    let toggle_level_junior = toggle_level.clone();
    let toggle_level_mid = toggle_level.clone();
    let toggle_level_senior = toggle_level.clone();
    let toggle_level_lead = toggle_level;
    let toggle_paid = toggle_flag.clone();
    let toggle_headhunters = toggle_flag.clone();
    let toggle_clients = toggle_flag;
    let set_salary_min = set_salary.clone();
    let set_salary_max = set_salary;

    view! {
        <aside class="filter-panel">
            <h3>{t(locale, Msg::FiltersHeadline)}</h3>

            <fieldset>
                <legend>"Experience"</legend>
                <label>
                    <input type="checkbox"
                        prop:checked=move || params.get().filters.experience_level.contains(&ExperienceLevel::Junior)
                        on:change=move |_| toggle_level_junior(ExperienceLevel::Junior)/>
                    "Junior"
                </label>
                <label>
                    <input type="checkbox"
                        prop:checked=move || params.get().filters.experience_level.contains(&ExperienceLevel::Mid)
                        on:change=move |_| toggle_level_mid(ExperienceLevel::Mid)/>
                    "Mid"
                </label>
                <label>
                    <input type="checkbox"
                        prop:checked=move || params.get().filters.experience_level.contains(&ExperienceLevel::Senior)
                        on:change=move |_| toggle_level_senior(ExperienceLevel::Senior)/>
                    "Senior"
                </label>
                <label>
                    <input type="checkbox"
                        prop:checked=move || params.get().filters.experience_level.contains(&ExperienceLevel::Lead)
                        on:change=move |_| toggle_level_lead(ExperienceLevel::Lead)/>
                    "Lead"
                </label>
            </fieldset>

            <FacetCheckList label="Industry" key="industry" options=INDUSTRIES params=params on_toggle=toggle_facet/>
            <FacetCheckList label="Vertragsart" key="contract" options=CONTRACT_TYPES params=params on_toggle=toggle_facet/>
            <FacetCheckList label="Ausbildung" key="education" options=EDUCATION_LEVELS params=params on_toggle=toggle_facet/>
            <FacetCheckList label="Zeitraum" key="period" options=POSTING_PERIODS params=params on_toggle=toggle_facet/>
            <FacetCheckList label="Placed Score" key="score" options=PLACED_SCORES params=params on_toggle=toggle_facet/>
            <FacetCheckList label="Bestandskunden" key="client" options=CLIENT_STATUS params=params on_toggle=toggle_facet/>
            <FacetCheckList label="Merklisten" key="watch" options=WATCH_LISTS params=params on_toggle=toggle_facet/>

            <fieldset>
                <legend>"Options"</legend>
                <label>
                    <input type="checkbox"
                        prop:checked=move || params.get().filters.only_paid_ads
                        on:change=move |_| toggle_paid("paid")/>
                    "Only paid ads"
                </label>
                <label>
                    <input type="checkbox"
                        prop:checked=move || params.get().filters.exclude_headhunters
                        on:change=move |_| toggle_headhunters("headhunters")/>
                    "Exclude headhunters"
                </label>
                <label>
                    <input type="checkbox"
                        prop:checked=move || params.get().filters.exclude_my_clients
                        on:change=move |_| toggle_clients("clients")/>
                    "Exclude my clients"
                </label>
            </fieldset>

            <fieldset>
                <legend>"Salary (EUR)"</legend>
                <input type="number" placeholder="min"
                    prop:value=move || params.get().filters.salary.min.map(|v| v.to_string()).unwrap_or_default()
                    on:change=move |ev| set_salary_min(true, event_target_value(&ev))/>
                <input type="number" placeholder="max"
                    prop:value=move || params.get().filters.salary.max.map(|v| v.to_string()).unwrap_or_default()
                    on:change=move |ev| set_salary_max(false, event_target_value(&ev))/>
            </fieldset>

            <fieldset>
                <legend>"Radius (km)"</legend>
                <input type="number"
                    prop:value=move || params.get().filters.location_radius.map(|v| v.to_string()).unwrap_or_default()
                    on:change=move |ev| set_radius(event_target_value(&ev))/>
            </fieldset>
        </aside>
    }
}

/// One checkbox group over a fixed option list for a multi-select facet.
#[component]
fn FacetCheckList(
    label: &'static str,
    key: &'static str,
    options: &'static [&'static str],
    params: Memo<SearchParams>,
    on_toggle: Callback<(&'static str, String)>,
) -> impl IntoView {
    view! {
        <fieldset>
            <legend>{label}</legend>
            {options.iter().map(|option| {
                let option = *option;
                view! {
                    <label>
                        <input type="checkbox"
                            prop:checked=move || selected(&params.get(), key, option)
                            on:change=move |_| on_toggle.run((key, option.to_string()))/>
                        {option}
                    </label>
                }
            }).collect_view()}
        </fieldset>
    }
}

fn selected(params: &SearchParams, key: &str, option: &str) -> bool {
    let list = match key {
        "industry" => &params.filters.industry,
        "contract" => &params.filters.contract_type,
        "education" => &params.filters.education,
        "period" => &params.filters.posting_period,
        "score" => &params.filters.placed_score,
        "client" => &params.filters.client_status,
        "watch" => &params.filters.watch_lists,
        _ => return false,
    };
    list.iter().any(|v| v == option)
}

fn toggle(list: &mut Vec<String>, value: &str) {
    if let Some(pos) = list.iter().position(|v| v == value) {
        list.remove(pos);
    } else {
        list.push(value.to_string());
    }
}
