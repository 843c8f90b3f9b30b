use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Stylesheet, Title};
use leptos_router::components::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::path;

use crate::auth::demo::{authenticate_demo_user, SessionUser};
use crate::components::search_bar::SearchBar;
use crate::components::search_results::SearchResultsPage;
use crate::config::Settings;
use crate::i18n::{t, use_locale, Locale, Msg};
use crate::search_state::persist::{
    BrowserStorage, MemoryStorage, PersistedSearchState, SearchStateStorage, SystemClock,
};
use crate::search_state::reconcile::reconcile;
use crate::search_state::store::SearchStore;
use crate::search_state::url::{parse_query_string, record_to_pairs, to_query_string};
use crate::services::directory::JobDirectory;
use crate::services::mock_directory::MockJobDirectory;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let settings = use_context::<Settings>().unwrap_or_default();

    // SSR passes have no localStorage; they use the in-memory backend and
    // the real reconciliation happens client-side after hydration.
    let storage: Arc<dyn SearchStateStorage> = if cfg!(target_arch = "wasm32") {
        Arc::new(BrowserStorage)
    } else {
        Arc::new(MemoryStorage::new())
    };
    let store = SearchStore::new(PersistedSearchState::new(storage, Arc::new(SystemClock)));
    provide_context(store.clone());

    let directory: Arc<dyn JobDirectory> =
        Arc::new(MockJobDirectory::new().with_latency(settings.mock_latency_ms));
    provide_context(directory);

    let session = RwSignal::new(None::<SessionUser>);
    provide_context(session);

    provide_context(settings);
    provide_context(Locale::En);

    view! {
        <Stylesheet id="leptos" href="/pkg/stellenwerk.css"/>
        <Title text="Stellenwerk - Recruiting Intelligence"/>

        <Router>
            <SearchStateSync/>
            <TopNav/>
            <main>
                <ErrorBoundary fallback=|_| view! {
                    <div class="app-fallback">
                        <p>"Something went wrong. Please reload the page."</p>
                    </div>
                }>
                    <Routes fallback=|| view! { "Page not found." }.into_view()>
                        <Route path=path!("/") view=LandingPage/>
                        <Route path=path!("/demo") view=DemoPage/>
                        <Route path=path!("/login") view=LoginPage/>
                        <Route path=path!("/dashboard") view=DashboardPage/>
                        <Route path=path!("/search") view=SearchResultsPage/>
                        <Route path=path!("/job-details/:id") view=crate::components::job_details_view::JobDetailsPage/>
                        <ParentRoute path=path!("/en") view=|| view! { <LocaleShell locale=Locale::En/> }>
                            <Route path=path!("") view=LandingPage/>
                            <Route path=path!("demo") view=DemoPage/>
                            <Route path=path!("login") view=LoginPage/>
                            <Route path=path!("dashboard") view=DashboardPage/>
                            <Route path=path!("search") view=SearchResultsPage/>
                            <Route path=path!("job-details/:id") view=crate::components::job_details_view::JobDetailsPage/>
                        </ParentRoute>
                        <ParentRoute path=path!("/de") view=|| view! { <LocaleShell locale=Locale::De/> }>
                            <Route path=path!("") view=LandingPage/>
                            <Route path=path!("demo") view=DemoPage/>
                            <Route path=path!("login") view=LoginPage/>
                            <Route path=path!("dashboard") view=DashboardPage/>
                            <Route path=path!("search") view=SearchResultsPage/>
                            <Route path=path!("job-details/:id") view=crate::components::job_details_view::JobDetailsPage/>
                        </ParentRoute>
                        // Unknown locales fall back to English instead of a 404.
                        <ParentRoute path=path!("/:locale") view=|| view! { <LocaleShell locale=Locale::En/> }>
                            <Route path=path!("") view=LandingPage/>
                            <Route path=path!("demo") view=DemoPage/>
                            <Route path=path!("login") view=LoginPage/>
                            <Route path=path!("dashboard") view=DashboardPage/>
                            <Route path=path!("search") view=SearchResultsPage/>
                            <Route path=path!("job-details/:id") view=crate::components::job_details_view::JobDetailsPage/>
                        </ParentRoute>
                    </Routes>
                </ErrorBoundary>
            </main>
        </Router>
    }
}

/// Provides the locale for a `/{locale}/...` subtree.
#[component]
fn LocaleShell(locale: Locale) -> impl IntoView {
    provide_context(locale);
    view! { <Outlet/> }
}

/// Re-runs the reconciliation policy on every pathname or query change.
///
/// On the results and details routes the URL overwrites the store; on
/// every other route the persisted record (expiry-checked) is hydrated
/// into memory.
#[component]
fn SearchStateSync() -> impl IntoView {
    let store = expect_context::<SearchStore>();
    let location = use_location();

    Effect::new(move |_| {
        let path = location.pathname.get();
        let search = location.search.get();
        reconcile(&store, &path, &parse_query_string(&search));
    });
}

#[component]
fn TopNav() -> impl IntoView {
    let locale = use_locale();
    let session = expect_context::<RwSignal<Option<SessionUser>>>();

    view! {
        <nav class="top-nav">
            <a class="logo" href=locale.href("/")>"Stellenwerk"</a>
            <SearchBar/>
            <div class="nav-links">
                <a href=locale.href("/search")>{t(locale, Msg::NavSearch)}</a>
                <a href=locale.href("/dashboard")>{t(locale, Msg::NavDashboard)}</a>
                {move || match session.get() {
                    Some(user) => view! { <span class="nav-user">{user.display_name}</span> }.into_any(),
                    None => view! { <a href=locale.href("/login")>{t(locale, Msg::NavLogin)}</a> }.into_any(),
                }}
            </div>
            <div class="locale-switch">
                <a href="/en">"EN"</a>
                <a href="/de">"DE"</a>
            </div>
        </nav>
    }
}

#[component]
fn LandingPage() -> impl IntoView {
    let locale = use_locale();

    view! {
        <section class="landing">
            <h1>{t(locale, Msg::LandingHeadline)}</h1>
            <p class="tagline">{t(locale, Msg::AppTagline)}</p>
            <p>{t(locale, Msg::LandingSubline)}</p>
            <a class="cta" href=locale.href("/demo")>{t(locale, Msg::LandingCta)}</a>
        </section>
    }
}

#[component]
fn DemoPage() -> impl IntoView {
    let locale = use_locale();
    let settings = expect_context::<Settings>();
    let session = expect_context::<RwSignal<Option<SessionUser>>>();
    let navigate = use_navigate();

    let enter_demo = move |_| {
        if let Ok(user) = authenticate_demo_user("demo", "demo") {
            session.set(Some(user));
            navigate(&locale.href("/dashboard"), Default::default());
        }
    };

    view! {
        <section class="demo">
            <h1>{t(locale, Msg::DemoHeadline)}</h1>
            {if settings.demo_mode {
                view! {
                    <button class="cta" on:click=enter_demo>{t(locale, Msg::DemoEnter)}</button>
                }.into_any()
            } else {
                view! { <p>"The demo is disabled on this instance."</p> }.into_any()
            }}
        </section>
    }
}

#[component]
fn LoginPage() -> impl IntoView {
    let locale = use_locale();
    let session = expect_context::<RwSignal<Option<SessionUser>>>();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match authenticate_demo_user(&username.get_untracked(), &password.get_untracked()) {
            Ok(user) => {
                session.set(Some(user));
                navigate(&locale.href("/dashboard"), Default::default());
            }
            Err(_) => set_error.set(true),
        }
    };

    view! {
        <section class="login">
            <h1>{t(locale, Msg::LoginHeadline)}</h1>
            <form on:submit=on_submit>
                <label>
                    {t(locale, Msg::LoginUsername)}
                    <input
                        type="text"
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        prop:value=username
                    />
                </label>
                <label>
                    {t(locale, Msg::LoginPassword)}
                    <input
                        type="password"
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        prop:value=password
                    />
                </label>
                <button type="submit">{t(locale, Msg::LoginSubmit)}</button>
                {move || error.get().then(|| view! {
                    <p class="error">{t(locale, Msg::LoginFailed)}</p>
                })}
            </form>
        </section>
    }
}

#[component]
fn DashboardPage() -> impl IntoView {
    let locale = use_locale();
    let store = expect_context::<SearchStore>();
    let session = expect_context::<RwSignal<Option<SessionUser>>>();

    let reset = {
        let store = store.clone();
        move |_| store.clear()
    };
    let read_store = store.clone();

    view! {
        <section class="dashboard">
            <h1>{t(locale, Msg::DashboardHeadline)}</h1>
            {move || session.get().map(|user| view! {
                <p class="greeting">{user.display_name} " · " {format!("{:?}", user.role)}</p>
            })}
            <div class="active-search">
                <h3>{t(locale, Msg::DashboardActiveSearch)}</h3>
                {move || match read_store.read().filter(|r| r.is_active()) {
                    Some(record) => {
                        let query = to_query_string(&record_to_pairs(&record));
                        view! {
                            <div class="search-card">
                                <p>
                                    {record.keyword.clone().unwrap_or_default()}
                                    {record.location.clone().map(|l| format!(" · {l}")).unwrap_or_default()}
                                    {record.candidate_label.clone().map(|c| format!(" · CV: {c}")).unwrap_or_default()}
                                </p>
                                <a href=format!("{}?{}", locale.href("/search"), query)>
                                    {t(locale, Msg::DashboardResume)}
                                </a>
                                <button on:click=reset.clone()>{t(locale, Msg::DashboardReset)}</button>
                            </div>
                        }.into_any()
                    }
                    None => view! { <p>{t(locale, Msg::DashboardNoSearch)}</p> }.into_any(),
                }}
            </div>
        </section>
    }
}
