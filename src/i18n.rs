use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported UI locales. Routes are generated per locale under a
/// `/{locale}/...` prefix; unknown segments fall back to English rather
/// than failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    En,
    De,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::De => write!(f, "de"),
        }
    }
}

impl Locale {
    /// Parse a path segment (case-insensitive). `None` for segments that
    /// are not a locale at all.
    pub fn from_path_segment(segment: &str) -> Option<Self> {
        match segment.to_lowercase().as_str() {
            "en" => Some(Locale::En),
            "de" => Some(Locale::De),
            _ => None,
        }
    }

    /// Parse with the English default applied — used where a malformed
    /// locale parameter must never fail the page.
    pub fn from_param(segment: &str) -> Self {
        Self::from_path_segment(segment).unwrap_or_default()
    }

    /// Prefix a site-relative path with this locale.
    pub fn href(&self, path: &str) -> String {
        format!("/{}{}", self, path)
    }
}

/// The locale provided by the closest route shell, English if none is.
pub fn use_locale() -> Locale {
    leptos::prelude::use_context::<Locale>().unwrap_or_default()
}

/// Message keys for the static phrase table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    AppTagline,
    NavSearch,
    NavDashboard,
    NavLogin,
    LandingHeadline,
    LandingSubline,
    LandingCta,
    DemoHeadline,
    DemoEnter,
    LoginHeadline,
    LoginUsername,
    LoginPassword,
    LoginSubmit,
    LoginFailed,
    DashboardHeadline,
    DashboardActiveSearch,
    DashboardNoSearch,
    DashboardResume,
    DashboardReset,
    SearchPlaceholderKeyword,
    SearchPlaceholderLocation,
    SearchSubmit,
    SearchNoResults,
    SearchLoading,
    CvUploadLabel,
    CvUploadRejected,
    CvUploadRetry,
    FiltersHeadline,
    PagePrevious,
    PageNext,
    DetailsRequirements,
    DetailsFavorite,
    DetailsUnfavorite,
    DetailsRelationship,
    AiSummaryHeadline,
    AiPitchHeadline,
    AiGenerate,
    AiGenerating,
    FeedbackHelpful,
    FeedbackNotHelpful,
    FeedbackThanks,
    ErrorGeneric,
}

/// Look up a phrase for the given locale.
pub fn t(locale: Locale, msg: Msg) -> &'static str {
    match locale {
        Locale::En => match msg {
            Msg::AppTagline => "Recruiting intelligence",
            Msg::NavSearch => "Search",
            Msg::NavDashboard => "Dashboard",
            Msg::NavLogin => "Log in",
            Msg::LandingHeadline => "Find the right candidates faster",
            Msg::LandingSubline => {
                "Search job postings, match them against a CV and reach out with AI-assisted pitches."
            }
            Msg::LandingCta => "Try the demo",
            Msg::DemoHeadline => "Product demo",
            Msg::DemoEnter => "Enter demo workspace",
            Msg::LoginHeadline => "Sign in to Stellenwerk",
            Msg::LoginUsername => "Username",
            Msg::LoginPassword => "Password",
            Msg::LoginSubmit => "Sign in",
            Msg::LoginFailed => "Invalid username or password",
            Msg::DashboardHeadline => "Your workspace",
            Msg::DashboardActiveSearch => "Active search",
            Msg::DashboardNoSearch => "No active search",
            Msg::DashboardResume => "Resume search",
            Msg::DashboardReset => "Reset search",
            Msg::SearchPlaceholderKeyword => "Job title, skill or company",
            Msg::SearchPlaceholderLocation => "Location",
            Msg::SearchSubmit => "Search",
            Msg::SearchNoResults => "No matching job postings.",
            Msg::SearchLoading => "Searching...",
            Msg::CvUploadLabel => "Match against a CV",
            Msg::CvUploadRejected => "This file cannot be used",
            Msg::CvUploadRetry => "Choose another file",
            Msg::FiltersHeadline => "Filters",
            Msg::PagePrevious => "Previous",
            Msg::PageNext => "Next",
            Msg::DetailsRequirements => "Requirements",
            Msg::DetailsFavorite => "Add to favorites",
            Msg::DetailsUnfavorite => "Remove from favorites",
            Msg::DetailsRelationship => "Company relationship",
            Msg::AiSummaryHeadline => "AI summary",
            Msg::AiPitchHeadline => "Sales pitch",
            Msg::AiGenerate => "Generate",
            Msg::AiGenerating => "Generating...",
            Msg::FeedbackHelpful => "Helpful",
            Msg::FeedbackNotHelpful => "Not helpful",
            Msg::FeedbackThanks => "Thanks for the feedback!",
            Msg::ErrorGeneric => "Something went wrong. Please try again.",
        },
        Locale::De => match msg {
            Msg::AppTagline => "Recruiting-Intelligenz",
            Msg::NavSearch => "Suche",
            Msg::NavDashboard => "Übersicht",
            Msg::NavLogin => "Anmelden",
            Msg::LandingHeadline => "Finden Sie schneller die richtigen Kandidaten",
            Msg::LandingSubline => {
                "Durchsuchen Sie Stellenanzeigen, gleichen Sie sie mit einem Lebenslauf ab und nutzen Sie KI-gestützte Pitches."
            }
            Msg::LandingCta => "Demo ausprobieren",
            Msg::DemoHeadline => "Produktdemo",
            Msg::DemoEnter => "Demo-Arbeitsbereich öffnen",
            Msg::LoginHeadline => "Bei Stellenwerk anmelden",
            Msg::LoginUsername => "Benutzername",
            Msg::LoginPassword => "Passwort",
            Msg::LoginSubmit => "Anmelden",
            Msg::LoginFailed => "Ungültiger Benutzername oder Passwort",
            Msg::DashboardHeadline => "Ihr Arbeitsbereich",
            Msg::DashboardActiveSearch => "Aktive Suche",
            Msg::DashboardNoSearch => "Keine aktive Suche",
            Msg::DashboardResume => "Suche fortsetzen",
            Msg::DashboardReset => "Suche zurücksetzen",
            Msg::SearchPlaceholderKeyword => "Jobtitel, Skill oder Firma",
            Msg::SearchPlaceholderLocation => "Ort",
            Msg::SearchSubmit => "Suchen",
            Msg::SearchNoResults => "Keine passenden Stellenanzeigen.",
            Msg::SearchLoading => "Suche läuft...",
            Msg::CvUploadLabel => "Mit Lebenslauf abgleichen",
            Msg::CvUploadRejected => "Diese Datei kann nicht verwendet werden",
            Msg::CvUploadRetry => "Andere Datei wählen",
            Msg::FiltersHeadline => "Filter",
            Msg::PagePrevious => "Zurück",
            Msg::PageNext => "Weiter",
            Msg::DetailsRequirements => "Anforderungen",
            Msg::DetailsFavorite => "Zu Favoriten hinzufügen",
            Msg::DetailsUnfavorite => "Aus Favoriten entfernen",
            Msg::DetailsRelationship => "Kundenbeziehung",
            Msg::AiSummaryHeadline => "KI-Zusammenfassung",
            Msg::AiPitchHeadline => "Vertriebs-Pitch",
            Msg::AiGenerate => "Generieren",
            Msg::AiGenerating => "Wird generiert...",
            Msg::FeedbackHelpful => "Hilfreich",
            Msg::FeedbackNotHelpful => "Nicht hilfreich",
            Msg::FeedbackThanks => "Danke für das Feedback!",
            Msg::ErrorGeneric => "Etwas ist schiefgelaufen. Bitte erneut versuchen.",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_segment() {
        assert_eq!(Locale::from_path_segment("en"), Some(Locale::En));
        assert_eq!(Locale::from_path_segment("DE"), Some(Locale::De));
        assert_eq!(Locale::from_path_segment("fr"), None);
        assert_eq!(Locale::from_path_segment("search"), None);
    }

    #[test]
    fn test_unknown_locale_defaults_to_english() {
        assert_eq!(Locale::from_param("fr"), Locale::En);
        assert_eq!(Locale::from_param(""), Locale::En);
    }

    #[test]
    fn test_locale_href() {
        assert_eq!(Locale::De.href("/search"), "/de/search");
    }

    #[test]
    fn test_phrases_exist_for_both_locales() {
        assert_ne!(t(Locale::En, Msg::LoginHeadline), "");
        assert_ne!(t(Locale::De, Msg::LoginHeadline), "");
        assert_ne!(
            t(Locale::En, Msg::DashboardHeadline),
            t(Locale::De, Msg::DashboardHeadline)
        );
    }
}
