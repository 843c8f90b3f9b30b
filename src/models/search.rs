use serde::{Deserialize, Serialize};

/// How long a persisted search intent stays valid: 5 hours.
pub const SEARCH_STATE_TTL_MS: i64 = 5 * 60 * 60 * 1000;

/// Hard upper bound on the page size a client may request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Page size used when the URL carries no explicit limit.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// A user's current search intent, shared between the in-memory store,
/// the URL and local storage.
///
/// Serialized with camelCase keys — this is the exact JSON shape written
/// under the local storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Opaque handle to an uploaded CV.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_reference: Option<String>,
    /// Display name derived from the CV filename.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_label: Option<String>,
    /// Unix millis at creation time; drives the expiration check.
    pub created_at: i64,
}

impl SearchRecord {
    pub fn new(created_at: i64) -> Self {
        Self {
            keyword: None,
            location: None,
            file_reference: None,
            candidate_label: None,
            created_at,
        }
    }

    /// A record counts as an active search only if at least one of
    /// keyword, location or file reference is present.
    pub fn is_active(&self) -> bool {
        self.keyword.is_some() || self.location.is_some() || self.file_reference.is_some()
    }

    /// Whether the record is older than the 5-hour TTL at `now_millis`.
    pub fn is_expired(&self, now_millis: i64) -> bool {
        now_millis - self.created_at > SEARCH_STATE_TTL_MS
    }
}

/// Experience levels a job posting can be filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
    Lead,
}

impl ExperienceLevel {
    /// Parse from the URL token (case-insensitive).
    pub fn from_str_ci(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "junior" => Some(ExperienceLevel::Junior),
            "mid" => Some(ExperienceLevel::Mid),
            "senior" => Some(ExperienceLevel::Senior),
            "lead" => Some(ExperienceLevel::Lead),
            _ => None,
        }
    }

    /// The token used in URLs and mock data.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Lead => "lead",
        }
    }
}

/// An inclusive salary band in EUR per year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl SalaryRange {
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Whether `salary` falls inside the band (open ends pass).
    pub fn contains(&self, salary: u32) -> bool {
        self.min.is_none_or(|min| salary >= min) && self.max.is_none_or(|max| salary <= max)
    }
}

/// The closed facet schema: every filterable dimension of a job search is
/// enumerated here, so an unknown facet key is unrepresentable rather than
/// a runtime surprise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetFilters {
    // multi-select facets
    pub experience_level: Vec<ExperienceLevel>,
    pub industry: Vec<String>,
    /// URL key `bestandskundenDropdown` — existing-client status buckets.
    pub client_status: Vec<String>,
    /// URL key `zeitraum` — posting period buckets.
    pub posting_period: Vec<String>,
    /// URL key `vertragsart` — contract types.
    pub contract_type: Vec<String>,
    /// URL key `merklisten` — user watch lists.
    pub watch_lists: Vec<String>,
    /// URL key `berufsgruppe` — occupation groups.
    pub occupation_group: Vec<String>,
    /// URL key `ausbildung` — education levels.
    pub education: Vec<String>,
    /// URL key `placedScore` — placement score buckets.
    pub placed_score: Vec<String>,
    // boolean facets
    pub only_paid_ads: bool,
    pub exclude_headhunters: bool,
    pub exclude_my_clients: bool,
    // numeric facets
    pub location_radius: Option<u32>,
    pub salary: SalaryRange,
}

impl FacetFilters {
    /// True when no facet restricts the result set.
    pub fn is_empty(&self) -> bool {
        self.experience_level.is_empty()
            && self.industry.is_empty()
            && self.client_status.is_empty()
            && self.posting_period.is_empty()
            && self.contract_type.is_empty()
            && self.watch_lists.is_empty()
            && self.occupation_group.is_empty()
            && self.education.is_empty()
            && self.placed_score.is_empty()
            && !self.only_paid_ads
            && !self.exclude_headhunters
            && !self.exclude_my_clients
            && self.location_radius.is_none()
            && self.salary.is_empty()
    }
}

/// One fully-specified query to the job directory.
///
/// Derived fresh from URL query parameters on every render — never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub keyword: Option<String>,
    pub location: Option<String>,
    pub file_reference: Option<String>,
    pub candidate_label: Option<String>,
    /// 1-based page number, always >= 1.
    pub page: u32,
    /// Page size, clamped to [`MAX_PAGE_SIZE`].
    pub limit: u32,
    pub filters: FacetFilters,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            keyword: None,
            location: None,
            file_reference: None,
            candidate_label: None,
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            filters: FacetFilters::default(),
        }
    }
}

impl SearchParams {
    /// Normalize page/limit into their valid ranges.
    pub fn clamped(mut self) -> Self {
        self.page = self.page.max(1);
        self.limit = self.limit.clamp(1, MAX_PAGE_SIZE);
        self
    }
}
