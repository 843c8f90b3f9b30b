use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::AppError;
use crate::models::job::{
    AiSummary, CompanyRelationship, JobDetails, JobListing, PaginatedJobs, SalesPitch,
};
use crate::models::search::{SearchParams, MAX_PAGE_SIZE};
use crate::services::directory::JobDirectory;
use crate::services::latency::simulate_latency;

/// Error message for the simulated failure mode.
const SIMULATED_FAILURE: &str = "job directory unavailable";

/// In-process stand-in for the job backend.
///
/// Holds the full job list in memory and answers every [`JobDirectory`]
/// call after a fixed artificial delay. Calls always succeed unless the
/// directory was built with [`failing`](Self::failing).
pub struct MockJobDirectory {
    jobs: RwLock<Vec<JobListing>>,
    latency_ms: u64,
    fail: bool,
}

impl Default for MockJobDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl MockJobDirectory {
    /// Directory seeded with the standard demo dataset.
    pub fn new() -> Self {
        Self::with_jobs(demo_jobs(60))
    }

    /// Directory over an explicit job list, without latency. Used by
    /// tests that assert on exact counts and orderings.
    pub fn with_jobs(jobs: Vec<JobListing>) -> Self {
        Self {
            jobs: RwLock::new(jobs),
            latency_ms: 0,
            fail: false,
        }
    }

    /// Attach an artificial per-call latency.
    pub fn with_latency(mut self, ms: u64) -> Self {
        self.latency_ms = ms;
        self
    }

    /// Directory whose every call fails with a fixed message, for
    /// exercising error paths in hooks and views.
    pub fn failing() -> Self {
        Self {
            jobs: RwLock::new(Vec::new()),
            latency_ms: 0,
            fail: true,
        }
    }

    async fn call_overhead(&self) -> Result<(), AppError> {
        simulate_latency(self.latency_ms).await;
        if self.fail {
            return Err(AppError::Service(SIMULATED_FAILURE.into()));
        }
        Ok(())
    }

    fn find_listing(&self, job_id: &str) -> Option<JobListing> {
        self.jobs
            .read()
            .ok()?
            .iter()
            .find(|j| j.id == job_id)
            .cloned()
    }
}

#[async_trait]
impl JobDirectory for MockJobDirectory {
    async fn search_jobs(&self, params: &SearchParams) -> Result<PaginatedJobs, AppError> {
        self.call_overhead().await?;

        let params = params.clone().clamped();
        let jobs = self
            .jobs
            .read()
            .map_err(|_| AppError::Internal("job list lock poisoned".into()))?;

        let mut matches: Vec<JobListing> = jobs
            .iter()
            .filter(|job| matches_params(job, &params))
            .cloned()
            .collect();
        drop(jobs);

        // CV-driven re-ranking: deterministic per file reference, so the
        // same CV always yields the same ordering.
        if let Some(file_reference) = &params.file_reference {
            let mut rng = StdRng::seed_from_u64(fnv1a_64(file_reference));
            matches.shuffle(&mut rng);
        }

        let total_count = matches.len() as u32;
        let limit = params.limit.clamp(1, MAX_PAGE_SIZE);
        let total_pages = total_count.div_ceil(limit);
        let page = params.page;

        let items = matches
            .into_iter()
            .skip(((page - 1) * limit) as usize)
            .take(limit as usize)
            .collect();

        Ok(PaginatedJobs {
            items,
            page,
            limit,
            total_count,
            total_pages,
            has_next_page: page < total_pages,
        })
    }

    async fn job_details(
        &self,
        job_id: &str,
        file_reference: Option<&str>,
    ) -> Result<Option<JobDetails>, AppError> {
        self.call_overhead().await?;

        let Some(listing) = self.find_listing(job_id) else {
            return Ok(None);
        };

        let profile = file_reference.and_then(resolve_canned_profile);
        Ok(Some(build_details(listing, profile)))
    }

    async fn ai_summary(&self, job_id: &str) -> Result<AiSummary, AppError> {
        self.call_overhead().await?;

        let listing = self
            .find_listing(job_id)
            .ok_or_else(|| AppError::NotFound(format!("job {job_id}")))?;

        Ok(AiSummary {
            summary_id: format!("sum-{}", listing.id),
            job_id: listing.id.clone(),
            text: format!(
                "{} is hiring a {} in {}. The role sits in the {} industry at {} level, \
                 with a posted band of {}–{} EUR.",
                listing.company,
                listing.title,
                listing.location,
                listing.industry,
                listing.experience_level.as_str(),
                listing.salary_min,
                listing.salary_max,
            ),
            highlights: vec![
                format!("{} contract", listing.contract_type),
                format!("Occupation group: {}", listing.occupation_group),
                if listing.paid_ad {
                    "Actively promoted posting".to_string()
                } else {
                    "Aggregated posting".to_string()
                },
            ],
            generated_at: Utc::now(),
        })
    }

    async fn sales_pitch(&self, job_id: &str) -> Result<SalesPitch, AppError> {
        self.call_overhead().await?;

        let listing = self
            .find_listing(job_id)
            .ok_or_else(|| AppError::NotFound(format!("job {job_id}")))?;

        Ok(SalesPitch {
            job_id: listing.id.clone(),
            subject: format!("Candidates for your {} opening", listing.title),
            paragraphs: vec![
                format!(
                    "Hello {}, I noticed your posting for a {} in {}.",
                    listing.contact_name_placeholder(),
                    listing.title,
                    listing.location,
                ),
                format!(
                    "We place {} professionals in the {} industry and currently have \
                     several candidates matching the {} level you are looking for.",
                    listing.occupation_group, listing.industry, listing.experience_level.as_str(),
                ),
                "Would a short call this week work for you?".to_string(),
            ],
        })
    }

    async fn toggle_favorite(&self, job_id: &str) -> Result<bool, AppError> {
        self.call_overhead().await?;

        let mut jobs = self
            .jobs
            .write()
            .map_err(|_| AppError::Internal("job list lock poisoned".into()))?;
        let job = jobs
            .iter_mut()
            .find(|j| j.id == job_id)
            .ok_or_else(|| AppError::NotFound(format!("job {job_id}")))?;

        job.favorite = !job.favorite;
        Ok(job.favorite)
    }

    async fn set_relationship(
        &self,
        job_id: &str,
        relationship: CompanyRelationship,
    ) -> Result<(), AppError> {
        self.call_overhead().await?;

        let mut jobs = self
            .jobs
            .write()
            .map_err(|_| AppError::Internal("job list lock poisoned".into()))?;
        let company = jobs
            .iter()
            .find(|j| j.id == job_id)
            .map(|j| j.company.clone())
            .ok_or_else(|| AppError::NotFound(format!("job {job_id}")))?;

        // Relationship is a company-level attribute: update every posting
        // of the same company.
        for job in jobs.iter_mut().filter(|j| j.company == company) {
            job.relationship = relationship;
        }
        Ok(())
    }
}

impl JobListing {
    fn contact_name_placeholder(&self) -> String {
        format!("{} hiring team", self.company)
    }
}

/// Whether a single job survives keyword, location and facet filtering.
fn matches_params(job: &JobListing, params: &SearchParams) -> bool {
    if let Some(keyword) = &params.keyword {
        let haystack = format!("{} {} {}", job.title, job.company, job.location).to_lowercase();
        if !haystack.contains(&keyword.to_lowercase()) {
            return false;
        }
    }

    if let Some(location) = &params.location {
        // The mock matches by name; the radius facet needs geocoding and
        // only takes effect against a real backend.
        if !job.location.to_lowercase().contains(&location.to_lowercase()) {
            return false;
        }
    }

    let f = &params.filters;

    if !f.experience_level.is_empty() && !f.experience_level.contains(&job.experience_level) {
        return false;
    }
    if !f.industry.is_empty() && !contains_ci(&f.industry, &job.industry) {
        return false;
    }
    if !f.contract_type.is_empty() && !contains_ci(&f.contract_type, &job.contract_type) {
        return false;
    }
    if !f.occupation_group.is_empty() && !contains_ci(&f.occupation_group, &job.occupation_group) {
        return false;
    }
    if !f.education.is_empty() && !contains_ci(&f.education, &job.education) {
        return false;
    }
    if !f.client_status.is_empty() {
        let wanted = f
            .client_status
            .iter()
            .filter_map(|t| CompanyRelationship::from_str_ci(t))
            .collect::<Vec<_>>();
        if !wanted.is_empty() && !wanted.contains(&job.relationship) {
            return false;
        }
    }
    if !f.posting_period.is_empty() {
        // Tokens are maximum ages like "7d" or "30"; the posting must be
        // younger than the widest one.
        let max_days = f
            .posting_period
            .iter()
            .filter_map(|t| t.trim_end_matches('d').parse::<i64>().ok())
            .max();
        if let Some(days) = max_days {
            if job.posted_at < Utc::now() - Duration::days(days) {
                return false;
            }
        }
    }
    if !f.watch_lists.is_empty() && !job.favorite {
        // Favorites are the only watch list the mock keeps.
        return false;
    }
    if !f.placed_score.is_empty() && !contains_ci(&f.placed_score, placed_score_bucket(&job.id)) {
        return false;
    }

    if f.only_paid_ads && !job.paid_ad {
        return false;
    }
    if f.exclude_headhunters && job.headhunter {
        return false;
    }
    if f.exclude_my_clients && job.relationship == CompanyRelationship::ExistingClient {
        return false;
    }

    if !f.salary.is_empty() {
        // The posting band must overlap the requested band.
        let min_ok = f.salary.max.is_none_or(|max| job.salary_min <= max);
        let max_ok = f.salary.min.is_none_or(|min| job.salary_max >= min);
        if !(min_ok && max_ok) {
            return false;
        }
    }

    true
}

fn contains_ci(tokens: &[String], value: &str) -> bool {
    tokens.iter().any(|t| t.eq_ignore_ascii_case(value))
}

/// Deterministic placement-score bucket for a posting.
fn placed_score_bucket(job_id: &str) -> &'static str {
    match fnv1a_64(job_id) % 101 {
        0..=39 => "low",
        40..=69 => "medium",
        _ => "high",
    }
}

/// Stable 64-bit FNV-1a hash; seeds the CV re-ranking shuffle.
fn fnv1a_64(input: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in input.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

/// A canned per-CV dataset: how details are adjusted for a given profile
/// type parsed out of the file reference.
struct CannedProfile {
    match_score: u8,
    highlight: &'static str,
}

/// Resolve the canned dataset for a file reference.
///
/// The dataset key is the reference's type prefix (text before the first
/// `-` or `_`); unmatched prefixes fall back through keyword-keyed and
/// location-keyed datasets before giving up.
fn resolve_canned_profile(file_reference: &str) -> Option<CannedProfile> {
    let prefix = file_reference
        .split(['-', '_'])
        .next()
        .unwrap_or(file_reference)
        .to_lowercase();

    profile_dataset(&prefix)
        .or_else(|| keyword_dataset(&prefix))
        .or_else(|| location_dataset(&prefix))
}

fn profile_dataset(key: &str) -> Option<CannedProfile> {
    match key {
        "dev" => Some(CannedProfile {
            match_score: 87,
            highlight: "Strong overlap with the posting's engineering stack",
        }),
        "sales" => Some(CannedProfile {
            match_score: 78,
            highlight: "Track record in quota-carrying sales roles",
        }),
        "finance" => Some(CannedProfile {
            match_score: 74,
            highlight: "Controlling and reporting background fits the role",
        }),
        _ => None,
    }
}

fn keyword_dataset(key: &str) -> Option<CannedProfile> {
    match key {
        "engineer" | "entwickler" => Some(CannedProfile {
            match_score: 81,
            highlight: "Engineering keywords match the posting",
        }),
        "consultant" | "berater" => Some(CannedProfile {
            match_score: 69,
            highlight: "Consulting background partially matches",
        }),
        _ => None,
    }
}

fn location_dataset(key: &str) -> Option<CannedProfile> {
    match key {
        "berlin" | "muenchen" | "hamburg" => Some(CannedProfile {
            match_score: 55,
            highlight: "Candidate is based in the posting's region",
        }),
        _ => None,
    }
}

fn build_details(listing: JobListing, profile: Option<CannedProfile>) -> JobDetails {
    let description = format!(
        "{company} is looking for a {title} to join its {group} team in {location}. \
         The position is offered as {contract} in the {industry} industry.",
        company = listing.company,
        title = listing.title,
        group = listing.occupation_group,
        location = listing.location,
        contract = listing.contract_type,
        industry = listing.industry,
    );

    let mut requirements = vec![
        format!("{} experience level", listing.experience_level.as_str()),
        format!("Background in {}", listing.industry),
        format!("Education: {}", listing.education),
    ];
    if let Some(profile) = &profile {
        requirements.push(profile.highlight.to_string());
    }

    JobDetails {
        contact_name: format!("{} Recruiting", listing.company),
        contact_email: format!(
            "jobs@{}.example",
            listing.company.to_lowercase().replace([' ', '&', '.'], "-")
        ),
        match_score: profile.map(|p| p.match_score),
        description,
        requirements,
        listing,
    }
}

/// Deterministic demo dataset used by the application and the tests.
pub fn demo_jobs(count: usize) -> Vec<JobListing> {
    use crate::models::search::ExperienceLevel;

    const TITLES: &[&str] = &[
        "Senior Rust Engineer",
        "Frontend Developer",
        "DevOps Engineer",
        "Sales Consultant",
        "Account Manager",
        "Financial Controller",
        "Recruiting Specialist",
        "Data Analyst",
        "Backend Engineer",
        "Product Manager",
        "Payroll Accountant",
        "IT Support Specialist",
    ];
    const COMPANIES: &[&str] = &[
        "Nordwind Systems",
        "Brandt & Partner",
        "Helix Mobility",
        "Quellwerk GmbH",
        "Adler Finanz",
        "Primus Logistik",
        "Vektor Health",
        "Castellan Software",
    ];
    const LOCATIONS: &[&str] = &[
        "Berlin",
        "München",
        "Hamburg",
        "Köln",
        "Frankfurt am Main",
        "Stuttgart",
        "Leipzig",
        "Düsseldorf",
    ];
    const INDUSTRIES: &[&str] = &[
        "software",
        "fintech",
        "automotive",
        "healthcare",
        "logistics",
        "consulting",
    ];
    const CONTRACTS: &[&str] = &["festanstellung", "befristet", "freelance"];
    const GROUPS: &[&str] = &["engineering", "sales", "finance", "hr", "it-support"];
    const EDUCATION: &[&str] = &["bachelor", "master", "ausbildung", "none"];
    const LEVELS: &[ExperienceLevel] = &[
        ExperienceLevel::Junior,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
        ExperienceLevel::Lead,
    ];

    (0..count)
        .map(|i| {
            let salary_min = 42_000 + (i as u32 % 20) * 1_500;
            JobListing {
                id: format!("j-{}", i + 1),
                title: TITLES[i % TITLES.len()].to_string(),
                company: COMPANIES[(i / 2) % COMPANIES.len()].to_string(),
                location: LOCATIONS[i % LOCATIONS.len()].to_string(),
                industry: INDUSTRIES[i % INDUSTRIES.len()].to_string(),
                experience_level: LEVELS[i % LEVELS.len()],
                contract_type: CONTRACTS[i % CONTRACTS.len()].to_string(),
                occupation_group: GROUPS[i % GROUPS.len()].to_string(),
                education: EDUCATION[i % EDUCATION.len()].to_string(),
                salary_min,
                salary_max: salary_min + 18_000,
                paid_ad: i % 3 != 0,
                headhunter: i % 5 == 0,
                posted_at: Utc::now() - Duration::days((i % 45) as i64),
                favorite: false,
                relationship: match i {
                    i if i % 7 == 0 => CompanyRelationship::ExistingClient,
                    i if i % 11 == 0 => CompanyRelationship::Follow,
                    _ => CompanyRelationship::None,
                },
            }
        })
        .collect()
}
