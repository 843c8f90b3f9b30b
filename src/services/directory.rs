use async_trait::async_trait;

use crate::error::AppError;
use crate::models::job::{AiSummary, CompanyRelationship, JobDetails, PaginatedJobs, SalesPitch};
use crate::models::search::SearchParams;

/// Data-access contract for everything the UI reads or mutates about
/// jobs.
///
/// The presentation layer only ever sees this trait, so the in-process
/// mock can be swapped for a real HTTP backend without touching any
/// component.
#[async_trait]
pub trait JobDirectory: Send + Sync {
    /// Filter, rank and paginate job postings.
    async fn search_jobs(&self, params: &SearchParams) -> Result<PaginatedJobs, AppError>;

    /// Full record for one posting. When a file reference is given, the
    /// details are resolved against the matching canned CV dataset.
    async fn job_details(
        &self,
        job_id: &str,
        file_reference: Option<&str>,
    ) -> Result<Option<JobDetails>, AppError>;

    /// AI-generated summary of a posting.
    async fn ai_summary(&self, job_id: &str) -> Result<AiSummary, AppError>;

    /// AI-generated sales pitch for contacting the posting company.
    async fn sales_pitch(&self, job_id: &str) -> Result<SalesPitch, AppError>;

    /// Flip the favorite flag; returns the new value.
    async fn toggle_favorite(&self, job_id: &str) -> Result<bool, AppError>;

    /// Set the company relationship for a posting's company.
    async fn set_relationship(
        &self,
        job_id: &str,
        relationship: CompanyRelationship,
    ) -> Result<(), AppError>;
}
