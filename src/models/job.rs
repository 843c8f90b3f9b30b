use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::search::ExperienceLevel;

/// The relation a recruiter's agency has with the posting company.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyRelationship {
    ExistingClient,
    Follow,
    Blacklist,
    #[default]
    None,
}

impl CompanyRelationship {
    pub fn from_str_ci(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "existing_client" => Some(CompanyRelationship::ExistingClient),
            "follow" => Some(CompanyRelationship::Follow),
            "blacklist" => Some(CompanyRelationship::Blacklist),
            "none" => Some(CompanyRelationship::None),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyRelationship::ExistingClient => "existing_client",
            CompanyRelationship::Follow => "follow",
            CompanyRelationship::Blacklist => "blacklist",
            CompanyRelationship::None => "none",
        }
    }
}

/// One job posting as shown in the result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub industry: String,
    pub experience_level: ExperienceLevel,
    pub contract_type: String,
    pub occupation_group: String,
    /// Required education level token (e.g. `bachelor`, `ausbildung`).
    pub education: String,
    pub salary_min: u32,
    pub salary_max: u32,
    /// Posting is a paid advertisement (as opposed to an aggregated one).
    pub paid_ad: bool,
    /// Posting was placed by a headhunting agency.
    pub headhunter: bool,
    pub posted_at: DateTime<Utc>,
    pub favorite: bool,
    pub relationship: CompanyRelationship,
}

/// Full job record for the details page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetails {
    pub listing: JobListing,
    pub description: String,
    pub requirements: Vec<String>,
    /// 0..=100, present only when resolved against an uploaded CV.
    pub match_score: Option<u8>,
    pub contact_name: String,
    pub contact_email: String,
}

/// AI-generated summary of a job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiSummary {
    /// Identifier echoed back by the feedback endpoint.
    pub summary_id: String,
    pub job_id: String,
    pub text: String,
    pub highlights: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

/// AI-generated sales pitch for contacting the posting company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPitch {
    pub job_id: String,
    pub subject: String,
    pub paragraphs: Vec<String>,
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedJobs {
    pub items: Vec<JobListing>,
    pub page: u32,
    pub limit: u32,
    pub total_count: u32,
    pub total_pages: u32,
    pub has_next_page: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_roundtrip() {
        for rel in [
            CompanyRelationship::ExistingClient,
            CompanyRelationship::Follow,
            CompanyRelationship::Blacklist,
            CompanyRelationship::None,
        ] {
            assert_eq!(CompanyRelationship::from_str_ci(rel.as_str()), Some(rel));
        }
        assert_eq!(CompanyRelationship::from_str_ci("partner"), None);
    }

    #[test]
    fn test_relationship_serializes_snake_case() {
        let json = serde_json::to_string(&CompanyRelationship::ExistingClient).unwrap();
        assert_eq!(json, "\"existing_client\"");
    }
}
