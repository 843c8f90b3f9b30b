use stellenwerk::error::AppError;
use stellenwerk::models::job::CompanyRelationship;
use stellenwerk::models::search::{ExperienceLevel, SearchParams};
use stellenwerk::services::directory::JobDirectory;
use stellenwerk::services::mock_directory::{demo_jobs, MockJobDirectory};

fn params(keyword: Option<&str>) -> SearchParams {
    SearchParams {
        keyword: keyword.map(str::to_string),
        ..Default::default()
    }
}

#[tokio::test]
async fn pagination_arithmetic_over_55_jobs() {
    let directory = MockJobDirectory::with_jobs(demo_jobs(55));

    let mut query = params(None);
    query.limit = 25;

    let page1 = directory.search_jobs(&query).await.unwrap();
    assert_eq!(page1.total_count, 55);
    assert_eq!(page1.total_pages, 3);
    assert_eq!(page1.items.len(), 25);
    assert!(page1.has_next_page);

    query.page = 2;
    let page2 = directory.search_jobs(&query).await.unwrap();
    assert_eq!(page2.items.len(), 25);
    assert!(page2.has_next_page);

    query.page = 3;
    let page3 = directory.search_jobs(&query).await.unwrap();
    assert_eq!(page3.items.len(), 5);
    assert!(!page3.has_next_page);
}

#[tokio::test]
async fn keyword_matches_title_company_and_location() {
    let directory = MockJobDirectory::with_jobs(demo_jobs(55));

    let by_title = directory.search_jobs(&params(Some("rust"))).await.unwrap();
    assert!(by_title.total_count > 0);
    assert!(by_title
        .items
        .iter()
        .all(|j| format!("{} {} {}", j.title, j.company, j.location)
            .to_lowercase()
            .contains("rust")));

    let by_company = directory.search_jobs(&params(Some("nordwind"))).await.unwrap();
    assert!(by_company.total_count > 0);

    let by_location = directory.search_jobs(&params(Some("berlin"))).await.unwrap();
    assert!(by_location.total_count > 0);

    let none = directory.search_jobs(&params(Some("zzzz-no-match"))).await.unwrap();
    assert_eq!(none.total_count, 0);
    assert_eq!(none.total_pages, 0);
    assert!(!none.has_next_page);
}

#[tokio::test]
async fn facet_filters_restrict_results() {
    let directory = MockJobDirectory::with_jobs(demo_jobs(55));

    let mut query = params(None);
    query.filters.experience_level = vec![ExperienceLevel::Senior];
    let senior = directory.search_jobs(&query).await.unwrap();
    assert!(senior.total_count > 0);
    assert!(senior
        .items
        .iter()
        .all(|j| j.experience_level == ExperienceLevel::Senior));

    let mut query = params(None);
    query.filters.only_paid_ads = true;
    let paid = directory.search_jobs(&query).await.unwrap();
    assert!(paid.items.iter().all(|j| j.paid_ad));

    let mut query = params(None);
    query.filters.exclude_headhunters = true;
    let no_headhunters = directory.search_jobs(&query).await.unwrap();
    assert!(no_headhunters.items.iter().all(|j| !j.headhunter));

    let mut query = params(None);
    query.filters.exclude_my_clients = true;
    let no_clients = directory.search_jobs(&query).await.unwrap();
    assert!(no_clients
        .items
        .iter()
        .all(|j| j.relationship != CompanyRelationship::ExistingClient));

    let mut query = params(None);
    query.filters.salary.min = Some(70_000);
    let paid_enough = directory.search_jobs(&query).await.unwrap();
    assert!(paid_enough.items.iter().all(|j| j.salary_max >= 70_000));
}

#[tokio::test]
async fn cv_re_ranking_is_deterministic_per_file_reference() {
    let directory = MockJobDirectory::with_jobs(demo_jobs(55));

    let mut with_cv = params(None);
    with_cv.limit = 100;
    with_cv.file_reference = Some("dev-abc".into());

    let first: Vec<String> = directory
        .search_jobs(&with_cv)
        .await
        .unwrap()
        .items
        .into_iter()
        .map(|j| j.id)
        .collect();
    let second: Vec<String> = directory
        .search_jobs(&with_cv)
        .await
        .unwrap()
        .items
        .into_iter()
        .map(|j| j.id)
        .collect();
    assert_eq!(first, second, "same CV must always produce the same order");

    let mut other_cv = with_cv.clone();
    other_cv.file_reference = Some("sales-xyz".into());
    let third: Vec<String> = directory
        .search_jobs(&other_cv)
        .await
        .unwrap()
        .items
        .into_iter()
        .map(|j| j.id)
        .collect();
    assert_ne!(first, third, "different CVs should rank differently");

    let mut no_cv = with_cv.clone();
    no_cv.file_reference = None;
    let natural: Vec<String> = directory
        .search_jobs(&no_cv)
        .await
        .unwrap()
        .items
        .into_iter()
        .map(|j| j.id)
        .collect();
    assert_ne!(first, natural, "CV presence should change the ordering");
}

#[tokio::test]
async fn details_resolve_against_canned_cv_datasets() {
    let directory = MockJobDirectory::with_jobs(demo_jobs(10));

    // Type-prefixed dataset
    let dev = directory.job_details("j-1", Some("dev-123")).await.unwrap().unwrap();
    assert_eq!(dev.match_score, Some(87));

    // Keyword-prefixed fallback
    let engineer = directory
        .job_details("j-1", Some("engineer_cv"))
        .await
        .unwrap()
        .unwrap();
    assert!(engineer.match_score.is_some());

    // Location-prefixed fallback
    let located = directory
        .job_details("j-1", Some("berlin-cv"))
        .await
        .unwrap()
        .unwrap();
    assert!(located.match_score.is_some());

    // No dataset matches: generic details without a match score
    let generic = directory
        .job_details("j-1", Some("unknown-cv"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(generic.match_score, None);

    // Without a CV there is no score either
    let plain = directory.job_details("j-1", None).await.unwrap().unwrap();
    assert_eq!(plain.match_score, None);

    // Unknown job id
    assert!(directory.job_details("j-999", None).await.unwrap().is_none());
}

#[tokio::test]
async fn favorite_toggle_flips_and_persists_in_memory() {
    let directory = MockJobDirectory::with_jobs(demo_jobs(5));

    assert!(directory.toggle_favorite("j-2").await.unwrap());
    let details = directory.job_details("j-2", None).await.unwrap().unwrap();
    assert!(details.listing.favorite);

    assert!(!directory.toggle_favorite("j-2").await.unwrap());

    let err = directory.toggle_favorite("j-999").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn relationship_update_applies_to_the_whole_company() {
    let directory = MockJobDirectory::with_jobs(demo_jobs(10));

    let target = directory.job_details("j-1", None).await.unwrap().unwrap();
    let company = target.listing.company.clone();

    directory
        .set_relationship("j-1", CompanyRelationship::Blacklist)
        .await
        .unwrap();

    let all = directory
        .search_jobs(&SearchParams {
            limit: 100,
            ..Default::default()
        })
        .await
        .unwrap();
    for job in all.items.iter().filter(|j| j.company == company) {
        assert_eq!(job.relationship, CompanyRelationship::Blacklist);
    }
}

#[tokio::test]
async fn failing_directory_surfaces_fixed_service_error() {
    let directory = MockJobDirectory::failing();

    let err = directory.search_jobs(&params(None)).await.unwrap_err();
    assert!(matches!(err, AppError::Service(_)));

    let err = directory.ai_summary("j-1").await.unwrap_err();
    assert!(matches!(err, AppError::Service(_)));
}

#[tokio::test]
async fn ai_content_is_composed_from_job_fields() {
    let directory = MockJobDirectory::with_jobs(demo_jobs(5));

    let summary = directory.ai_summary("j-1").await.unwrap();
    assert_eq!(summary.job_id, "j-1");
    assert_eq!(summary.summary_id, "sum-j-1");
    assert!(summary.text.contains("Senior Rust Engineer"));

    let pitch = directory.sales_pitch("j-1").await.unwrap();
    assert_eq!(pitch.job_id, "j-1");
    assert!(pitch.subject.contains("Senior Rust Engineer"));
    assert!(!pitch.paragraphs.is_empty());
}
