use crate::models::search::{
    ExperienceLevel, FacetFilters, SalaryRange, SearchParams, SearchRecord, DEFAULT_PAGE_SIZE,
};

/// Query keys understood by the adapter. `q` is written on serialize;
/// `keyword` is accepted on parse for older shared links.
pub mod keys {
    pub const KEYWORD: &str = "q";
    pub const KEYWORD_LEGACY: &str = "keyword";
    pub const LOCATION: &str = "location";
    pub const FILE_ID: &str = "fileId";
    pub const CV_LABEL: &str = "cv";
    pub const PAGE: &str = "page";
    pub const EXPERIENCE_LEVEL: &str = "experienceLevel";
    pub const INDUSTRY: &str = "industry";
    pub const ONLY_PAID_ADS: &str = "onlyPaidAds";
    pub const EXCLUDE_HEADHUNTERS: &str = "excludeHeadhunters";
    pub const EXCLUDE_MY_CLIENTS: &str = "excludeMyClients";
    pub const LOCATION_RADIUS: &str = "locationRadius";
    pub const SALARY_MIN: &str = "salaryMin";
    pub const SALARY_MAX: &str = "salaryMax";
    pub const CLIENT_STATUS: &str = "bestandskundenDropdown";
    pub const POSTING_PERIOD: &str = "zeitraum";
    pub const CONTRACT_TYPE: &str = "vertragsart";
    pub const WATCH_LISTS: &str = "merklisten";
    pub const OCCUPATION_GROUP: &str = "berufsgruppe";
    pub const EDUCATION: &str = "ausbildung";
    pub const PLACED_SCORE: &str = "placedScore";
}

/// Every key the adapter may read from a query map.
pub const ALL_KEYS: &[&str] = &[
    keys::KEYWORD,
    keys::KEYWORD_LEGACY,
    keys::LOCATION,
    keys::FILE_ID,
    keys::CV_LABEL,
    keys::PAGE,
    keys::EXPERIENCE_LEVEL,
    keys::INDUSTRY,
    keys::ONLY_PAID_ADS,
    keys::EXCLUDE_HEADHUNTERS,
    keys::EXCLUDE_MY_CLIENTS,
    keys::LOCATION_RADIUS,
    keys::SALARY_MIN,
    keys::SALARY_MAX,
    keys::CLIENT_STATUS,
    keys::POSTING_PERIOD,
    keys::CONTRACT_TYPE,
    keys::WATCH_LISTS,
    keys::OCCUPATION_GROUP,
    keys::EDUCATION,
    keys::PLACED_SCORE,
];

/// Look a key up in decoded query pairs.
///
/// Empty values are treated as absent so a shared URL with `q=` does not
/// count as an active search.
fn get<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .filter(|v| !v.is_empty())
}

fn get_string(pairs: &[(String, String)], key: &str) -> Option<String> {
    get(pairs, key).map(str::to_string)
}

fn get_bool(pairs: &[(String, String)], key: &str) -> bool {
    get(pairs, key).is_some_and(|v| v == "true")
}

fn get_u32(pairs: &[(String, String)], key: &str) -> Option<u32> {
    get(pairs, key).and_then(|v| v.parse().ok())
}

fn get_multi(pairs: &[(String, String)], key: &str) -> Vec<String> {
    get(pairs, key)
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Parse a raw query string (leading `?` optional) into decoded pairs.
pub fn parse_query_string(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (key, value) = part.split_once('=').unwrap_or((part, ""));
            (
                urlencoding::decode(key).map(|c| c.into_owned()).unwrap_or_default(),
                urlencoding::decode(value).map(|c| c.into_owned()).unwrap_or_default(),
            )
        })
        .collect()
}

/// Encode pairs back into a query string without a leading `?`.
pub fn to_query_string(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Extract the adapter's known keys from a router query map. The schema
/// is closed, so only [`ALL_KEYS`] are ever consulted.
pub fn pairs_from_query_map(map: &leptos_router::params::ParamsMap) -> Vec<(String, String)> {
    ALL_KEYS
        .iter()
        .filter_map(|key| map.get(key).map(|value| (key.to_string(), value)))
        .collect()
}

/// Build a [`SearchRecord`] from decoded query pairs.
///
/// Missing keys map to `None`, never to an empty string.
pub fn record_from_pairs(pairs: &[(String, String)], created_at: i64) -> SearchRecord {
    SearchRecord {
        keyword: get_string(pairs, keys::KEYWORD).or_else(|| get_string(pairs, keys::KEYWORD_LEGACY)),
        location: get_string(pairs, keys::LOCATION),
        file_reference: get_string(pairs, keys::FILE_ID),
        candidate_label: get_string(pairs, keys::CV_LABEL),
        created_at,
    }
}

/// Serialize a [`SearchRecord`] into query pairs, omitting absent fields.
pub fn record_to_pairs(record: &SearchRecord) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    push_opt(&mut pairs, keys::KEYWORD, record.keyword.as_deref());
    push_opt(&mut pairs, keys::LOCATION, record.location.as_deref());
    push_opt(&mut pairs, keys::FILE_ID, record.file_reference.as_deref());
    push_opt(&mut pairs, keys::CV_LABEL, record.candidate_label.as_deref());
    pairs
}

/// Build full [`SearchParams`] (record fields, page, facets) from pairs.
pub fn params_from_pairs(pairs: &[(String, String)]) -> SearchParams {
    let record = record_from_pairs(pairs, 0);

    let filters = FacetFilters {
        experience_level: get_multi(pairs, keys::EXPERIENCE_LEVEL)
            .iter()
            .filter_map(|t| ExperienceLevel::from_str_ci(t))
            .collect(),
        industry: get_multi(pairs, keys::INDUSTRY),
        client_status: get_multi(pairs, keys::CLIENT_STATUS),
        posting_period: get_multi(pairs, keys::POSTING_PERIOD),
        contract_type: get_multi(pairs, keys::CONTRACT_TYPE),
        watch_lists: get_multi(pairs, keys::WATCH_LISTS),
        occupation_group: get_multi(pairs, keys::OCCUPATION_GROUP),
        education: get_multi(pairs, keys::EDUCATION),
        placed_score: get_multi(pairs, keys::PLACED_SCORE),
        only_paid_ads: get_bool(pairs, keys::ONLY_PAID_ADS),
        exclude_headhunters: get_bool(pairs, keys::EXCLUDE_HEADHUNTERS),
        exclude_my_clients: get_bool(pairs, keys::EXCLUDE_MY_CLIENTS),
        location_radius: get_u32(pairs, keys::LOCATION_RADIUS),
        salary: SalaryRange {
            min: get_u32(pairs, keys::SALARY_MIN),
            max: get_u32(pairs, keys::SALARY_MAX),
        },
    };

    SearchParams {
        keyword: record.keyword,
        location: record.location,
        file_reference: record.file_reference,
        candidate_label: record.candidate_label,
        page: get_u32(pairs, keys::PAGE).unwrap_or(1),
        limit: DEFAULT_PAGE_SIZE,
        filters,
    }
    .clamped()
}

/// Serialize [`SearchParams`] into query pairs.
///
/// Absent options, empty multi-selects, `false` booleans and page 1 are
/// omitted entirely — the key is deleted rather than written empty.
pub fn params_to_pairs(params: &SearchParams) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    push_opt(&mut pairs, keys::KEYWORD, params.keyword.as_deref());
    push_opt(&mut pairs, keys::LOCATION, params.location.as_deref());
    push_opt(&mut pairs, keys::FILE_ID, params.file_reference.as_deref());
    push_opt(&mut pairs, keys::CV_LABEL, params.candidate_label.as_deref());

    if params.page > 1 {
        pairs.push((keys::PAGE.to_string(), params.page.to_string()));
    }

    let f = &params.filters;
    push_multi(
        &mut pairs,
        keys::EXPERIENCE_LEVEL,
        &f.experience_level
            .iter()
            .map(|l| l.as_str().to_string())
            .collect::<Vec<_>>(),
    );
    push_multi(&mut pairs, keys::INDUSTRY, &f.industry);
    push_multi(&mut pairs, keys::CLIENT_STATUS, &f.client_status);
    push_multi(&mut pairs, keys::POSTING_PERIOD, &f.posting_period);
    push_multi(&mut pairs, keys::CONTRACT_TYPE, &f.contract_type);
    push_multi(&mut pairs, keys::WATCH_LISTS, &f.watch_lists);
    push_multi(&mut pairs, keys::OCCUPATION_GROUP, &f.occupation_group);
    push_multi(&mut pairs, keys::EDUCATION, &f.education);
    push_multi(&mut pairs, keys::PLACED_SCORE, &f.placed_score);

    push_flag(&mut pairs, keys::ONLY_PAID_ADS, f.only_paid_ads);
    push_flag(&mut pairs, keys::EXCLUDE_HEADHUNTERS, f.exclude_headhunters);
    push_flag(&mut pairs, keys::EXCLUDE_MY_CLIENTS, f.exclude_my_clients);

    if let Some(radius) = f.location_radius {
        pairs.push((keys::LOCATION_RADIUS.to_string(), radius.to_string()));
    }
    if let Some(min) = f.salary.min {
        pairs.push((keys::SALARY_MIN.to_string(), min.to_string()));
    }
    if let Some(max) = f.salary.max {
        pairs.push((keys::SALARY_MAX.to_string(), max.to_string()));
    }

    pairs
}

fn push_opt(pairs: &mut Vec<(String, String)>, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        pairs.push((key.to_string(), value.to_string()));
    }
}

fn push_multi(pairs: &mut Vec<(String, String)>, key: &str, values: &[String]) {
    if !values.is_empty() {
        pairs.push((key.to_string(), values.join(",")));
    }
}

fn push_flag(pairs: &mut Vec<(String, String)>, key: &str, value: bool) {
    if value {
        pairs.push((key.to_string(), "true".to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_round_trip_preserves_populated_fields() {
        let record = SearchRecord {
            keyword: Some("rust engineer".into()),
            location: Some("München".into()),
            file_reference: Some("dev-42".into()),
            candidate_label: Some("Jane Doe".into()),
            created_at: 123,
        };

        let pairs = record_to_pairs(&record);
        let parsed = record_from_pairs(&pairs, 999);

        assert_eq!(parsed.keyword, record.keyword);
        assert_eq!(parsed.location, record.location);
        assert_eq!(parsed.file_reference, record.file_reference);
        assert_eq!(parsed.candidate_label, record.candidate_label);
        // timestamps are excluded from the round-trip contract
        assert_eq!(parsed.created_at, 999);
    }

    #[test]
    fn test_absent_fields_are_omitted_not_written_empty() {
        let record = SearchRecord {
            keyword: Some("engineer".into()),
            ..SearchRecord::new(0)
        };
        let pairs = record_to_pairs(&record);
        assert_eq!(pairs, vec![("q".to_string(), "engineer".to_string())]);
    }

    #[test]
    fn test_empty_value_parses_as_absent() {
        let pairs = parse_query_string("q=&location=Berlin");
        let record = record_from_pairs(&pairs, 0);
        assert_eq!(record.keyword, None);
        assert_eq!(record.location.as_deref(), Some("Berlin"));
    }

    #[test]
    fn test_legacy_keyword_key_is_accepted() {
        let pairs = parse_query_string("keyword=consultant");
        let record = record_from_pairs(&pairs, 0);
        assert_eq!(record.keyword.as_deref(), Some("consultant"));
    }

    #[test]
    fn test_query_string_encoding_round_trip() {
        let record = SearchRecord {
            keyword: Some("c++ & rust".into()),
            location: Some("Köln".into()),
            ..SearchRecord::new(0)
        };
        let qs = to_query_string(&record_to_pairs(&record));
        assert!(!qs.contains(' '));

        let parsed = record_from_pairs(&parse_query_string(&qs), 0);
        assert_eq!(parsed.keyword.as_deref(), Some("c++ & rust"));
        assert_eq!(parsed.location.as_deref(), Some("Köln"));
    }

    #[test]
    fn test_facets_round_trip() {
        let mut params = SearchParams {
            keyword: Some("sales".into()),
            page: 3,
            ..Default::default()
        };
        params.filters.experience_level =
            vec![crate::models::search::ExperienceLevel::Senior, crate::models::search::ExperienceLevel::Lead];
        params.filters.industry = vec!["fintech".into(), "automotive".into()];
        params.filters.only_paid_ads = true;
        params.filters.location_radius = Some(50);
        params.filters.salary = SalaryRange {
            min: Some(60_000),
            max: Some(90_000),
        };
        params.filters.contract_type = vec!["festanstellung".into()];

        let pairs = params_to_pairs(&params);
        let parsed = params_from_pairs(&pairs);

        assert_eq!(parsed, params);
    }

    #[test]
    fn test_false_booleans_and_empty_multis_are_dropped() {
        let params = SearchParams {
            keyword: Some("x".into()),
            ..Default::default()
        };
        let pairs = params_to_pairs(&params);
        assert!(pairs.iter().all(|(k, _)| k == "q"));
    }

    #[test]
    fn test_page_zero_clamps_to_one() {
        let params = params_from_pairs(&parse_query_string("page=0"));
        assert_eq!(params.page, 1);
    }

    #[test]
    fn test_unknown_experience_tokens_are_dropped() {
        let params = params_from_pairs(&parse_query_string("experienceLevel=senior,wizard"));
        assert_eq!(
            params.filters.experience_level,
            vec![crate::models::search::ExperienceLevel::Senior]
        );
    }

    #[test]
    fn test_boolean_requires_literal_true() {
        let params = params_from_pairs(&parse_query_string("onlyPaidAds=yes"));
        assert!(!params.filters.only_paid_ads);

        let params = params_from_pairs(&parse_query_string("onlyPaidAds=true"));
        assert!(params.filters.only_paid_ads);
    }
}
