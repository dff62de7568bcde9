use chrono::{DateTime, Duration, Utc};

/// Timestamp format the arXiv query syntax expects in `submittedDate` ranges.
const ARXIV_DATE_FORMAT: &str = "%Y%m%d%H%M%S";

/// Filters for an arXiv search: categories, keywords and a date window.
///
/// The window is inclusive of `start_date` and exclusive of `end_date`.
/// The default window spans from 3 days ago at UTC midnight to 2 days ago,
/// which is roughly the latest day arXiv has finished announcing.
#[derive(Debug, Clone)]
pub struct SearchParams {
    pub categories: Vec<String>,
    pub keywords: Vec<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub max_results: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        let midnight = Utc::now()
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .expect("midnight is a valid time")
            .and_utc();

        Self {
            categories: vec!["astro-ph.*".to_string()],
            keywords: Vec::new(),
            start_date: midnight - Duration::days(3),
            end_date: midnight - Duration::days(2),
            max_results: 1000,
        }
    }
}

impl SearchParams {
    /// Build the `search_query` expression: a `submittedDate` range ANDed
    /// with OR-groups of categories and of abstract keywords.
    pub fn to_query(&self) -> String {
        let mut query = format!(
            "submittedDate:[{} TO {}]",
            self.start_date.format(ARXIV_DATE_FORMAT),
            self.end_date.format(ARXIV_DATE_FORMAT),
        );

        if !self.categories.is_empty() {
            let sub = self
                .categories
                .iter()
                .map(|cat| format!("cat:{}", cat))
                .collect::<Vec<_>>()
                .join(" OR ");
            query.push_str(&format!(" AND ({})", sub));
        }

        if !self.keywords.is_empty() {
            let sub = self
                .keywords
                .iter()
                .map(|kwd| format!("abs:\"{}\"", kwd))
                .collect::<Vec<_>>()
                .join(" OR ");
            query.push_str(&format!(" AND ({})", sub));
        }

        query
    }

    /// Full request URL against the given API base.
    pub fn to_url(&self, base_url: &str) -> String {
        format!(
            "{}?search_query={}&start=0&max_results={}&sortBy=submittedDate&sortOrder=ascending",
            base_url,
            urlencoding::encode(&self.to_query()),
            self.max_results,
        )
    }
}
