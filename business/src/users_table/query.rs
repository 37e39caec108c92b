//! Query-string construction for the users endpoint.

use url::Url;

use super::model::BATCH_SIZE;
use super::sort::{SortColumn, SortDirection, SortState};
use super::view_state::{GenderFilter, RowsPerPage};

/// Parameters of one users request.
///
/// Absent fields fall back to defaults (`page`, `size`) or are omitted from the query string
/// (everything else). Presence is explicit, so an explicit page 0 is still sent as `page=0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersQuery {
    pub page: Option<u32>,
    pub size: Option<RowsPerPage>,
    pub gender: Option<GenderFilter>,
    pub keywords: Option<String>,
    pub sort_by: Option<SortColumn>,
    pub sort_order: Option<SortDirection>,
}

impl UsersQuery {
    pub fn page(page: u32, size: RowsPerPage) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
            ..Self::default()
        }
    }

    /// `All` leaves `gender` out of the request.
    pub fn with_gender(mut self, filter: GenderFilter) -> Self {
        self.gender = (filter != GenderFilter::All).then_some(filter);
        self
    }

    /// Sends the selector value unchanged, `all` included.
    pub fn with_gender_as_is(mut self, filter: GenderFilter) -> Self {
        self.gender = Some(filter);
        self
    }

    /// Empty keywords are treated as absent.
    pub fn with_keywords(mut self, keywords: &str) -> Self {
        self.keywords = (!keywords.is_empty()).then(|| keywords.to_string());
        self
    }

    pub fn with_sort(mut self, sort: SortState) -> Self {
        self.sort_by = Some(sort.order_by);
        self.sort_order = Some(sort.order);
        self
    }

    pub fn effective_page(&self) -> u32 {
        self.page.unwrap_or(0)
    }

    pub fn effective_size(&self) -> RowsPerPage {
        self.size.unwrap_or_default()
    }

    /// Ordered key/value pairs: `page`, `size`, `pageSize`, `results`, then the optional
    /// `gender`, `keywords`, `sortBy`, `sortOrder`.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.effective_page().to_string()),
            ("size", self.effective_size().get().to_string()),
            ("pageSize", BATCH_SIZE.to_string()),
            ("results", BATCH_SIZE.to_string()),
        ];
        if let Some(gender) = self.gender {
            pairs.push(("gender", gender.as_str().to_string()));
        }
        if let Some(keywords) = self.keywords.as_deref().filter(|k| !k.is_empty()) {
            pairs.push(("keywords", keywords.to_string()));
        }
        if let Some(sort_by) = self.sort_by {
            pairs.push(("sortBy", sort_by.id().to_string()));
        }
        if let Some(sort_order) = self.sort_order {
            pairs.push(("sortOrder", sort_order.wire().to_string()));
        }
        pairs
    }

    /// `endpoint` with the query string appended, values percent-encoded.
    pub fn to_url(&self, endpoint: &str) -> Result<Url, url::ParseError> {
        Url::parse_with_params(endpoint, self.to_query_pairs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(query: &UsersQuery) -> Vec<&'static str> {
        query.to_query_pairs().into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn defaults_fill_page_and_size() {
        let pairs = UsersQuery::default().to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page", "0".to_string()),
                ("size", "5".to_string()),
                ("pageSize", "10".to_string()),
                ("results", "10".to_string()),
            ]
        );
    }

    #[test]
    fn all_parameters_in_order() {
        let query = UsersQuery::page(2, RowsPerPage::Ten)
            .with_gender(GenderFilter::Female)
            .with_keywords("john")
            .with_sort(SortState {
                order_by: SortColumn::RegisterDate,
                order: SortDirection::Desc,
            });

        assert_eq!(
            query.to_query_pairs(),
            vec![
                ("page", "2".to_string()),
                ("size", "10".to_string()),
                ("pageSize", "10".to_string()),
                ("results", "10".to_string()),
                ("gender", "female".to_string()),
                ("keywords", "john".to_string()),
                ("sortBy", "register_date".to_string()),
                ("sortOrder", "descend".to_string()),
            ]
        );
    }

    #[test]
    fn gender_all_is_omitted() {
        let query = UsersQuery::page(0, RowsPerPage::Five).with_gender(GenderFilter::All);
        assert!(!keys(&query).contains(&"gender"));
    }

    #[test]
    fn gender_value_sent_verbatim() {
        let query = UsersQuery::page(0, RowsPerPage::Five).with_gender(GenderFilter::Male);
        assert!(query.to_query_pairs().contains(&("gender", "male".to_string())));
    }

    #[test]
    fn gender_as_is_sends_all() {
        let query = UsersQuery::page(0, RowsPerPage::Five).with_gender_as_is(GenderFilter::All);
        assert!(query.to_query_pairs().contains(&("gender", "all".to_string())));
    }

    #[test]
    fn empty_keywords_are_omitted() {
        let query = UsersQuery::page(0, RowsPerPage::Five).with_keywords("");
        assert_eq!(query.keywords, None);
        assert!(!keys(&query).contains(&"keywords"));

        let raw = UsersQuery {
            keywords: Some(String::new()),
            ..UsersQuery::default()
        };
        assert!(!keys(&raw).contains(&"keywords"));
    }

    #[test]
    fn explicit_page_zero_is_sent() {
        let query = UsersQuery::page(0, RowsPerPage::Ten);
        assert_eq!(query.to_query_pairs()[0], ("page", "0".to_string()));
        assert_eq!(query.to_query_pairs()[1], ("size", "10".to_string()));
    }

    #[test]
    fn url_is_percent_encoded() {
        let url = UsersQuery::page(0, RowsPerPage::Five)
            .with_keywords("jo hn&x=1")
            .to_url("https://randomuser.me/api/")
            .expect("valid endpoint");

        assert_eq!(url.path(), "/api/");
        assert_eq!(
            url.query(),
            Some("page=0&size=5&pageSize=10&results=10&keywords=jo+hn%26x%3D1")
        );
        let keywords = url
            .query_pairs()
            .find(|(k, _)| k == "keywords")
            .map(|(_, v)| v.into_owned());
        assert_eq!(keywords.as_deref(), Some("jo hn&x=1"));
    }

    #[test]
    fn invalid_endpoint_is_an_error() {
        assert!(UsersQuery::default().to_url("not a url").is_err());
    }
}
