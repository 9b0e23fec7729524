// REST data source repository implementation
use crate::application::section_repository::{SectionFilter, SectionRepository};
use crate::domain::section::SectionRecord;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RestSectionRepository {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

/// The SQL-backed API answers with a bare array; the spreadsheet-backed one
/// wraps rows in `data`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SectionsResponse {
    Bare(Vec<SectionRecord>),
    Wrapped { data: Vec<SectionRecord> },
}

impl SectionsResponse {
    fn into_records(self) -> Vec<SectionRecord> {
        match self {
            SectionsResponse::Bare(records) => records,
            SectionsResponse::Wrapped { data } => data,
        }
    }
}

impl RestSectionRepository {
    pub fn new(base_url: String, token: Option<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    fn sections_url(&self) -> String {
        format!("{}/sections", self.base_url)
    }

    fn query_params(filter: &SectionFilter) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(level) = filter.level {
            params.push(("level", level.to_string()));
        }
        if let Some(group) = &filter.group {
            params.push(("group", group.clone()));
        }
        params
    }
}

#[async_trait]
impl SectionRepository for RestSectionRepository {
    async fn list_sections(&self, filter: &SectionFilter) -> Result<Vec<SectionRecord>> {
        let mut request = self
            .client
            .get(self.sections_url())
            .query(&Self::query_params(filter))
            .header("Accept", "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .context("Failed to send request to data source")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Data source request failed with status {}: {}", status, body);
        }

        let records = response
            .json::<SectionsResponse>()
            .await
            .context("Failed to parse data source response")?
            .into_records();

        tracing::debug!("Data source returned {} sections", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn repository(server: &MockServer, token: Option<&str>) -> RestSectionRepository {
        RestSectionRepository::new(
            format!("{}/", server.uri()),
            token.map(str::to_string),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_query_params() {
        let filter = SectionFilter {
            level: Some(3),
            group: Some("A".to_string()),
        };
        assert_eq!(
            RestSectionRepository::query_params(&filter),
            vec![("level", "3".to_string()), ("group", "A".to_string())]
        );
        assert!(RestSectionRepository::query_params(&SectionFilter::default()).is_empty());
    }

    #[tokio::test]
    async fn test_list_sections_bare_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sections"))
            .and(query_param("level", "3"))
            .and(header("authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"dayCode": "S", "startTime": "08:00:00", "endTime": "10:00:00", "courseLabel": "CS101", "sectionType": "lecture"},
                {"dayCode": "M", "startTime": null, "endTime": null, "courseLabel": "CS102"}
            ])))
            .mount(&server)
            .await;

        let records = repository(&server, Some("secret"))
            .list_sections(&SectionFilter::level(3))
            .await
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].section_type.as_deref(), Some("lecture"));
        assert_eq!(records[1].start_time, None);
    }

    #[tokio::test]
    async fn test_list_sections_wrapped_data() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sections"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"dayCode": "W", "startTime": "12:00:00", "endTime": "13:00:00", "courseLabel": "IS230"}]
            })))
            .mount(&server)
            .await;

        let records = repository(&server, None)
            .list_sections(&SectionFilter::default())
            .await
            .unwrap();

        assert_eq!(records, vec![SectionRecord::new("W", "12:00:00", "13:00:00", "IS230")]);
    }

    #[tokio::test]
    async fn test_list_sections_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sections"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&server)
            .await;

        let err = repository(&server, None)
            .list_sections(&SectionFilter::default())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("503"));
    }
}
