//! Catalog loading.
//!
//! The loader owns the whole load-or-fail decision: it refuses to fetch from
//! an unserved page, performs exactly one fetch through a [`CatalogSource`],
//! classifies the outcome and logs a failure once. Rendering starts only
//! after [`load_catalog`] returns.

use serde_json::Value;

use crate::catalog::Catalog;
use crate::error::LoadFailure;
use crate::route::PageContext;
use crate::types::CatalogEntry;

/// Raw answer to a catalog request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl FetchResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            status_text: "OK".to_string(),
            body: body.into(),
        }
    }

    pub fn status(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: String::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can fetch the catalog resource.
///
/// `Err` carries a transport-level reason (network down, CORS, ...).
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    async fn fetch(&self, resource: &str) -> Result<FetchResponse, String>;
}

/// Parse the catalog body.
///
/// Only the top level is checked: the body must be a JSON array. Its
/// elements are taken as they are, without validating individual fields
/// (see [`CatalogEntry::from_value`]).
pub fn parse_catalog(resource: &str, body: &str) -> Result<Vec<CatalogEntry>, LoadFailure> {
    let values: Vec<Value> = serde_json::from_str(body).map_err(|e| LoadFailure::Parse {
        resource: resource.to_string(),
        reason: e.to_string(),
    })?;
    Ok(values.into_iter().map(CatalogEntry::from_value).collect())
}

/// Turn a fetch response into a catalog.
pub fn interpret_response(resource: &str, response: &FetchResponse) -> Result<Catalog, LoadFailure> {
    if !response.is_success() {
        return Err(LoadFailure::Fetch {
            resource: resource.to_string(),
            reason: format!("{} {}", response.status, response.status_text)
                .trim_end()
                .to_string(),
        });
    }
    parse_catalog(resource, &response.body).map(Catalog::new)
}

/// Load the catalog for this page.
pub async fn load_catalog<S: CatalogSource>(
    page: &PageContext,
    source: &S,
    resource: &str,
) -> Result<Catalog, LoadFailure> {
    let result = if page.is_unserved() {
        Err(LoadFailure::UnservedContext {
            protocol: page.protocol.clone(),
        })
    } else {
        match source.fetch(resource).await {
            Ok(response) => interpret_response(resource, &response),
            Err(reason) => Err(LoadFailure::Fetch {
                resource: resource.to_string(),
                reason,
            }),
        }
    };

    match &result {
        Ok(catalog) => tracing::info!(resource, entries = catalog.len(), "Loaded video catalog"),
        Err(failure) => tracing::error!(
            resource,
            kind = failure.kind(),
            error = %failure,
            "Error loading video data"
        ),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryKind;

    #[test]
    fn test_non_success_is_fetch_failure() {
        let err = interpret_response("videodata.json", &FetchResponse::status(404, "Not Found"))
            .unwrap_err();
        assert_eq!(
            err,
            LoadFailure::Fetch {
                resource: "videodata.json".to_string(),
                reason: "404 Not Found".to_string(),
            }
        );
    }

    #[test]
    fn test_bad_body_is_parse_failure() {
        let err = interpret_response("videodata.json", &FetchResponse::ok("{\"videos\": 1}"))
            .unwrap_err();
        assert_eq!(err.kind(), "parse");
    }

    #[test]
    fn test_empty_array_is_valid() {
        let catalog = interpret_response("videodata.json", &FetchResponse::ok("[]")).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_malformed_element_does_not_fail_load() {
        let body = r#"[{"id": 1, "type": "video", "embedId": "a"}, 42, {"id": 2, "description": null}]"#;
        let catalog = interpret_response("videodata.json", &FetchResponse::ok(body)).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.count(&EntryKind::Video), 1);
    }

    #[test]
    fn test_status_without_text() {
        let err = interpret_response("c.json", &FetchResponse::status(500, "")).unwrap_err();
        assert_eq!(err.to_string(), "failed to fetch c.json: 500");
    }
}
