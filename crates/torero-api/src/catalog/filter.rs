//! In-memory filtering and pagination for resource listings.
//!
//! Filters apply over the stable ordering torero returned; pagination slices
//! that ordering after filtering.

use serde::Deserialize;

use crate::models::{Resource, Secret, Service};

/// Query parameters accepted by the list endpoints.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListParams {
    /// Exact-match type filter.
    #[serde(rename = "type")]
    pub resource_type: Option<String>,

    /// Tag membership filter (services only).
    pub tag: Option<String>,

    /// Number of items to skip from the start of the listing.
    #[serde(default)]
    pub skip: usize,

    /// Maximum number of items to return.
    pub limit: Option<usize>,
}

/// Apply skip/limit pagination. `skip` beyond the list length yields an
/// empty list.
pub fn paginate<T>(items: Vec<T>, skip: usize, limit: Option<usize>) -> Vec<T> {
    items
        .into_iter()
        .skip(skip)
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

/// Filter and paginate a service listing.
pub fn filter_services(services: Vec<Service>, params: &ListParams) -> Vec<Service> {
    let filtered = services
        .into_iter()
        .filter(|s| {
            params
                .resource_type
                .as_deref()
                .map_or(true, |t| s.service_type == t)
        })
        .filter(|s| params.tag.as_deref().map_or(true, |tag| s.has_tag(tag)))
        .collect();

    paginate(filtered, params.skip, params.limit)
}

/// Filter and paginate a decorator/repository/registry listing.
pub fn filter_resources(resources: Vec<Resource>, params: &ListParams) -> Vec<Resource> {
    let filtered = resources
        .into_iter()
        .filter(|r| {
            params
                .resource_type
                .as_deref()
                .map_or(true, |t| r.resource_type == t)
        })
        .collect();

    paginate(filtered, params.skip, params.limit)
}

/// Filter and paginate a secret listing.
pub fn filter_secrets(secrets: Vec<Secret>, params: &ListParams) -> Vec<Secret> {
    let filtered = secrets
        .into_iter()
        .filter(|s| {
            params
                .resource_type
                .as_deref()
                .map_or(true, |t| s.secret_type == t)
        })
        .collect();

    paginate(filtered, params.skip, params.limit)
}

/// Sorted, de-duplicated values for the `/types` and `/tags` endpoints.
pub fn unique_sorted(values: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = values.into_iter().collect();
    out.sort();
    out.dedup();
    out
}
