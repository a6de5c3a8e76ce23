//! HTTP client for the NetBox REST API.
//!
//! Only the read-only tenancy endpoints the exporter needs are covered:
//! contact groups and contacts. Requests are blocking (`ureq`); listings are
//! paginated with `limit`/`offset` until NetBox reports no `next` page.

use crate::config::Config;
use crate::domain::GroupId;
use crate::error::{NetBoxApiError, NetBoxResult};
use crate::metrics::Metrics;
use crate::models::{Contact, ContactGroup};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Page size requested from list endpoints.
pub const PAGE_SIZE: usize = 250;

const CONTACT_GROUPS_PATH: &str = "/api/tenancy/contact-groups/";
const CONTACTS_PATH: &str = "/api/tenancy/contacts/";

/// NetBox's paginated list envelope.
#[derive(Debug, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Total number of items across all pages
    #[serde(default)]
    pub count: usize,

    /// URL of the next page, `None` on the last page
    #[serde(default)]
    pub next: Option<String>,

    /// URL of the previous page
    #[serde(default)]
    pub previous: Option<String>,

    /// The items of this page
    pub results: Vec<T>,
}

/// HTTP client for the NetBox API.
#[derive(Clone)]
pub struct NetBoxClient {
    /// Base URL of the NetBox instance
    base_url: String,

    /// API token, sent as `Authorization: Token <token>`
    api_token: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl NetBoxClient {
    /// Create a new NetBoxClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.netbox_url.clone(),
            api_token: config.netbox_token.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a NetBoxClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_token: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_token,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute an authenticated GET request and decode the JSON body.
    fn get_json<T: DeserializeOwned>(&self, path: &str) -> NetBoxResult<T> {
        let start = Instant::now();
        let url = self.build_url(path);
        tracing::debug!("GET {}", url);

        let result = self
            .agent
            .get(&url)
            .set("Authorization", &format!("Token {}", self.api_token))
            .set("Accept", "application/json")
            .call()
            .map_err(|e| self.map_error(e));

        self.metrics
            .record_http_request(start.elapsed(), result.is_err());

        let body = result?
            .into_string()
            .map_err(|e| NetBoxApiError::HttpError(e.to_string()))?;

        serde_json::from_str(&body).map_err(NetBoxApiError::JsonError)
    }

    /// Fetch every page of a list endpoint. `query` must not include paging params.
    fn get_all<T: DeserializeOwned>(&self, base_path: &str, query: &str) -> NetBoxResult<Vec<T>> {
        let mut items = Vec::new();
        let mut offset = 0;

        loop {
            let separator = if query.is_empty() { "" } else { "&" };
            let path = format!(
                "{}?{}{}limit={}&offset={}",
                base_path, query, separator, PAGE_SIZE, offset
            );
            let page: PaginatedResponse<T> = self.get_json(&path)?;
            self.metrics.record_page();

            let received = page.results.len();
            items.extend(page.results);

            if page.next.is_none() || received == 0 {
                break;
            }
            offset += received;
        }

        Ok(items)
    }

    /// Map a ureq error to a NetBoxApiError.
    fn map_error(&self, error: ureq::Error) -> NetBoxApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 | 403 => NetBoxApiError::Unauthorized,
                    404 => NetBoxApiError::NotFound(message),
                    400 => NetBoxApiError::InvalidRequest(message),
                    _ => NetBoxApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    NetBoxApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    NetBoxApiError::Timeout
                } else {
                    NetBoxApiError::HttpError(transport.to_string())
                }
            }
        }
    }

    // ========================= Contact Groups =========================

    /// Get a single contact group by primary key.
    pub fn get_contact_group(&self, id: GroupId) -> NetBoxResult<ContactGroup> {
        let path = format!("{}{}/", CONTACT_GROUPS_PATH, id);
        let group: ContactGroup = self.get_json(&path).map_err(|e| match e {
            NetBoxApiError::NotFound(_) => {
                NetBoxApiError::NotFound(format!("contact group {}", id))
            }
            other => other,
        })?;
        self.metrics.record_groups_fetched(1);
        Ok(group)
    }

    /// Look up a contact group by its slug.
    pub fn find_contact_group_by_slug(&self, slug: &str) -> NetBoxResult<ContactGroup> {
        let query = format!("slug={}", urlencoding::encode(slug));
        let group = self
            .get_all::<ContactGroup>(CONTACT_GROUPS_PATH, &query)?
            .into_iter()
            .find(|g| g.slug == slug)
            .ok_or_else(|| NetBoxApiError::NotFound(format!("contact group '{}'", slug)))?;
        self.metrics.record_groups_fetched(1);
        Ok(group)
    }

    /// List every contact group.
    pub fn list_contact_groups(&self) -> NetBoxResult<Vec<ContactGroup>> {
        let groups = self.get_all::<ContactGroup>(CONTACT_GROUPS_PATH, "")?;
        self.metrics.record_groups_fetched(groups.len());
        Ok(groups)
    }

    /// List the direct children of a contact group.
    pub fn get_child_groups(&self, parent: GroupId) -> NetBoxResult<Vec<ContactGroup>> {
        let query = format!("parent_id={}", parent);
        let groups: Vec<ContactGroup> = self
            .get_all::<ContactGroup>(CONTACT_GROUPS_PATH, &query)?
            .into_iter()
            .filter(|g| g.parent_id() == Some(parent))
            .collect();
        self.metrics.record_groups_fetched(groups.len());
        Ok(groups)
    }

    // ========================= Contacts =========================

    /// List the contacts that are direct members of a group.
    ///
    /// NetBox's `group_id` filter also matches members of descendant groups,
    /// so results are narrowed to contacts whose own `groups` include `group`.
    pub fn get_contacts_in_group(&self, group: GroupId) -> NetBoxResult<Vec<Contact>> {
        let query = format!("group_id={}", group);
        let contacts: Vec<Contact> = self
            .get_all::<Contact>(CONTACTS_PATH, &query)?
            .into_iter()
            .filter(|c| c.is_member_of(group))
            .collect();
        self.metrics.record_contacts_fetched(contacts.len());
        Ok(contacts)
    }
}
