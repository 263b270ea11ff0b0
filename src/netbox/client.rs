//! NetBox REST API client.
//!
//! Blocking HTTP; list endpoints are followed page by page through their
//! `next` links.

use crate::config::{
    NetboxConfig, DEVICES_PATH, INTERFACES_PATH, IP_ADDRESSES_PATH, IP_RANGES_PATH,
    PREFIXES_PATH, REQUEST_TIMEOUT_SECS,
};
use crate::error::{KbError, Result};
use crate::inventory::{
    DeviceResource, InterfaceResource, Inventory, IpAddressResource, IpRangeResource,
    PrefixResource,
};
use colored::Colorize;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;
use std::time::Duration;

/// One page of a NetBox list endpoint.
#[derive(Deserialize, Debug)]
pub struct Page<T> {
    /// Total number of objects in the collection.
    pub count: Option<u64>,
    /// URL of the following page, `None` on the last one.
    pub next: Option<String>,
    pub results: Vec<T>,
}

/// Decode a JSON body, reporting the path of the first mismatch.
pub fn decode<T: DeserializeOwned>(body: &str, url: &str) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::error!("BODY START:\n\n{}\n\nBODY END\n", body);
        KbError::Decode {
            url: url.to_string(),
            path: e.path().to_string(),
            message: e.inner().to_string(),
        }
    })
}

/// Fetch every page starting at `first_url` and concatenate the results.
///
/// `fetch` returns the body for a URL. A `next` link that was already fetched
/// is a [`KbError::Pagination`] error.
pub fn collect_pages<T, F>(first_url: &str, mut fetch: F) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    F: FnMut(&str) -> Result<String>,
{
    let mut items: Vec<T> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut next_url = Some(first_url.to_string());
    let mut count_blocks_returned = 0;

    while let Some(url) = next_url {
        if !seen.insert(url.clone()) {
            return Err(KbError::Pagination { url });
        }
        let body = fetch(&url)?;
        let page: Page<T> = decode(&body, &url)?;

        let count = page.results.len();
        items.extend(page.results);
        log::debug!(
            "got block#{count_blocks_returned:2} record_count=+{count:3} => {total:3} of {expected:?}",
            total = items.len(),
            expected = page.count,
        );

        next_url = page.next;
        count_blocks_returned += 1;
    }

    Ok(items)
}

/// Map a response status to whether its body should be read.
///
/// 2xx gives `Ok(true)`, 404 gives `Ok(false)`, anything else is a
/// [`KbError::Api`].
pub fn check_status(status: StatusCode, url: &str) -> Result<bool> {
    if status == StatusCode::NOT_FOUND {
        log::debug!("Not found: {url}");
        return Ok(false);
    }
    if !status.is_success() {
        log::warn!("{failed} GET {url} status={status}", failed = "failed".on_red());
        return Err(KbError::Api {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    Ok(true)
}

/// [`Inventory`] backed by a live NetBox instance.
pub struct NetboxClient {
    config: NetboxConfig,
    http: Client,
}

impl NetboxClient {
    /// Build a client that sends the API token with every request.
    pub fn new(config: NetboxConfig) -> Result<NetboxClient> {
        let mut token = HeaderValue::from_str(&format!("Token {}", config.token))
            .map_err(|e| KbError::Config(format!("Invalid token: {e}")))?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, token);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        log::info!("NetBox API at {}", config.base_url());
        Ok(NetboxClient { config, http })
    }

    /// GET `url`; `Ok(None)` on 404.
    fn get(&self, url: &str) -> Result<Option<String>> {
        log::debug!("GET {}", url.on_blue());
        let response = self.http.get(url).send()?;
        if !check_status(response.status(), url)? {
            return Ok(None);
        }

        let body = response.text()?;
        log::trace!("GET {url} body.len()={}", body.len());
        Ok(Some(body))
    }

    fn list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let first_url = self.config.list_url(path);
        let items = collect_pages(&first_url, |url| {
            self.get(url)?.ok_or_else(|| KbError::Api {
                status: StatusCode::NOT_FOUND.as_u16(),
                url: url.to_string(),
            })
        })?;
        log::info!("Got {} records from {path}", items.len());
        Ok(items)
    }

    fn object<T: DeserializeOwned>(&self, path: &str, id: u64) -> Result<Option<T>> {
        let url = self.config.object_url(path, id);
        match self.get(&url)? {
            Some(body) => Ok(Some(decode(&body, &url)?)),
            None => Ok(None),
        }
    }
}

impl Inventory for NetboxClient {
    fn interfaces(&self) -> Result<Vec<InterfaceResource>> {
        self.list(INTERFACES_PATH)
    }

    fn ip_addresses(&self) -> Result<Vec<IpAddressResource>> {
        self.list(IP_ADDRESSES_PATH)
    }

    fn prefixes(&self) -> Result<Vec<PrefixResource>> {
        self.list(PREFIXES_PATH)
    }

    fn ip_ranges(&self) -> Result<Vec<IpRangeResource>> {
        self.list(IP_RANGES_PATH)
    }

    fn interface(&self, id: u64) -> Result<Option<InterfaceResource>> {
        self.object(INTERFACES_PATH, id)
    }

    fn device(&self, id: u64) -> Result<Option<DeviceResource>> {
        self.object(DEVICES_PATH, id)
    }
}
