//! Page fetching collaborator.
//!
//! One blocking GET per call with a fixed timeout and a bot user agent.
//! The extraction core has no knowledge of where markup comes from; this
//! module exists so front ends have a matching fetch primitive. Retry
//! policy, rate limiting and robots handling are out of scope.

use std::time::Duration;

use ureq::ResponseExt;

use crate::error::{Error, Result};

const USER_AGENT: &str = "product-extract-bot/0.1 (+https://github.com/Murrough-Foley/product-extract)";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// A fetched page: the final URL after redirects, and the body.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after any redirects.
    pub url: String,
    /// Response body as text.
    pub html: String,
}

/// Fetch a page over HTTP.
pub fn fetch_html(url: &str) -> Result<FetchedPage> {
    let config = ureq::Agent::config_builder()
        .timeout_global(Some(FETCH_TIMEOUT))
        .user_agent(USER_AGENT)
        .build();
    let agent = ureq::Agent::new_with_config(config);

    let mut response = agent
        .get(url)
        .call()
        .map_err(|err| Error::Fetch(err.to_string()))?;

    let final_url = response.get_uri().to_string();
    let html = response
        .body_mut()
        .read_to_string()
        .map_err(|err| Error::Fetch(err.to_string()))?;

    Ok(FetchedPage {
        url: final_url,
        html,
    })
}
