// src/config/options.rs
use std::time::Duration;

use super::consts::*;

/// Where and how to reach the data site.
///
/// Endpoint paths are fixed; only the origin can be moved (mirrors, test
/// servers).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
        }
    }
}

impl FetchOptions {
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = s!(url.trim_end_matches('/'));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, ua: &str) -> Self {
        self.user_agent = s!(ua);
        self
    }

    /* ---------------- URL builders ---------------- */

    pub fn estar_url(&self) -> String {
        join!(&self.base_url, ESTAR_PATH)
    }

    pub fn ap_star_url(&self) -> String {
        join!(&self.base_url, AP_STAR_PATH)
    }

    /// `code` is already zero padded.
    pub fn xray_element_url(&self, code: &str) -> String {
        join!(&self.base_url, XRAY_ROOT, "/ElemTab/z", code, ".html")
    }

    pub fn xray_compound_url(&self, short_name: &str) -> String {
        join!(&self.base_url, XRAY_ROOT, "/ComTab/", short_name, ".html")
    }

    pub fn xray_page_url(&self, page: &str) -> String {
        join!(&self.base_url, XRAY_ROOT, "/", page)
    }
}
