// src/core/net.rs
//
// The only place that touches the network. Everything above it speaks
// `Transport`, so parsers and facades can be driven by canned pages.

use crate::config::FetchOptions;
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Fetch the text of a URL.
///
/// `form` is sent as an `application/x-www-form-urlencoded` body on `Post`
/// and ignored on `Get`. Implementations return the whole body, or fail with
/// [`Error::Http`] for non-2xx statuses and [`Error::Transport`] for
/// everything below HTTP.
pub trait Transport {
    fn fetch(&self, method: Method, url: &str, form: &[(&str, &str)]) -> Result<String>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn fetch(&self, method: Method, url: &str, form: &[(&str, &str)]) -> Result<String> {
        (**self).fetch(method, url, form)
    }
}

/// Blocking HTTP(S) transport on top of `reqwest`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(opts: &FetchOptions) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(opts.timeout)
            .user_agent(opts.user_agent.as_str())
            .build()
            .map_err(|e| Error::Transport { url: opts.base_url.clone(), source: Box::new(e) })?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, method: Method, url: &str, form: &[(&str, &str)]) -> Result<String> {
        let req = match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url).form(form),
        };
        logd!("HTTP {:?} {} {:?}", method, url, form);

        let resp = req
            .send()
            .map_err(|e| Error::Transport { url: s!(url), source: Box::new(e) })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Http { status: status.as_u16(), url: s!(url) });
        }

        let body = resp
            .text()
            .map_err(|e| Error::Transport { url: s!(url), source: Box::new(e) })?;
        logd!("HTTP {} -> {} bytes", url, body.len());
        Ok(body)
    }
}
