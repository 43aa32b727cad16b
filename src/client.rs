// src/client.rs
use crate::config::FetchOptions;
use crate::core::net::{HttpTransport, Method, Transport};
use crate::error::Result;
use crate::logging::elapsed_ms;

/// Entry point for every fetch: a transport plus the site options.
///
/// The client keeps no state between calls, so one instance can be shared
/// across threads when its transport allows it. Fetch methods live next to
/// their parsers, in [`star`](crate::star) and [`xray`](crate::xray).
#[derive(Clone, Debug)]
pub struct Client<T: Transport = HttpTransport> {
    transport: T,
    opts: FetchOptions,
}

impl Client<HttpTransport> {
    /// HTTP client for the public NIST site.
    pub fn new() -> Result<Self> {
        Self::with_options(FetchOptions::default())
    }

    pub fn with_options(opts: FetchOptions) -> Result<Self> {
        let transport = HttpTransport::new(&opts)?;
        Ok(Self { transport, opts })
    }
}

impl<T: Transport> Client<T> {
    /// Drive the client with any transport (mirrors, test doubles).
    pub fn with_transport(transport: T, opts: FetchOptions) -> Self {
        Self { transport, opts }
    }

    pub fn options(&self) -> &FetchOptions {
        &self.opts
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub(crate) fn get(&self, url: &str) -> Result<String> {
        self.send(Method::Get, url, &[])
    }

    pub(crate) fn post(&self, url: &str, form: &[(&str, &str)]) -> Result<String> {
        self.send(Method::Post, url, form)
    }

    fn send(&self, method: Method, url: &str, form: &[(&str, &str)]) -> Result<String> {
        let t0 = elapsed_ms();
        let body = self
            .transport
            .fetch(method, url, form)
            .inspect_err(|e| loge!("{:?} {}: {}", method, url, e))?;
        logd!("{:?} {} took {} ms", method, url, elapsed_ms().saturating_sub(t0));
        Ok(body)
    }
}
