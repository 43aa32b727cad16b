// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use physdata::config::consts::{AP_STAR_PATH, ESTAR_PATH, XRAY_ROOT};
use physdata::{Client, Error, FetchOptions, Method, Result, Transport};

pub const BASE: &str = "http://nist.test";

pub const ESTAR_013: &str = include_str!("../fixtures/estar_013.html");
pub const PSTAR_013: &str = include_str!("../fixtures/pstar_013.html");
pub const ASTAR_013: &str = include_str!("../fixtures/astar_013.html");
pub const XRAY_Z13: &str = include_str!("../fixtures/xray_z13.html");
pub const XRAY_WATER: &str = include_str!("../fixtures/xray_water.html");
pub const TAB1: &str = include_str!("../fixtures/tab1.html");
pub const TAB2: &str = include_str!("../fixtures/tab2.html");
pub const TAB4: &str = include_str!("../fixtures/tab4.html");

/// Canned site: request key -> body. Unknown requests answer 404, like the
/// real static pages do.
#[derive(Default)]
pub struct FakeSite {
    pages: HashMap<String, String>,
    calls: RefCell<Vec<String>>,
}

fn key(method: Method, url: &str, form: &[(&str, &str)]) -> String {
    let mut k = format!("{method:?} {url}");
    for (name, value) in form {
        k.push_str(&format!(" {name}={value}"));
    }
    k
}

impl FakeSite {
    pub fn new() -> Self {
        Self::default()
    }

    /// The whole fixture site: aluminium on every program, water and the
    /// three catalog pages.
    pub fn nist() -> Self {
        let mut site = Self::new()
            .estar("013", ESTAR_013)
            .ap_star("PSTAR", "013", PSTAR_013)
            .ap_star("ASTAR", "013", ASTAR_013)
            .xray_page("tab1.html", TAB1)
            .xray_page("tab2.html", TAB2)
            .xray_page("tab4.html", TAB4)
            .xray_page("ComTab/water.html", XRAY_WATER)
            .xray_page("ComTab/adipose.html", XRAY_WATER)
            .xray_page("ComTab/tissue.html", XRAY_WATER);
        for z in ["01", "04", "13", "85"] {
            site = site.xray_page(&format!("ElemTab/z{z}.html"), XRAY_Z13);
        }
        site
    }

    pub fn estar(mut self, matno: &str, body: &str) -> Self {
        let url = format!("{BASE}{ESTAR_PATH}");
        let form = [("matno", matno), ("ShowDefault", "on")];
        self.pages.insert(key(Method::Post, &url, &form), body.to_string());
        self
    }

    pub fn ap_star(mut self, prog: &str, matno: &str, body: &str) -> Self {
        let url = format!("{BASE}{AP_STAR_PATH}");
        let form = [("matno", matno), ("ShowDefault", "on"), ("prog", prog)];
        self.pages.insert(key(Method::Post, &url, &form), body.to_string());
        self
    }

    /// `path` is relative to the x-ray root, e.g. `ElemTab/z13.html`.
    pub fn xray_page(mut self, path: &str, body: &str) -> Self {
        let url = format!("{BASE}{XRAY_ROOT}/{path}");
        self.pages.insert(key(Method::Get, &url, &[]), body.to_string());
        self
    }

    /// Requests seen so far, oldest first.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn client(&self) -> Client<&FakeSite> {
        Client::with_transport(self, FetchOptions::default().with_base_url(BASE))
    }
}

impl Transport for FakeSite {
    fn fetch(&self, method: Method, url: &str, form: &[(&str, &str)]) -> Result<String> {
        let k = key(method, url, form);
        self.calls.borrow_mut().push(k.clone());
        self.pages
            .get(&k)
            .cloned()
            .ok_or_else(|| Error::Http { status: 404, url: url.to_string() })
    }
}

/// Relative comparison for values that went through a multiply/divide.
pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
}
