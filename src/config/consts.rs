// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://physics.nist.gov";
pub const USER_AGENT: &str = concat!("physdata/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 30;

// STAR family (form POSTs)
pub const ESTAR_PATH: &str = "/cgi-bin/Star/e_table-t.pl";
pub const AP_STAR_PATH: &str = "/cgi-bin/Star/ap_table-t.pl";
pub const STAR_CODE_WIDTH: usize = 3;

// X-ray mass attenuation (static pages)
pub const XRAY_ROOT: &str = "/PhysRefData/XrayMassCoef";
pub const XRAY_ELEMENT_CODE_WIDTH: usize = 2;
pub const ELEMENT_CATALOG_PAGE: &str = "tab1.html";
pub const COMPOUND_CATALOG_PAGE: &str = "tab2.html";
pub const COMPOUND_LINKS_PAGE: &str = "tab4.html";

// Catalog layout
pub const CATALOG_HEADER_ROWS: usize = 3;
pub const LINKS_HEADER_CELLS: usize = 4;
pub const FILLER_CELL: &str = "&nbsp;";

// Elements whose published density is a placeholder
pub const NOMINAL_DENSITY_Z: [u32; 2] = [85, 87];
