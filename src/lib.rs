// src/lib.rs
//! Fetch and parse NIST reference data tables:
//! ESTAR / PSTAR / ASTAR stopping powers and x-ray mass attenuation
//! coefficients, as plain numeric tables.
//!
//! ```no_run
//! use physdata::{fetch_electron_stopping, fetch_xray_coefficients, Density};
//!
//! // Aluminium, per unit mass (MeV cm2/g, g/cm2)
//! let al = fetch_electron_stopping(13, Density::Absent)?;
//! // ... and per unit length with the published density (MeV/cm, cm)
//! let al_cm = fetch_electron_stopping("013", true)?;
//! assert_eq!(al.len(), al_cm.len());
//!
//! let water = fetch_xray_coefficients("water", Density::Absent)?;
//! # Ok::<(), physdata::Error>(())
//! ```

#[macro_use]
pub mod macros;

pub mod client;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod logging;
pub mod material;
pub mod specs;
pub mod star;
pub mod table;
pub mod xray;

#[cfg(feature = "cli")]
pub mod cli;

pub use client::Client;
pub use config::FetchOptions;
pub use crate::core::net::{HttpTransport, Method, Transport};
pub use error::{Error, Result};
pub use material::{IntoMaterialId, MaterialId};
pub use specs::catalog::CompoundCatalog;
pub use specs::scale::{Density, IntoDensity};
pub use star::{
    fetch_alpha_stopping, fetch_electron_stopping, fetch_proton_stopping, Particle, StarTable,
};
pub use table::{DataKind, ElectronStopping, HeavyParticleStopping, MaterialTable, XrayCoefficients};
pub use xray::{
    fetch_compound_catalog, fetch_compounds, fetch_elements, fetch_xray_coefficients,
    CompoundRecord, ElementRecord,
};
