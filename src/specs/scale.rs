// src/specs/scale.rs
//! Density scaling of parsed rows.
//!
//! Published values are per unit mass (MeV cm²/g, g/cm², cm²/g). Given a
//! density ρ in g/cm³ the per-length forms are:
//! - stopping powers and attenuation coefficients: `value * ρ`
//! - ranges: `value / ρ`
//! - energies, yields and ratio columns: unchanged
//!
//! Which rule applies is fixed per column by the [`DataKind`].

use crate::error::{Error, Result};
use crate::specs::rows::{self, NUMBER_RE};
use crate::table::DataKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scale {
    Keep,
    Mul,
    Div,
}

impl Scale {
    #[inline]
    pub fn apply(self, value: f64, density: f64) -> f64 {
        match self {
            Scale::Keep => value,
            Scale::Mul => value * density,
            Scale::Div => value / density,
        }
    }
}

/// How the caller wants densities handled.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Density {
    /// Leave values per unit mass.
    #[default]
    Absent,
    /// Scale with this density (g/cm³). `0.0` is accepted: stopping powers
    /// and coefficients become zero and ranges become infinite.
    Value(f64),
    /// Scale with the density the site publishes for the material.
    Auto,
}

impl Density {
    /// Checked constructor for explicit values.
    pub fn value(d: f64) -> Result<Self> {
        Density::try_from(d)
    }
}

impl TryFrom<f64> for Density {
    type Error = Error;

    fn try_from(d: f64) -> Result<Self> {
        check(d).map(Density::Value)
    }
}

impl TryFrom<Option<f64>> for Density {
    type Error = Error;

    fn try_from(d: Option<f64>) -> Result<Self> {
        match d {
            None => Ok(Density::Absent),
            Some(d) => Density::try_from(d),
        }
    }
}

impl From<bool> for Density {
    fn from(auto: bool) -> Self {
        if auto { Density::Auto } else { Density::Absent }
    }
}

impl std::str::FromStr for Density {
    type Err = Error;

    /// `auto`, `none`, or a number.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "true" => Ok(Density::Auto),
            "" | "none" | "false" => Ok(Density::Absent),
            other => {
                let d: f64 = other.parse().map_err(|_| {
                    Error::InvalidDensity(format!("{s:?} is neither a number nor 'auto'"))
                })?;
                Density::try_from(d)
            }
        }
    }
}

/// Anything a caller may pass as a density argument: a [`Density`], `bool`
/// (`true` = published density), `f64`, or `Option<f64>`.
pub trait IntoDensity {
    fn into_density(self) -> Result<Density>;
}

impl IntoDensity for Density {
    fn into_density(self) -> Result<Density> {
        match self {
            Density::Value(d) => check(d).map(Density::Value),
            other => Ok(other),
        }
    }
}

impl IntoDensity for bool {
    fn into_density(self) -> Result<Density> {
        Ok(Density::from(self))
    }
}

impl IntoDensity for f64 {
    fn into_density(self) -> Result<Density> {
        Density::try_from(self)
    }
}

impl IntoDensity for Option<f64> {
    fn into_density(self) -> Result<Density> {
        Density::try_from(self)
    }
}

/// Validate a density that is about to be applied. `Value` densities built
/// without `TryFrom` end up here too.
pub(crate) fn check(d: f64) -> Result<f64> {
    if d.is_finite() && d >= 0.0 {
        Ok(d)
    } else {
        Err(Error::InvalidDensity(format!("{d} is not a non-negative real number")))
    }
}

/// Apply `K`'s density rule to one row.
pub fn scale_row<K: DataKind>(row: &[f64], density: f64) -> Vec<f64> {
    row.iter()
        .zip(K::SCALES)
        .map(|(&v, s)| s.apply(v, density))
        .collect()
}

/// Apply `K`'s density rule to every row in place. `1.0` is a no-op.
pub fn scale_rows<K: DataKind>(rows: &mut [Vec<f64>], density: f64) {
    if density == 1.0 {
        return;
    }
    for row in rows.iter_mut() {
        for (v, s) in row.iter_mut().zip(K::SCALES) {
            *v = s.apply(*v, density);
        }
    }
}

/// Density printed on a STAR page: the first scientific-notation number
/// ahead of the table. Numbers inside the table never count.
pub fn published_density(doc: &str) -> Option<f64> {
    NUMBER_RE
        .find(rows::star_preamble(doc))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|d| d.is_finite() && *d >= 0.0)
}
