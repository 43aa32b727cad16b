// src/material.rs
//! Material identifiers as accepted by the fetchers.
//!
//! Elements (and the STAR compound materials) are addressed by number, x-ray
//! compounds by their short name. Numbers may be given as integers or as
//! digit strings, with or without leading zeros: `13`, `"13"` and `"013"`
//! are the same material.

use std::fmt;

use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MaterialId {
    /// Atomic number or STAR material number, always > 0.
    Number(u32),
    /// X-ray compound short name, used verbatim as a URL path segment.
    Name(String),
}

impl MaterialId {
    /// Number only; names are rejected.
    pub fn number(&self) -> Result<u32> {
        match self {
            MaterialId::Number(n) => Ok(*n),
            MaterialId::Name(name) => Err(Error::InvalidIdentifier(format!(
                "{name:?} is not a positive integer"
            ))),
        }
    }

    /// Number zero padded to at least `width` digits.
    pub fn padded(&self, width: usize) -> Result<String> {
        let n = self.number()?;
        Ok(format!("{n:0width$}"))
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterialId::Number(n) => write!(f, "{n}"),
            MaterialId::Name(name) => f.write_str(name),
        }
    }
}

/// Anything a caller may pass as a material identifier.
pub trait IntoMaterialId {
    fn into_material_id(self) -> Result<MaterialId>;
}

impl IntoMaterialId for MaterialId {
    fn into_material_id(self) -> Result<MaterialId> {
        match self {
            MaterialId::Number(0) => {
                Err(Error::InvalidIdentifier(s!("0 is not a positive integer")))
            }
            MaterialId::Name(name) => parse_str(&name),
            id => Ok(id),
        }
    }
}

impl IntoMaterialId for &MaterialId {
    fn into_material_id(self) -> Result<MaterialId> {
        self.clone().into_material_id()
    }
}

macro_rules! impl_into_material_id_int {
    ($($t:ty),*) => {$(
        impl IntoMaterialId for $t {
            fn into_material_id(self) -> Result<MaterialId> {
                u32::try_from(self)
                    .ok()
                    .filter(|n| *n > 0)
                    .map(MaterialId::Number)
                    .ok_or_else(|| {
                        Error::InvalidIdentifier(format!("{self} is not a positive integer"))
                    })
            }
        }
    )*};
}

impl_into_material_id_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl IntoMaterialId for &str {
    fn into_material_id(self) -> Result<MaterialId> {
        parse_str(self)
    }
}

impl IntoMaterialId for String {
    fn into_material_id(self) -> Result<MaterialId> {
        parse_str(&self)
    }
}

impl IntoMaterialId for &String {
    fn into_material_id(self) -> Result<MaterialId> {
        parse_str(self)
    }
}

impl std::str::FromStr for MaterialId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_str(s)
    }
}

fn parse_str(s: &str) -> Result<MaterialId> {
    if s.is_empty() {
        return Err(Error::InvalidIdentifier(s!("empty identifier")));
    }
    if s.bytes().all(|b| b.is_ascii_digit()) {
        let digits = s.trim_start_matches('0');
        if digits.is_empty() {
            return Err(Error::InvalidIdentifier(format!("{s:?} is not a positive integer")));
        }
        return digits
            .parse::<u32>()
            .map(MaterialId::Number)
            .map_err(|_| Error::InvalidIdentifier(format!("{s:?} is out of range")));
    }
    let signed = s.starts_with(['-', '+']);
    if signed || s.chars().any(|c| c.is_whitespace() || matches!(c, '/' | '\\' | '?' | '#' | '%')) {
        return Err(Error::InvalidIdentifier(format!(
            "{s:?} is neither a positive integer nor a compound short name"
        )));
    }
    Ok(MaterialId::Name(s!(s)))
}
