// src/table.rs
//! Numeric tables as returned to callers.
//!
//! A [`MaterialTable`] is tagged with its [`DataKind`], which fixes the
//! column count, the column headers and the per-column density rule.
//! Tables are built once by the pipeline and are read-only afterwards.

use std::marker::PhantomData;

use crate::specs::scale::Scale::{self, *};

/// Column layout of one published data set.
pub trait DataKind {
    /// Short name used in logs.
    const NAME: &'static str;
    const COLUMNS: usize;
    /// Density rule per column, `COLUMNS` long.
    const SCALES: &'static [Scale];
    /// Headers for per-mass units (no density applied).
    const HEADERS: &'static [&'static str];
    /// Headers for per-length units (density applied).
    const SCALED_HEADERS: &'static [&'static str];
}

/// ESTAR: electrons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElectronStopping;

/// PSTAR / ASTAR: protons and alpha particles share one layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeavyParticleStopping;

/// Mass attenuation and mass energy-absorption coefficients.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct XrayCoefficients;

impl DataKind for ElectronStopping {
    const NAME: &'static str = "electron stopping";
    const COLUMNS: usize = 7;
    const SCALES: &'static [Scale] = &[Keep, Mul, Mul, Mul, Div, Keep, Keep];
    const HEADERS: &'static [&'static str] = &[
        "Energy (MeV)",
        "Collision SP (MeV cm2/g)",
        "Radiative SP (MeV cm2/g)",
        "Total SP (MeV cm2/g)",
        "CSDA range (g/cm2)",
        "Radiation yield",
        "Density effect parameter",
    ];
    const SCALED_HEADERS: &'static [&'static str] = &[
        "Energy (MeV)",
        "Collision SP (MeV/cm)",
        "Radiative SP (MeV/cm)",
        "Total SP (MeV/cm)",
        "CSDA range (cm)",
        "Radiation yield",
        "Density effect parameter",
    ];
}

impl DataKind for HeavyParticleStopping {
    const NAME: &'static str = "heavy particle stopping";
    const COLUMNS: usize = 7;
    const SCALES: &'static [Scale] = &[Keep, Mul, Mul, Mul, Div, Div, Keep];
    const HEADERS: &'static [&'static str] = &[
        "Energy (MeV)",
        "Electronic SP (MeV cm2/g)",
        "Nuclear SP (MeV cm2/g)",
        "Total SP (MeV cm2/g)",
        "CSDA range (g/cm2)",
        "Projected range (g/cm2)",
        "Detour factor",
    ];
    const SCALED_HEADERS: &'static [&'static str] = &[
        "Energy (MeV)",
        "Electronic SP (MeV/cm)",
        "Nuclear SP (MeV/cm)",
        "Total SP (MeV/cm)",
        "CSDA range (cm)",
        "Projected range (cm)",
        "Detour factor",
    ];
}

impl DataKind for XrayCoefficients {
    const NAME: &'static str = "x-ray coefficients";
    const COLUMNS: usize = 3;
    const SCALES: &'static [Scale] = &[Keep, Mul, Mul];
    const HEADERS: &'static [&'static str] = &[
        "Energy (MeV)",
        "mu/rho (cm2/g)",
        "mu_en/rho (cm2/g)",
    ];
    const SCALED_HEADERS: &'static [&'static str] = &[
        "Energy (MeV)",
        "mu (1/cm)",
        "mu_en (1/cm)",
    ];
}

/// Rows of one fetched table, ascending energy as published.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialTable<K: DataKind> {
    rows: Vec<Vec<f64>>,
    density: Option<f64>,
    _kind: PhantomData<K>,
}

impl<K: DataKind> MaterialTable<K> {
    /// Rows must already have `K::COLUMNS` fields; the pipeline guarantees it.
    pub(crate) fn new(rows: Vec<Vec<f64>>, density: Option<f64>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == K::COLUMNS));
        Self { rows, density, _kind: PhantomData }
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row(&self, i: usize) -> Option<&[f64]> {
        self.rows.get(i).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of column `i` top to bottom. Empty if `i` is out of range.
    pub fn column(&self, i: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().filter_map(move |r| r.get(i).copied())
    }

    /// Density the values were scaled with, `None` for per-mass units.
    pub fn density(&self) -> Option<f64> {
        self.density
    }

    pub fn headers(&self) -> &'static [&'static str] {
        if self.density.is_some() { K::SCALED_HEADERS } else { K::HEADERS }
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }
}

impl<K: DataKind> IntoIterator for MaterialTable<K> {
    type Item = Vec<f64>;
    type IntoIter = std::vec::IntoIter<Vec<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a, K: DataKind> IntoIterator for &'a MaterialTable<K> {
    type Item = &'a Vec<f64>;
    type IntoIter = std::slice::Iter<'a, Vec<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
