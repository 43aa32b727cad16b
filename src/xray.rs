// src/xray.rs
//! X-ray mass attenuation and mass energy-absorption coefficients
//! (Hubbell and Seltzer tables, NIST PhysRefData).
//!
//! Elements are published at `ElemTab/zNN.html`, compounds at
//! `ComTab/<short name>.html`. Every page lists energy (MeV), μ/ρ and μen/ρ
//! (cm²/g); with a density the coefficients become μ and μen (1/cm).

use crate::client::Client;
use crate::config::consts::{
    COMPOUND_CATALOG_PAGE, COMPOUND_LINKS_PAGE, ELEMENT_CATALOG_PAGE, NOMINAL_DENSITY_Z,
    XRAY_ELEMENT_CODE_WIDTH,
};
use crate::core::net::Transport;
use crate::error::{Error, Result};
use crate::material::{IntoMaterialId, MaterialId};
use crate::specs::catalog::{self, CompoundCatalog};
use crate::specs::rows::{self, Grammar};
use crate::specs::scale::{self, Density, IntoDensity};
use crate::table::{MaterialTable, XrayCoefficients};

/// An element of table 1.
///
/// Densities for Z = 85 and Z = 87 are placeholders (10 g/cm³) on the source
/// page and are kept as such.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementRecord {
    pub z: u32,
    pub symbol: String,
    pub name: String,
    /// Z/A
    pub mass_ratio: f64,
    /// Mean excitation energy, eV
    pub excitation: f64,
    /// g/cm³
    pub density: f64,
}

impl ElementRecord {
    pub fn has_nominal_density(&self) -> bool {
        NOMINAL_DENSITY_Z.contains(&self.z)
    }

    pub fn coefficients(&self, use_density: bool) -> Result<MaterialTable<XrayCoefficients>> {
        self.coefficients_with(&Client::new()?, use_density)
    }

    pub fn coefficients_with<T: Transport>(
        &self,
        client: &Client<T>,
        use_density: bool,
    ) -> Result<MaterialTable<XrayCoefficients>> {
        if !use_density {
            return client.xray_coefficients(self.z, Density::Absent);
        }
        if self.has_nominal_density() {
            logw!("{}: using a density value arbitrarily set to {} g/cm3", self.name, self.density);
        }
        client.xray_coefficients(self.z, Density::Value(self.density))
    }
}

/// A compound of table 2, joined with its data page short name from table 4.
#[derive(Clone, Debug, PartialEq)]
pub struct CompoundRecord {
    /// Data page key, e.g. `adipose`
    pub short_name: String,
    /// Display name as printed, annotation included
    pub name: String,
    /// ⟨Z/A⟩
    pub mass_ratio: f64,
    /// Mean excitation energy, eV
    pub excitation: f64,
    /// Nominal density, g/cm³
    pub density: f64,
    /// Composition cell text, `Z: mass fraction` entries joined with `; `
    pub composition: String,
}

impl CompoundRecord {
    pub fn coefficients(&self, use_density: bool) -> Result<MaterialTable<XrayCoefficients>> {
        self.coefficients_with(&Client::new()?, use_density)
    }

    pub fn coefficients_with<T: Transport>(
        &self,
        client: &Client<T>,
        use_density: bool,
    ) -> Result<MaterialTable<XrayCoefficients>> {
        let density = if use_density { Density::Value(self.density) } else { Density::Absent };
        client.xray_coefficients(self.short_name.as_str(), density)
    }
}

impl<T: Transport> Client<T> {
    /// Coefficients for an element (number) or compound (short name).
    ///
    /// `Density::Auto` looks the material up in the matching catalog after the
    /// data page has been fetched.
    pub fn xray_coefficients(
        &self,
        id: impl IntoMaterialId,
        density: impl IntoDensity,
    ) -> Result<MaterialTable<XrayCoefficients>> {
        let id = id.into_material_id()?;
        let density = density.into_density()?;

        let url = match &id {
            MaterialId::Number(_) => {
                self.options().xray_element_url(&id.padded(XRAY_ELEMENT_CODE_WIDTH)?)
            }
            MaterialId::Name(name) => self.options().xray_compound_url(name),
        };
        let doc = self.get(&url)?;
        let mut rows = rows::parse_table::<XrayCoefficients>(&doc, Grammar::Xray)?;
        if rows.is_empty() {
            logw!("x-ray: no table rows for material {id}");
        }

        let applied = match density {
            Density::Absent => None,
            Density::Value(d) => Some(d),
            Density::Auto => Some(self.catalog_density(&id)?),
        };
        if let Some(d) = applied {
            logd!("x-ray: scaling material {id} with density {d}");
            scale::scale_rows::<XrayCoefficients>(&mut rows, d);
        }

        Ok(MaterialTable::new(rows, applied))
    }

    /// All elements of table 1, in page order.
    pub fn elements(&self) -> Result<Vec<ElementRecord>> {
        let doc = self.get(&self.options().xray_page_url(ELEMENT_CATALOG_PAGE))?;
        catalog::parse_elements(&doc)
    }

    /// Compounds of table 2 that could be joined to a data page.
    pub fn compounds(&self) -> Result<Vec<CompoundRecord>> {
        Ok(self.compound_catalog()?.records)
    }

    /// Compounds plus the names that could not be joined.
    pub fn compound_catalog(&self) -> Result<CompoundCatalog> {
        // Links first: the join key comes from there.
        let links_doc = self.get(&self.options().xray_page_url(COMPOUND_LINKS_PAGE))?;
        let links = catalog::parse_compound_links(&links_doc);

        let doc = self.get(&self.options().xray_page_url(COMPOUND_CATALOG_PAGE))?;
        catalog::parse_compounds(&doc, &links)
    }

    fn catalog_density(&self, id: &MaterialId) -> Result<f64> {
        let density = match id {
            MaterialId::Number(z) => self.elements()?.into_iter().find(|e| e.z == *z).map(|e| {
                if e.has_nominal_density() {
                    logw!(
                        "{}: using a density value arbitrarily set to {} g/cm3",
                        e.name,
                        e.density
                    );
                }
                e.density
            }),
            MaterialId::Name(name) => self
                .compounds()?
                .into_iter()
                .find(|c| c.short_name == *name)
                .map(|c| c.density),
        };
        density.ok_or_else(|| Error::DensityNotFound(format!("x-ray material {id}")))
    }
}

/* ---------------- Default-client shorthands ---------------- */

pub fn fetch_xray_coefficients(
    id: impl IntoMaterialId,
    density: impl IntoDensity,
) -> Result<MaterialTable<XrayCoefficients>> {
    Client::new()?.xray_coefficients(id, density)
}

pub fn fetch_elements() -> Result<Vec<ElementRecord>> {
    Client::new()?.elements()
}

pub fn fetch_compounds() -> Result<Vec<CompoundRecord>> {
    Client::new()?.compounds()
}

pub fn fetch_compound_catalog() -> Result<CompoundCatalog> {
    Client::new()?.compound_catalog()
}
