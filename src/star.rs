// src/star.rs
//! ESTAR / PSTAR / ASTAR stopping-power and range tables.
//!
//! All three programs are served by two CGI endpoints taking the material
//! number as a zero-padded `matno` form field. One generic fetch handles
//! them; the typed wrappers only pick the particle and the column layout.
//!
//! Density handling (see [`Density`]):
//! - electrons: the ESTAR page prints the material density before the table;
//! - protons / alphas: the PSTAR/ASTAR page does not, so `Auto` costs a
//!   second request, made after the first, to the ESTAR page of the same
//!   material.

use std::fmt;

use crate::client::Client;
use crate::config::consts::STAR_CODE_WIDTH;
use crate::core::net::Transport;
use crate::error::{Error, Result};
use crate::material::IntoMaterialId;
use crate::specs::rows::{self, Grammar};
use crate::specs::scale::{self, Density, IntoDensity};
use crate::table::{DataKind, ElectronStopping, HeavyParticleStopping, MaterialTable};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Particle {
    Electron,
    Proton,
    Alpha,
}

impl Particle {
    pub const ALL: [Particle; 3] = [Particle::Electron, Particle::Proton, Particle::Alpha];

    /// NIST program name.
    pub fn program(self) -> &'static str {
        match self {
            Particle::Electron => "ESTAR",
            Particle::Proton => "PSTAR",
            Particle::Alpha => "ASTAR",
        }
    }

    fn grammar(self) -> Grammar {
        match self {
            Particle::Electron => Grammar::Electron,
            Particle::Proton | Particle::Alpha => Grammar::HeavyParticle,
        }
    }

    fn url<T: Transport>(self, client: &Client<T>) -> String {
        match self {
            Particle::Electron => client.options().estar_url(),
            Particle::Proton | Particle::Alpha => client.options().ap_star_url(),
        }
    }

    fn form(self, code: &str) -> Vec<(&'static str, &str)> {
        let mut form = vec![("matno", code), ("ShowDefault", "on")];
        if self != Particle::Electron {
            form.push(("prog", self.program()));
        }
        form
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

impl std::str::FromStr for Particle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "e" | "electron" | "estar" => Ok(Particle::Electron),
            "p" | "proton" | "pstar" => Ok(Particle::Proton),
            "a" | "alpha" | "astar" => Ok(Particle::Alpha),
            other => Err(Error::InvalidIdentifier(format!("unknown particle {other:?}"))),
        }
    }
}

/// A STAR table of either layout.
#[derive(Clone, Debug, PartialEq)]
pub enum StarTable {
    Electron(MaterialTable<ElectronStopping>),
    HeavyParticle(MaterialTable<HeavyParticleStopping>),
}

impl StarTable {
    pub fn rows(&self) -> &[Vec<f64>] {
        match self {
            StarTable::Electron(t) => t.rows(),
            StarTable::HeavyParticle(t) => t.rows(),
        }
    }

    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            StarTable::Electron(t) => t.headers(),
            StarTable::HeavyParticle(t) => t.headers(),
        }
    }
}

impl<T: Transport> Client<T> {
    /// Any STAR program, dispatched on `particle`.
    pub fn star_table(
        &self,
        particle: Particle,
        id: impl IntoMaterialId,
        density: impl IntoDensity,
    ) -> Result<StarTable> {
        Ok(match particle {
            Particle::Electron => StarTable::Electron(fetch_star(self, particle, id, density)?),
            Particle::Proton | Particle::Alpha => {
                StarTable::HeavyParticle(fetch_star(self, particle, id, density)?)
            }
        })
    }

    pub fn electron_stopping(
        &self,
        id: impl IntoMaterialId,
        density: impl IntoDensity,
    ) -> Result<MaterialTable<ElectronStopping>> {
        fetch_star(self, Particle::Electron, id, density)
    }

    pub fn proton_stopping(
        &self,
        id: impl IntoMaterialId,
        density: impl IntoDensity,
    ) -> Result<MaterialTable<HeavyParticleStopping>> {
        fetch_star(self, Particle::Proton, id, density)
    }

    pub fn alpha_stopping(
        &self,
        id: impl IntoMaterialId,
        density: impl IntoDensity,
    ) -> Result<MaterialTable<HeavyParticleStopping>> {
        fetch_star(self, Particle::Alpha, id, density)
    }

    /// Density ESTAR publishes for material `code`.
    fn star_density(&self, code: &str) -> Result<f64> {
        let doc = self.post(&self.options().estar_url(), &Particle::Electron.form(code))?;
        scale::published_density(&doc)
            .ok_or_else(|| Error::DensityNotFound(format!("STAR material {code}")))
    }
}

/// Shared pipeline. `K` must be the layout `particle` publishes; only the
/// typed wrappers above call this.
fn fetch_star<K: DataKind, T: Transport>(
    client: &Client<T>,
    particle: Particle,
    id: impl IntoMaterialId,
    density: impl IntoDensity,
) -> Result<MaterialTable<K>> {
    let code = id.into_material_id()?.padded(STAR_CODE_WIDTH)?;
    let density = density.into_density()?;

    let doc = client.post(&particle.url(client), &particle.form(&code))?;
    let mut rows = rows::parse_table::<K>(&doc, particle.grammar())?;
    if rows.is_empty() {
        logw!("{particle}: no table rows for material {code}");
    }

    let applied = match density {
        Density::Absent => None,
        Density::Value(d) => Some(d),
        Density::Auto => Some(match particle {
            Particle::Electron => scale::published_density(&doc)
                .ok_or_else(|| Error::DensityNotFound(format!("{particle} material {code}")))?,
            Particle::Proton | Particle::Alpha => client.star_density(&code)?,
        }),
    };
    if let Some(d) = applied {
        logd!("{particle}: scaling material {code} with density {d}");
        scale::scale_rows::<K>(&mut rows, d);
    }

    Ok(MaterialTable::new(rows, applied))
}

/* ---------------- Default-client shorthands ---------------- */

pub fn fetch_electron_stopping(
    id: impl IntoMaterialId,
    density: impl IntoDensity,
) -> Result<MaterialTable<ElectronStopping>> {
    Client::new()?.electron_stopping(id, density)
}

pub fn fetch_proton_stopping(
    id: impl IntoMaterialId,
    density: impl IntoDensity,
) -> Result<MaterialTable<HeavyParticleStopping>> {
    Client::new()?.proton_stopping(id, density)
}

pub fn fetch_alpha_stopping(
    id: impl IntoMaterialId,
    density: impl IntoDensity,
) -> Result<MaterialTable<HeavyParticleStopping>> {
    Client::new()?.alpha_stopping(id, density)
}
