// src/cli.rs
use std::io::{self, Write};
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::client::Client;
use crate::config::FetchOptions;
use crate::csv::{self, Delim};
use crate::specs::scale::Density;
use crate::star::Particle;

#[derive(Parser, Debug)]
#[command(
    name = "physdata",
    version,
    about = "Fetch NIST stopping-power and x-ray attenuation tables"
)]
pub struct Cli {
    #[command(flatten)]
    pub common: Common,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug)]
pub struct Common {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Csv, global = true)]
    pub format: Format,

    /// Emit a header line
    #[arg(long, global = true)]
    pub headers: bool,

    /// Site origin (mirrors, local test servers)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for Delim {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => Delim::Csv,
            Format::Tsv => Delim::Tsv,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Electron stopping powers and ranges
    Estar(MaterialArgs),
    /// Proton stopping powers and ranges
    Pstar(MaterialArgs),
    /// Alpha particle stopping powers and ranges
    Astar(MaterialArgs),
    /// X-ray mass attenuation coefficients (element number or compound short name)
    Xray(MaterialArgs),
    /// List the x-ray element catalog
    Elements,
    /// List the x-ray compound catalog
    Compounds,
}

#[derive(Args, Debug)]
pub struct MaterialArgs {
    /// Material number (e.g. 13 or 013) or x-ray compound short name
    pub id: String,

    /// Density in g/cm3, or `auto` for the published one
    #[arg(long, default_value = "none")]
    pub density: Density,
}

pub fn run() -> color_eyre::Result<()> {
    let cli = Cli::parse();

    let mut opts = FetchOptions::default();
    if let Some(url) = &cli.common.base_url {
        opts = opts.with_base_url(url);
    }
    if let Some(secs) = cli.common.timeout {
        opts = opts.with_timeout(Duration::from_secs(secs));
    }
    let client = Client::with_options(opts)?;

    let sep = Delim::from(cli.common.format).sep();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Estar(m) => write_star(&mut out, &client, Particle::Electron, m, &cli.common)?,
        Command::Pstar(m) => write_star(&mut out, &client, Particle::Proton, m, &cli.common)?,
        Command::Astar(m) => write_star(&mut out, &client, Particle::Alpha, m, &cli.common)?,
        Command::Xray(m) => {
            let table = client.xray_coefficients(m.id.as_str(), m.density)?;
            let headers = cli.common.headers.then(|| table.headers());
            csv::write_table(&mut out, headers, table.rows(), sep)?;
        }
        Command::Elements => {
            if cli.common.headers {
                let headers = ["Z", "Symbol", "Name", "Z/A", "I (eV)", "Density (g/cm3)"];
                csv::write_row(&mut out, &headers, sep)?;
            }
            for e in client.elements()? {
                let row = [
                    e.z.to_string(),
                    e.symbol,
                    e.name,
                    e.mass_ratio.to_string(),
                    e.excitation.to_string(),
                    e.density.to_string(),
                ];
                csv::write_row(&mut out, &row, sep)?;
            }
        }
        Command::Compounds => {
            if cli.common.headers {
                let headers = [
                    "Short name",
                    "Name",
                    "<Z/A>",
                    "I (eV)",
                    "Density (g/cm3)",
                    "Composition",
                ];
                csv::write_row(&mut out, &headers, sep)?;
            }
            // unmatched names are already reported through the logger
            for c in client.compounds()? {
                let row = [
                    c.short_name,
                    c.name,
                    c.mass_ratio.to_string(),
                    c.excitation.to_string(),
                    c.density.to_string(),
                    c.composition,
                ];
                csv::write_row(&mut out, &row, sep)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn write_star<W: Write>(
    out: W,
    client: &Client,
    particle: Particle,
    m: &MaterialArgs,
    common: &Common,
) -> color_eyre::Result<()> {
    let table = client.star_table(particle, m.id.as_str(), m.density)?;
    let headers = common.headers.then(|| table.headers());
    csv::write_table(out, headers, table.rows(), Delim::from(common.format).sep())?;
    Ok(())
}
