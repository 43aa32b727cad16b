// src/specs/mod.rs
//! # Page “specs” module
//!
//! Page-specific parsing for the NIST reference data pages. Each spec knows
//! *where the numbers live in the text* and how to read them; none of them
//! touch the network.
//!
//! ## What lives here
//! - **Row grammars** for the STAR and x-ray data pages (`rows`): regexes
//!   matching the exact ASCII layout the site prints, plus number coercion.
//! - **Density scaling** (`scale`): per-column multiply/divide rules and the
//!   density printed on STAR pages.
//! - **Catalogs** (`catalog`): element and compound tables, and the join
//!   from compound display names to data-page short names.
//!
//! ## What does **not** live here
//! - **Transport** (`core::net`) and URL building (`config::options`).
//! - **Dispatch** between particles / materials: `star` and `xray`.
//!
//! ## Typical call chain
//! ```text
//! star::fetch_* / xray::fetch_* → Client → Transport (raw text)
//!                              ↘ specs::rows → specs::scale → MaterialTable
//! ```
//!
//! ## Conventions & invariants
//! - No DOM: rows are found by pattern, cells by flat tag scanning.
//! - Text that does not match a grammar is skipped, never half-parsed.
//! - Every parsed row has exactly the column count of its `DataKind`.
//! - Specs are testable **offline** on captured page fragments.
pub mod catalog;
pub mod rows;
pub mod scale;
