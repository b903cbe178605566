//! # bm-core
//!
//! Core types and pure transformations for boardmap.
//!
//! This crate holds everything that does not talk to the network:
//! - Entity structs for companies, affiliations, people and investments
//! - The funding-round enumeration and the tenure/role classification rules
//! - The aggregator that folds records into per-company summary strings
//! - The table assembler that produces one output row per company
//! - The "who knows" report over affiliation records

pub mod aggregate;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod table;
pub mod who_knows;

pub use entities::{AffiliationRecord, Company, CompanySummaryRow, InvestmentRecord, PersonProfile};
pub use enums::{FundingRound, JobRole, RoundLabelStyle, Tenure, UnknownTenurePolicy};
pub use errors::CoreError;

/// Largest page the search endpoint returns.
pub const MAX_PAGE_SIZE: u32 = 1000;
