//! Assembling one summary row per resolved company.

use std::collections::HashMap;

use crate::aggregate::{BoardSummary, InvestorSummary};
use crate::entities::{Company, CompanySummaryRow};

/// Join the rendered strings for every company into output rows.
///
/// Companies missing from either map get empty strings for those columns.
/// Rows are ordered by company name, then identifier; a company listed more
/// than once appears once.
#[must_use]
pub fn assemble_rows(
    companies: &[Company],
    boards: &HashMap<String, BoardSummary>,
    investors: &HashMap<String, InvestorSummary>,
) -> Vec<CompanySummaryRow> {
    let mut ordered: Vec<&Company> = companies.iter().collect();
    ordered.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.uuid.cmp(&b.uuid)));
    ordered.dedup_by(|a, b| a.uuid == b.uuid);

    ordered
        .into_iter()
        .map(|company| {
            let board = boards.get(&company.uuid).cloned().unwrap_or_default();
            let investor = investors.get(&company.uuid).cloned().unwrap_or_default();
            CompanySummaryRow {
                company_uuid: company.uuid.clone(),
                company: company.name.clone(),
                current_board_members: board.current_board,
                former_board_members: board.former_board,
                current_other_affiliates: board.current_other,
                former_other_affiliates: board.former_other,
                investors_all: investor.all,
                investors_by_round: investor.by_round,
            }
        })
        .collect()
}
