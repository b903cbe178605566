use std::io::Write;
use std::path::Path;

use anyhow::Context;
use bm_core::{CompanySummaryRow, PersonProfile};

/// Write the summary table with a header row.
pub fn write_table(path: &Path, delimiter: u8, rows: &[CompanySummaryRow]) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create output file {}", path.display()))?;
    write_rows(file, delimiter, rows)
        .with_context(|| format!("failed to write output file {}", path.display()))
}

fn write_rows<W: Write>(sink: W, delimiter: u8, rows: &[CompanySummaryRow]) -> anyhow::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(sink);

    // Written explicitly so an empty table still has its header.
    writer.write_record(CompanySummaryRow::COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Human-readable block for one row, as printed in echo mode.
#[must_use]
pub fn render_row(row: &CompanySummaryRow) -> String {
    let rule = "*".repeat(50);
    let mut out = format!("{rule}\nResults for {}\n{rule}\n", row.company);
    for (column, value) in row.fields().into_iter().filter(|(column, _)| *column != "Company") {
        out.push_str(&format!("{}:\n{value}\n\n", column.to_uppercase()));
    }
    out
}

/// One enriched person as printed in echo mode.
#[must_use]
pub fn render_person(profile: &PersonProfile) -> String {
    format!(
        "{}\n  Title: {}\n  Organization: {}\n  LinkedIn: {}\n",
        profile.name.as_deref().unwrap_or(&profile.uuid),
        profile.title_or_unknown(),
        profile.organization_or_unknown(),
        profile.linkedin_or_unknown()
    )
}
