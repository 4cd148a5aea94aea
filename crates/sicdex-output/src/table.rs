//! Plain-text tables for terminal output.

use sicdex_data::{CompanyRecord, SectorSummary};

const TITLE_WIDTH: usize = 52;

/// Render the sector listing as an aligned text table.
pub fn render_sector_table(sectors: &[SectorSummary]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:>8}  {:<width$}  {:>9}\n",
        "SIC Code",
        "Industry Title",
        "Companies",
        width = TITLE_WIDTH
    ));
    output.push_str(&"-".repeat(8 + 2 + TITLE_WIDTH + 2 + 9));
    output.push('\n');

    for sector in sectors {
        output.push_str(&format!(
            "{:>8}  {:<width$}  {:>9}\n",
            sector.sic_code,
            truncate(&sector.title, TITLE_WIDTH),
            sector.company_count,
            width = TITLE_WIDTH
        ));
    }

    let total: usize = sectors.iter().map(|s| s.company_count).sum();
    output.push_str(&format!(
        "\n{} sectors, {} classified companies\n",
        sectors.len(),
        total
    ));

    output
}

/// Render companies as an aligned text table.
pub fn render_company_table(companies: &[CompanyRecord]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:>10}  {:<8}  {:<width$}  {:>8}\n",
        "CIK",
        "Ticker",
        "Title",
        "SIC Code",
        width = TITLE_WIDTH
    ));
    output.push_str(&"-".repeat(10 + 2 + 8 + 2 + TITLE_WIDTH + 2 + 8));
    output.push('\n');

    for company in companies {
        output.push_str(&format!(
            "{:>10}  {:<8}  {:<width$}  {:>8}\n",
            company.cik,
            company.ticker,
            truncate(&company.title, TITLE_WIDTH),
            company.industry,
            width = TITLE_WIDTH
        ));
    }

    output
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width - 3).collect();
    cut.push_str("...");
    cut
}
