//! sicdex CLI binary.
//!
//! Command-line lookups over the SIC sector classification index.

mod data_dir;

use clap::{Parser, Subcommand};
use sicdex::{Cik, CompanyRecord, LazySectorIndex, SectorIndex, SicCode};
use sicdex_output::{ExportFormat, Exporter, render_company_table, render_sector_table};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sicdex")]
#[command(about = "SIC sector classification lookups for SEC filers", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding the reference tables
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Company table file name inside the data directory
    #[arg(long, global = true)]
    companies_file: Option<String>,

    /// SIC code table file name inside the data directory
    #[arg(long, global = true)]
    sectors_file: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all sectors with their company counts
    Sectors {
        /// Output format (text, csv, json or pretty-json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Only show sectors with at least this many companies
        #[arg(long, default_value = "0")]
        min_companies: usize,
    },

    /// Show a sector and its member companies
    Sector {
        /// SIC code
        sic_code: SicCode,

        /// Maximum number of companies to print
        #[arg(long, default_value = "20")]
        limit: usize,

        /// Output format (text, csv, json or pretty-json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show a company by CIK or ticker
    Company {
        /// CIK number or ticker symbol
        id: String,
    },
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let paths = data_dir::resolve_paths(cli.data_dir, cli.companies_file, cli.sectors_file);
    tracing::debug!(
        companies = %paths.companies_path().display(),
        sectors = %paths.sectors_path().display(),
        "resolved reference tables"
    );
    let index = LazySectorIndex::new(paths);

    match cli.command {
        Commands::Sectors {
            format,
            min_companies,
        } => list_sectors(index.get()?, &format, min_companies)?,
        Commands::Sector {
            sic_code,
            limit,
            format,
        } => show_sector(index.get()?, sic_code, limit, &format)?,
        Commands::Company { id } => show_company(index.get()?, &id)?,
    }

    Ok(())
}

fn list_sectors(
    index: &SectorIndex,
    format: &str,
    min_companies: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let sectors: Vec<_> = index
        .list_sectors()
        .into_iter()
        .filter(|s| s.company_count >= min_companies)
        .collect();

    if format == "text" {
        print!("{}", render_sector_table(&sectors));
    } else {
        let format: ExportFormat = format.parse()?;
        println!("{}", sectors.export_to_string(format)?.trim_end());
    }

    Ok(())
}

fn show_sector(
    index: &SectorIndex,
    sic_code: SicCode,
    limit: usize,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let ciks = index.ciks_for_sector(sic_code)?;
    let companies: Vec<CompanyRecord> = ciks
        .iter()
        .filter_map(|cik| index.company_info(*cik).cloned())
        .collect();

    if format != "text" {
        let format: ExportFormat = format.parse()?;
        println!("{}", companies.export_to_string(format)?.trim_end());
        return Ok(());
    }

    let title = index.sector_name(sic_code).unwrap_or("Unknown");
    println!("\nSIC {}: {}", sic_code, title);
    if let Some(office) = index.sector(sic_code).and_then(|s| s.office.as_deref()) {
        println!("Office: {}", office);
    }
    println!("Companies: {}\n", companies.len());

    if companies.is_empty() {
        return Ok(());
    }

    let shown = &companies[..companies.len().min(limit)];
    print!("{}", render_company_table(shown));
    if companies.len() > shown.len() {
        println!("... and {} more", companies.len() - shown.len());
    }

    Ok(())
}

fn show_company(index: &SectorIndex, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let cik: Option<Cik> = id.parse().ok().or_else(|| index.cik_for_ticker(id));
    let company = cik
        .and_then(|cik| index.company_info(cik))
        .ok_or_else(|| format!("Company not found: {}", id))?;

    println!("\n{}", company.title);
    println!("  CIK:      {} ({})", company.cik, company.padded_cik());
    println!("  Ticker:   {}", company.ticker);
    println!(
        "  Industry: {} {}",
        company.industry,
        index.sector_name(company.industry).unwrap_or("(no SIC title)")
    );

    if let Some(peers) = index.sector_peers(company.cik) {
        println!("  Peers:    {} companies share this SIC code", peers.len() - 1);
    }

    Ok(())
}
