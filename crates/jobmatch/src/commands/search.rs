//! Search command — match terms against the dataset and rank occupations.

use std::time::Duration;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use jobmatch_core::{
    CachedDefinitions, Config, Dataset, DefinitionSource, DescribedOccupation, FallbackOnly,
    Page, TaxonomyClient, aggregate, enrich, listings_url, paginate,
};

/// Arguments for the `search` subcommand.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// One or more search terms, separated by commas.
    pub terms: String,

    /// Dataset CSV to search (overrides config).
    #[arg(long, value_name = "FILE")]
    pub dataset: Option<Utf8PathBuf>,

    /// Page of results to show (1-based).
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Results per page (overrides config).
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Skip taxonomy lookups; definitions show the fallback text.
    #[arg(long)]
    pub no_definitions: bool,
}

/// JSON payload for `--json` output.
#[derive(Serialize)]
struct SearchReport<'a> {
    terms: &'a str,
    page: usize,
    total_pages: usize,
    total: usize,
    results: Vec<ReportEntry>,
}

#[derive(Serialize)]
struct ReportEntry {
    title: String,
    count: usize,
    ssyk_code: String,
    definition: String,
    listings_url: String,
}

/// Search the dataset and print one page of ranked occupations.
#[instrument(name = "cmd_search", skip_all, fields(terms = %args.terms, page = args.page))]
pub fn cmd_search(args: SearchArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(dataset = ?args.dataset, no_definitions = args.no_definitions, "executing search command");

    let dataset_path = args.dataset.as_deref().unwrap_or(&config.dataset_path);

    // A dataset problem is reported as such, never as "no results".
    let dataset = Dataset::load(dataset_path)
        .with_context(|| format!("dataset unavailable: {dataset_path}"))?;

    let ranked = aggregate(&args.terms, dataset.records());

    let described = if args.no_definitions {
        enrich(ranked, &FallbackOnly)
    } else {
        let client = TaxonomyClient::new(
            config.taxonomy_base_url.clone(),
            Duration::from_secs(config.http_timeout_secs),
        )
        .context("failed to build taxonomy client")?;
        let source: Box<dyn DefinitionSource> = if config.cache_definitions {
            Box::new(CachedDefinitions::new(client))
        } else {
            Box::new(client)
        };
        enrich(ranked, source.as_ref())
    };

    let page_size = args.page_size.unwrap_or(config.page_size);
    let page = paginate(&described, args.page, page_size);

    if global_json {
        let report = SearchReport {
            terms: &args.terms,
            page: page.number,
            total_pages: page.total_pages,
            total: page.total,
            results: page.items.iter().map(ReportEntry::from).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_page(&args.terms, &page);
    }

    Ok(())
}

impl From<&DescribedOccupation> for ReportEntry {
    fn from(entry: &DescribedOccupation) -> Self {
        Self {
            title: entry.title.clone(),
            count: entry.count,
            ssyk_code: entry.ssyk_code.clone(),
            definition: entry.definition.clone(),
            listings_url: listings_url(&entry.title).to_string(),
        }
    }
}

fn render_page(terms: &str, page: &Page<'_, DescribedOccupation>) {
    if page.total == 0 {
        println!("No occupations match \"{terms}\".");
        return;
    }

    println!(
        "Showing results {} to {} of {}.",
        page.start, page.end, page.total
    );
    println!();

    for entry in page.items {
        let label = if entry.count == 1 { "match" } else { "matches" };
        println!(
            "{}  {}",
            entry.title.bold(),
            format!("({} {label})", entry.count).green()
        );
        println!("  {}", entry.definition);
        println!(
            "  {} {}",
            format!("SSYK {}", entry.ssyk_code).dimmed(),
            listings_url(&entry.title)
        );
        println!();
    }

    if page.total_pages > 1 {
        println!("Page {} of {}.", page.number, page.total_pages);
    }
}
