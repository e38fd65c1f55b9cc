//! Command implementations for the fleet list CLI
//!
//! This module contains the command execution logic: logging setup, layered
//! configuration, the one-shot fleet fetch, and the human/JSON/CSV renderers
//! for each view.

use crate::app::services::aggregator::{CategoryCount, DashboardStats, service_distribution};
use crate::app::services::analysis::AnalysisContext;
use crate::app::services::pivot::{PivotSort, PivotSortField, PivotView, build_pivot};
use crate::app::services::query::{
    FilterOptions, FleetFilters, QueryParams, QueryResult, RecordSort, query,
};
use crate::app::services::source::{FleetDataset, FleetSource, load_fleet};
use crate::cli::args::{Args, Commands, ContextArgs, OutputFormat, SearchArgs};
use crate::config::Config;
use crate::constants::{LAST_UPDATED, PAGE_SIZE_OPTIONS};
use crate::{FleetError, Result};
use colored::Colorize;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Main command runner for the fleet list viewer
///
/// 1. Load layered configuration and set up logging
/// 2. Fetch and parse the fleet list once
/// 3. Render the requested view to stdout
pub async fn run(args: Args) -> Result<()> {
    args.validate()?;

    let config = load_configuration(&args)?;
    setup_logging(&args, &config)?;
    debug!("Command line arguments: {:?}", args);
    debug!("Loaded configuration: {:?}", config);

    let Some(command) = args.command.clone() else {
        return Err(FleetError::invalid_argument("No command given"));
    };

    let source: FleetSource = config.source.parse()?;
    let dataset = fetch_with_progress(&source, args.show_progress()).await?;

    if dataset.is_empty() {
        warn!("Fleet list at {} holds no usable records", source);
    }

    let output = match command {
        Commands::Summary => render_summary(&dataset, args.output_format)?,
        Commands::Pivot(_) => render_pivot(&dataset, &config, args.output_format)?,
        Commands::Search(search_args) => {
            render_search(&dataset, &config, &search_args, args.output_format)?
        }
        Commands::Options => render_options(&dataset, args.output_format)?,
        Commands::Context(context_args) => {
            render_context(&dataset, &context_args, args.output_format)?
        }
    };

    println!("{}", output);
    Ok(())
}

/// Set up structured logging; RUST_LOG wins over flags and config
fn setup_logging(args: &Args, config: &Config) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args
        .log_level_override()
        .unwrap_or(config.logging.level.as_str());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fleet_list={}", log_level)));

    let init_result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    init_result
        .map_err(|e| FleetError::configuration(format!("Failed to initialise logging: {}", e)))?;
    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env -> args)
fn load_configuration(args: &Args) -> Result<Config> {
    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    let mut config = Config::load_layered(config_file)?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(source) = &args.source {
        config.source = source.clone();
    }

    if let Some(level) = args.log_level_override() {
        config.logging.level = level.to_string();
    }

    match &args.command {
        Some(Commands::Search(search)) => {
            if let Some(page_size) = search.page_size {
                config.page_size = page_size;
            }
        }
        Some(Commands::Pivot(pivot)) => {
            if let Some(rows) = pivot.rows {
                config.pivot.rows = rows;
            }
            if let Some(columns) = pivot.columns {
                config.pivot.columns = columns;
            }
            if let Some(sort) = &pivot.sort {
                config.pivot.default_sort = sort.clone();
            }
            if let Some(direction) = pivot.direction {
                config.pivot.default_direction = direction;
            }
        }
        _ => {}
    }
}

/// Fetch the fleet list once, with a spinner on stderr
async fn fetch_with_progress(source: &FleetSource, show_progress: bool) -> Result<FleetDataset> {
    let start_time = Instant::now();

    let spinner = if show_progress {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("Loading fleet data from {}", source));
        spinner.enable_steady_tick(Duration::from_millis(100));
        Some(spinner)
    } else {
        None
    };

    let result = load_fleet(source).await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let dataset = result?;
    info!(
        "Loaded {} buses in {}",
        dataset.len(),
        HumanDuration(start_time.elapsed())
    );
    Ok(dataset)
}

// =============================================================================
// Summary
// =============================================================================

fn render_summary(dataset: &FleetDataset, format: OutputFormat) -> Result<String> {
    let stats = DashboardStats::from_records(&dataset.records);
    let distribution = service_distribution(&dataset.records);

    match format {
        OutputFormat::Human => Ok(summary_human(&stats, &distribution, dataset)),
        OutputFormat::Json => {
            let report = serde_json::json!({
                "generated_at": chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
                "source": dataset.source,
                "last_updated": LAST_UPDATED,
                "stats": stats,
                "service_distribution": distribution,
                "parse": dataset.stats,
            });
            Ok(serde_json::to_string_pretty(&report)?)
        }
        OutputFormat::Csv => Ok(summary_csv(&stats, &distribution)),
    }
}

fn summary_human(
    stats: &DashboardStats,
    distribution: &[CategoryCount],
    dataset: &FleetDataset,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Fleet Overview".bold().cyan()));
    out.push_str(&format!("Source: {} (last updated {})\n", dataset.source, LAST_UPDATED));
    out.push_str(&format!("{}\n", "─".repeat(40)));
    out.push_str(&format!("  Total buses:       {}\n", stats.total_buses.to_string().bold()));
    out.push_str(&format!("  Active:            {}\n", stats.active_buses.to_string().green()));
    out.push_str(&format!("  AC:                {}\n", stats.ac_buses));
    out.push_str(&format!("  Electric:          {}\n", stats.electric_buses));
    out.push_str(&format!("  Vidiyal Payanam:   {}\n", stats.vidiyal_payanam_buses));
    out.push_str(&format!("  Depots:            {}\n", stats.depot_count));

    if !distribution.is_empty() {
        out.push_str(&format!("\n{}\n", "Service Types".bold()));
        for entry in distribution {
            out.push_str(&format!("  {:<28} {:>6}\n", entry.label, entry.count));
        }
    }

    if dataset.stats.records_dropped() > 0 {
        out.push_str(&format!("\n{}\n", dataset.stats.summary().yellow()));
    }

    out
}

fn summary_csv(stats: &DashboardStats, distribution: &[CategoryCount]) -> String {
    let mut lines = vec![
        "metric,value".to_string(),
        format!("total_buses,{}", stats.total_buses),
        format!("active_buses,{}", stats.active_buses),
        format!("ac_buses,{}", stats.ac_buses),
        format!("electric_buses,{}", stats.electric_buses),
        format!("vidiyal_payanam_buses,{}", stats.vidiyal_payanam_buses),
        format!("depot_count,{}", stats.depot_count),
    ];
    lines.extend(
        distribution
            .iter()
            .map(|entry| format!("service:{},{}", entry.label, entry.count)),
    );
    lines.join("\n")
}

// =============================================================================
// Pivot
// =============================================================================

/// Render the pivot described by `config.pivot`; pivot flags are folded into
/// the config by `apply_cli_overrides`
fn render_pivot(dataset: &FleetDataset, config: &Config, format: OutputFormat) -> Result<String> {
    let table = build_pivot(&dataset.records, config.pivot.rows, config.pivot.columns);
    let sort = config.pivot.sort();

    if let PivotSortField::Column(column) = &sort.field {
        if !table.column_keys().iter().any(|key| key == column) {
            warn!("Sort column '{}' is not in the pivot; every row counts 0", column);
        }
    }
    debug!("Pivot sort: {:?}", sort);

    let view = table.view(&sort);
    match format {
        OutputFormat::Human => Ok(pivot_human(&view)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&view)?),
        OutputFormat::Csv => Ok(pivot_csv(&view)),
    }
}

fn sort_marker(sort: &PivotSort, field: &PivotSortField) -> &'static str {
    if &sort.field != field {
        ""
    } else if sort.direction == crate::models::SortDirection::Asc {
        " ▲"
    } else {
        " ▼"
    }
}

fn pivot_human(view: &PivotView) -> String {
    if view.rows.is_empty() {
        return "No buses to tabulate".dimmed().to_string();
    }

    let label_width = view
        .rows
        .iter()
        .map(|row| row.label.chars().count())
        .chain([view.row_key.name().len() + 2, "Total".len()])
        .max()
        .unwrap_or(0);
    let widths: Vec<usize> = view
        .columns
        .iter()
        .map(|column| column.chars().count().max(5) + 2)
        .collect();

    let mut out = String::new();
    let mut header = format!(
        "{:<width$}",
        format!("{}{}", view.row_key, sort_marker(&view.sort, &PivotSortField::Name)),
        width = label_width
    );
    for (column, width) in view.columns.iter().zip(&widths) {
        let marker = sort_marker(&view.sort, &PivotSortField::Column(column.clone()));
        header.push_str(&format!(" {:>width$}", format!("{}{}", column, marker), width = width));
    }
    header.push_str(&format!(
        " {:>7}",
        format!("Total{}", sort_marker(&view.sort, &PivotSortField::Total))
    ));
    out.push_str(&format!("{}\n", header.bold()));

    for row in &view.rows {
        let mut line = format!("{:<width$}", row.label, width = label_width);
        for (count, width) in row.cells.iter().zip(&widths) {
            let cell = if *count == 0 { "-".to_string() } else { count.to_string() };
            line.push_str(&format!(" {:>width$}", cell, width = width));
        }
        line.push_str(&format!(" {:>7}", row.total.to_string().bold()));
        out.push_str(&format!("{}\n", line));
    }

    let mut totals = format!("{:<width$}", "Total", width = label_width);
    for (count, width) in view.column_totals.iter().zip(&widths) {
        totals.push_str(&format!(" {:>width$}", count, width = width));
    }
    totals.push_str(&format!(" {:>7}", view.grand_total));
    out.push_str(&totals.bold().cyan().to_string());

    out
}

fn pivot_csv(view: &PivotView) -> String {
    let mut lines = Vec::with_capacity(view.rows.len() + 2);

    let mut header = vec![view.row_key.name().to_string()];
    header.extend(view.columns.iter().cloned());
    header.push("Total".to_string());
    lines.push(header.join(","));

    for row in &view.rows {
        let mut fields = vec![row.label.clone()];
        fields.extend(row.cells.iter().map(usize::to_string));
        fields.push(row.total.to_string());
        lines.push(fields.join(","));
    }

    let mut totals = vec!["Total".to_string()];
    totals.extend(view.column_totals.iter().map(usize::to_string));
    totals.push(view.grand_total.to_string());
    lines.push(totals.join(","));

    lines.join("\n")
}

// =============================================================================
// Search
// =============================================================================

/// Build query parameters from search flags and the configured page size
fn search_params(config: &Config, args: &SearchArgs) -> Result<QueryParams> {
    let filters = FleetFilters::new()
        .with_search(args.search.clone().unwrap_or_default())
        .with_depot(args.depot.clone().unwrap_or_default())
        .with_service_type(args.service_type.clone().unwrap_or_default());
    let sort = args
        .sort_by
        .map(|field| RecordSort::new(field, args.direction));

    QueryParams::new(filters, sort, args.page, config.page_size)
}

fn render_search(
    dataset: &FleetDataset,
    config: &Config,
    args: &SearchArgs,
    format: OutputFormat,
) -> Result<String> {
    let params = search_params(config, args)?;
    if !PAGE_SIZE_OPTIONS.contains(&params.page_size()) {
        debug!(
            "Page size {} is outside the offered sizes {:?}",
            params.page_size(),
            PAGE_SIZE_OPTIONS
        );
    }
    let result = query(&dataset.records, &params);

    if result.windowed.is_empty() && result.filtered_count > 0 {
        warn!(
            "Page {} is past the last page ({})",
            result.page,
            result.displayed_total_pages()
        );
    }

    match format {
        OutputFormat::Human => Ok(search_human(&result)),
        OutputFormat::Json => {
            let report = serde_json::json!({
                "params": params,
                "filtered_count": result.filtered_count,
                "total_pages": result.displayed_total_pages(),
                "page": result.page,
                "page_size": result.page_size,
                "records": result.windowed,
            });
            Ok(serde_json::to_string_pretty(&report)?)
        }
        OutputFormat::Csv => Ok(search_csv(&result)),
    }
}

fn search_human(result: &QueryResult<'_>) -> String {
    if result.filtered_count == 0 {
        return "No buses found matching your criteria".yellow().to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        format!(
            "{:<12} {:<12} {:<14} {:<24} {:<5} {:<22} {:<12}",
            "Fleet No", "Reg No", "Depot", "Make / Model", "AC", "Service", "Status"
        )
        .bold()
    ));

    for bus in &result.windowed {
        let ac = if bus.is_ac { "Yes".green() } else { "No".normal() };
        let status = if bus.status.is_active() {
            bus.status.as_str().green()
        } else {
            bus.status.as_str().yellow()
        };
        out.push_str(&format!(
            "{:<12} {:<12} {:<14} {:<24} {:<5} {:<22} {}\n",
            bus.fleet_number,
            bus.registration_number,
            bus.depot,
            bus.make_model(),
            ac,
            bus.service_type,
            status
        ));
    }

    let footer = match result.showing_range() {
        Some((first, last)) => format!(
            "Showing {}-{} of {} | Page {} of {}",
            first,
            last,
            result.filtered_count,
            result.page,
            result.displayed_total_pages()
        ),
        None => format!(
            "No rows on page {} of {} ({} matches)",
            result.page,
            result.displayed_total_pages(),
            result.filtered_count
        ),
    };
    out.push_str(&footer.dimmed().to_string());
    out
}

fn search_csv(result: &QueryResult<'_>) -> String {
    let mut lines = vec![
        "id,depot,fleet_number,registration_number,make,model,operator,\
         is_ac,service_type,registration_date,status"
            .to_string(),
    ];
    lines.extend(result.windowed.iter().map(|bus| {
        format!(
            "{},{},{},{},{},{},{},{},{},{},{}",
            bus.id,
            bus.depot,
            bus.fleet_number,
            bus.registration_number,
            bus.make,
            bus.model,
            bus.operator,
            bus.is_ac,
            bus.service_type,
            bus.registration_date,
            bus.status
        )
    }));
    lines.join("\n")
}

// =============================================================================
// Filter options and analysis context
// =============================================================================

fn render_options(dataset: &FleetDataset, format: OutputFormat) -> Result<String> {
    let options = FilterOptions::from_records(&dataset.records);

    match format {
        OutputFormat::Human => {
            let mut out = format!("{}\n", "Depots".bold());
            for depot in &options.depots {
                out.push_str(&format!("  {}\n", depot));
            }
            out.push_str(&format!("\n{}\n", "Service Types".bold()));
            for service_type in &options.service_types {
                out.push_str(&format!("  {}\n", service_type));
            }
            Ok(out)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&options)?),
        OutputFormat::Csv => {
            let mut lines = vec!["field,value".to_string()];
            lines.extend(options.depots.iter().map(|depot| format!("depot,{}", depot)));
            lines.extend(
                options
                    .service_types
                    .iter()
                    .map(|service_type| format!("service_type,{}", service_type)),
            );
            Ok(lines.join("\n"))
        }
    }
}

fn render_context(
    dataset: &FleetDataset,
    args: &ContextArgs,
    format: OutputFormat,
) -> Result<String> {
    let context = AnalysisContext::build(&args.query, &dataset.records);
    info!(
        "Analysis context holds {} relevant records",
        context.relevant_records.len()
    );

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&context)?),
        OutputFormat::Csv => Ok(context.samples_csv()),
        OutputFormat::Human => Ok(format!(
            "{}\n{}\n\n{}\n{}",
            "SUMMARY STATISTICS (JSON):".bold(),
            serde_json::to_string_pretty(&context.summary)?,
            "RELEVANT FLEET DATA SAMPLES (CSV - limited rows):".bold(),
            context.samples_csv()
        )),
    }
}
