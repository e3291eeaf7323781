//! `agenda check` — load and bind without writing; report binding warnings
//! and the output file's staleness.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use agenda_core::{loader, types::text, AgendaDocument};
use agenda_output::{
    hash_store,
    staleness::{self, format_datetime_age},
    RenderJob, StalenessSignal,
};
use agenda_renderer::BindingWarning;

use super::JobArgs;

/// Arguments for `agenda check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub paths: JobArgs,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl CheckArgs {
    pub fn run(self) -> Result<()> {
        let job = self.paths.job(self.paths.load_config()?);
        let doc = loader::load(&job.source)
            .with_context(|| format!("failed to load agenda data from '{}'", job.source))?;
        let page = job.renderer()?.render(&doc).context("failed to render agenda")?;
        let output = staleness::check(&job)
            .with_context(|| format!("status check failed for '{}'", job.output.display()))?;
        let last_render = last_render_age(&job)?;

        let report = CheckReport::new(&job, &doc, &page.warnings, output, last_render);
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("failed to serialize check JSON")?
            );
            return Ok(());
        }
        print_report(report);
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct CheckReport {
    source: String,
    output: String,
    client: String,
    columns: usize,
    items: usize,
    topics: usize,
    team: usize,
    warnings: Vec<WarningJson>,
    output_status: StalenessSignal,
    last_render_age: Option<String>,
}

#[derive(Debug, Serialize)]
struct WarningJson {
    kind: &'static str,
    message: String,
}

#[derive(Tabled)]
struct WarningRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "kind")]
    kind: &'static str,
    #[tabled(rename = "detail")]
    detail: String,
}

impl CheckReport {
    fn new(
        job: &RenderJob,
        doc: &AgendaDocument,
        warnings: &[BindingWarning],
        output_status: StalenessSignal,
        last_render_age: Option<String>,
    ) -> Self {
        CheckReport {
            source: job.source.to_string(),
            output: job.output.display().to_string(),
            client: text(&doc.client_info.name).to_string(),
            columns: doc.assets_section.columns.len(),
            items: doc.item_count(),
            topics: doc.discussion_topics.len(),
            team: doc.team.len(),
            warnings: warnings
                .iter()
                .map(|w| WarningJson {
                    kind: warning_kind(w),
                    message: w.to_string(),
                })
                .collect(),
            output_status,
            last_render_age,
        }
    }
}

fn last_render_age(job: &RenderJob) -> Result<Option<String>> {
    if !hash_store::store_path_for(&job.output).exists() {
        return Ok(None);
    }
    let store = hash_store::load_for(&job.output)
        .with_context(|| format!("failed to load hash store for '{}'", job.output.display()))?;
    Ok(Some(format_datetime_age(store.rendered_at)))
}

fn print_report(report: CheckReport) {
    println!(
        "Agenda v{} | {} | {} columns | {} items | {} topics | {} team entries",
        env!("CARGO_PKG_VERSION"),
        report.client.bold(),
        report.columns,
        report.items,
        report.topics,
        report.team,
    );
    println!("source: {}", report.source);

    let age = report
        .last_render_age
        .as_deref()
        .map(|age| format!(" (last render {age} ago)"))
        .unwrap_or_default();
    println!(
        "output: {} {} {}{age}",
        report.output,
        signal_indicator(&report.output_status),
        signal_detail(&report.output_status),
    );

    if report.warnings.is_empty() {
        println!("{} no binding warnings", "✓".green().bold());
        return;
    }

    let rows: Vec<WarningRow> = report
        .warnings
        .into_iter()
        .enumerate()
        .map(|(i, w)| WarningRow {
            index: i + 1,
            kind: w.kind,
            detail: w.message,
        })
        .collect();
    let count = rows.len();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
    println!("{} {count} binding warning(s)", "!".yellow().bold());
}

fn warning_kind(warning: &BindingWarning) -> &'static str {
    match warning {
        BindingWarning::MissingElement { .. } => "missing_element",
        BindingWarning::MissingColumn { .. } => "missing_column",
        BindingWarning::UnrecognizedTeamEntry { .. } => "unrecognized_team_entry",
    }
}

fn signal_indicator(signal: &StalenessSignal) -> String {
    match signal {
        StalenessSignal::NeverRendered => "■".bright_black().bold().to_string(),
        StalenessSignal::Current => "■".green().bold().to_string(),
        StalenessSignal::Stale { .. } => "■".yellow().bold().to_string(),
        StalenessSignal::Modified => "■".red().bold().to_string(),
    }
}

fn signal_detail(signal: &StalenessSignal) -> String {
    match signal {
        StalenessSignal::Stale { reason } => format!("{} ({reason})", signal.label().to_uppercase()),
        other => other.label().to_uppercase(),
    }
}
