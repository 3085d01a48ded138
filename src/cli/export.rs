use super::ui;
use crate::core::{BudgetNormalizer, config::AppConfig};
use crate::pipeline::{ExportReport, Pipeline};
use crate::providers::{awards_provider::AwardsProvider, detail_provider::DetailBudgetProvider};
use anyhow::Result;
use comfy_table::Cell;
use std::path::Path;
use tracing::info;

const TOP_FILMS: usize = 10;

pub async fn run(config: &AppConfig, output_dir: Option<&str>) -> Result<()> {
    info!("Exporting film budgets...");

    let films = AwardsProvider::new(&config.awards_url);
    let budgets = DetailBudgetProvider::new(config.timeout())?;
    let normalizer = BudgetNormalizer::new(config.rates);
    let pipeline = Pipeline {
        films: &films,
        budgets: &budgets,
        normalizer: &normalizer,
        concurrency: config.concurrency,
    };

    let output_dir = Path::new(output_dir.unwrap_or(config.output_dir.as_str()));
    let pb = ui::new_progress_bar(0, true);
    pb.set_message("Fetching budgets...");
    let report = pipeline.run(output_dir, Some(&pb)).await;
    pb.finish_and_clear();

    println!("{}", display_report(&report?));
    Ok(())
}

fn display_report(report: &ExportReport) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Film"),
        ui::header_cell("Year"),
        ui::header_cell("Winner"),
        ui::header_cell("Budget (USD)"),
    ]);

    let mut top: Vec<_> = report.rows.iter().filter(|r| r.budget_usd > 0).collect();
    top.sort_by(|a, b| b.budget_usd.cmp(&a.budget_usd));
    for row in top.into_iter().take(TOP_FILMS) {
        table.add_row(vec![
            Cell::new(&row.film),
            Cell::new(row.year),
            Cell::new(if row.oscar_winner { "yes" } else { "" }),
            ui::usd_cell(row.budget_usd),
        ]);
    }

    let mut output = format!(
        "{}\n\n",
        ui::style_text("Largest budgets", ui::StyleType::Title)
    );
    output.push_str(&table.to_string());

    output.push_str(&format!(
        "\n\n{} {} of {} films, {}",
        ui::style_text("With budget:", ui::StyleType::TotalLabel),
        report.with_budget(),
        report.rows.len(),
        ui::style_text(
            &ui::format_usd(report.total_budget_usd()),
            ui::StyleType::TotalValue
        )
    ));

    let errors = report.fetch_errors();
    if errors > 0 {
        output.push_str(&format!(
            "\n{}",
            ui::style_text(
                &format!("{errors} budget lookups failed"),
                ui::StyleType::Error
            )
        ));
    }

    output.push_str(&format!("\nSaved to {}", report.path.display()));
    output
}
