/// Put the pipeline together: load and cache the dataset, filter it by the
/// selected weight class, and render each dashboard view as a console table
/// and a bar-chart PNG.
use std::error::Error;
use std::path::{Path, PathBuf};

mod cache;
mod filter;
mod io;
mod preprocess;
mod summary;

use clap::Parser;
use plotters::prelude::*;

use cache::DatasetCache;
use chrono::NaiveDate;
use filter::{filter_records, weight_classes, Selection};
use preprocess::FightRecord;
use summary::{SummaryTable, DASHBOARD_VIEWS};

/// Bar fill, the gold the dashboard styles winners with.
const BAR_GOLD: RGBColor = RGBColor(0xb0, 0x94, 0x24);

#[derive(Parser, Debug)]
#[command(name = "ufc-winner-analysis", about = "Win distributions over a UFC fight dataset")]
struct Cli {
    /// Path to the joined fight dataset
    #[arg(default_value = "data/Joined-UFC.csv")]
    csv: PathBuf,

    /// Weight class to restrict the views to, or "All"
    #[arg(short, long, default_value = "All")]
    weight_class: Selection,

    /// Directory the chart images are written into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Print the weight classes present in the dataset and exit
    #[arg(long)]
    list_classes: bool,
}

/// Draws a vertical bar chart of one summary table and saves it as a PNG.
/// input: output path, chart caption, grouped-axis label, summary rows
/// output: none (writes the PNG)
/// logic: compute axis ranges from the table; set up PNG backend; build
/// Cartesian chart; label X ticks with the group labels; draw one bar per row
fn plot_summary(
    path: &Path,
    title: &str,
    axis: &str,
    table: &SummaryTable,
) -> Result<(), Box<dyn Error>> {
    let labels: Vec<&str> = table.rows.iter().map(|r| r.label.as_str()).collect();
    let count = table.rows.len();
    let max_total = table.rows.iter().map(|r| r.total).max().unwrap_or(0);

    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..count.max(1), 0..(max_total + 1))?;

    chart
        .configure_mesh()
        .disable_mesh()
        // One label per bar; hide any out-of-range ticks
        .x_labels(count.max(1))
        .x_label_formatter(&|idx| {
            let i = *idx;
            if i < count {
                labels[i].to_string()
            } else {
                String::new()
            }
        })
        .x_desc(axis)
        .y_desc("Wins")
        .draw()?;

    chart.draw_series(table.rows.iter().enumerate().map(|(i, row)| {
        Rectangle::new([(i, 0), (i + 1, row.total)], BAR_GOLD.mix(0.85).filled())
    }))?;

    Ok(())
}

fn print_table(title: &str, table: &SummaryTable) {
    println!("{title}");
    if table.is_empty() {
        println!("  (no records)");
    }
    for row in &table.rows {
        println!("  {:<24} {:>6}", row.label, row.total);
    }
    println!();
}

/// Earliest and latest event date present, when the export carries dates.
fn event_date_range(records: &[FightRecord]) -> Option<(NaiveDate, NaiveDate)> {
    let mut dates = records.iter().filter_map(|r| r.event_date);
    let first = dates.next()?;
    let (lo, hi) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
    Some((lo, hi))
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // 1) Load once; the cache serves every later recomputation
    println!("Loading data from {}...", cli.csv.display());
    let mut cache = DatasetCache::new(&cli.csv);
    let records = cache.records()?;
    println!("Loaded {} usable fight records", records.len());
    if let Some((first, last)) = event_date_range(records) {
        println!("Fights covered: {} to {}", first, last);
    }

    if cli.list_classes {
        for class in weight_classes(records) {
            println!("{class}");
        }
        return Ok(());
    }

    // 2) Narrow to the selected weight class
    let filtered = filter_records(records, &cli.weight_class);
    println!(
        "{} records after weight class filter ({})\n",
        filtered.len(),
        cli.weight_class
    );

    // 3) Reduce and render the four views
    std::fs::create_dir_all(&cli.out_dir)?;
    for view in DASHBOARD_VIEWS {
        let table = view.summarize(&filtered)?;
        let title = view.chart_title(&cli.weight_class);
        print_table(&title, &table);

        let out = cli.out_dir.join(format!("{}.png", view.file_stem()));
        plot_summary(&out, &title, view.axis_label(), &table)?;
        println!("Wrote {}", out.display());
    }

    Ok(())
}

// end tests
