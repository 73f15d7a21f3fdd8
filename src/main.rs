//! ROI Calculator CLI
//!
//! Command-line front end for running ROI projections and exporting reports

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use log::info;
use roi_calculator::assumptions::load_scenarios;
use roi_calculator::format::{format_compact_currency, format_count, format_currency, format_percent, format_break_even};
use roi_calculator::{Assumptions, RoiReport, ScenarioRunner};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "roi_calculator", version, about = "Project training ROI from business assumptions")]
struct Cli {
    /// Number of employees covered
    #[arg(long, default_value_t = Assumptions::default().employees)]
    employees: u32,

    /// Annual salary per employee
    #[arg(long, default_value_t = Assumptions::default().salary)]
    salary: f64,

    /// Training hours per employee per year
    #[arg(long, default_value_t = Assumptions::default().training_hours)]
    training_hours: u32,

    /// Annual turnover rate in percent
    #[arg(long, default_value_t = Assumptions::default().turnover)]
    turnover: f64,

    /// Cost to replace one employee
    #[arg(long, default_value_t = Assumptions::default().replace_cost)]
    replace_cost: f64,

    /// Analysis horizon in years
    #[arg(long, default_value_t = Assumptions::default().term)]
    term: u32,

    /// Print the full report as JSON instead of the summary table
    #[arg(long)]
    json: bool,

    /// Write the cash-flow series to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Run every row of a scenario CSV instead of a single projection
    #[arg(long)]
    scenarios: Option<PathBuf>,
}

impl Cli {
    fn assumptions(&self) -> Assumptions {
        Assumptions::new(
            self.employees,
            self.salary,
            self.training_hours,
            self.turnover,
            self.replace_cost,
            self.term,
        )
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(path) = &cli.scenarios {
        return run_scenarios(path);
    }

    let requested = cli.assumptions();
    let assumptions = requested.clamped();
    if assumptions != requested {
        info!("Inputs clamped to calculator range: {:?}", assumptions);
    }

    let report = RoiReport::from_assumptions(assumptions, Utc::now());

    if let Some(path) = &cli.csv {
        let file = File::create(path)
            .with_context(|| format!("Unable to create CSV file {}", path.display()))?;
        report.write_cash_flow_csv(file)?;
        info!("Cash-flow series written to {}", path.display());
    }

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print_summary(&report);
    }

    Ok(())
}

fn print_summary(report: &RoiReport) {
    let a = &report.assumptions;
    let d = &report.display;

    println!("ROI Calculator v{}", env!("CARGO_PKG_VERSION"));
    println!("======================\n");

    println!("Assumptions:");
    println!("  Employees:       {}", format_count(a.employees as u64));
    println!("  Salary:          {}", format_currency(a.salary));
    println!("  Training Hours:  {}", format_count(a.training_hours as u64));
    println!("  Turnover:        {}", format_percent(a.turnover));
    println!("  Replace Cost:    {}", format_currency(a.replace_cost));
    println!("  Term:            {} yr", a.term);
    println!();

    println!("Results:");
    println!("  Total Investment:     {}", d.total_investment);
    println!("  Productivity Gains:   {}", d.productivity_gains);
    println!("  Turnover Savings:     {}", d.turnover_reduction_savings);
    println!("  Training Savings:     {}", d.training_time_savings);
    println!("  Total Benefit:        {}", d.total_benefit);
    println!("  Net Benefit:          {}", d.net_benefit);
    println!("  Total ROI:            {}", d.total_roi);
    println!("  Break-even:           {}", d.break_even);
    println!();

    println!("{:>8} {:>16} {:>16} {:>16}", "Year", "Cum. Benefit", "Cum. Cost", "Net");
    println!("{}", "-".repeat(59));
    for point in &report.metrics.cash_flow_series {
        println!(
            "{:>8} {:>16} {:>16} {:>16}",
            point.year_label,
            format_compact_currency(point.cumulative_benefit),
            format_compact_currency(point.cumulative_cost),
            format_compact_currency(point.net_position()),
        );
    }

    println!("\n{}", report.narrative.fallback_summary());
}

fn run_scenarios(path: &Path) -> Result<()> {
    let scenarios: Vec<Assumptions> = load_scenarios(path)
        .with_context(|| format!("Failed to load scenarios from {}", path.display()))?
        .iter()
        .map(Assumptions::clamped)
        .collect();

    let runner = ScenarioRunner::new();
    let results = runner.run_batch(&scenarios);

    println!("{:>4} {:>9} {:>5} {:>14} {:>14} {:>8} {:>10}",
        "Row", "Employees", "Term", "Investment", "Net Benefit", "ROI", "Break-even");
    println!("{}", "-".repeat(72));

    for (row, (a, m)) in scenarios.iter().zip(&results).enumerate() {
        println!("{:>4} {:>9} {:>5} {:>14} {:>14} {:>8} {:>10}",
            row + 1,
            format_count(a.employees as u64),
            a.term,
            format_currency(m.total_investment),
            format_currency(m.net_benefit),
            format_percent(m.total_roi_percent),
            format_break_even(m.months_to_break_even),
        );
    }

    Ok(())
}
