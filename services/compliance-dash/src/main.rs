// services/compliance-dash/src/main.rs
//
// ComplianceIQ terminal dashboard
//
// Run with: cargo run --bin compliance-dash -- --snapshot

use std::io::{self, stdout, Write};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing::info;

use compliance_dash::chart::chartjs::write_document;
use compliance_dash::config::{load_config, DashboardConfig};
use compliance_dash::{dashboard_data, snapshot, Dashboard, DashboardData, DashboardState};
use dashkit::telemetry::{init_tracing, LogSink};
use dashkit::DashResult;

#[derive(Parser, Debug)]
#[command(name = "compliance-dash")]
#[command(about = "Terminal dashboard for the ComplianceIQ program overview")]
#[command(version)]
struct Args {
    /// Configuration file (YAML)
    #[arg(long, short)]
    config: Option<String>,

    /// Print the whole dashboard once as plain text and exit
    #[arg(long, conflicts_with = "export_charts")]
    snapshot: bool,

    /// Snapshot width in columns
    #[arg(long, default_value = "140")]
    width: u16,

    /// Print the chart definitions as chart.js JSON and exit
    #[arg(long)]
    export_charts: bool,

    /// Write logs to this file (overrides observability.log_file)
    #[arg(long)]
    log_file: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = load_config(args.config.as_deref())?;
    if let Some(path) = &args.log_file {
        config.observability.log_file = Some(path.clone());
    }

    let headless = args.snapshot || args.export_charts;
    let sink = if headless { LogSink::Stderr } else { LogSink::Disabled };
    init_tracing(&config.observability, sink)?;

    let data = dashboard_data();

    if args.export_charts {
        export_charts(&data)?;
        return Ok(());
    }
    if args.snapshot {
        print_snapshot(&data, args.width)?;
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run app
    let result = run_app(&mut terminal, &data, &config);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result?;
    Ok(())
}

fn export_charts(data: &DashboardData) -> DashResult<()> {
    write_document(io::stdout().lock(), data.charts.iter().map(|c| (c.id, &c.spec)))?;
    info!(charts = data.charts.len(), "Exported chart definitions");
    Ok(())
}

fn print_snapshot(data: &DashboardData, width: u16) -> DashResult<()> {
    let lines = snapshot::render_text(data, width);
    let mut out = io::stdout().lock();
    for line in &lines {
        writeln!(out, "{}", line)?;
    }
    info!(width, rows = lines.len(), "Printed dashboard snapshot");
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    data: &DashboardData,
    config: &DashboardConfig,
) -> DashResult<()> {
    let mut dashboard = Dashboard::new(data);
    let mut state = DashboardState::new();

    let tick_rate = config.display.tick_rate();
    let step = config.display.scroll_step;

    info!(
        tick_rate_ms = config.display.tick_rate_ms,
        scroll_step = step,
        "Dashboard started"
    );

    loop {
        terminal.draw(|frame| dashboard.draw(frame, &mut state))?;

        // Redraw at least once per tick so resizes are picked up
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            info!("Dashboard closed");
                            return Ok(());
                        }
                        KeyCode::Up | KeyCode::Char('k') => state.scroll_up(step),
                        KeyCode::Down | KeyCode::Char('j') => state.scroll_down(step),
                        KeyCode::PageUp => state.page_up(),
                        KeyCode::PageDown => state.page_down(),
                        KeyCode::Home => state.home(),
                        KeyCode::End => state.end(),
                        _ => {}
                    }
                }
            }
        }
    }
}
