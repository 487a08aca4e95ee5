use crate::config::{self, PaginationArgs};
use crate::prelude::{println, *};
use colored::Colorize;
use pokedex_core::pagination::{compute, render_line, PageMarker};

#[derive(Debug, clap::Parser)]
#[command(name = "pages")]
#[command(about = "Print the page numbers a pagination bar shows")]
pub struct App {
    /// Current page (1-based)
    #[arg(allow_negative_numbers = true)]
    pub current: i64,

    /// Total number of pages
    #[arg(allow_negative_numbers = true)]
    pub total: i64,

    #[clap(flatten)]
    pub pagination: PaginationArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Module entry point
pub fn run(app: App, global: crate::Global) -> Result<()> {
    let settings = config::load(global.config.as_deref())?;
    let pagination = app.pagination.resolve(settings.pagination)?;

    debug!(
        "Computing pages for {}/{} with {:?}",
        app.current, app.total, pagination
    );

    let markers = compute(app.current, app.total, &pagination);

    if markers.is_empty() {
        warn!(
            "Page {} of {} is not a valid pagination state",
            app.current, app.total
        );
    }

    if app.json {
        println!("{}", serde_json::to_string(&markers)?);
    } else if !markers.is_empty() {
        println!("{}", render_line(&markers));
    }

    Ok(())
}

/// Render markers with the current page bracketed and highlighted
pub fn format_page_bar(markers: &[PageMarker], current: u64) -> String {
    markers
        .iter()
        .map(|marker| match marker {
            PageMarker::Page(n) if *n == current => f!("[{n}]").bright_cyan().bold().to_string(),
            PageMarker::Page(n) => n.to_string(),
            PageMarker::Gap => marker.to_string().bright_black().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
