use std::path::Path;

use log::{info, warn};

use schedule_grid::browser::CombinationBrowser;
use schedule_grid::config::{Config, Mode};
use schedule_grid::display::{print_combination, write_grid_to_file};
use schedule_grid::grid::{layout_detailed, render_hour_labels, GridSurface};
use schedule_grid::parser::load_combinations;
use schedule_grid::web;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Config::from_env_and_args().mode {
        Mode::Web { bind_address, port } => {
            let combinations = match std::env::var("COMBINATIONS_PATH") {
                Ok(path) if Path::new(&path).exists() => load_combinations(&path)?,
                _ => Vec::new(),
            };

            info!("Starting web server on {}:{}...", bind_address, port);
            info!("Access the API at http://localhost:{}/api/labels", port);

            web::start_server(bind_address, port, combinations).await?;
        }
        Mode::Cli { combinations_path, output_path } => {
            info!("Loading schedule combinations from {}", combinations_path);
            let combinations = load_combinations(&combinations_path)?;
            let mut browser = CombinationBrowser::new(combinations);

            if browser.is_empty() {
                warn!("{}", browser.caption());
                return Ok(());
            }

            // The text file holds the first combination, the one shown on open
            let mut surface = GridSurface::new();
            render_hour_labels(&mut surface);
            browser.render_current(&mut surface);
            write_grid_to_file(&browser.caption(), surface.cells(), surface.labels(), &output_path)?;

            loop {
                if let Some(schedule) = browser.current() {
                    print_combination(&browser.caption(), &layout_detailed(schedule));
                }
                if !browser.next() {
                    break;
                }
            }

            println!("\nGrid saved to: {}", output_path);
        }
    }

    Ok(())
}
