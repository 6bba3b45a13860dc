//! Vacation Canvas
//!
//! Renders a team's vacations, together with public holidays, into a single
//! PNG calendar image.
//!
//! # Features
//!
//! - **Two views**: a day-by-day timeline for short windows and a grid of
//!   monthly mini-calendars for long ones, picked automatically
//! - **Legends**: vacation details and public holidays listed below the body
//! - **Deterministic output**: identical inputs produce byte-identical PNGs
//!
//! # Example
//!
//! ```no_run
//! use vacation_canvas::{Employee, RenderConfig, RenderRequest, Vacation};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let request = RenderRequest::with_window_str("2025-06-01", "2025-06-10")?
//!     .employees(vec![Employee::new(1, "Alice", "#FF0000")])
//!     .vacations(vec![Vacation::new(
//!         1,
//!         1,
//!         vacation_canvas::parse_date("2025-06-05")?,
//!         vacation_canvas::parse_date("2025-06-07")?,
//!     )]);
//!
//! let image = vacation_canvas::render(&request, &RenderConfig::default())?;
//! println!("{}x{} ({:?})", image.width, image.height, image.view);
//! std::fs::write(image.suggested_filename(), &image.png_data)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod config;
pub mod geometry;
pub mod model;
pub mod view;

pub mod rendering;

// Process-wide font database and its async preparation
pub mod fonts;

// Async entry points running renders on the blocking pool
pub mod async_api;

// Collaborator traits for assembling requests from a roster and a holiday feed
pub mod source;

pub use config::RenderConfig;
pub use geometry::Rgb;
pub use model::{parse_date, Employee, EmployeeId, Holiday, RenderRequest, Vacation};
pub use rendering::{compose, Composition, RenderedImage};
pub use view::ViewMode;

use resvg::usvg::fontdb::Database;
use std::sync::Arc;

/// Render `request` to a PNG using the shared font database.
pub fn render(request: &RenderRequest, config: &RenderConfig) -> Result<RenderedImage> {
    render_with_fonts(request, config, fonts::database(&config.fonts))
}

/// Render `request` with an explicit font database.
///
/// Useful for hermetic rendering (pass [`fonts::empty_database`]) or for
/// callers that manage their own fonts.
pub fn render_with_fonts(
    request: &RenderRequest,
    config: &RenderConfig,
    font_db: Arc<Database>,
) -> Result<RenderedImage> {
    let composition = compose(request, config)?;
    let layout = &composition.layout;
    let family = fonts::preferred_family(&font_db, &config.fonts).unwrap_or_else(|| "sans-serif".to_string());
    let raster = rendering::raster::rasterize(&composition.scene, config.scale, font_db, &family)?;

    log::debug!(
        "rendered {:?} calendar: {}x{} logical, {}x{} px, {} bytes",
        layout.view,
        layout.pixel_width(),
        layout.pixel_height(),
        raster.pixel_width,
        raster.pixel_height,
        raster.png_data.len()
    );

    Ok(RenderedImage {
        width: layout.pixel_width(),
        height: layout.pixel_height(),
        scale: config.scale,
        pixel_width: raster.pixel_width,
        pixel_height: raster.pixel_height,
        view: layout.view,
        png_data: raster.png_data,
    })
}

/// Render with default configuration from plain slices.
pub fn render_calendar(
    from: chrono::NaiveDate,
    to: chrono::NaiveDate,
    employees: &[Employee],
    vacations: &[Vacation],
    holidays: &[Holiday],
    country_label: &str,
) -> Result<RenderedImage> {
    let request = RenderRequest::new(from, to)
        .employees(employees.to_vec())
        .vacations(vacations.to_vec())
        .holidays(holidays.to_vec())
        .country_label(country_label);
    render(&request, &RenderConfig::default())
}
