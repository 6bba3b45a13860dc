//! Runs in its own binary so the shared font database starts unloaded and
//! comes from the system font directories.

use chrono::NaiveDate;
use vacation_canvas::async_api::render_async;
use vacation_canvas::{fonts, render_with_fonts, Employee, RenderConfig, RenderRequest, Vacation};

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn render_after_font_timeout_still_draws_text() {
    let cfg = RenderConfig {
        font_timeout_ms: 0,
        ..Default::default()
    };
    let req = RenderRequest::new(d(1), d(10))
        .employees(vec![Employee::new(1, "Alice", "#ff0000")])
        .vacations(vec![Vacation::new(1, 1, d(5), d(7))]);

    let image = render_async(req.clone(), cfg.clone()).await.unwrap();

    let db = fonts::database(&cfg.fonts);
    if db.len() == 0 {
        eprintln!("no system fonts installed; text cannot be checked");
        return;
    }

    let shapes_only = render_with_fonts(&req, &cfg, fonts::empty_database()).unwrap();
    let with_fonts = render_with_fonts(&req, &cfg, db).unwrap();
    assert_ne!(image.digest(), shapes_only.digest());
    assert_eq!(image.digest(), with_fonts.digest());
}
