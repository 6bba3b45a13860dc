//! Monthly grid view: one Monday-first mini calendar per month
//!
//! Days outside the requested window but inside a boundary month are drawn
//! dimmed and never carry holiday or vacation markers.

use crate::config::{MonthlyMetrics, RenderConfig};
use crate::geometry::{self, MONTH_NAMES, WEEKDAY_ABBREVIATIONS};
use crate::rendering::context::{Absence, RenderContext};
use crate::rendering::layout::{MonthTile, MonthlyGeometry};
use crate::rendering::paint::{Anchor, Layer, PaintCommand, Scene, Stroke};
use chrono::{Datelike, NaiveDate};

const MONTH_TITLE_FONT_SIZE: f32 = 14.0;
const WEEKDAY_FONT_SIZE: f32 = 10.0;
const DAY_NUMBER_FONT_SIZE: f32 = 10.0;
const OVERFLOW_FONT_SIZE: f32 = 11.0;
const CELL_BORDER_WIDTH: f32 = 0.5;
const HOLIDAY_BORDER_WIDTH: f32 = 1.5;
/// Offset of the first dot row below the top of a cell
const DOT_TOP: f32 = 19.0;

/// How a single day cell is filled, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Holiday,
    Weekend,
    Plain,
    OutOfWindow,
}

impl CellKind {
    pub fn classify(ctx: &RenderContext<'_>, date: NaiveDate) -> Self {
        if !ctx.in_window(date) {
            CellKind::OutOfWindow
        } else if ctx.is_holiday(date) {
            CellKind::Holiday
        } else if geometry::is_weekend(date) {
            CellKind::Weekend
        } else {
            CellKind::Plain
        }
    }
}

/// Centers of the dots drawn for `count` absences in a `cell_size` cell at
/// `(x, y)`, and whether the overflow marker is needed.
pub fn pack_dots(
    count: usize,
    x: f32,
    y: f32,
    cell_size: f32,
    metrics: &MonthlyMetrics,
) -> (Vec<(f32, f32)>, bool) {
    let per_row = metrics.max_dots_per_row.max(1);
    let visible = count.min(metrics.dot_capacity());
    let center_x = x + cell_size / 2.0;

    let mut centers = Vec::with_capacity(visible);
    for row in 0..visible.div_ceil(per_row) {
        let in_row = per_row.min(visible - row * per_row);
        let row_width = (in_row - 1) as f32 * metrics.dot_spacing;
        let cy = y + DOT_TOP + row as f32 * metrics.dot_spacing;
        for i in 0..in_row {
            centers.push((center_x - row_width / 2.0 + i as f32 * metrics.dot_spacing, cy));
        }
    }
    (centers, count > visible)
}

pub fn draw(ctx: &RenderContext<'_>, geo: &MonthlyGeometry, config: &RenderConfig, scene: &mut Scene) {
    for tile in &geo.tiles {
        draw_tile(ctx, tile, geo, config, scene);
    }
}

fn draw_tile(
    ctx: &RenderContext<'_>,
    tile: &MonthTile,
    geo: &MonthlyGeometry,
    config: &RenderConfig,
    scene: &mut Scene,
) {
    let palette = &config.palette;
    scene.push(
        Layer::MonthTitle,
        PaintCommand::bold_text(
            tile.x + tile.width / 2.0,
            tile.y + geo.title_height / 2.0,
            MONTH_TITLE_FONT_SIZE,
            palette.text,
            Anchor::Middle,
            format!("{} {}", MONTH_NAMES[(tile.month - 1) as usize], tile.year),
        ),
    );

    let header_y = tile.y + geo.title_height + geo.weekday_header_height / 2.0;
    for (col, label) in WEEKDAY_ABBREVIATIONS.iter().enumerate() {
        let color = if col >= 5 { palette.muted_text } else { palette.text };
        scene.push(
            Layer::WeekdayHeader,
            PaintCommand::text(
                tile.x + (col as f32 + 0.5) * geo.cell_size,
                header_y,
                WEEKDAY_FONT_SIZE,
                color,
                Anchor::Middle,
                *label,
            ),
        );
    }

    for slot in 0..tile.slot_count() {
        let (x, y) = tile.cell_origin(slot, geo);
        let day = slot as i64 - tile.leading_blanks as i64 + 1;
        let date = (day >= 1 && day <= tile.days_in_month as i64)
            .then(|| NaiveDate::from_ymd_opt(tile.year, tile.month, day as u32))
            .flatten();
        match date {
            Some(date) => draw_day(ctx, date, x, y, geo, config, scene),
            None => scene.push(
                Layer::DayCell,
                PaintCommand::Rect {
                    x,
                    y,
                    width: geo.cell_size,
                    height: geo.cell_size,
                    radius: 0.0,
                    fill: palette.empty_cell,
                    opacity: 1.0,
                    stroke: Some(Stroke {
                        color: palette.cell_border,
                        width: CELL_BORDER_WIDTH,
                    }),
                },
            ),
        }
    }
}

fn draw_day(
    ctx: &RenderContext<'_>,
    date: NaiveDate,
    x: f32,
    y: f32,
    geo: &MonthlyGeometry,
    config: &RenderConfig,
    scene: &mut Scene,
) {
    let palette = &config.palette;
    let kind = CellKind::classify(ctx, date);
    let border = Stroke {
        color: palette.cell_border,
        width: CELL_BORDER_WIDTH,
    };
    let (fill, opacity, stroke) = match kind {
        CellKind::Holiday => (
            palette.holiday_tint,
            palette.holiday_tint_opacity,
            Stroke {
                color: palette.holiday_accent,
                width: HOLIDAY_BORDER_WIDTH,
            },
        ),
        CellKind::Weekend => (palette.weekend, 1.0, border),
        CellKind::Plain => (palette.background, 1.0, border),
        CellKind::OutOfWindow => (palette.out_of_range, 1.0, border),
    };
    scene.push(
        Layer::DayCell,
        PaintCommand::Rect {
            x,
            y,
            width: geo.cell_size,
            height: geo.cell_size,
            radius: 0.0,
            fill,
            opacity,
            stroke: Some(stroke),
        },
    );

    let number_color = if kind == CellKind::OutOfWindow {
        palette.muted_text
    } else {
        palette.text
    };
    scene.push(
        Layer::DayNumber,
        PaintCommand::text(
            x + 4.0,
            y + 9.0,
            DAY_NUMBER_FONT_SIZE,
            number_color,
            Anchor::Start,
            date.day().to_string(),
        ),
    );

    if kind == CellKind::OutOfWindow {
        return;
    }
    let absences = ctx.absences_on(date);
    if absences.is_empty() {
        return;
    }
    draw_dots(&absences, x, y, geo.cell_size, config, scene);
}

fn draw_dots(absences: &[Absence], x: f32, y: f32, cell_size: f32, config: &RenderConfig, scene: &mut Scene) {
    let m = &config.monthly;
    let (centers, overflow) = pack_dots(absences.len(), x, y, cell_size, m);
    for (absence, (cx, cy)) in absences.iter().zip(centers) {
        scene.push(
            Layer::VacationDot,
            PaintCommand::Circle {
                cx,
                cy,
                r: m.dot_radius,
                fill: absence.color,
            },
        );
    }
    if overflow {
        scene.push(
            Layer::OverflowMarker,
            PaintCommand::bold_text(
                x + cell_size - 2.0,
                y + cell_size - 6.0,
                OVERFLOW_FONT_SIZE,
                config.palette.text,
                Anchor::End,
                "+",
            ),
        );
    }
}
