//! Timeline view: one column per day, one row per employee

use crate::config::{RenderConfig, TimelineMetrics};
use crate::geometry::{self, Rgb, MONTH_ABBREVIATIONS};
use crate::rendering::context::RenderContext;
use crate::rendering::layout::TimelineGeometry;
use crate::rendering::paint::{Anchor, Layer, PaintCommand, Scene};
use chrono::Datelike;

const HEADER_FONT_SIZE: f32 = 12.0;
const LABEL_FONT_SIZE: f32 = 12.0;
const HOLIDAY_ACCENT_HEIGHT: f32 = 3.0;
const GRID_LINE_WIDTH: f32 = 0.5;

/// Draw the timeline body. Layers are appended in paint order; later layers
/// sit on top of earlier ones.
pub fn draw(ctx: &RenderContext<'_>, geo: &TimelineGeometry, config: &RenderConfig, scene: &mut Scene) {
    draw_weekends(ctx, geo, config, scene);
    draw_holidays(ctx, geo, config, scene);
    draw_day_headers(ctx, geo, config, scene);
    draw_rows(ctx, geo, config, scene);
    draw_grid(geo, config, scene);
}

fn draw_weekends(ctx: &RenderContext<'_>, geo: &TimelineGeometry, config: &RenderConfig, scene: &mut Scene) {
    let height = geo.grid_bottom() - geo.grid_top;
    for (offset, date) in ctx.dates() {
        if geometry::is_weekend(date) {
            scene.push(
                Layer::WeekendShade,
                PaintCommand::fill_rect(
                    geo.column_x(offset),
                    geo.grid_top,
                    geo.day_width,
                    height,
                    config.palette.weekend,
                ),
            );
        }
    }
}

fn draw_holidays(ctx: &RenderContext<'_>, geo: &TimelineGeometry, config: &RenderConfig, scene: &mut Scene) {
    let palette = &config.palette;
    let height = geo.grid_bottom() - geo.grid_top;
    for holiday in &ctx.holidays {
        let x = geo.column_x(ctx.column_of(holiday.date));
        scene.push(
            Layer::HolidayShade,
            PaintCommand::Rect {
                x,
                y: geo.grid_top,
                width: geo.day_width,
                height,
                radius: 0.0,
                fill: palette.holiday_tint,
                opacity: palette.holiday_tint_opacity,
                stroke: None,
            },
        );
        scene.push(
            Layer::HolidayAccent,
            PaintCommand::fill_rect(
                x,
                geo.grid_top,
                geo.day_width,
                HOLIDAY_ACCENT_HEIGHT,
                palette.holiday_accent,
            ),
        );
    }
}

fn draw_day_headers(ctx: &RenderContext<'_>, geo: &TimelineGeometry, config: &RenderConfig, scene: &mut Scene) {
    let color = config.palette.text;
    for (offset, date) in ctx.dates() {
        let x = geo.column_x(offset) + geo.day_width / 2.0;
        scene.push(
            Layer::DayHeader,
            PaintCommand::text(
                x,
                geo.header_top + 15.0,
                HEADER_FONT_SIZE,
                color,
                Anchor::Middle,
                date.day().to_string(),
            ),
        );
        if offset == 0 || date.day() == 1 {
            scene.push(
                Layer::DayHeader,
                PaintCommand::text(
                    x,
                    geo.header_top + 35.0,
                    HEADER_FONT_SIZE,
                    color,
                    Anchor::Middle,
                    MONTH_ABBREVIATIONS[date.month0() as usize],
                ),
            );
        }
    }
}

fn draw_rows(ctx: &RenderContext<'_>, geo: &TimelineGeometry, config: &RenderConfig, scene: &mut Scene) {
    let m = &config.timeline;
    for (row, employee) in ctx.employees.iter().enumerate() {
        let y = geo.row_y(row);
        scene.push(
            Layer::RowLabel,
            PaintCommand::text(
                geo.left - 10.0,
                y + geo.row_height / 2.0,
                LABEL_FONT_SIZE,
                config.palette.text,
                Anchor::End,
                employee.name.clone(),
            ),
        );

        let color = employee.rgb();
        for booking in ctx.bookings_for(employee.id) {
            let first = ctx.column_of(booking.start);
            let last = ctx.column_of(booking.end);
            let span = (last - first + 1) as f32;
            scene.push(Layer::VacationBar, bar(geo.column_x(first), y, span * geo.day_width, geo, m, color));
        }
    }
}

fn bar(
    x: f32,
    row_y: f32,
    width: f32,
    geo: &TimelineGeometry,
    m: &TimelineMetrics,
    color: Rgb,
) -> PaintCommand {
    PaintCommand::Rect {
        x: x + m.bar_inset_x,
        y: row_y + m.bar_inset_y,
        width: width - 2.0 * m.bar_inset_x,
        height: geo.row_height - 2.0 * m.bar_inset_y,
        radius: m.bar_radius,
        fill: color,
        opacity: 1.0,
        stroke: None,
    }
}

fn draw_grid(geo: &TimelineGeometry, config: &RenderConfig, scene: &mut Scene) {
    let color = config.palette.grid;
    for i in 0..=geo.days {
        let x = geo.column_x(i);
        scene.push(
            Layer::Grid,
            PaintCommand::Line {
                x1: x,
                y1: geo.grid_top,
                x2: x,
                y2: geo.grid_bottom(),
                color,
                width: GRID_LINE_WIDTH,
            },
        );
    }
    for row in 0..=geo.rows {
        let y = geo.row_y(row);
        scene.push(
            Layer::Grid,
            PaintCommand::Line {
                x1: geo.left,
                y1: y,
                x2: geo.grid_right(),
                y2: y,
                color,
                width: GRID_LINE_WIDTH,
            },
        );
    }
}
