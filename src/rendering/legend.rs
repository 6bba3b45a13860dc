//! Legend blocks drawn below the main body
//!
//! The timeline gets a flat legend (one row per booking), the monthly grid a
//! grouped one (one row per employee), so a long window with many bookings per
//! person stays as tall as the roster rather than the booking list.

use crate::config::RenderConfig;
use crate::geometry::{short_date, short_range, Rgb};
use crate::model::{EmployeeId, Holiday};
use crate::rendering::context::RenderContext;
use crate::rendering::layout::LegendBlock;
use crate::rendering::paint::{Anchor, Layer, PaintCommand, Scene, Stroke, TextSpan};
use crate::view::ViewMode;

pub const VACATION_LEGEND_TITLE: &str = "Vacations";
/// Shown in the holiday legend title when no country is selected.
pub const NO_COUNTRY_PLACEHOLDER: &str = "No country selected";

const TITLE_FONT_SIZE: f32 = 14.0;
const ROW_FONT_SIZE: f32 = 12.0;
const BADGE_RADIUS: f32 = 3.0;
const DOT_RADIUS: f32 = 6.0;
const TEXT_GAP: f32 = 8.0;

/// One row of the vacation legend.
#[derive(Debug, Clone, PartialEq)]
pub struct VacationEntry {
    pub color: Rgb,
    pub name: String,
    pub detail: String,
    /// Trailing description, only used by the flat legend
    pub note: Option<String>,
}

/// Rows of the vacation legend for `view`.
pub fn vacation_entries(view: ViewMode, ctx: &RenderContext<'_>) -> Vec<VacationEntry> {
    match view {
        ViewMode::Timeline => flat_entries(ctx),
        ViewMode::MonthlyGrid => grouped_entries(ctx),
    }
}

fn flat_entries(ctx: &RenderContext<'_>) -> Vec<VacationEntry> {
    ctx.bookings
        .iter()
        .map(|b| VacationEntry {
            color: b.color,
            name: b.employee_name().to_string(),
            detail: short_range(b.start, b.end),
            note: b.vacation.note().map(str::to_string),
        })
        .collect()
}

fn grouped_entries(ctx: &RenderContext<'_>) -> Vec<VacationEntry> {
    let mut order: Vec<EmployeeId> = Vec::new();
    let mut groups: Vec<(VacationEntry, Vec<String>)> = Vec::new();

    for booking in &ctx.bookings {
        let range = match booking.vacation.note() {
            Some(note) => format!("{} ({})", short_range(booking.start, booking.end), note),
            None => short_range(booking.start, booking.end),
        };
        match order.iter().position(|id| *id == booking.employee_id()) {
            Some(idx) => groups[idx].1.push(range),
            None => {
                order.push(booking.employee_id());
                groups.push((
                    VacationEntry {
                        color: booking.color,
                        name: booking.employee_name().to_string(),
                        detail: String::new(),
                        note: None,
                    },
                    vec![range],
                ));
            }
        }
    }

    groups
        .into_iter()
        .map(|(mut entry, ranges)| {
            entry.detail = ranges.join(", ");
            entry
        })
        .collect()
}

pub fn holiday_title(country_label: &str) -> String {
    let label = country_label.trim();
    let label = if label.is_empty() { NO_COUNTRY_PLACEHOLDER } else { label };
    format!("Public Holidays ({})", label)
}

pub fn draw_vacations(
    block: &LegendBlock,
    view: ViewMode,
    entries: &[VacationEntry],
    config: &RenderConfig,
    scene: &mut Scene,
) {
    draw_header(block, VACATION_LEGEND_TITLE, config, scene);
    let m = &config.legend;
    let text_x = m.left + m.badge_size + TEXT_GAP;

    for (i, entry) in entries.iter().enumerate() {
        let cy = block.row_center(i);
        let badge = match view {
            ViewMode::Timeline => PaintCommand::Rect {
                x: m.left,
                y: cy - m.badge_size / 2.0,
                width: m.badge_size,
                height: m.badge_size,
                radius: BADGE_RADIUS,
                fill: entry.color,
                opacity: 1.0,
                stroke: None,
            },
            ViewMode::MonthlyGrid => PaintCommand::Circle {
                cx: m.left + m.badge_size / 2.0,
                cy,
                r: DOT_RADIUS,
                fill: entry.color,
            },
        };
        scene.push(Layer::LegendBadge, badge);

        let mut spans = vec![TextSpan::bold(entry.name.clone())];
        match view {
            ViewMode::Timeline => {
                spans.push(TextSpan::plain(format!("  {}", entry.detail)));
                if let Some(note) = &entry.note {
                    spans.push(TextSpan::italic(format!("  - {}", note)));
                }
            }
            ViewMode::MonthlyGrid => spans.push(TextSpan::plain(format!(": {}", entry.detail))),
        }
        scene.push(
            Layer::LegendText,
            PaintCommand::Text {
                x: text_x,
                y: cy,
                size: ROW_FONT_SIZE,
                color: config.palette.text,
                anchor: Anchor::Start,
                spans,
            },
        );
    }
}

pub fn draw_holidays(
    block: &LegendBlock,
    holidays: &[&Holiday],
    country_label: &str,
    config: &RenderConfig,
    scene: &mut Scene,
) {
    draw_header(block, &holiday_title(country_label), config, scene);
    let m = &config.legend;
    let palette = &config.palette;

    for (i, holiday) in holidays.iter().enumerate() {
        let cy = block.row_center(i);
        scene.push(
            Layer::LegendBadge,
            PaintCommand::Rect {
                x: m.left,
                y: cy - m.badge_size / 2.0,
                width: m.badge_size,
                height: m.badge_size,
                radius: BADGE_RADIUS,
                fill: palette.holiday_tint,
                opacity: palette.holiday_tint_opacity,
                stroke: Some(Stroke {
                    color: palette.holiday_accent,
                    width: 1.0,
                }),
            },
        );
        scene.push(
            Layer::LegendText,
            PaintCommand::Text {
                x: m.left + m.badge_size + TEXT_GAP,
                y: cy,
                size: ROW_FONT_SIZE,
                color: palette.text,
                anchor: Anchor::Start,
                spans: vec![
                    TextSpan::bold(short_date(holiday.date)),
                    TextSpan::plain(format!("  {}", holiday.name)),
                ],
            },
        );
    }
}

fn draw_header(block: &LegendBlock, title: &str, config: &RenderConfig, scene: &mut Scene) {
    let left = config.legend.left;
    scene.push(
        Layer::LegendSeparator,
        PaintCommand::Line {
            x1: left,
            y1: block.separator_y,
            x2: scene.width - left,
            y2: block.separator_y,
            color: config.palette.separator,
            width: 1.0,
        },
    );
    scene.push(
        Layer::LegendTitle,
        PaintCommand::bold_text(
            left,
            block.title_y,
            TITLE_FONT_SIZE,
            config.palette.text,
            Anchor::Start,
            title,
        ),
    );
}
