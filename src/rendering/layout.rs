//! Dimension planning for both views
//!
//! The planner is the only place that turns counts into pixel positions.
//! Renderers and the legend composer read every offset from the returned
//! [`Layout`] and never recompute their own.

use crate::config::{LegendMetrics, RenderConfig};
use crate::geometry;
use crate::view::ViewMode;

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub view: ViewMode,
    /// Logical canvas width, before supersampling
    pub width: f32,
    /// Logical canvas height, before supersampling. Both sides are whole
    /// pixels so the PNG is exactly `scale` times the reported size.
    pub height: f32,
    pub title_y: f32,
    pub body: BodyLayout,
    pub vacation_legend: Option<LegendBlock>,
    pub holiday_legend: Option<LegendBlock>,
}

impl Layout {
    pub fn pixel_width(&self) -> u32 {
        self.width as u32
    }

    pub fn pixel_height(&self) -> u32 {
        self.height as u32
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BodyLayout {
    Timeline(TimelineGeometry),
    MonthlyGrid(MonthlyGeometry),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineGeometry {
    pub left: f32,
    pub header_top: f32,
    pub grid_top: f32,
    pub day_width: f32,
    pub row_height: f32,
    pub days: u32,
    pub rows: usize,
}

impl TimelineGeometry {
    pub fn column_x(&self, offset: u32) -> f32 {
        self.left + offset as f32 * self.day_width
    }

    pub fn row_y(&self, row: usize) -> f32 {
        self.grid_top + row as f32 * self.row_height
    }

    pub fn grid_right(&self) -> f32 {
        self.column_x(self.days)
    }

    pub fn grid_bottom(&self) -> f32 {
        self.row_y(self.rows)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyGeometry {
    pub columns: usize,
    pub rows: usize,
    pub cell_size: f32,
    pub title_height: f32,
    pub weekday_header_height: f32,
    pub tiles: Vec<MonthTile>,
}

/// Placement of one month's mini calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthTile {
    pub year: i32,
    pub month: u32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Empty cells before day 1 (Monday-first weeks)
    pub leading_blanks: u32,
    pub days_in_month: u32,
    pub week_rows: u32,
}

impl MonthTile {
    /// Top-left corner of the cell at `slot` (row-major, blanks included).
    pub fn cell_origin(&self, slot: u32, geo: &MonthlyGeometry) -> (f32, f32) {
        let col = slot % 7;
        let row = slot / 7;
        (
            self.x + col as f32 * geo.cell_size,
            self.y + geo.title_height + geo.weekday_header_height + row as f32 * geo.cell_size,
        )
    }

    pub fn slot_count(&self) -> u32 {
        self.week_rows * 7
    }
}

/// Vertical placement of a legend block.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendBlock {
    pub top: f32,
    pub height: f32,
    pub entries: usize,
    pub separator_y: f32,
    pub title_y: f32,
    pub first_row_y: f32,
    pub row_height: f32,
}

impl LegendBlock {
    fn plan(top: f32, entries: usize, metrics: &LegendMetrics) -> Option<Self> {
        if entries == 0 {
            return None;
        }
        Some(Self {
            top,
            height: metrics.block_height(entries),
            entries,
            separator_y: top + metrics.padding / 2.0,
            title_y: top + metrics.padding + metrics.header_height / 2.0,
            first_row_y: top + metrics.padding + metrics.header_height,
            row_height: metrics.row_height,
        })
    }

    /// Vertical center of row `index`.
    pub fn row_center(&self, index: usize) -> f32 {
        self.first_row_y + index as f32 * self.row_height + self.row_height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Stack the two legend blocks starting at `top`; returns them and their total height.
fn plan_legends(
    top: f32,
    vacation_entries: usize,
    holiday_entries: usize,
    metrics: &LegendMetrics,
) -> (Option<LegendBlock>, Option<LegendBlock>, f32) {
    let vacation = LegendBlock::plan(top, vacation_entries, metrics);
    let holiday_top = top + metrics.block_height(vacation_entries);
    let holiday = LegendBlock::plan(holiday_top, holiday_entries, metrics);
    let total = metrics.block_height(vacation_entries) + metrics.block_height(holiday_entries);
    (vacation, holiday, total)
}

/// Canvas for the day-column / employee-row view.
pub fn plan_timeline(
    days: u32,
    employee_count: usize,
    vacation_entries: usize,
    holiday_entries: usize,
    config: &RenderConfig,
) -> Layout {
    let m = &config.timeline;
    let geo = TimelineGeometry {
        left: m.left_margin,
        header_top: m.top_margin,
        grid_top: m.top_margin + m.header_height,
        day_width: m.day_width,
        row_height: m.row_height,
        days,
        rows: employee_count,
    };

    let width = (m.left_margin + days as f32 * m.day_width + m.right_padding)
        .max(m.min_width)
        .ceil();
    let legends_top = geo.grid_bottom() + m.bottom_padding;
    let (vacation_legend, holiday_legend, legends_height) =
        plan_legends(legends_top, vacation_entries, holiday_entries, &config.legend);
    let height = (legends_top + legends_height).max(m.min_height).ceil();

    Layout {
        view: ViewMode::Timeline,
        width,
        height,
        title_y: m.top_margin / 2.0,
        body: BodyLayout::Timeline(geo),
        vacation_legend,
        holiday_legend,
    }
}

/// Canvas for the month-tile view; `months` must be chronological.
pub fn plan_monthly(
    months: &[(i32, u32)],
    vacation_entries: usize,
    holiday_entries: usize,
    config: &RenderConfig,
) -> Layout {
    let m = &config.monthly;
    let columns = m.columns.max(1).min(months.len().max(1));
    let rows = months.len().div_ceil(columns);
    let (tile_w, tile_h) = (m.tile_width(), m.tile_height());

    let grid_w = columns as f32 * tile_w + columns.saturating_sub(1) as f32 * m.gap_x;
    let grid_h = rows as f32 * tile_h + rows.saturating_sub(1) as f32 * m.gap_y;
    let width = (grid_w + 2.0 * m.side_margin).max(m.min_width).ceil();
    let offset_x = (width - grid_w) / 2.0;

    let tiles = months
        .iter()
        .enumerate()
        .map(|(i, &(year, month))| {
            let (col, row) = (i % columns, i / columns);
            let leading_blanks = chrono::NaiveDate::from_ymd_opt(year, month, 1)
                .map(geometry::monday_index)
                .unwrap_or(0);
            let days_in_month = geometry::days_in_month(year, month);
            MonthTile {
                year,
                month,
                x: offset_x + col as f32 * (tile_w + m.gap_x),
                y: m.top_margin + row as f32 * (tile_h + m.gap_y),
                width: tile_w,
                height: tile_h,
                leading_blanks,
                days_in_month,
                week_rows: (leading_blanks + days_in_month).div_ceil(7),
            }
        })
        .collect();

    let legends_top = m.top_margin + grid_h + m.bottom_padding;
    let (vacation_legend, holiday_legend, legends_height) =
        plan_legends(legends_top, vacation_entries, holiday_entries, &config.legend);
    let height = (legends_top + legends_height).max(m.min_height).ceil();

    Layout {
        view: ViewMode::MonthlyGrid,
        width,
        height,
        title_y: m.top_margin / 2.0,
        body: BodyLayout::MonthlyGrid(MonthlyGeometry {
            columns,
            rows,
            cell_size: m.cell_size,
            title_height: m.title_height,
            weekday_header_height: m.weekday_header_height,
            tiles,
        }),
        vacation_legend,
        holiday_legend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_size_follows_formula() {
        let cfg = RenderConfig::default();
        let layout = plan_timeline(31, 5, 0, 0, &cfg);
        assert_eq!(layout.width, 150.0 + 31.0 * 30.0 + 20.0);
        assert_eq!(layout.height, 60.0 + 50.0 + 5.0 * 40.0 + 20.0);
        assert!(layout.vacation_legend.is_none());
        assert!(layout.holiday_legend.is_none());
    }

    #[test]
    fn timeline_size_is_floored_to_minimum() {
        let cfg = RenderConfig::default();
        let layout = plan_timeline(3, 0, 0, 0, &cfg);
        assert_eq!(layout.width, 800.0);
        assert_eq!(layout.height, 200.0);
    }

    #[test]
    fn legends_stack_below_rows() {
        let cfg = RenderConfig::default();
        let layout = plan_timeline(10, 2, 3, 2, &cfg);
        let vac = layout.vacation_legend.clone().unwrap();
        let hol = layout.holiday_legend.clone().unwrap();
        assert_eq!(vac.top, 60.0 + 50.0 + 80.0 + 20.0);
        assert_eq!(vac.height, 20.0 + 30.0 + 3.0 * 22.0);
        assert_eq!(hol.top, vac.bottom());
        assert_eq!(layout.height, hol.bottom());
        assert_eq!(vac.row_center(0), vac.top + 50.0 + 11.0);
    }

    #[test]
    fn monthly_tiles_wrap_after_three_columns() {
        let cfg = RenderConfig::default();
        let months = [(2025, 1), (2025, 2), (2025, 3), (2025, 4)];
        let layout = plan_monthly(&months, 0, 0, &cfg);
        let BodyLayout::MonthlyGrid(geo) = &layout.body else {
            panic!("expected monthly body");
        };
        assert_eq!(geo.columns, 3);
        assert_eq!(geo.rows, 2);
        assert_eq!(geo.tiles[0].y, geo.tiles[2].y);
        assert!(geo.tiles[3].y > geo.tiles[0].y);
        assert_eq!(geo.tiles[3].x, geo.tiles[0].x);
        // 2025-01-01 is a Wednesday
        assert_eq!(geo.tiles[0].leading_blanks, 2);
        assert_eq!(geo.tiles[0].week_rows, 5);
        assert_eq!(layout.width, 3.0 * 252.0 + 2.0 * 24.0 + 60.0);
    }

    #[test]
    fn single_month_is_centered_on_minimum_width() {
        let cfg = RenderConfig::default();
        let layout = plan_monthly(&[(2025, 6)], 0, 0, &cfg);
        let BodyLayout::MonthlyGrid(geo) = &layout.body else {
            panic!("expected monthly body");
        };
        assert_eq!(layout.width, 600.0);
        assert_eq!(geo.tiles[0].x, (600.0 - 252.0) / 2.0);
        assert_eq!(layout.height, 400.0);
        // 2025-06-01 is a Sunday: six blanks, then 30 days over six rows
        assert_eq!(geo.tiles[0].leading_blanks, 6);
        assert_eq!(geo.tiles[0].week_rows, 6);
    }

    #[test]
    fn fractional_metrics_round_up_to_whole_pixels() {
        let mut cfg = RenderConfig::default();
        cfg.timeline.day_width = 30.25;
        cfg.timeline.row_height = 40.4;
        cfg.timeline.min_width = 0.0;
        cfg.timeline.min_height = 0.0;
        let layout = plan_timeline(10, 3, 0, 0, &cfg);
        assert_eq!(layout.width, 473.0);
        assert_eq!(layout.height, 252.0);
        assert_eq!(layout.pixel_width(), 473);
    }
}
