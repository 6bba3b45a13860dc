//! Render configuration
//!
//! All layout constants live here and are passed by reference into the
//! planner and the renderers. Nothing in the crate reads layout values from
//! globals, so two renders with different configurations can run side by side.

use crate::geometry::Rgb;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Windows longer than this many days switch from the timeline to the monthly grid.
///
/// A window of exactly this length still renders as a timeline.
pub const DEFAULT_MONTHLY_THRESHOLD_DAYS: u32 = 31;

/// Top-level configuration for a render call
///
/// # Examples
///
/// ```
/// let cfg = vacation_canvas::RenderConfig::default();
/// assert_eq!(cfg.monthly_threshold_days, 31);
/// assert_eq!(cfg.scale, 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Longest window (in days) still drawn as a timeline
    pub monthly_threshold_days: u32,
    /// Supersampling multiplier applied when rasterizing
    pub scale: f32,
    /// Heading drawn centered at the top of every image
    pub title: String,
    pub timeline: TimelineMetrics,
    pub monthly: MonthlyMetrics,
    pub legend: LegendMetrics,
    pub palette: Palette,
    pub fonts: FontConfig,
    /// How long async renders wait for font preparation before falling back
    pub font_timeout_ms: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            monthly_threshold_days: DEFAULT_MONTHLY_THRESHOLD_DAYS,
            scale: 2.0,
            title: "Team Vacation Calendar".to_string(),
            timeline: TimelineMetrics::default(),
            monthly: MonthlyMetrics::default(),
            legend: LegendMetrics::default(),
            palette: Palette::default(),
            fonts: FontConfig::default(),
            font_timeout_ms: 3000,
        }
    }
}

/// Day-column / employee-row geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineMetrics {
    /// Space left of the grid for employee names
    pub left_margin: f32,
    /// Space above the day header (holds the title)
    pub top_margin: f32,
    pub header_height: f32,
    pub day_width: f32,
    pub row_height: f32,
    /// Extra width right of the last day column
    pub right_padding: f32,
    /// Gap between the last row and the first legend block
    pub bottom_padding: f32,
    pub bar_inset_x: f32,
    pub bar_inset_y: f32,
    pub bar_radius: f32,
    pub min_width: f32,
    pub min_height: f32,
}

impl Default for TimelineMetrics {
    fn default() -> Self {
        Self {
            left_margin: 150.0,
            top_margin: 60.0,
            header_height: 50.0,
            day_width: 30.0,
            row_height: 40.0,
            right_padding: 20.0,
            bottom_padding: 20.0,
            bar_inset_x: 2.0,
            bar_inset_y: 5.0,
            bar_radius: 5.0,
            min_width: 800.0,
            min_height: 200.0,
        }
    }
}

/// Mini-calendar tile geometry and dot packing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlyMetrics {
    pub columns: usize,
    pub cell_size: f32,
    pub title_height: f32,
    pub weekday_header_height: f32,
    pub gap_x: f32,
    pub gap_y: f32,
    pub side_margin: f32,
    pub top_margin: f32,
    pub bottom_padding: f32,
    pub max_dots_per_row: usize,
    pub max_dot_rows: usize,
    pub dot_radius: f32,
    pub dot_spacing: f32,
    pub min_width: f32,
    pub min_height: f32,
}

impl MonthlyMetrics {
    pub fn tile_width(&self) -> f32 {
        7.0 * self.cell_size
    }

    /// Title row, weekday header and six week rows.
    pub fn tile_height(&self) -> f32 {
        self.title_height + self.weekday_header_height + 6.0 * self.cell_size
    }

    /// Number of dots a single day cell can show before overflowing.
    pub fn dot_capacity(&self) -> usize {
        self.max_dots_per_row * self.max_dot_rows
    }
}

impl Default for MonthlyMetrics {
    fn default() -> Self {
        Self {
            columns: 3,
            cell_size: 36.0,
            title_height: 28.0,
            weekday_header_height: 20.0,
            gap_x: 24.0,
            gap_y: 24.0,
            side_margin: 30.0,
            top_margin: 60.0,
            bottom_padding: 20.0,
            max_dots_per_row: 3,
            max_dot_rows: 2,
            dot_radius: 3.0,
            dot_spacing: 8.0,
            min_width: 600.0,
            min_height: 400.0,
        }
    }
}

/// Legend block geometry shared by both views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendMetrics {
    pub padding: f32,
    pub header_height: f32,
    pub row_height: f32,
    pub left: f32,
    pub badge_size: f32,
}

impl LegendMetrics {
    /// Height of a legend block with `entries` rows; zero when empty.
    pub fn block_height(&self, entries: usize) -> f32 {
        if entries == 0 {
            0.0
        } else {
            self.padding + self.header_height + entries as f32 * self.row_height
        }
    }
}

impl Default for LegendMetrics {
    fn default() -> Self {
        Self {
            padding: 20.0,
            header_height: 30.0,
            row_height: 22.0,
            left: 20.0,
            badge_size: 14.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    pub text: Rgb,
    pub muted_text: Rgb,
    pub weekend: Rgb,
    pub holiday_tint: Rgb,
    pub holiday_tint_opacity: f32,
    pub holiday_accent: Rgb,
    pub grid: Rgb,
    pub cell_border: Rgb,
    pub out_of_range: Rgb,
    pub empty_cell: Rgb,
    pub separator: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::WHITE,
            text: Rgb::BLACK,
            muted_text: Rgb::new(0xb0, 0xb0, 0xb0),
            weekend: Rgb::new(240, 240, 240),
            holiday_tint: Rgb::new(0xff, 0xb7, 0x4d),
            holiday_tint_opacity: 0.35,
            holiday_accent: Rgb::new(0xf5, 0x7c, 0x00),
            grid: Rgb::new(200, 200, 200),
            cell_border: Rgb::new(0xdd, 0xdd, 0xdd),
            out_of_range: Rgb::new(0xfa, 0xfa, 0xfa),
            empty_cell: Rgb::new(0xf7, 0xf7, 0xf7),
            separator: Rgb::new(0xcc, 0xcc, 0xcc),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Preferred families in order; the first one present in the font database wins
    pub families: Vec<String>,
    /// Extra directories scanned in addition to the system fonts
    pub extra_dirs: Vec<PathBuf>,
    /// Skip scanning system font directories (useful for hermetic tests)
    pub skip_system_fonts: bool,
}

impl FontConfig {
    /// CSS `font-family` value for the scene.
    pub fn css_family(&self) -> String {
        let mut families: Vec<String> = self
            .families
            .iter()
            .map(|f| {
                if f.contains(' ') {
                    format!("'{}'", f)
                } else {
                    f.clone()
                }
            })
            .collect();
        families.push("sans-serif".to_string());
        families.join(", ")
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            families: vec![
                "Roboto".to_string(),
                "DejaVu Sans".to_string(),
                "Liberation Sans".to_string(),
                "Arial".to_string(),
            ],
            extra_dirs: vec![PathBuf::from("fonts")],
            skip_system_fonts: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_block_height_is_zero_without_entries() {
        let m = LegendMetrics::default();
        assert_eq!(m.block_height(0), 0.0);
        assert_eq!(m.block_height(3), 20.0 + 30.0 + 3.0 * 22.0);
    }

    #[test]
    fn monthly_tile_fits_six_weeks() {
        let m = MonthlyMetrics::default();
        assert_eq!(m.tile_width(), 252.0);
        assert_eq!(m.tile_height(), 28.0 + 20.0 + 216.0);
        assert_eq!(m.dot_capacity(), 6);
    }

    #[test]
    fn css_family_quotes_multi_word_names() {
        let f = FontConfig {
            families: vec!["Roboto".into(), "DejaVu Sans".into()],
            ..Default::default()
        };
        assert_eq!(f.css_family(), "Roboto, 'DejaVu Sans', sans-serif");
    }

    #[test]
    fn config_round_trips_through_partial_json() {
        let cfg: RenderConfig =
            serde_json::from_str(r##"{"monthly_threshold_days": 61, "palette": {"grid": "#101010"}}"##)
                .unwrap();
        assert_eq!(cfg.monthly_threshold_days, 61);
        assert_eq!(cfg.palette.grid, Rgb::new(16, 16, 16));
        assert_eq!(cfg.palette.weekend, Rgb::new(240, 240, 240));
        assert_eq!(cfg.timeline, TimelineMetrics::default());
    }
}
