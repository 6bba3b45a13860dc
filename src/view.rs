//! View selection between the timeline and the monthly grid

use crate::model::RenderRequest;
use crate::{RenderConfig, Result};
use serde::{Deserialize, Serialize};

/// The two presentations the engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Day columns by employee rows, for short windows
    Timeline,
    /// One mini calendar per month, for long windows
    MonthlyGrid,
}

impl ViewMode {
    /// Pick the view for a window of `days` inclusive days.
    ///
    /// `days == threshold` stays on the timeline.
    pub fn for_days(days: u32, threshold: u32) -> Self {
        if days > threshold {
            ViewMode::MonthlyGrid
        } else {
            ViewMode::Timeline
        }
    }

    /// Validate the request window and pick its view.
    pub fn select(request: &RenderRequest, config: &RenderConfig) -> Result<Self> {
        let days = request.day_count()?;
        Ok(Self::for_days(days, config.monthly_threshold_days))
    }
}
