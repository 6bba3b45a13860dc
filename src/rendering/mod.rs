//! Rendering pipeline: plan the canvas, build the display list, rasterize.

pub mod context;
pub mod layout;
pub mod legend;
pub mod monthly;
pub mod paint;
pub mod raster;
pub mod timeline;

use crate::geometry;
use crate::model::RenderRequest;
use crate::view::ViewMode;
use crate::{RenderConfig, Result};
use base64::Engine as _;
use context::RenderContext;
use layout::{BodyLayout, Layout};
use legend::VacationEntry;
use paint::{Anchor, Layer, PaintCommand, Scene};
use sha2::{Digest, Sha256};

const TITLE_FONT_SIZE: f32 = 18.0;

/// A finished calendar image.
///
/// `width`/`height` are logical pixels, suitable for sizing a display
/// container; the PNG itself is `scale` times larger in each direction.
#[derive(Debug, Clone)]
pub struct RenderedImage {
    pub width: u32,
    pub height: u32,
    pub scale: f32,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub view: ViewMode,
    pub png_data: Vec<u8>,
}

impl RenderedImage {
    /// `data:` URL for embedding the PNG directly in a page.
    pub fn to_data_url(&self) -> String {
        format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&self.png_data)
        )
    }

    /// Hex SHA-256 of the encoded PNG. Identical inputs yield identical digests.
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(&self.png_data))
    }

    pub fn suggested_filename(&self) -> &'static str {
        "vacation_calendar.png"
    }
}

/// The planned layout together with its display list, before rasterization.
#[derive(Debug, Clone)]
pub struct Composition {
    pub layout: Layout,
    pub scene: Scene,
}

impl ViewMode {
    /// Compute the canvas for this view. Legend sizes come from the entries
    /// the legend composer will actually draw.
    pub fn plan(
        self,
        ctx: &RenderContext<'_>,
        vacation_entries: usize,
        config: &RenderConfig,
    ) -> Layout {
        let holiday_entries = ctx.holidays.len();
        match self {
            ViewMode::Timeline => layout::plan_timeline(
                ctx.days,
                ctx.employees.len(),
                vacation_entries,
                holiday_entries,
                config,
            ),
            ViewMode::MonthlyGrid => layout::plan_monthly(
                &geometry::months_between(ctx.from, ctx.to),
                vacation_entries,
                holiday_entries,
                config,
            ),
        }
    }

    /// Draw this view's body into `scene` using a layout produced by [`ViewMode::plan`].
    pub fn draw(self, ctx: &RenderContext<'_>, layout: &Layout, config: &RenderConfig, scene: &mut Scene) {
        match (self, &layout.body) {
            (ViewMode::Timeline, BodyLayout::Timeline(geo)) => timeline::draw(ctx, geo, config, scene),
            (ViewMode::MonthlyGrid, BodyLayout::MonthlyGrid(geo)) => monthly::draw(ctx, geo, config, scene),
            (view, _) => log::warn!("layout does not match view {:?}; body skipped", view),
        }
    }
}

/// Plan and draw `request` without rasterizing it.
pub fn compose(request: &RenderRequest, config: &RenderConfig) -> Result<Composition> {
    let view = ViewMode::select(request, config)?;
    let days = request.day_count()?;
    let ctx = RenderContext::new(request, days);

    let entries: Vec<VacationEntry> = legend::vacation_entries(view, &ctx);
    let layout = view.plan(&ctx, entries.len(), config);
    log::debug!(
        "planned {:?} for {} days, {} employees: {}x{} logical px",
        view,
        days,
        ctx.employees.len(),
        layout.width,
        layout.height
    );

    let mut scene = Scene::new(layout.width, layout.height, config.fonts.css_family());
    scene.push(
        Layer::Background,
        PaintCommand::fill_rect(0.0, 0.0, layout.width, layout.height, config.palette.background),
    );
    scene.push(
        Layer::Title,
        PaintCommand::bold_text(
            layout.width / 2.0,
            layout.title_y,
            TITLE_FONT_SIZE,
            config.palette.text,
            Anchor::Middle,
            config.title.clone(),
        ),
    );

    view.draw(&ctx, &layout, config, &mut scene);

    if let Some(block) = &layout.vacation_legend {
        legend::draw_vacations(block, view, &entries, config, &mut scene);
    }
    if let Some(block) = &layout.holiday_legend {
        legend::draw_holidays(block, &ctx.holidays, ctx.country_label, config, &mut scene);
    }

    Ok(Composition { layout, scene })
}
