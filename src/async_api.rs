use crate::fonts::{self, FontStatus};
use crate::{render_with_fonts, Error, RenderConfig, RenderRequest, RenderedImage, Result};
use std::time::Duration;

/// Render without blocking the async executor.
///
/// Fonts are prepared first, bounded by `config.font_timeout_ms`. A timeout
/// only ends the wait on the executor: the render itself runs on tokio's
/// blocking pool and picks up the shared database there, waiting for the
/// load still in flight, so text is never dropped because fonts were slow.
/// Each call owns its request and surface, so any number may run concurrently.
pub async fn render_async(request: RenderRequest, config: RenderConfig) -> Result<RenderedImage> {
    let status = fonts::prepare(&config.fonts, Duration::from_millis(config.font_timeout_ms)).await;
    if status == FontStatus::Fallback {
        log::debug!("rendering once the font load in progress completes");
    }

    tokio::task::spawn_blocking(move || {
        let db = fonts::database(&config.fonts);
        render_with_fonts(&request, &config, db)
    })
    .await?
}

/// [`render_async`] with an overall deadline.
pub async fn render_with_deadline(
    request: RenderRequest,
    config: RenderConfig,
    deadline: Duration,
) -> Result<RenderedImage> {
    tokio::time::timeout(deadline, render_async(request, config))
        .await
        .map_err(|_| Error::Timeout(deadline.as_millis() as u64))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FontConfig;
    use chrono::NaiveDate;

    fn config() -> RenderConfig {
        RenderConfig {
            fonts: FontConfig {
                extra_dirs: Vec::new(),
                skip_system_fonts: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn async_render_reports_invalid_range() {
        let d = |day| NaiveDate::from_ymd_opt(2025, 6, day).unwrap();
        let err = render_async(RenderRequest::new(d(9), d(2)), config()).await;
        assert!(matches!(err, Err(Error::InvalidRange(_))));
    }

    #[tokio::test]
    async fn zero_deadline_times_out() {
        let d = |day| NaiveDate::from_ymd_opt(2025, 6, day).unwrap();
        let res = render_with_deadline(RenderRequest::new(d(1), d(2)), config(), Duration::ZERO).await;
        // A zero deadline may still win the race if everything is already ready.
        if let Err(e) = res {
            assert!(matches!(e, Error::Timeout(0)));
        }
    }
}
