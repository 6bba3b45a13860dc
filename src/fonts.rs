//! Font database shared by every render in the process
//!
//! The database is loaded once, lazily, from the system font directories plus
//! any configured extra directories. It is read-only after loading; renders
//! only take an `Arc` to it. A database without any faces is valid: shapes
//! still render and text is skipped.

use crate::config::FontConfig;
use resvg::usvg::fontdb::Database;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

static FONT_DB: OnceLock<Arc<Database>> = OnceLock::new();

/// Outcome of [`prepare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStatus {
    /// The shared database is loaded with this many faces.
    Ready { faces: usize },
    /// Loading failed or did not finish in time. The load keeps running and
    /// [`database`] waits for it.
    Fallback,
}

/// The shared font database, loading it on first use.
///
/// The first caller's `config` decides what gets loaded; later calls reuse it.
pub fn database(config: &FontConfig) -> Arc<Database> {
    FONT_DB.get_or_init(|| Arc::new(load_database(config))).clone()
}

/// Whether the shared database has been loaded.
pub fn ready() -> bool {
    FONT_DB.get().is_some()
}

/// A database with no faces. Text is omitted when rendering with it.
pub fn empty_database() -> Arc<Database> {
    Arc::new(Database::new())
}

/// Build a fresh database for `config` without touching the shared one.
pub fn load_database(config: &FontConfig) -> Database {
    let mut db = Database::new();
    if !config.skip_system_fonts {
        db.load_system_fonts();
    }
    for dir in &config.extra_dirs {
        if dir.is_dir() {
            db.load_fonts_dir(dir);
        }
    }
    log::debug!("Loaded {} font faces", db.len());

    match preferred_family(&db, config) {
        Some(family) => db.set_sans_serif_family(family),
        None => match first_family(&db) {
            Some(family) => {
                log::warn!(
                    "None of the configured fonts ({}) is installed; falling back to {}",
                    config.families.join(", "),
                    family
                );
                db.set_sans_serif_family(family);
            }
            None => log::warn!("No fonts available; text will be omitted"),
        },
    }
    db
}

/// First configured family that has at least one face in `db`.
pub fn preferred_family(db: &Database, config: &FontConfig) -> Option<String> {
    config
        .families
        .iter()
        .find(|wanted| {
            db.faces()
                .any(|face| face.families.iter().any(|(name, _)| name.eq_ignore_ascii_case(wanted)))
        })
        .cloned()
}

fn first_family(db: &Database) -> Option<String> {
    db.faces()
        .next()
        .and_then(|face| face.families.first().map(|(name, _)| name.clone()))
}

/// Load the shared database on the blocking pool, waiting at most `timeout`.
///
/// Never fails: on timeout the load keeps running in the background and
/// [`FontStatus::Fallback`] is returned. A later [`database`] call blocks
/// until that load completes, so it belongs on the blocking pool.
pub async fn prepare(config: &FontConfig, timeout: Duration) -> FontStatus {
    if let Some(db) = FONT_DB.get() {
        return FontStatus::Ready { faces: db.len() };
    }

    let config = config.clone();
    let task = tokio::task::spawn_blocking(move || database(&config).len());
    match tokio::time::timeout(timeout, task).await {
        Ok(Ok(faces)) => FontStatus::Ready { faces },
        Ok(Err(e)) => {
            log::warn!("Font preparation failed: {}", e);
            FontStatus::Fallback
        }
        Err(_) => {
            log::warn!(
                "Font preparation did not finish within {}ms; continuing off the executor",
                timeout.as_millis()
            );
            FontStatus::Fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hermetic() -> FontConfig {
        FontConfig {
            extra_dirs: vec!["does/not/exist".into()],
            skip_system_fonts: true,
            ..Default::default()
        }
    }

    #[test]
    fn missing_directories_yield_an_empty_database() {
        let db = load_database(&hermetic());
        assert_eq!(db.len(), 0);
        assert_eq!(preferred_family(&db, &hermetic()), None);
    }

    #[test]
    fn empty_database_has_no_faces() {
        assert_eq!(empty_database().len(), 0);
    }

    #[tokio::test]
    async fn prepare_is_idempotent() {
        let first = prepare(&hermetic(), Duration::from_secs(30)).await;
        let second = prepare(&hermetic(), Duration::from_secs(30)).await;
        assert!(ready() || first == FontStatus::Fallback);
        if let (FontStatus::Ready { faces: a }, FontStatus::Ready { faces: b }) = (first, second) {
            assert_eq!(a, b);
        }
    }
}
