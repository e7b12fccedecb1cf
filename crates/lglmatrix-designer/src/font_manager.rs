use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use rusttype::Font;
use std::{collections::HashSet, fs, path::Path, sync::OnceLock};

use crate::error::{OutlineError, Result};

fn db() -> &'static Database {
    static DB: OnceLock<Database> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "System font database loaded");
        db
    })
}

pub fn list_font_families() -> Vec<String> {
    let mut set = HashSet::new();
    for face in db().faces() {
        for (name, _) in &face.families {
            set.insert(name.clone());
        }
    }
    let mut out: Vec<_> = set.into_iter().collect();
    out.sort();
    out
}

/// Map a user-facing family name onto a fontdb query family.
pub(crate) fn query_family(family: &str) -> Family<'_> {
    match family.trim() {
        "" | "Sans" | "sans-serif" => Family::SansSerif,
        "Serif" | "serif" => Family::Serif,
        "Monospace" | "monospace" => Family::Monospace,
        other => Family::Name(other),
    }
}

/// Resolve an installed font by family name.
pub fn load_system_font(family: &str) -> Result<Font<'static>> {
    let families = [query_family(family)];
    let query = Query {
        families: &families,
        weight: Weight::NORMAL,
        stretch: Stretch::Normal,
        style: Style::Normal,
    };

    let id = db()
        .query(&query)
        .ok_or_else(|| OutlineError::FontNotFound(family.to_string()))?;
    let face = db()
        .face(id)
        .ok_or_else(|| OutlineError::FontNotFound(family.to_string()))?;

    let (bytes, origin) = match &face.source {
        fontdb::Source::File(path) | fontdb::Source::SharedFile(path, _) => {
            (fs::read(path)?, path.display().to_string())
        }
        fontdb::Source::Binary(bytes) => {
            (bytes.as_ref().as_ref().to_vec(), "<memory>".to_string())
        }
    };

    tracing::debug!(family, source = %origin, "Resolved font");
    Font::try_from_vec_and_index(bytes, face.index).ok_or_else(|| OutlineError::FontLoad {
        path: origin.into(),
        reason: "unsupported or corrupt font data".to_string(),
    })
}

/// Load a font directly from a TrueType/OpenType file.
pub fn load_font_file(path: &Path) -> Result<Font<'static>> {
    let bytes = fs::read(path)?;
    Font::try_from_vec(bytes).ok_or_else(|| OutlineError::FontLoad {
        path: path.to_path_buf(),
        reason: "unsupported or corrupt font data".to_string(),
    })
}
