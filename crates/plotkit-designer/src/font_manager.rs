use fontdb::{Database, FaceInfo, Family, Query, Stretch, Style, Weight};
use rusttype::Font;
use std::{
    collections::HashMap,
    fs,
    sync::{Mutex, OnceLock},
};

/// Family used for element labels; falls back to any sans-serif face.
pub const LABEL_FONT_FAMILY: &str = "Arial";

fn db() -> &'static Database {
    static DB: OnceLock<Database> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = Database::new();
        db.load_system_fonts();
        db
    })
}

/// Font for `family`, loaded from the system once and cached.
///
/// Returns `None` when no matching or sans-serif face is installed.
pub fn get_font_for(family: &str) -> Option<&'static Font<'static>> {
    static CACHE: OnceLock<Mutex<HashMap<String, Option<&'static Font<'static>>>>> =
        OnceLock::new();
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));

    if let Some(font) = cache.lock().unwrap_or_else(|p| p.into_inner()).get(family) {
        return *font;
    }

    let loaded = load_font_from_system(family);
    let font_ref: Option<&'static Font<'static>> =
        loaded.map(|font| &*Box::leak(Box::new(font)));
    if font_ref.is_none() {
        tracing::debug!("No system font for '{}', labels will be skipped", family);
    }

    cache
        .lock()
        .unwrap_or_else(|p| p.into_inner())
        .insert(family.to_string(), font_ref);
    font_ref
}

/// Font used for element labels.
pub fn label_font() -> Option<&'static Font<'static>> {
    get_font_for(LABEL_FONT_FAMILY)
}

fn load_font_from_system(family: &str) -> Option<Font<'static>> {
    let families: Vec<Family<'_>> = match family.trim() {
        "" | "Sans" => vec![Family::SansSerif],
        other => vec![Family::Name(other), Family::SansSerif],
    };

    let query = Query {
        families: &families,
        weight: Weight::NORMAL,
        stretch: Stretch::Normal,
        style: Style::Normal,
    };

    let id = db().query(&query)?;
    load_face(db().face(id)?)
}

fn load_face(face: &FaceInfo) -> Option<Font<'static>> {
    // Collections (.ttc) hold several faces; `face.index` picks ours.
    let bytes = match &face.source {
        fontdb::Source::File(path) | fontdb::Source::SharedFile(path, _) => fs::read(path).ok()?,
        fontdb::Source::Binary(bytes) => bytes.as_ref().as_ref().to_vec(),
    };
    Font::try_from_vec_and_index(bytes, face.index)
}
