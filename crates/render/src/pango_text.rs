//! Pango-based label measurement and drawing
//!
//! Cairo's toy font API keeps internal font caches that grow without bound,
//! so labels are measured and drawn through Pango instead. Font
//! descriptions are cached per thread, keyed by family and size.

use std::cell::RefCell;
use std::collections::HashMap;

use cairo::Context;
use pango::FontDescription;
use pangocairo::functions::{create_layout, show_layout};

use crate::label::TextExtents;

/// Font family used for progress labels
pub const LABEL_FONT_FAMILY: &str = "Sans";

#[derive(Hash, Eq, PartialEq, Clone, Debug)]
struct FontKey {
    family: String,
    size_pango: i32, // Size in Pango units (points * PANGO_SCALE)
}

struct FontDescriptionCache {
    cache: HashMap<FontKey, FontDescription>,
    max_entries: usize,
}

impl FontDescriptionCache {
    fn new() -> Self {
        Self {
            cache: HashMap::new(),
            max_entries: 32,
        }
    }

    fn get_or_create(&mut self, family: &str, size: f64) -> FontDescription {
        let key = FontKey {
            family: family.to_string(),
            size_pango: (size * pango::SCALE as f64) as i32,
        };

        if let Some(desc) = self.cache.get(&key) {
            return desc.clone();
        }

        // Labels rarely change size, so a full reset is enough
        if self.cache.len() >= self.max_entries {
            self.cache.clear();
            log::debug!("Font description cache reset");
        }

        let mut desc = FontDescription::new();
        desc.set_family(family);
        desc.set_absolute_size(key.size_pango as f64);

        self.cache.insert(key, desc.clone());
        desc
    }
}

thread_local! {
    static FONT_DESC_CACHE: RefCell<FontDescriptionCache> = RefCell::new(FontDescriptionCache::new());
}

fn layout_for(cr: &Context, text: &str, family: &str, size: f64) -> pango::Layout {
    let font_desc = FONT_DESC_CACHE.with(|cache| cache.borrow_mut().get_or_create(family, size));
    let layout = create_layout(cr);
    layout.set_font_description(Some(&font_desc));
    layout.set_text(text);
    layout
}

/// Ink extents of `text`, with Cairo-compatible bearings
///
/// `y_bearing` is the distance from the baseline to the ink top (negative
/// for ascending text) and `x_bearing` the distance from the origin to the
/// ink's left edge.
pub fn pango_text_extents(cr: &Context, text: &str, family: &str, size: f64) -> TextExtents {
    let layout = layout_for(cr, text, family, size);

    let (ink_rect, _logical_rect) = layout.extents();
    let baseline = layout.baseline();
    let scale = pango::SCALE as f64;

    TextExtents {
        width: ink_rect.width() as f64 / scale,
        height: ink_rect.height() as f64 / scale,
        x_bearing: ink_rect.x() as f64 / scale,
        y_bearing: (ink_rect.y() - baseline) as f64 / scale,
    }
}

/// Draw `text` with its baseline origin at (`x`, `y`)
pub fn pango_show_text_at(cr: &Context, x: f64, y: f64, text: &str, family: &str, size: f64) {
    let layout = layout_for(cr, text, family, size);

    // Pango draws from the top-left of the logical rect, Cairo from the baseline
    let baseline = layout.baseline() as f64 / pango::SCALE as f64;
    cr.move_to(x, y - baseline);
    show_layout(cr, &layout);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_key_hash() {
        let key1 = FontKey {
            family: "Sans".to_string(),
            size_pango: 11 * pango::SCALE,
        };
        let key2 = FontKey {
            family: "Sans".to_string(),
            size_pango: 11 * pango::SCALE,
        };
        assert_eq!(key1, key2);
    }

    #[test]
    fn test_cache_reuses_descriptions() {
        let mut cache = FontDescriptionCache::new();
        let a = cache.get_or_create(LABEL_FONT_FAMILY, 11.0);
        let b = cache.get_or_create(LABEL_FONT_FAMILY, 11.0);
        assert_eq!(a.to_str(), b.to_str());
        assert_eq!(cache.cache.len(), 1);

        cache.get_or_create(LABEL_FONT_FAMILY, 14.0);
        assert_eq!(cache.cache.len(), 2);
    }
}
