// src/dom/apply.rs
use super::document::Document;
use super::{DomResult, Markers};
use crate::i18n::Dictionary;

/// What a render pass actually changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyStats {
    pub texts: usize,
    pub attributes: usize,
    pub title: bool,
}

/// Writes every resolvable translation into the document.
///
/// Elements whose key does not resolve to a string keep whatever they show
/// right now, which on first load is the hard-coded default text.
pub fn apply_translations<D: Document>(
    doc: &D,
    dict: &Dictionary,
    markers: &Markers,
) -> DomResult<ApplyStats> {
    let mut stats = ApplyStats::default();

    for node in doc.query_all(&markers.text) {
        let Some(key) = doc.attribute(&node, &markers.text) else {
            continue;
        };
        if let Some(value) = dict.get_str(&key) {
            doc.set_text(&node, value)?;
            stats.texts += 1;
        }
    }

    for node in doc.query_all(&markers.attr_list) {
        let Some(list) = doc.attribute(&node, &markers.attr_list) else {
            continue;
        };

        for attr in list.split('|').map(str::trim).filter(|a| !a.is_empty()) {
            let key = match doc.attribute(&node, &markers.attr_key(attr)) {
                Some(key) if !key.is_empty() => key,
                _ => continue,
            };
            if let Some(value) = dict.get_str(&key) {
                doc.set_attribute(&node, attr, value)?;
                stats.attributes += 1;
            }
        }
    }

    if let Some(title) = dict.get_str(&markers.title_key) {
        doc.set_title(title)?;
        stats.title = true;
    }

    Ok(stats)
}

/// `lang` and `dir` on the root element.
pub fn set_root_language<D: Document>(doc: &D, lang: &str, direction: &str) -> DomResult<()> {
    let root = doc.root();
    doc.set_attribute(&root, "lang", lang)?;
    doc.set_attribute(&root, "dir", direction)
}

/// Marks switch controls for `lang` active and every other one inactive, and
/// syncs the optional select control.
pub fn update_controls<D: Document>(doc: &D, lang: &str, markers: &Markers) -> DomResult<()> {
    for node in doc.query_all(&markers.switch) {
        let active = doc.attribute(&node, &markers.switch).as_deref() == Some(lang);
        doc.toggle_attribute(&node, &markers.active, active)?;
    }

    if let Some(select) = doc.query_first(&markers.select) {
        if doc.value(&select).as_deref() != Some(lang) {
            doc.set_value(&select, lang)?;
        }
    }

    Ok(())
}

/// Copies each translatable element's current text into the `original`
/// marker, once. Returns how many snapshots were taken.
pub fn snapshot_originals<D: Document>(doc: &D, markers: &Markers) -> DomResult<usize> {
    let mut taken = 0;
    for node in doc.query_all(&markers.text) {
        if doc.attribute(&node, &markers.original).is_none() {
            let text = doc.text(&node);
            doc.set_attribute(&node, &markers.original, &text)?;
            taken += 1;
        }
    }
    Ok(taken)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDocument;
    use serde_json::json;

    fn dict(value: serde_json::Value) -> Dictionary {
        Dictionary::from_value(value).unwrap()
    }

    #[test]
    fn text_is_replaced_only_on_string_match() {
        let doc = MemoryDocument::new();
        let home = doc.add(doc.root(), "a", &[("data-i18n", "nav.home")], "Home");
        let missing = doc.add(doc.root(), "a", &[("data-i18n", "nav.nowhere")], "Keep me");
        let number = doc.add(doc.root(), "a", &[("data-i18n", "nav.count")], "3");

        let stats = apply_translations(
            &doc,
            &dict(json!({"nav": {"home": "Accueil", "count": 4}})),
            &Markers::default(),
        )
        .unwrap();

        assert_eq!(doc.text(&home), "Accueil");
        assert_eq!(doc.text(&missing), "Keep me");
        assert_eq!(doc.text(&number), "3");
        assert_eq!(stats.texts, 1);
    }

    #[test]
    fn attributes_resolve_independently() {
        let doc = MemoryDocument::new();
        let input = doc.add(
            doc.root(),
            "input",
            &[
                ("data-i18n-attr", "placeholder | title|aria-label|"),
                ("data-i18n-placeholder", "form.email"),
                ("data-i18n-title", "form.missing"),
                ("data-i18n-aria-label", ""),
                ("title", "Original title"),
            ],
            "",
        );

        let stats = apply_translations(
            &doc,
            &dict(json!({"form": {"email": "Courriel"}})),
            &Markers::default(),
        )
        .unwrap();

        assert_eq!(doc.attribute(&input, "placeholder"), Some("Courriel".into()));
        assert_eq!(doc.attribute(&input, "title"), Some("Original title".into()));
        assert_eq!(doc.attribute(&input, "aria-label"), None);
        assert_eq!(stats.attributes, 1);
    }

    #[test]
    fn title_follows_meta_title() {
        let doc = MemoryDocument::new();
        doc.set_title("Home").unwrap();

        apply_translations(&doc, &Dictionary::new(), &Markers::default()).unwrap();
        assert_eq!(doc.title(), "Home");

        let stats = apply_translations(
            &doc,
            &dict(json!({"meta": {"title": "Accueil"}})),
            &Markers::default(),
        )
        .unwrap();
        assert_eq!(doc.title(), "Accueil");
        assert!(stats.title);
    }

    #[test]
    fn controls_track_active_language() {
        let doc = MemoryDocument::new();
        let en = doc.add(doc.root(), "a", &[("data-lang", "en"), ("data-active", "")], "EN");
        let fr = doc.add(doc.root(), "a", &[("data-lang", "fr")], "FR");
        let fr_mobile = doc.add(doc.root(), "button", &[("data-lang", "fr")], "FR");
        let select = doc.add(doc.root(), "select", &[("data-lang-select", "")], "");

        update_controls(&doc, "fr", &Markers::default()).unwrap();

        assert!(!doc.has_attribute(en, "data-active"));
        assert!(doc.has_attribute(fr, "data-active"));
        assert!(doc.has_attribute(fr_mobile, "data-active"));
        assert_eq!(doc.value(&select), Some("fr".into()));
    }

    #[test]
    fn root_language_and_direction() {
        let doc = MemoryDocument::new();
        set_root_language(&doc, "ar", "rtl").unwrap();
        assert_eq!(doc.attribute(&doc.root(), "lang"), Some("ar".into()));
        assert_eq!(doc.attribute(&doc.root(), "dir"), Some("rtl".into()));
    }

    #[test]
    fn snapshot_runs_once_per_element() {
        let doc = MemoryDocument::new();
        let p = doc.add(doc.root(), "p", &[("data-i18n", "intro")], "Hello");

        assert_eq!(snapshot_originals(&doc, &Markers::default()).unwrap(), 1);
        doc.set_text(&p, "Bonjour").unwrap();
        assert_eq!(snapshot_originals(&doc, &Markers::default()).unwrap(), 0);
        assert_eq!(doc.attribute(&p, "data-i18n-original"), Some("Hello".into()));
    }

    #[test]
    fn write_failures_surface() {
        let doc = MemoryDocument::new();
        doc.add(doc.root(), "p", &[("data-i18n", "intro")], "Hello");
        doc.set_read_only(true);

        let result = apply_translations(&doc, &dict(json!({"intro": "Salut"})), &Markers::default());
        assert!(result.is_err());
    }
}
