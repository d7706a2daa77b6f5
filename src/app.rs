// src/app.rs
use crate::core::prelude::*;
use crate::dom::{
    apply_translations, set_root_language, snapshot_originals, update_controls, ApplyStats,
    Document, Markers,
};
use crate::i18n::{DictionarySource, Loader};
use crate::state::{LanguageState, Location, SessionStorage};
use std::cell::RefCell;

/// How a switch is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetLangOptions {
    /// Write the language to session storage.
    pub remember: bool,
    /// Rewrite the `?lang=` parameter without navigating.
    pub update_url: bool,
}

crate::impl_default!(
    SetLangOptions,
    SetLangOptions {
        remember: true,
        update_url: true,
    }
);

impl SetLangOptions {
    /// Used on page load: remember, but leave the address alone.
    pub fn initial() -> Self {
        Self {
            remember: true,
            update_url: false,
        }
    }
}

/// User interactions the translator reacts to.
#[derive(Debug, Clone)]
pub enum UiEvent<N> {
    Click { target: N },
    SelectChanged,
}

/// Called with the freshly applied dictionary after every render.
pub type RenderHook = Box<dyn Fn(&Dictionary)>;

/// Ties language state, dictionary loading and the document together.
pub struct I18n<D, F, S, L> {
    document: D,
    loader: Loader<F>,
    state: LanguageState<S, L>,
    markers: Markers,
    dictionary: RefCell<Dictionary>,
    hook: Option<RenderHook>,
}

impl<D, F, S, L> I18n<D, F, S, L>
where
    D: Document,
    F: DictionarySource,
    S: SessionStorage,
    L: Location,
{
    pub fn new(config: &Config, document: D, source: F, storage: S, location: L) -> Self {
        Self {
            document,
            loader: Loader::new(source, config.dictionaries.dir.clone()),
            state: LanguageState::new(config.language.clone(), storage, location),
            markers: config.markers.clone(),
            dictionary: RefCell::new(Dictionary::new()),
            hook: None,
        }
    }

    pub fn with_hook(mut self, hook: impl Fn(&Dictionary) + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn state(&self) -> &LanguageState<S, L> {
        &self.state
    }

    pub fn loader(&self) -> &Loader<F> {
        &self.loader
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    pub fn current_language(&self) -> String {
        self.state.current()
    }

    /// The dictionary applied by the last render.
    pub fn dictionary(&self) -> Dictionary {
        self.dictionary.borrow().clone()
    }

    /// Looks up a string outside the marker-driven flow.
    pub fn get(&self, key: &str) -> Option<String> {
        self.dictionary.borrow().get_str(key).map(str::to_string)
    }

    /// Text an element showed before any translation ran.
    pub fn original_text(&self, node: &D::Node) -> Option<String> {
        self.document.attribute(node, &self.markers.original)
    }

    /// Snapshots original texts, picks the initial language and renders it.
    pub async fn init(&self) -> String {
        match snapshot_originals(&self.document, &self.markers) {
            Ok(count) => log::debug!("Snapshotted {} original texts", count),
            Err(e) => log::warn!("Could not snapshot original texts: {}", e),
        }

        let document_lang = self.document.attribute(&self.document.root(), "lang");
        let (lang, source) = self.state.pick_initial(document_lang.as_deref());
        log::debug!("Initial language '{}' from {:?}", lang, source);

        self.set_lang(&lang, SetLangOptions::initial()).await
    }

    /// Switches to `requested` and re-renders from scratch.
    ///
    /// Unsupported codes render the default language. A failed load or
    /// apply is logged once and falls back to the default language; this
    /// never fails. Returns the language actually rendered.
    pub async fn set_lang(&self, requested: &str, options: SetLangOptions) -> String {
        let config = self.state.config();
        let lang = config.normalize(requested);

        if options.remember {
            self.state.remember(&lang);
        }
        if options.update_url {
            self.state.reflect_in_url(&lang);
        }

        let outcome = self.switch_to(&lang).await;
        let rendered = match outcome {
            Ok(stats) => {
                log::debug!(
                    "Rendered '{}': {} texts, {} attributes, title={}",
                    lang,
                    stats.texts,
                    stats.attributes,
                    stats.title
                );
                lang
            }
            Err(e) => {
                log::error!("[i18n] load/apply failed: {}", e);
                self.fall_back(options);
                config.default.clone()
            }
        };

        self.state.set_current(&rendered);
        if let Err(e) = update_controls(&self.document, &rendered, &self.markers) {
            log::warn!("Could not update language controls: {}", e);
        }

        rendered
    }

    /// Entry point for inline menu handlers.
    pub async fn set_lang_from_menu(&self, lang: &str) -> String {
        self.set_lang(lang, SetLangOptions::default()).await
    }

    /// Language declared by the switch control at or above `target`.
    pub fn switch_target(&self, target: &D::Node) -> Option<String> {
        let control = self.document.closest(target, &self.markers.switch)?;
        Some(
            self.document
                .attribute(&control, &self.markers.switch)
                .unwrap_or_default(),
        )
    }

    /// Returns true when the event triggered a switch, i.e. its default
    /// action should be suppressed.
    pub async fn handle_event(&self, event: UiEvent<D::Node>) -> bool {
        match event {
            UiEvent::Click { target } => match self.switch_target(&target) {
                Some(lang) => {
                    self.set_lang(&lang, SetLangOptions::default()).await;
                    true
                }
                None => false,
            },
            UiEvent::SelectChanged => {
                let Some(select) = self.document.query_first(&self.markers.select) else {
                    return false;
                };
                let lang = self.document.value(&select).unwrap_or_default();
                self.set_lang(&lang, SetLangOptions::default()).await;
                true
            }
        }
    }

    async fn switch_to(&self, lang: &str) -> Result<ApplyStats> {
        let config = self.state.config();
        set_root_language(&self.document, lang, config.direction(lang))?;

        // The markup already carries default-language text.
        let dict = if config.is_default(lang) && !config.fetch_default {
            Dictionary::new()
        } else {
            self.loader
                .load(lang, &self.state.pathname())
                .await
                .into_result()?
        };

        self.render(dict)
    }

    fn render(&self, dict: Dictionary) -> Result<ApplyStats> {
        let stats = apply_translations(&self.document, &dict, &self.markers)?;
        *self.dictionary.borrow_mut() = dict;

        if let Some(hook) = &self.hook {
            hook(&*self.dictionary.borrow());
        }
        Ok(stats)
    }

    // Already-translated text stays as it is: the empty dictionary cannot
    // override it and the snapshot is not replayed. The URL is always reset,
    // otherwise a `?lang=` that failed would be retried on every reload.
    fn fall_back(&self, options: SetLangOptions) {
        let config = self.state.config();
        let default = config.default.clone();

        if let Err(e) = self.render(Dictionary::new()) {
            log::warn!("Fallback render failed: {}", e);
        }
        if let Err(e) = set_root_language(&self.document, &default, config.direction(&default)) {
            log::warn!("Could not reset document language: {}", e);
        }
        if options.remember {
            self.state.remember(&default);
        }
        self.state.reflect_in_url(&default);
    }
}
