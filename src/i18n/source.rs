// src/i18n/source.rs
use super::error::FetchError;
use super::types::Dictionary;
use std::cell::RefCell;
use std::collections::HashMap;

/// Where dictionary documents come from. `path` is site-absolute
/// (`/lang/fr.json`).
#[async_trait::async_trait(?Send)]
pub trait DictionarySource {
    async fn fetch(&self, path: &str) -> Result<Dictionary, FetchError>;
}

fn parse(path: &str, body: &str) -> Result<Dictionary, FetchError> {
    Dictionary::from_json_str(body).map_err(|e| FetchError::Parse {
        path: path.to_string(),
        message: e.to_string(),
    })
}

// =====================================================
// HTTP
// =====================================================

/// Fetches documents relative to a site origin, bypassing HTTP caches.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base: url::Url,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let base = url::Url::parse(base_url).map_err(|e| FetchError::Network {
            path: base_url.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::with_client(reqwest::Client::new(), base))
    }

    pub fn with_client(client: reqwest::Client, base: url::Url) -> Self {
        Self { client, base }
    }

    pub fn base(&self) -> &url::Url {
        &self.base
    }
}

#[async_trait::async_trait(?Send)]
impl DictionarySource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<Dictionary, FetchError> {
        let network = |message: String| FetchError::Network {
            path: path.to_string(),
            message,
        };

        let url = self.base.join(path).map_err(|e| network(e.to_string()))?;

        let response = self
            .client
            .get(url)
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|e| network(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| network(e.to_string()))?;
        parse(path, &body)
    }
}

// =====================================================
// FILESYSTEM (native)
// =====================================================

/// Reads documents from a static-site root on disk.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FsSource {
    root: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FsSource {
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn file_path(&self, path: &str) -> std::path::PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait(?Send)]
impl DictionarySource for FsSource {
    async fn fetch(&self, path: &str) -> Result<Dictionary, FetchError> {
        let file = self.file_path(path);

        let body = match tokio::fs::read_to_string(&file).await {
            Ok(body) => body,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(FetchError::NotFound(path.to_string()))
            }
            Err(e) => {
                return Err(FetchError::Io {
                    path: path.to_string(),
                    message: e.to_string(),
                })
            }
        };

        parse(path, &body)
    }
}

// =====================================================
// IN-MEMORY
// =====================================================

#[derive(Debug, Clone)]
enum MemoryEntry {
    Body(String),
    Failure(FetchError),
}

/// Serves documents from a map. Unknown paths answer 404.
#[derive(Debug, Default)]
pub struct MemorySource {
    entries: HashMap<String, MemoryEntry>,
    requests: RefCell<Vec<String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, path: &str, body: &str) -> Self {
        self.insert(path, body);
        self
    }

    pub fn with_failure(mut self, path: &str, error: FetchError) -> Self {
        self.entries
            .insert(path.to_string(), MemoryEntry::Failure(error));
        self
    }

    pub fn insert(&mut self, path: &str, body: &str) {
        self.entries
            .insert(path.to_string(), MemoryEntry::Body(body.to_string()));
    }

    /// Every path requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl DictionarySource for MemorySource {
    async fn fetch(&self, path: &str) -> Result<Dictionary, FetchError> {
        self.requests.borrow_mut().push(path.to_string());

        match self.entries.get(path) {
            Some(MemoryEntry::Body(body)) => parse(path, body),
            Some(MemoryEntry::Failure(error)) => Err(error.clone()),
            None => Err(FetchError::NotFound(path.to_string())),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl<S: DictionarySource + ?Sized> DictionarySource for std::rc::Rc<S> {
    async fn fetch(&self, path: &str) -> Result<Dictionary, FetchError> {
        (**self).fetch(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_source_serves_and_records() {
        let source = MemorySource::new().with_document("/lang/fr.json", r#"{"a":"b"}"#);

        let dict = source.fetch("/lang/fr.json").await.unwrap();
        assert_eq!(dict.get_str("a"), Some("b"));

        let missing = source.fetch("/lang/de.json").await.unwrap_err();
        assert!(missing.is_missing());

        assert_eq!(source.requests(), vec!["/lang/fr.json", "/lang/de.json"]);
    }

    #[tokio::test]
    async fn memory_source_reports_parse_errors() {
        let source = MemorySource::new().with_document("/lang/fr.json", "{ broken");
        let err = source.fetch("/lang/fr.json").await.unwrap_err();
        assert!(matches!(err, FetchError::Parse { .. }));
        assert_eq!(err.path(), "/lang/fr.json");
    }

    #[tokio::test]
    async fn fs_source_reads_site_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("lang/pages")).unwrap();
        std::fs::write(
            dir.path().join("lang/pages/about.de.json"),
            r#"{"meta":{"title":"Über uns"}}"#,
        )
        .unwrap();

        let source = FsSource::new(dir.path());
        let dict = source.fetch("/lang/pages/about.de.json").await.unwrap();
        assert_eq!(dict.get_str("meta.title"), Some("Über uns"));

        let err = source.fetch("/lang/de.json").await.unwrap_err();
        assert_eq!(err, FetchError::NotFound("/lang/de.json".into()));
    }

    #[test]
    fn http_source_rejects_bad_base() {
        assert!(HttpSource::new("not a url").is_err());
        let source = HttpSource::new("https://example.org/").unwrap();
        assert_eq!(source.base().as_str(), "https://example.org/");
    }
}
