use std::{collections::HashMap, fs, path::Path, sync::Arc};

use sceneport_model::{ImportError, ImportSettings, Scene};
use sceneport_source::DocumentLoader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImporterDesc {
    pub name: &'static str,
    pub comments: &'static str,
    pub supports_binary: bool,
    pub file_extensions: &'static [&'static str],
}

pub const IMPORTER_DESC: ImporterDesc = ImporterDesc {
    name: "Cinema4D Importer",
    comments: "objects, hierarchy and polygon geometry only",
    supports_binary: true,
    file_extensions: &["c4d"],
};

/// Imports scene documents through a [`DocumentLoader`] and caches the
/// resulting scenes by path.
pub struct SceneImporter<L: DocumentLoader> {
    loader: L,
    settings: ImportSettings,
    scenes: HashMap<String, Arc<Scene>>,
}

impl<L: DocumentLoader> SceneImporter<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            settings: ImportSettings::default(),
            scenes: HashMap::new(),
        }
    }

    pub fn info(&self) -> &'static ImporterDesc {
        &IMPORTER_DESC
    }

    /// Whether `path` carries one of the supported extensions. Case-insensitive.
    pub fn can_read(&self, path: &str) -> bool {
        Path::new(path)
            .extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| {
                IMPORTER_DESC
                    .file_extensions
                    .iter()
                    .any(|supported| supported.eq_ignore_ascii_case(extension))
            })
    }

    /// Replaces the import settings. Cached scenes were built with the old
    /// settings and are dropped.
    pub fn setup_properties(&mut self, settings: ImportSettings) {
        if settings != self.settings {
            self.scenes.clear();
        }
        self.settings = settings;
    }

    pub fn settings(&self) -> &ImportSettings {
        &self.settings
    }

    pub fn read_file(&mut self, path: &str) -> Result<Arc<Scene>, ImportError> {
        if let Some(scene) = self.scenes.get(path) {
            Ok(scene.clone())
        } else {
            let data = fs::read(path).map_err(|source| ImportError::DocumentUnavailable {
                path: path.to_owned(),
                source,
            })?;

            let scene = Arc::new(self.import_bytes(path, &data)?);

            self.scenes.insert(path.to_owned(), scene.clone());
            Ok(scene)
        }
    }

    pub fn read_bytes(&mut self, path: &str, data: &[u8]) -> Result<Arc<Scene>, ImportError> {
        if let Some(scene) = self.scenes.get(path) {
            Ok(scene.clone())
        } else {
            let scene = Arc::new(self.import_bytes(path, data)?);

            self.scenes.insert(path.to_owned(), scene.clone());
            Ok(scene)
        }
    }

    /// Decodes and imports `data` without touching the cache.
    pub fn import_bytes(&self, path: &str, data: &[u8]) -> Result<Scene, ImportError> {
        let document = {
            sceneport_profiling::profile_scope!("decode document", path);
            self.loader.load_document(data).map_err(|err| {
                ImportError::DocumentDecodeFailed {
                    path: path.to_owned(),
                    reason: format!("{err:#}"),
                }
            })?
        };

        log::info!("C4D: importing {path} ({} bytes)", data.len());
        self.import_document(&document)
    }

    /// Imports an already decoded document with the active settings, without
    /// touching the cache. Closes one profiling frame per call.
    pub fn import_document(&self, document: &L::Document) -> Result<Scene, ImportError> {
        let scene = self.import_document_profiled(document);
        sceneport_profiling::finish_import();
        scene
    }

    fn import_document_profiled(&self, document: &L::Document) -> Result<Scene, ImportError> {
        sceneport_profiling::profile_function!();

        sceneport_model::import_document(document, &self.settings)
    }

    pub fn evict(&mut self, path: &str) -> Option<Arc<Scene>> {
        self.scenes.remove(path)
    }
}
