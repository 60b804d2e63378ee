use sceneport_asset_database::SceneImporter;
use sceneport_model::ImportSettings;
use sceneport_source::DocumentLoader;

pub struct Sceneport {
    settings: ImportSettings,
}

static SCENEPORT_STATIC: std::sync::OnceLock<SceneportStatic> = std::sync::OnceLock::new();

struct SceneportStatic {}

impl SceneportStatic {
    fn init(app_name: &str) -> &'static Self {
        SCENEPORT_STATIC.get_or_init(|| {
            env_logger::builder()
                .filter_level(log::LevelFilter::Info)
                .parse_default_env()
                .init();

            log::info!("C4D: scene import initialized for {app_name}");
            Self {}
        })
    }
}

impl Sceneport {
    /// Sets up logging once per process. Later calls reuse the first setup.
    pub fn new(app_name: &str) -> Self {
        SceneportStatic::init(app_name);

        Self {
            settings: ImportSettings::default(),
        }
    }

    /// Turns puffin recording of import scopes on or off for the process.
    /// Every finished import then closes one profiling frame.
    pub fn with_profiling(self, enabled: bool) -> Self {
        sceneport_profiling::set_enabled(enabled);
        self
    }

    pub fn with_settings(mut self, settings: ImportSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Creates an importer that decodes documents with `loader`.
    pub fn importer<L: DocumentLoader>(&self, loader: L) -> SceneImporter<L> {
        let mut importer = SceneImporter::new(loader);
        importer.setup_properties(self.settings.clone());
        importer
    }
}
