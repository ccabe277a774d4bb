//! Wires configuration, persisted state, navigation and the API client
//! into the set of pages the client exposes.

use std::sync::Arc;

use anyhow::Result;

use crate::api::ApiClient;
use crate::auth::SessionManager;
use crate::core::ClientConfig;
use crate::pages::{ArchitectPage, LearningPathPage, LoginPage, RagPage, TemplatesPage};
use crate::router::{Navigator, Route};
use crate::storage::{FileStore, KeyValueStore};
use crate::store::LearningProgress;

#[derive(Clone)]
pub struct App {
    pub config: ClientConfig,
    pub session: SessionManager,
    pub navigator: Navigator,
    pub client: ApiClient,
}

impl App {
    /// Open the file-backed store under `config.store_path` and restore
    /// the session from it.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let store = FileStore::new(&config.store_path)?;
        tracing::debug!("Persisting client state in {}", store.base_dir().display());
        Self::with_store(config, Arc::new(store))
    }

    pub fn with_store(config: ClientConfig, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let session = SessionManager::load(store);
        let navigator = Navigator::new(Route::Home.path());
        let client = ApiClient::new(&config, session.clone(), navigator.clone())?;
        tracing::debug!(
            "Client ready for {} (signed in: {})",
            client.base_url(),
            session.is_authenticated()
        );

        Ok(Self {
            config,
            session,
            navigator,
            client,
        })
    }

    /// Navigate to `path` through the guard and return the page that
    /// ends up rendered.
    pub fn visit(&self, path: &str) -> Route {
        self.navigator.visit(path, &self.session)
    }

    pub fn login_page(&self) -> LoginPage {
        LoginPage::new(
            Arc::new(self.client.clone()),
            self.session.clone(),
            self.navigator.clone(),
        )
    }

    pub fn rag_page(&self) -> RagPage {
        RagPage::new(Arc::new(self.client.clone()))
    }

    pub fn architect_page(&self) -> ArchitectPage {
        ArchitectPage::new(Arc::new(self.client.clone()))
    }

    pub fn learning_path_page(&self) -> LearningPathPage {
        let progress = LearningProgress::load(self.session.store());
        LearningPathPage::new(Arc::new(self.client.clone()), progress)
    }

    pub fn templates_page(&self) -> TemplatesPage {
        TemplatesPage::new(Arc::new(self.client.clone()))
    }
}
