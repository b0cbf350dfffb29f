use std::sync::Arc;

use crate::application::ports::area_repository::AreaRepository;
use crate::application::ports::connection_repository::ConnectionRepository;
use crate::application::ports::document_repository::DocumentRepository;
use crate::application::ports::lookup_repository::LookupRepository;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    document_repo: Arc<dyn DocumentRepository>,
    connection_repo: Arc<dyn ConnectionRepository>,
    area_repo: Arc<dyn AreaRepository>,
    lookup_repo: Arc<dyn LookupRepository>,
}

impl AppServices {
    pub fn new(
        document_repo: Arc<dyn DocumentRepository>,
        connection_repo: Arc<dyn ConnectionRepository>,
        area_repo: Arc<dyn AreaRepository>,
        lookup_repo: Arc<dyn LookupRepository>,
    ) -> Self {
        Self {
            document_repo,
            connection_repo,
            area_repo,
            lookup_repo,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn document_repo(&self) -> Arc<dyn DocumentRepository> {
        self.services.document_repo.clone()
    }

    pub fn connection_repo(&self) -> Arc<dyn ConnectionRepository> {
        self.services.connection_repo.clone()
    }

    pub fn area_repo(&self) -> Arc<dyn AreaRepository> {
        self.services.area_repo.clone()
    }

    pub fn lookup_repo(&self) -> Arc<dyn LookupRepository> {
        self.services.lookup_repo.clone()
    }
}
