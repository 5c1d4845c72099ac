pub mod catalog_cache;
pub mod create;
pub mod list;

pub use catalog_cache::CatalogCache;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::catalog::requests::{CreateAcademicLevelRequest, CreateSubjectRequest};
use crate::storage::Storage;

pub struct CatalogService {
    storage: Option<Arc<dyn Storage>>,
}

impl CatalogService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn get_catalog(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::get_catalog(self, request).await
    }

    pub async fn create_subject(
        &self,
        request: &HttpRequest,
        req: CreateSubjectRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_subject(self, request, req).await
    }

    pub async fn create_academic_level(
        &self,
        request: &HttpRequest,
        req: CreateAcademicLevelRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_academic_level(self, request, req).await
    }
}
