pub mod create;
pub mod list;
pub mod respond;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::hires::entities::HireStatus;
use crate::models::hires::requests::{CreateHireRequest, HireListParams};
use crate::storage::Storage;

pub struct HireService {
    storage: Option<Arc<dyn Storage>>,
}

impl HireService {
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

    pub async fn create_hire_request(
        &self,
        request: &HttpRequest,
        req: CreateHireRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_hire_request(self, request, req).await
    }

    pub async fn list_hire_requests(
        &self,
        request: &HttpRequest,
        params: HireListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_hire_requests(self, request, params).await
    }

    pub async fn respond_hire_request(
        &self,
        request: &HttpRequest,
        hire_id: i64,
        decision: HireStatus,
    ) -> ActixResult<HttpResponse> {
        respond::respond_hire_request(self, request, hire_id, decision).await
    }
}
