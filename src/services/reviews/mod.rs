pub mod create;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::reviews::requests::{CreateReviewRequest, ReviewListParams};
use crate::storage::Storage;

pub struct ReviewService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReviewService {
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

    pub async fn create_review(
        &self,
        request: &HttpRequest,
        tutor_id: i64,
        req: CreateReviewRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_review(self, request, tutor_id, req).await
    }

    pub async fn list_reviews(
        &self,
        request: &HttpRequest,
        tutor_id: i64,
        params: ReviewListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_reviews(self, request, tutor_id, params).await
    }
}
