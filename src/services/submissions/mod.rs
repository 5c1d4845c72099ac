pub mod create;
pub mod grade;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::submissions::requests::{
    CreateSubmissionRequest, GradeSubmissionRequest, SubmissionListParams,
};
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
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

    pub async fn create_submission(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
        req: CreateSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_submission(self, request, assignment_id, req).await
    }

    pub async fn list_submissions(
        &self,
        request: &HttpRequest,
        params: SubmissionListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_submissions(self, request, params).await
    }

    pub async fn grade_submission(
        &self,
        request: &HttpRequest,
        submission_id: i64,
        req: GradeSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        grade::grade_submission(self, request, submission_id, req).await
    }
}
