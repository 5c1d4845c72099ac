pub mod detail;
pub mod list;
pub mod offerings;
pub mod profile;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::tutors::requests::{
    TutorDetailParams, TutorListParams, UpdateOfferingsRequest, UpdateTutorProfileRequest,
};
use crate::storage::Storage;

pub struct TutorService {
    storage: Option<Arc<dyn Storage>>,
}

impl TutorService {
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

    pub async fn list_tutors(
        &self,
        request: &HttpRequest,
        params: TutorListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_tutors(self, request, params).await
    }

    pub async fn get_tutor_detail(
        &self,
        request: &HttpRequest,
        tutor_id: i64,
        params: TutorDetailParams,
    ) -> ActixResult<HttpResponse> {
        detail::get_tutor_detail(self, request, tutor_id, params).await
    }

    pub async fn get_offerings(
        &self,
        request: &HttpRequest,
        tutor_id: i64,
    ) -> ActixResult<HttpResponse> {
        offerings::get_offerings(self, request, tutor_id).await
    }

    pub async fn update_offerings(
        &self,
        request: &HttpRequest,
        tutor_id: i64,
        req: UpdateOfferingsRequest,
    ) -> ActixResult<HttpResponse> {
        offerings::update_offerings(self, request, tutor_id, req).await
    }

    pub async fn update_profile(
        &self,
        request: &HttpRequest,
        tutor_id: i64,
        req: UpdateTutorProfileRequest,
    ) -> ActixResult<HttpResponse> {
        profile::update_profile(self, request, tutor_id, req).await
    }
}
