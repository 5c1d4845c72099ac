use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TutorService;
use crate::models::common::pagination::paginate_vec;
use crate::models::tutors::requests::TutorListParams;
use crate::models::tutors::responses::TutorListResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 导师列表：搜索与分类过滤经过滤引擎完成，再内存分页
pub async fn list_tutors(
    service: &TutorService,
    request: &HttpRequest,
    params: TutorListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let items = match storage.list_tutor_items().await {
        Ok(items) => items,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询导师列表失败: {e}"),
                )),
            );
        }
    };

    let filtered = params.filter.apply(items);
    let (items, pagination) =
        paginate_vec(filtered, params.pagination.page, params.pagination.size);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        TutorListResponse { items, pagination },
        "查询成功",
    )))
}
