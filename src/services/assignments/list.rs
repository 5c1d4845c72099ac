//! 作业列表
//!
//! 存储层只做归属过滤和取数；展示状态在这里统一派生，
//! 搜索/状态/科目/学段过滤走过滤引擎，最后内存分页。
//! 所有视图（管理端、导师端、学生/家长端）共用同一条派生路径。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::requests::AssignmentListParams;
use crate::models::assignments::responses::{AssignmentListItem, AssignmentListResponse, AssignmentRow};
use crate::models::assignments::status::derive_assignment_status;
use crate::models::common::pagination::paginate_vec;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

// 原始行 -> 带派生状态的列表项
fn build_list_item(row: AssignmentRow, now: chrono::DateTime<chrono::Utc>) -> AssignmentListItem {
    let submissions: Vec<_> = row.submission.iter().cloned().collect();
    let status = derive_assignment_status(&row.assignment, &submissions, now);

    AssignmentListItem {
        assignment: row.assignment,
        tutor: row.tutor,
        student: row.student,
        my_submission: row.submission,
        status,
        status_variant: status.display_variant().to_string(),
    }
}

pub async fn list_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
    mut params: AssignmentListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let user_role = RequireJWT::extract_user_role(request);
    let user_id = RequireJWT::extract_user_id(request);

    // 权限检查：学生/家长只能看自己的作业，导师只能看自己布置的作业
    match user_role {
        Some(UserRole::Admin) => {
            // 管理员可以按任意双方过滤
        }
        Some(UserRole::Tutor) => {
            if let Some(uid) = user_id {
                params.tutor_id = Some(uid);
                params.student_id = None;
            } else {
                return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::Unauthorized,
                    "无法获取用户信息",
                )));
            }
        }
        Some(UserRole::Student) | Some(UserRole::Parent) => {
            if let Some(uid) = user_id {
                params.student_id = Some(uid);
                params.tutor_id = None;
            } else {
                return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::Unauthorized,
                    "无法获取用户信息",
                )));
            }
        }
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    }

    let rows = match storage
        .list_assignment_rows(params.tutor_id, params.student_id)
        .await
    {
        Ok(rows) => rows,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业列表失败: {e}"),
                )),
            );
        }
    };

    let now = chrono::Utc::now();
    let items: Vec<AssignmentListItem> = rows
        .into_iter()
        .map(|row| build_list_item(row, now))
        .collect();

    let filtered = params.filter.apply(items);
    let (items, pagination) =
        paginate_vec(filtered, params.pagination.page, params.pagination.size);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AssignmentListResponse { items, pagination },
        "查询成功",
    )))
}
