//! 参考数据缓存
//!
//! 科目和学段是低频变更的参考数据，全局缓存一份，避免每个请求回表。
//! 使用 RwLock 保护；启动时 init 一次，目录变更时 invalidate，
//! 读取方在未命中时回源存储层重建（read-through）。

use std::sync::OnceLock;
use tokio::sync::RwLock;

use crate::models::catalog::entities::{AcademicLevel, Subject};
use crate::models::catalog::responses::CatalogResponse;

static CATALOG_CACHE: OnceLock<RwLock<CatalogCacheInner>> = OnceLock::new();

#[derive(Debug, Default)]
struct CatalogCacheInner {
    subjects: Vec<Subject>,
    academic_levels: Vec<AcademicLevel>,
    initialized: bool,
}

fn cell() -> &'static RwLock<CatalogCacheInner> {
    CATALOG_CACHE.get_or_init(|| RwLock::new(CatalogCacheInner::default()))
}

/// 参考数据缓存访问接口
pub struct CatalogCache;

impl CatalogCache {
    /// 初始化缓存，应用启动时调用
    pub async fn init(subjects: Vec<Subject>, academic_levels: Vec<AcademicLevel>) {
        let mut guard = cell().write().await;
        guard.subjects = subjects;
        guard.academic_levels = academic_levels;
        guard.initialized = true;

        tracing::info!(
            "参考数据缓存初始化完成: {} 个科目, {} 个学段",
            guard.subjects.len(),
            guard.academic_levels.len()
        );
    }

    /// 读取缓存快照；未初始化时返回 None，调用方回源重建
    pub async fn get() -> Option<CatalogResponse> {
        let guard = cell().read().await;
        if !guard.initialized {
            return None;
        }
        Some(CatalogResponse {
            subjects: guard.subjects.clone(),
            academic_levels: guard.academic_levels.clone(),
        })
    }

    /// 目录变更后失效，下一次读取回源重建
    pub async fn invalidate() {
        let mut guard = cell().write().await;
        guard.subjects.clear();
        guard.academic_levels.clear();
        guard.initialized = false;
        tracing::debug!("参考数据缓存已失效");
    }

    /// 校验科目是否存在（用于请求入参校验）
    pub async fn subject_exists(subject_id: i64) -> Option<bool> {
        let guard = cell().read().await;
        if !guard.initialized {
            return None;
        }
        Some(guard.subjects.iter().any(|s| s.id == subject_id))
    }

    /// 校验学段是否存在
    pub async fn academic_level_exists(level_id: i64) -> Option<bool> {
        let guard = cell().read().await;
        if !guard.initialized {
            return None;
        }
        Some(guard.academic_levels.iter().any(|l| l.id == level_id))
    }
}
