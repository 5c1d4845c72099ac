use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 分页查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationQuery {
    #[serde(
        default = "default_page",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub page: i64,
    #[serde(
        default = "default_size",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub size: i64,
}

// 分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

// 分页列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginatedResponse<T: TS> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}

// 自定义反序列化函数，支持字符串到i64的转换
fn deserialize_string_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Error, Unexpected, Visitor};
    use std::fmt;

    struct I64Visitor;

    impl<'de> Visitor<'de> for I64Visitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a string containing an integer")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            if value <= i64::MAX as u64 {
                Ok(value as i64)
            } else {
                Err(Error::invalid_value(Unexpected::Unsigned(value), &self))
            }
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            value
                .parse()
                .map_err(|_| Error::invalid_value(Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(I64Visitor)
}

/// 内存分页
///
/// 过滤引擎在内存中收窄集合后切页；分页信息按过滤后的总量计算。
pub fn paginate_vec<T>(items: Vec<T>, page: i64, size: i64) -> (Vec<T>, PaginationInfo) {
    let page = page.max(1);
    let size = size.clamp(1, 100);
    let total = items.len() as i64;
    let total_pages = if total == 0 { 0 } else { (total as u64).div_ceil(size as u64) as i64 };

    let start = ((page - 1) * size) as usize;
    let paged: Vec<T> = items.into_iter().skip(start).take(size as usize).collect();

    (
        paged,
        PaginationInfo {
            page,
            page_size: size,
            total,
            total_pages,
        },
    )
}

fn default_page() -> i64 {
    1
}

fn default_size() -> i64 {
    10
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self { page: 1, size: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_vec_slices_and_counts() {
        let items: Vec<i32> = (1..=25).collect();
        let (page, info) = paginate_vec(items, 2, 10);
        assert_eq!(page, (11..=20).collect::<Vec<i32>>());
        assert_eq!(info.total, 25);
        assert_eq!(info.total_pages, 3);
    }

    #[test]
    fn test_paginate_vec_out_of_range_page_is_empty() {
        let items: Vec<i32> = (1..=5).collect();
        let (page, info) = paginate_vec(items, 3, 10);
        assert!(page.is_empty());
        assert_eq!(info.total, 5);
        assert_eq!(info.total_pages, 1);
    }

    #[test]
    fn test_paginate_vec_empty_collection() {
        let (page, info) = paginate_vec(Vec::<i32>::new(), 1, 10);
        assert!(page.is_empty());
        assert_eq!(info.total, 0);
        assert_eq!(info.total_pages, 0);
    }
}
