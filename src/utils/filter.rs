//! 内存列表过滤引擎
//!
//! 列表接口在存储层完成分页和归属过滤，跨实体的文本搜索和分类过滤
//! （状态、科目、学段）统一在这里完成：文本谓词对配置的字段做大小写
//! 不敏感的子串匹配（字段间取或），分类谓词做严格相等，谓词之间取与。
//! 输出保持输入顺序的子序列。
//!
//! 查询参数中的哨兵值 `"all"`（以及空串）表示「不约束该字段」。

use serde::{Deserialize, Deserializer};

/// 分类过滤的哨兵值
pub const FILTER_ALL: &str = "all";

/// 可被过滤的列表项
///
/// 默认实现返回「无此维度」，过滤器对相应谓词按不匹配处理。
/// 分类维度取值为集合：单值行（作业、请求）返回单元素集合，
/// 多值行（导师按开设组合）返回全部取值，约束命中集合中任意一个即可。
pub trait Filterable {
    /// 参与文本搜索的字段（标题、导师/学生显示名等）
    fn search_fields(&self) -> Vec<&str>;

    fn status_key(&self) -> Option<&str> {
        None
    }

    fn subject_ids(&self) -> Vec<i64> {
        Vec::new()
    }

    fn academic_level_ids(&self) -> Vec<i64> {
        Vec::new()
    }
}

/// 列表过滤参数
///
/// 直接作为查询参数反序列化；`"all"` 与空串在反序列化边界折叠为 None，
/// 其余非法取值（如分类字段给了非数字）立即报错而不是静默忽略。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListFilter {
    #[serde(default, deserialize_with = "sentinel_string")]
    pub search: Option<String>,
    #[serde(default, deserialize_with = "sentinel_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "sentinel_i64")]
    pub subject_id: Option<i64>,
    #[serde(default, deserialize_with = "sentinel_i64")]
    pub academic_level_id: Option<i64>,
}

impl ListFilter {
    /// 是否没有任何约束
    pub fn is_unconstrained(&self) -> bool {
        self.normalized_search().is_none()
            && self.status.is_none()
            && self.subject_id.is_none()
            && self.academic_level_id.is_none()
    }

    fn normalized_search(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// 单项匹配判断
    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        if let Some(needle) = self.normalized_search()
            && !item
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        {
            return false;
        }

        if let Some(ref status) = self.status
            && item.status_key() != Some(status.as_str())
        {
            return false;
        }

        if let Some(subject_id) = self.subject_id
            && !item.subject_ids().contains(&subject_id)
        {
            return false;
        }

        if let Some(level_id) = self.academic_level_id
            && !item.academic_level_ids().contains(&level_id)
        {
            return false;
        }

        true
    }

    /// 过滤集合，保持输入相对顺序
    pub fn apply<T: Filterable>(&self, items: Vec<T>) -> Vec<T> {
        if self.is_unconstrained() {
            return items;
        }
        items.into_iter().filter(|item| self.matches(item)).collect()
    }
}

// "all" 和空串折叠为 None
fn sentinel_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty() && s != FILTER_ALL))
}

// 接受整数或数字字符串；"all" 和空串折叠为 None，其余非数字字符串报错
fn sentinel_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{Error, Unexpected, Visitor};
    use std::fmt;

    struct SentinelI64Visitor;

    impl<'de> Visitor<'de> for SentinelI64Visitor {
        type Value = Option<i64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer, a numeric string, or the sentinel \"all\"")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(None)
        }

        fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
        where
            D2: Deserializer<'de>,
        {
            deserializer.deserialize_any(SentinelI64Visitor)
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(Some(value))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            if value <= i64::MAX as u64 {
                Ok(Some(value as i64))
            } else {
                Err(Error::invalid_value(Unexpected::Unsigned(value), &self))
            }
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            let trimmed = value.trim();
            if trimmed.is_empty() || trimmed == FILTER_ALL {
                return Ok(None);
            }
            trimmed
                .parse()
                .map(Some)
                .map_err(|_| Error::invalid_value(Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_option(SentinelI64Visitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        title: &'static str,
        tutor_name: &'static str,
        status: &'static str,
        subject_id: i64,
        level_id: i64,
    }

    impl Filterable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.title, self.tutor_name]
        }

        fn status_key(&self) -> Option<&str> {
            Some(self.status)
        }

        fn subject_ids(&self) -> Vec<i64> {
            vec![self.subject_id]
        }

        fn academic_level_ids(&self) -> Vec<i64> {
            vec![self.level_id]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                title: "Algebra homework",
                tutor_name: "John Wilson",
                status: "pending",
                subject_id: 1,
                level_id: 1,
            },
            Row {
                title: "Essay draft",
                tutor_name: "Mary Smith",
                status: "submitted",
                subject_id: 2,
                level_id: 1,
            },
            Row {
                title: "Mechanics problems",
                tutor_name: "John Brown",
                status: "graded",
                subject_id: 3,
                level_id: 2,
            },
        ]
    }

    #[test]
    fn test_unconstrained_filter_is_identity() {
        let filter = ListFilter::default();
        let result = filter.apply(rows());
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].title, "Algebra homework");
        assert_eq!(result[1].title, "Essay draft");
        assert_eq!(result[2].title, "Mechanics problems");
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let filter = ListFilter {
            search: Some("john".to_string()),
            ..Default::default()
        };
        let result = filter.apply(rows());
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].tutor_name, "John Wilson");
        assert_eq!(result[1].tutor_name, "John Brown");

        let upper = ListFilter {
            search: Some("JOHN".to_string()),
            ..Default::default()
        };
        assert_eq!(upper.apply(rows()).len(), 2);
    }

    #[test]
    fn test_predicates_are_conjoined() {
        let filter = ListFilter {
            search: Some("john".to_string()),
            status: Some("graded".to_string()),
            ..Default::default()
        };
        let result = filter.apply(rows());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Mechanics problems");
    }

    #[test]
    fn test_categorical_equality() {
        let filter = ListFilter {
            subject_id: Some(2),
            academic_level_id: Some(1),
            ..Default::default()
        };
        let result = filter.apply(rows());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Essay draft");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let filter = ListFilter {
            search: Some("john".to_string()),
            academic_level_id: Some(1),
            ..Default::default()
        };
        let once = filter.apply(rows());
        let titles_once: Vec<_> = once.iter().map(|r| r.title).collect();
        let twice = filter.apply(once);
        let titles_twice: Vec<_> = twice.iter().map(|r| r.title).collect();
        assert_eq!(titles_once, titles_twice);
    }

    #[test]
    fn test_empty_result_is_valid() {
        let filter = ListFilter {
            search: Some("nonexistent".to_string()),
            ..Default::default()
        };
        assert!(filter.apply(rows()).is_empty());
    }

    #[test]
    fn test_multi_valued_categorical_matches_any() {
        // 多值行（如导师的开设组合）：命中任意一个取值即可
        struct MultiRow;

        impl Filterable for MultiRow {
            fn search_fields(&self) -> Vec<&str> {
                vec!["tutor"]
            }

            fn subject_ids(&self) -> Vec<i64> {
                vec![10, 20]
            }
        }

        let hit = ListFilter {
            subject_id: Some(20),
            ..Default::default()
        };
        assert!(hit.matches(&MultiRow));

        let miss = ListFilter {
            subject_id: Some(30),
            ..Default::default()
        };
        assert!(!miss.matches(&MultiRow));
    }

    #[test]
    fn test_sentinel_all_deserializes_to_none() {
        let filter: ListFilter =
            serde_json::from_str(r#"{"status":"all","subject_id":"all","search":""}"#)
                .expect("sentinel values should deserialize");
        assert!(filter.status.is_none());
        assert!(filter.subject_id.is_none());
        assert!(filter.is_unconstrained());
    }

    #[test]
    fn test_numeric_string_deserializes() {
        let filter: ListFilter =
            serde_json::from_str(r#"{"subject_id":"42","academic_level_id":7}"#)
                .expect("numeric values should deserialize");
        assert_eq!(filter.subject_id, Some(42));
        assert_eq!(filter.academic_level_id, Some(7));
    }

    #[test]
    fn test_garbage_categorical_value_fails_loudly() {
        let result = serde_json::from_str::<ListFilter>(r#"{"subject_id":"math"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_whitespace_search_is_no_constraint() {
        let filter = ListFilter {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(filter.is_unconstrained());
        assert_eq!(filter.apply(rows()).len(), 3);
    }
}
