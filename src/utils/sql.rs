/// 转义 LIKE 模式中的通配符
///
/// 用户输入作为搜索关键词拼进 LIKE 子句前必须转义 `%`、`_` 和转义符本身。
pub fn escape_like_pattern(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_like_pattern("algebra"), "algebra");
    }

    #[test]
    fn test_wildcards_escaped() {
        assert_eq!(escape_like_pattern("100%"), "100\\%");
        assert_eq!(escape_like_pattern("a_b"), "a\\_b");
        assert_eq!(escape_like_pattern("a\\b"), "a\\\\b");
    }
}
