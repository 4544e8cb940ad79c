//! 查询串参数读取：查询串由调用方传入，不依赖任何全局地址。

use percent_encoding::percent_decode_str;
use url::Url;

/// 从查询串中读取参数 `name` 的值（URL 解码后）。
///
/// - 查询串可带或不带开头的 `?`
/// - 以 `&` 分隔，取第一个键与 `name` 完全相同的 `name=value`
/// - `+` 原样保留，不视为空格
/// - 解码结果按 UTF-8 解释，非法字节（如单独的 `%E9`）替换为 U+FFFD，不按 Latin-1 解码
/// - 参数不存在（或只有 `name` 没有 `=`）时返回 `None`
///
/// example:
/// ```
/// use display_kit::url_param::read_url_param;
///
/// assert_eq!(read_url_param("id", "a=1&id=42&b=3").as_deref(), Some("42"));
/// assert_eq!(read_url_param("missing", "a=1"), None);
/// ```
pub fn read_url_param(name: &str, query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);

    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().to_string())
}

/// 从完整 URL 的查询部分读取参数，没有查询部分时返回 `None`
pub fn read_url_param_from_url(name: &str, url: &Url) -> Option<String> {
    url.query().and_then(|query| read_url_param(name, query))
}
