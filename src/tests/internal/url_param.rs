//! 查询串参数读取测试。

use url::Url;

use crate::url_param::{read_url_param, read_url_param_from_url};

#[test]
fn reads_present_param() {
    assert_eq!(read_url_param("id", "a=1&id=42&b=3").as_deref(), Some("42"));
    assert_eq!(read_url_param("a", "a=1&id=42").as_deref(), Some("1"));
    assert_eq!(read_url_param("b", "?a=1&b=3").as_deref(), Some("3"));
}

#[test]
fn missing_param_is_none() {
    assert_eq!(read_url_param("missing", "a=1"), None);
    assert_eq!(read_url_param("id", ""), None);
    // 只有键没有 =
    assert_eq!(read_url_param("flag", "flag&a=1"), None);
}

#[test]
fn key_must_match_exactly() {
    assert_eq!(read_url_param("id", "uid=7&id=8").as_deref(), Some("8"));
    assert_eq!(read_url_param("id", "idx=7"), None);
}

#[test]
fn first_occurrence_wins_and_empty_value_kept() {
    assert_eq!(read_url_param("k", "k=1&k=2").as_deref(), Some("1"));
    assert_eq!(read_url_param("k", "k=&j=2").as_deref(), Some(""));
}

#[test]
fn value_is_percent_decoded() {
    assert_eq!(
        read_url_param("q", "q=hello%20world").as_deref(),
        Some("hello world")
    );
    assert_eq!(
        read_url_param("name", "name=%E4%B8%AD%E6%96%87").as_deref(),
        Some("中文")
    );
    assert_eq!(read_url_param("q", "q=a+b").as_deref(), Some("a+b"));
}

#[test]
fn invalid_utf8_escape_becomes_replacement_char() {
    assert_eq!(
        read_url_param("name", "name=caf%E9").as_deref(),
        Some("caf\u{FFFD}")
    );
}

#[test]
fn reads_from_full_url() {
    let url = Url::parse("http://localhost:8080/search?keyword=rust&page=2").unwrap();
    assert_eq!(read_url_param_from_url("page", &url).as_deref(), Some("2"));
    assert_eq!(read_url_param_from_url("none", &url), None);

    let url = Url::parse("http://localhost:8080/search").unwrap();
    assert_eq!(read_url_param_from_url("page", &url), None);
}
