//! URL and body construction helpers.
//!
//! Every endpoint wrapper goes through these helpers so that path encoding
//! and query-parameter handling stay consistent across the whole client.

use serde_json::Value;
use url::Url;

use crate::errors::ClientError;

/// Append percent-encoded path segments to a base URL.
///
/// A trailing empty segment on the base (from a base URL like
/// `http://localhost:9200/`) is dropped before appending.
pub(crate) fn join_path(base: &Url, segments: &[&str]) -> Result<Url, ClientError> {
    let mut url = base.clone();
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| ClientError::invalid_url("base URL cannot be a base"))?;
        path.pop_if_empty();
        for segment in segments {
            path.push(segment);
        }
    }
    Ok(url)
}

/// Append query parameters to a URL, preserving any existing ones.
pub(crate) fn append_query(url: &mut Url, pairs: &[(&str, &str)]) {
    if pairs.is_empty() {
        return;
    }
    let mut query = url.query_pairs_mut();
    for (key, value) in pairs {
        query.append_pair(key, value);
    }
}

/// Serialize bulk action lines as newline-delimited JSON.
///
/// The bulk endpoint requires every line, including the last, to be
/// newline-terminated.
pub(crate) fn ndjson_body(lines: &[Value]) -> String {
    let mut body = String::new();
    for line in lines {
        body.push_str(&line.to_string());
        body.push('\n');
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> Url {
        Url::parse("http://127.0.0.1:9200").unwrap()
    }

    #[test]
    fn test_join_path() {
        let url = join_path(&base(), &["test_index", "_doc", "my_id"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9200/test_index/_doc/my_id");
    }

    #[test]
    fn test_join_path_trailing_slash_base() {
        let base = Url::parse("http://127.0.0.1:9200/").unwrap();
        let url = join_path(&base, &["test_index"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9200/test_index");
    }

    #[test]
    fn test_join_path_encodes_segments() {
        let url = join_path(&base(), &["an index", "_doc", "id/with/slashes"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:9200/an%20index/_doc/id%2Fwith%2Fslashes"
        );
    }

    #[test]
    fn test_join_path_keeps_index_list_commas() {
        let url = join_path(&base(), &["index_a,index_b", "_search"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9200/index_a,index_b/_search");
    }

    #[test]
    fn test_append_query() {
        let mut url = join_path(&base(), &["_cat", "indices"]).unwrap();
        append_query(&mut url, &[("format", "json"), ("v", "true")]);
        assert_eq!(url.query(), Some("format=json&v=true"));
    }

    #[test]
    fn test_append_query_encodes_values() {
        let mut url = join_path(&base(), &["_search"]).unwrap();
        append_query(&mut url, &[("q", "testField:a b")]);
        assert_eq!(url.query(), Some("q=testField%3Aa+b"));
    }

    #[test]
    fn test_append_query_empty_leaves_url_untouched() {
        let mut url = join_path(&base(), &["_search"]).unwrap();
        append_query(&mut url, &[]);
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_ndjson_body() {
        let lines = vec![
            json!({"index": {"_index": "test_index", "_id": "1"}}),
            json!({"testField": "abc"}),
        ];
        let body = ndjson_body(&lines);
        assert_eq!(
            body,
            "{\"index\":{\"_index\":\"test_index\",\"_id\":\"1\"}}\n{\"testField\":\"abc\"}\n"
        );
    }

    #[test]
    fn test_ndjson_body_empty() {
        assert_eq!(ndjson_body(&[]), "");
    }
}
