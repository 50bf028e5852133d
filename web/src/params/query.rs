use serde_json::Value;
use utoipa::ToSchema;

/// Body of a query request.
#[derive(Debug, ToSchema)]
pub(crate) struct QueryParams {
    /// Name of the query to run.
    #[schema(example = "get_user_data")]
    pub(crate) query: Option<String>,
}

impl QueryParams {
    /// Reads the request body leniently: anything that is not a JSON object
    /// with a string `query` field yields params without a query name.
    pub(crate) fn from_body(body: &[u8]) -> Self {
        let query = serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|value| match value.get("query") {
                Some(Value::String(name)) => Some(name.clone()),
                _ => None,
            });

        Self { query }
    }

    pub(crate) fn query_name(&self) -> Option<&str> {
        self.query.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_query_field_is_read() {
        let params = QueryParams::from_body(br#"{"query":"get_user_data"}"#);
        assert_eq!(params.query_name(), Some("get_user_data"));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let params = QueryParams::from_body(br#"{"query":"get_user_data","limit":5}"#);
        assert_eq!(params.query_name(), Some("get_user_data"));
    }

    #[test]
    fn missing_null_or_non_string_queries_have_no_name() {
        for body in [
            &br#"{}"#[..],
            br#"{"query":null}"#,
            br#"{"query":42}"#,
            br#"{"query":["get_user_data"]}"#,
            br#"["get_user_data"]"#,
            b"query=get_user_data",
            b"",
        ] {
            assert_eq!(QueryParams::from_body(body).query_name(), None);
        }
    }
}
