fn main() {
    println!("Run `cargo test -p wire-compat` to execute wire compatibility tests.");
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::sync::Arc;

    use base64::{Engine, engine::general_purpose::STANDARD};
    use serde_json::json;

    use chromelogger::{CallSite, HEADER_NAME, LogBuffer, ResponseHeaders, Session};
    use chromelogger_protocol::decode;

    /// Returns the path to the fixtures directory.
    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    /// Loads a fixture file with surrounding whitespace removed.
    fn load_fixture(name: &str) -> String {
        let path = fixtures_dir().join(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
            .trim()
            .to_owned()
    }

    /// Decodes a header value to the raw JSON document, without going
    /// through the typed payload.
    fn raw_document(header: &str) -> serde_json::Value {
        let bytes = STANDARD.decode(header).expect("header is not base64");
        serde_json::from_slice(&bytes).expect("header is not JSON")
    }

    fn two_row_buffer() -> LogBuffer {
        let mut buffer = LogBuffer::new();
        buffer.append(
            &CallSite::new("main.rs", 5),
            "",
            vec![json!("a"), json!(1), json!(true)],
        );
        buffer.append(
            &CallSite::new("db.rs", 17),
            "warn",
            vec![json!("slow"), json!({"ms": 250})],
        );
        buffer
    }

    // --- Payloads produced by other servers ---

    #[test]
    fn fixture_php_reference_decodes() {
        let payload = decode(&load_fixture("php_reference.b64")).unwrap();

        assert_eq!(payload.version, "4.1.0");
        assert_eq!(payload.rows.len(), 3);

        assert_eq!(payload.rows[0].values, vec![json!("hello console")]);
        assert_eq!(
            payload.rows[0].backtrace,
            "/home/www/somman.somcloud.com/index.php : 4"
        );
        assert_eq!(payload.rows[0].tag, "");

        let server = &payload.rows[1].values[0];
        assert_eq!(server["HTTP_HOST"], "test.somman.somcloud.com");
        assert_eq!(server["REQUEST_TIME"], 1376315707);

        assert_eq!(payload.rows[2].values, vec![json!("something went wrong!")]);
        assert_eq!(payload.rows[2].tag, "warn");
    }

    #[test]
    fn fixture_php_reference_reencodes_same_rows() {
        let original = load_fixture("php_reference.b64");
        let payload = decode(&original).unwrap();
        let reencoded = chromelogger_protocol::encode(&payload).unwrap();

        let before = raw_document(&original);
        let after = raw_document(&reencoded);
        assert_eq!(before["rows"], after["rows"]);
        assert_eq!(before["columns"], after["columns"]);
        // Extra top-level fields are not carried over.
        assert!(after.get("request_uri").is_none());
    }

    // --- Payloads produced by this crate ---

    #[test]
    fn fixture_two_rows_bit_exact() {
        let encoded = two_row_buffer().encode().unwrap();
        assert_eq!(encoded, load_fixture("two_rows.b64"));
    }

    #[test]
    fn fixture_two_rows_json_exact() {
        let json = String::from_utf8(two_row_buffer().to_json().unwrap()).unwrap();
        assert_eq!(json, load_fixture("two_rows.json"));
    }

    #[test]
    fn session_header_schema() {
        let headers = Arc::new(ResponseHeaders::new());
        let session = Session::with_output(headers.clone());

        chromelogger::log!(session, "a", 1, true);
        chromelogger::warn!(session, "w");
        chromelogger::logf!(session, "{}-{}", 1, 2);

        let map = headers.finalize().unwrap();
        let value = map[HEADER_NAME].to_str().unwrap();
        let doc = raw_document(value);

        assert_eq!(doc["version"], "0.1");
        assert_eq!(doc["columns"], json!(["log", "backtrace", "type"]));
        let rows = doc["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 3);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_array().unwrap();
            assert_eq!(row.len(), 3);
            assert!(row[0].is_array());
            let backtrace = row[1].as_str().unwrap();
            assert!(backtrace.starts_with(file!()), "row {i}: {backtrace}");
            assert_eq!(row[2] == "warn", i == 1);
        }
        assert_eq!(rows[0][0], json!(["a", 1, true]));
        assert_eq!(rows[2][0], json!(["1-2"]));
    }

    #[test]
    fn finalized_response_keeps_last_header() {
        let headers = Arc::new(ResponseHeaders::new());
        let session = Session::with_output(headers.clone());

        chromelogger::log!(session, "sent");
        let map = headers.finalize().unwrap();
        chromelogger::log!(session, "too late");

        let sent = decode(map[HEADER_NAME].to_str().unwrap()).unwrap();
        assert_eq!(sent.rows.len(), 1);
        assert_eq!(session.len(), 2);
    }
}
