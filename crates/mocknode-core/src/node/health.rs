/// Exact `/health` body. Kept as a literal so the bytes on the wire never
/// depend on serializer whitespace.
pub const HEALTH_BODY: &str = r#"{"status": "ok", "height": "12345", "catching_up": false}"#;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::node::BASE_HEIGHT;

    #[test]
    fn health_body_is_valid_json() {
        let v: serde_json::Value = serde_json::from_str(HEALTH_BODY).unwrap();
        assert_eq!(v["status"], "ok");
        assert_eq!(v["height"], BASE_HEIGHT.to_string());
        assert_eq!(v["catching_up"], false);
    }
}
