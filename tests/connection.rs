use serde_json::json;

use connprof::connection::Connection;

#[test]
fn deserializes_from_a_host_document() {
    let raw = r#"{
        "conn_id": "my_aws_connection",
        "conn_type": "aws",
        "login": "my_user",
        "extra": {"role_arn": "arn:aws:iam::1234567890:role/GlueInteractiveSessionRole"}
    }"#;

    let connection: Connection = serde_json::from_str(raw).expect("valid document");

    assert_eq!(connection.conn_id, "my_aws_connection");
    assert_eq!(connection.conn_type, "aws");
    assert_eq!(connection.login.as_deref(), Some("my_user"));
    assert!(connection.password.is_none());
    assert_eq!(
        connection.extra_value("role_arn"),
        Some(&json!("arn:aws:iam::1234567890:role/GlueInteractiveSessionRole"))
    );
}

#[test]
fn missing_optional_fields_default_to_absent() {
    let connection: Connection =
        serde_json::from_str(r#"{"conn_id": "c", "conn_type": "aws"}"#).expect("valid document");

    assert!(connection.login.is_none());
    assert!(connection.password.is_none());
    assert!(connection.extra.is_null());
    assert_eq!(connection.extra_value("role_arn"), None);
}

#[test]
fn round_trips_through_json() {
    let connection = Connection {
        conn_id: "my_aws_connection".to_string(),
        conn_type: "aws".to_string(),
        login: None,
        password: None,
        extra: json!({"region_name": "eu-central-1"}),
    };

    let raw = serde_json::to_string(&connection).expect("serializable");
    let decoded: Connection = serde_json::from_str(&raw).expect("valid document");

    assert_eq!(decoded.conn_type, "aws");
    assert_eq!(decoded.extra_value("region_name"), Some(&json!("eu-central-1")));
}
