use super::*;
use serde_json::json;

#[test]
fn user_profile_accepts_numeric_id() {
    let user: UserProfile = serde_json::from_value(json!({ "id": 1, "username": "alice" })).unwrap();
    assert_eq!(user.id, UserId::Number(1));
    assert_eq!(user.username.as_deref(), Some("alice"));
    assert!(user.extra.is_empty());
}

#[test]
fn user_profile_accepts_backend_user_id_alias() {
    let user: UserProfile = serde_json::from_value(json!({
        "user_id": "3f1c",
        "username": "bob",
        "user_role": "admin",
        "email": "bob@example.test"
    }))
    .unwrap();
    assert_eq!(user.id, UserId::Text("3f1c".to_owned()));
    assert_eq!(user.extra.get("user_role"), Some(&json!("admin")));
    assert_eq!(user.extra.get("email"), Some(&json!("bob@example.test")));
}

#[test]
fn user_profile_requires_an_identifier() {
    let parsed = serde_json::from_value::<UserProfile>(json!({ "username": "nobody" }));
    assert!(parsed.is_err());
}

#[test]
fn display_name_prefers_display_then_username_then_id() {
    let user: UserProfile =
        serde_json::from_value(json!({ "id": 7, "username": "alice", "display_name": "Alice A." })).unwrap();
    assert_eq!(user.display_name(), "Alice A.");

    let user: UserProfile = serde_json::from_value(json!({ "id": 7, "username": "alice" })).unwrap();
    assert_eq!(user.display_name(), "alice");

    let user: UserProfile = serde_json::from_value(json!({ "id": 7 })).unwrap();
    assert_eq!(user.display_name(), "7");
}

#[test]
fn envelope_data_is_optional() {
    let env: Envelope<UserProfile> = serde_json::from_str(r#"{"message":"logged out"}"#).unwrap();
    assert_eq!(env.message, "logged out");
    assert!(env.data.is_none());

    let env: Envelope<UserProfile> = serde_json::from_str(r#"{"message":"ok","data":null}"#).unwrap();
    assert!(env.data.is_none());
}

#[test]
fn envelope_requires_message() {
    assert!(serde_json::from_str::<Envelope<UserProfile>>("{}").is_err());
    assert!(serde_json::from_str::<Envelope<UserProfile>>(r#"{"data":{"id":1}}"#).is_err());
}

#[test]
fn login_credentials_serialize_as_flat_object() {
    let creds = LoginCredentials { username: "alice".to_owned(), password: "pw".to_owned() };
    assert_eq!(serde_json::to_value(&creds).unwrap(), json!({ "username": "alice", "password": "pw" }));
}
