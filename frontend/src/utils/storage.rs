use web_sys::{Storage, Window};

use crate::api::{UserResponse, CURRENT_USER_KEY};

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// User persisted by the last successful login or signup, if any.
pub fn stored_user() -> Result<Option<UserResponse>, String> {
    let raw = local_storage()?
        .get_item(CURRENT_USER_KEY)
        .map_err(|_| "Failed to read current user".to_string())?;
    match raw {
        Some(raw) => decode_user(&raw).map(Some),
        None => Ok(None),
    }
}

pub fn decode_user(raw: &str) -> Result<UserResponse, String> {
    serde_json::from_str(raw).map_err(|e| format!("Stored user is corrupt: {}", e))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Role;

    #[test]
    fn decode_user_reads_persisted_shape() {
        let user = decode_user(
            r#"{"id":"u1","email":"t@nbkr.ac.in","name":"Teacher","role":"faculty"}"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::Faculty);
        assert_eq!(user.name, "Teacher");
    }

    #[test]
    fn decode_user_rejects_garbage() {
        let err = decode_user("not json").unwrap_err();
        assert!(err.starts_with("Stored user is corrupt"));
    }
}
