//! Session Persistence
//!
//! One durable localStorage slot holds the bearer credential; everything else
//! about the session lives in memory and is rebuilt from `/me` on reload.

pub const TOKEN_KEY: &str = "socialhub_token";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the persisted credential, if any.
pub fn token() -> Option<String> {
    storage()?
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

/// Persist a fresh credential. Exactly one credential is active at a time.
pub fn store_token(token: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Drop the persisted credential.
pub fn clear_token() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

/// Authenticated user profile as returned by the backend. The client holds a
/// read-only cached copy; the backend stays the source of truth.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub plan: Plan,
}

/// Subscription tier gating feature availability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Plan {
    Free,
    Pro,
    UltraPro,
}

impl Plan {
    /// Display label; the wire format's underscore renders as a dash.
    pub fn label(&self) -> &'static str {
        match self {
            Plan::Free => "free",
            Plan::Pro => "pro",
            Plan::UltraPro => "ultra-pro",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_wire_format_is_snake_case() {
        assert_eq!(serde_json::to_string(&Plan::UltraPro).unwrap(), r#""ultra_pro""#);
        assert_eq!(serde_json::from_str::<Plan>(r#""ultra_pro""#).unwrap(), Plan::UltraPro);
        assert_eq!(serde_json::from_str::<Plan>(r#""free""#).unwrap(), Plan::Free);
    }

    #[test]
    fn plan_label_replaces_underscore() {
        assert_eq!(Plan::UltraPro.label(), "ultra-pro");
        assert_eq!(Plan::Pro.label(), "pro");
    }

    #[test]
    fn user_parses_backend_shape() {
        let user: User =
            serde_json::from_str(r#"{"id":1,"name":"A","email":"a@b.com","plan":"free"}"#).unwrap();
        assert_eq!(user.name, "A");
        assert_eq!(user.plan, Plan::Free);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn token_round_trip() {
        store_token("T");
        assert_eq!(token().as_deref(), Some("T"));

        clear_token();
        assert_eq!(token(), None);
    }
}
