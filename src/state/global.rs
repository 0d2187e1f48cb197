//! Global Application State
//!
//! Reactive session state and the dashboard's domain types, managed with
//! Leptos signals.

use leptos::*;

use crate::api;
use crate::state::session::{self, Plan, User};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct AppState {
    /// Currently authenticated user, if any
    pub user: RwSignal<Option<User>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_app_state() {
    let state = AppState {
        user: create_rw_signal(None),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl AppState {
    /// Commit a fresh credential and server-returned profile. This is the one
    /// place a credential write happens.
    pub fn sign_in(&self, token: &str, user: User) {
        session::store_token(token);
        self.user.set(Some(user));
    }

    /// Tear the session down: drop the persisted credential and the cached
    /// profile, reverting the view to logged-out.
    pub fn sign_out(&self) {
        session::clear_token();
        self.user.set(None);
    }

    /// Rehydrate the session from a persisted credential, if any.
    ///
    /// A credential the backend rejects is cleared so a reload does not retry
    /// it forever; on a network failure it is kept for a later retry. Both
    /// failure paths leave the view logged out. The credential carries no
    /// client-managed TTL: it lives until the backend rejects it or the user
    /// signs out.
    pub async fn restore_session(&self) {
        if session::token().is_none() {
            return;
        }

        match api::fetch_profile().await {
            Ok(user) => self.user.set(Some(user)),
            Err(err) => {
                if err.is_http() {
                    session::clear_token();
                }
                web_sys::console::error_1(&format!("Session restore failed: {err:?}").into());
                self.user.set(None);
            }
        }
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

/// Platform catalog entry; fetched from the backend, never mutated here.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Platform {
    pub key: String,
    pub name: String,
    pub url: String,
}

/// A linked social account.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct LinkedAccount {
    pub id: u64,
    pub platform: String,
    pub username: String,
}

/// Upload usage snapshot, refreshed after every mutating action.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UsageStats {
    pub plan: Plan,
    pub used: u32,
    /// Daily cap; `None` means the plan is unbounded.
    #[serde(default)]
    pub limit: Option<u32>,
}

impl UsageStats {
    /// "used/limit", with an infinity sign for unbounded plans.
    pub fn usage_label(&self) -> String {
        match self.limit {
            Some(limit) => format!("{}/{}", self.used, limit),
            None => format!("{}/∞", self.used),
        }
    }
}

/// Media kind for an upload job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Video,
    Image,
    Text,
}

impl MediaType {
    pub const ALL: [MediaType; 3] = [MediaType::Video, MediaType::Image, MediaType::Text];

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Video => "video",
            MediaType::Image => "image",
            MediaType::Text => "text",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MediaType::Video => "Video",
            MediaType::Image => "Image",
            MediaType::Text => "Text",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == value)
    }
}

/// Product kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    Digital,
    Physical,
    Service,
}

impl ProductType {
    pub const ALL: [ProductType; 3] = [
        ProductType::Digital,
        ProductType::Physical,
        ProductType::Service,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Digital => "digital",
            ProductType::Physical => "physical",
            ProductType::Service => "service",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductType::Digital => "Digital",
            ProductType::Physical => "Physical",
            ProductType::Service => "Service",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// Product listing status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Active,
    Draft,
    Archived,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 3] = [
        ProductStatus::Active,
        ProductStatus::Draft,
        ProductStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Draft => "draft",
            ProductStatus::Archived => "archived",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Active => "Active",
            ProductStatus::Draft => "Draft",
            ProductStatus::Archived => "Archived",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Product as owned by the backend; ids are backend-assigned.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub product_type: ProductType,
    pub status: ProductStatus,
}

/// Editable product fields shared by the create and edit flows.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub product_type: ProductType,
    pub status: ProductStatus,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            price: 0.0,
            product_type: ProductType::Digital,
            status: ProductStatus::Active,
        }
    }
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price,
            product_type: product.product_type,
            status: product.status,
        }
    }
}

/// The product form buffer. Creating and editing are distinct states carrying
/// their own draft, so a cancelled edit can never leak into a create.
#[derive(Clone, Debug, PartialEq)]
pub enum ProductForm {
    Creating(ProductDraft),
    Editing { id: u64, draft: ProductDraft },
}

impl Default for ProductForm {
    fn default() -> Self {
        ProductForm::Creating(ProductDraft::default())
    }
}

impl ProductForm {
    /// Start editing an existing product, copying its fields into the draft.
    pub fn begin_edit(product: &Product) -> Self {
        ProductForm::Editing {
            id: product.id,
            draft: ProductDraft::from(product),
        }
    }

    pub fn editing_id(&self) -> Option<u64> {
        match self {
            ProductForm::Editing { id, .. } => Some(*id),
            ProductForm::Creating(_) => None,
        }
    }

    pub fn draft(&self) -> &ProductDraft {
        match self {
            ProductForm::Creating(draft) => draft,
            ProductForm::Editing { draft, .. } => draft,
        }
    }

    pub fn draft_mut(&mut self) -> &mut ProductDraft {
        match self {
            ProductForm::Creating(draft) => draft,
            ProductForm::Editing { draft, .. } => draft,
        }
    }
}

/// An AI video-edit operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AiOperation {
    Autocut,
    Resize,
    Captions,
    Thumbnail,
}

impl AiOperation {
    pub const ALL: [AiOperation; 4] = [
        AiOperation::Autocut,
        AiOperation::Resize,
        AiOperation::Captions,
        AiOperation::Thumbnail,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AiOperation::Autocut => "Auto-cut",
            AiOperation::Resize => "Resize",
            AiOperation::Captions => "Captions",
            AiOperation::Thumbnail => "Thumbnail",
        }
    }
}

/// Per-operation toggles for the AI edit panel. The submitted operation list
/// is exactly the checked subset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AiToggles {
    pub autocut: bool,
    pub resize: bool,
    pub captions: bool,
    pub thumbnail: bool,
}

impl Default for AiToggles {
    fn default() -> Self {
        Self {
            autocut: true,
            resize: true,
            captions: true,
            thumbnail: true,
        }
    }
}

impl AiToggles {
    pub fn get(&self, op: AiOperation) -> bool {
        match op {
            AiOperation::Autocut => self.autocut,
            AiOperation::Resize => self.resize,
            AiOperation::Captions => self.captions,
            AiOperation::Thumbnail => self.thumbnail,
        }
    }

    pub fn set(&mut self, op: AiOperation, checked: bool) {
        match op {
            AiOperation::Autocut => self.autocut = checked,
            AiOperation::Resize => self.resize = checked,
            AiOperation::Captions => self.captions = checked,
            AiOperation::Thumbnail => self.thumbnail = checked,
        }
    }

    /// The checked operations, in declaration order.
    pub fn operations(&self) -> Vec<AiOperation> {
        AiOperation::ALL
            .into_iter()
            .filter(|op| self.get(*op))
            .collect()
    }
}

/// Toggle `key`'s membership in the selection, preserving the order of the
/// other members.
pub fn toggle_key(selected: &mut Vec<String>, key: &str) {
    if selected.iter().any(|k| k == key) {
        selected.retain(|k| k != key);
    } else {
        selected.push(key.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_key_double_toggle_restores_selection() {
        let mut selected = vec!["instagram".to_string(), "youtube".to_string()];

        toggle_key(&mut selected, "tiktok");
        assert_eq!(selected, ["instagram", "youtube", "tiktok"]);

        toggle_key(&mut selected, "tiktok");
        assert_eq!(selected, ["instagram", "youtube"]);
    }

    #[test]
    fn toggle_key_removal_preserves_order() {
        let mut selected = vec!["a".to_string(), "b".to_string(), "c".to_string()];

        toggle_key(&mut selected, "b");
        assert_eq!(selected, ["a", "c"]);
    }

    #[test]
    fn begin_edit_copies_editable_fields() {
        let product = Product {
            id: 7,
            title: "Preset pack".to_string(),
            description: "Ten color presets".to_string(),
            price: 19.99,
            product_type: ProductType::Digital,
            status: ProductStatus::Active,
        };

        let form = ProductForm::begin_edit(&product);
        assert_eq!(form.editing_id(), Some(7));
        assert_eq!(form.draft(), &ProductDraft::from(&product));

        // An unedited save must submit exactly the original editable fields
        let body = serde_json::to_value(form.draft()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "title": "Preset pack",
                "description": "Ten color presets",
                "price": 19.99,
                "product_type": "digital",
                "status": "active",
            })
        );
    }

    #[test]
    fn cancelled_edit_resets_to_a_clean_create() {
        let product = Product {
            id: 3,
            title: "Old".to_string(),
            description: String::new(),
            price: 5.0,
            product_type: ProductType::Service,
            status: ProductStatus::Draft,
        };

        let mut form = ProductForm::begin_edit(&product);
        form = ProductForm::default();

        assert_eq!(form.editing_id(), None);
        assert_eq!(form.draft(), &ProductDraft::default());
    }

    #[test]
    fn ai_operations_are_exactly_the_checked_subset() {
        let toggles = AiToggles {
            autocut: true,
            resize: false,
            captions: true,
            thumbnail: false,
        };

        assert_eq!(
            toggles.operations(),
            [AiOperation::Autocut, AiOperation::Captions]
        );

        let none = AiToggles {
            autocut: false,
            resize: false,
            captions: false,
            thumbnail: false,
        };
        assert!(none.operations().is_empty());
    }

    #[test]
    fn ai_operation_wire_format() {
        assert_eq!(
            serde_json::to_string(&AiOperation::Autocut).unwrap(),
            r#""autocut""#
        );
        assert_eq!(
            serde_json::to_value(AiToggles::default().operations()).unwrap(),
            serde_json::json!(["autocut", "resize", "captions", "thumbnail"])
        );
    }

    #[test]
    fn usage_label_handles_unbounded_plans() {
        let capped = UsageStats {
            plan: Plan::Free,
            used: 2,
            limit: Some(4),
        };
        assert_eq!(capped.usage_label(), "2/4");

        let unbounded = UsageStats {
            plan: Plan::UltraPro,
            used: 12,
            limit: None,
        };
        assert_eq!(unbounded.usage_label(), "12/∞");
    }

    #[test]
    fn media_type_round_trips_through_select_values() {
        for media in MediaType::ALL {
            assert_eq!(MediaType::from_value(media.as_str()), Some(media));
        }
        assert_eq!(MediaType::from_value("audio"), None);
    }

    #[test]
    fn product_parses_backend_shape() {
        let product: Product = serde_json::from_str(
            r#"{"id":1,"title":"Course","price":49.0,"product_type":"digital","status":"draft"}"#,
        )
        .unwrap();
        assert_eq!(product.description, "");
        assert_eq!(product.status, ProductStatus::Draft);
    }
}
