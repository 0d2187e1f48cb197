//! Dashboard Page
//!
//! Authenticated view: platform selection and linking, unified uploader,
//! product CRUD with simulated checkout, and AI edit job submission. Every
//! mutating action reloads the full snapshot; displayed state always reflects
//! the last successful mutation.

use leptos::*;

use crate::api::{self, Snapshot};
use crate::components::loading::CardSkeleton;
use crate::state::global::{
    toggle_key, AiOperation, AiToggles, AppState, MediaType, Product, ProductForm, ProductStatus,
    ProductType, Platform,
};
use crate::state::session::Plan;

/// Dashboard-wide state provided to the section components.
#[derive(Clone, Copy)]
struct DashboardState {
    app: AppState,
    /// Last successfully joined snapshot; replaced wholesale, never merged
    snapshot: RwSignal<Option<Snapshot>>,
    /// Set when the initial snapshot load fails; renders a retry card
    load_error: RwSignal<Option<String>>,
    selected: RwSignal<Vec<String>>,
    caption: RwSignal<String>,
    media_type: RwSignal<MediaType>,
    uploading: RwSignal<bool>,
    form: RwSignal<ProductForm>,
    order_loading: RwSignal<bool>,
    ai_source: RwSignal<String>,
    ai_toggles: RwSignal<AiToggles>,
    ai_loading: RwSignal<bool>,
}

impl DashboardState {
    fn new(app: AppState) -> Self {
        Self {
            app,
            snapshot: create_rw_signal(None),
            load_error: create_rw_signal(None),
            selected: create_rw_signal(Vec::new()),
            caption: create_rw_signal(String::new()),
            media_type: create_rw_signal(MediaType::Image),
            uploading: create_rw_signal(false),
            form: create_rw_signal(ProductForm::default()),
            order_loading: create_rw_signal(false),
            ai_source: create_rw_signal(String::new()),
            ai_toggles: create_rw_signal(AiToggles::default()),
            ai_loading: create_rw_signal(false),
        }
    }

    /// Reload the five-way snapshot. All result slots commit together or not
    /// at all; a failed initial load becomes a retryable error card, a failed
    /// refresh keeps the previous snapshot and reports a toast.
    fn reload(self) {
        spawn_local(async move {
            match api::fetch_snapshot().await {
                Ok(snap) => {
                    self.snapshot.set(Some(snap));
                    self.load_error.set(None);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("Snapshot load failed: {err:?}").into());
                    if self.snapshot.get_untracked().is_some() {
                        self.app.show_error(err.detail());
                    } else {
                        self.load_error.set(Some(err.detail().to_string()));
                    }
                }
            }
        });
    }

    fn is_ultra(self) -> bool {
        self.snapshot
            .with(|snap| matches!(snap, Some(s) if s.profile.plan == Plan::UltraPro))
    }

    /// Pure local toggle; no network call.
    fn toggle_select(self, key: &str) {
        self.selected.update(|sel| toggle_key(sel, key));
    }

    /// Link a demo account for the platform, then refresh on either outcome.
    fn link_account(self, platform_key: String) {
        spawn_local(async move {
            let username = format!("{platform_key}_demo");
            match api::link_account(&platform_key, &username).await {
                Ok(()) => self.app.show_success(&format!("Linked {username}")),
                Err(err) => self.app.show_error(err.detail()),
            }
            self.reload();
        });
    }

    fn queue_upload(self) {
        let allowed = self
            .selected
            .with_untracked(|sel| can_queue(sel, self.uploading.get_untracked()));
        if !allowed {
            return;
        }
        self.uploading.set(true);

        spawn_local(async move {
            let result = api::queue_upload(
                self.media_type.get_untracked(),
                &self.caption.get_untracked(),
                &self.selected.get_untracked(),
            )
            .await;

            match result {
                Ok(()) => {
                    self.caption.set(String::new());
                    self.selected.set(Vec::new());
                    self.reload();
                    self.app.show_success("Queued successfully");
                }
                Err(err) => self.app.show_error(err.detail()),
            }
            // Released on every path, success or failure
            self.uploading.set(false);
        });
    }

    /// Create or update depending on the form buffer's state. On failure the
    /// draft stays populated for retry.
    fn save_product(self) {
        spawn_local(async move {
            let buffer = self.form.get_untracked();
            let result = match &buffer {
                ProductForm::Creating(draft) => api::create_product(draft).await,
                ProductForm::Editing { id, draft } => api::update_product(*id, draft).await,
            };

            match result {
                Ok(()) => {
                    self.form.set(ProductForm::default());
                    self.reload();
                }
                Err(err) => self.app.show_error(err.detail()),
            }
        });
    }

    /// No network call without explicit confirmation.
    fn delete_product(self, id: u64) {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete this product?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        spawn_local(async move {
            match api::delete_product(id).await {
                Ok(()) => self.reload(),
                Err(_) => self.app.show_error("Delete failed"),
            }
        });
    }

    /// Fire-and-forget order for the current user (simulated payment).
    fn checkout(self, product_id: u64) {
        if self.order_loading.get_untracked() {
            return;
        }
        let Some(buyer) = self
            .snapshot
            .with_untracked(|snap| snap.as_ref().map(|s| s.profile.email.clone()))
        else {
            return;
        };
        self.order_loading.set(true);

        spawn_local(async move {
            match api::create_order(product_id, &buyer).await {
                Ok(()) => self.app.show_success("Order created (simulated paid)."),
                Err(err) => self.app.show_error(err.detail()),
            }
            self.order_loading.set(false);
        });
    }

    fn start_ai_edit(self) {
        if self.ai_loading.get_untracked() {
            return;
        }
        self.ai_loading.set(true);

        spawn_local(async move {
            let source = self.ai_source.get_untracked();
            let source = (!source.is_empty()).then_some(source);
            let operations = self.ai_toggles.get_untracked().operations();

            match api::start_ai_edit(source.as_deref(), &operations).await {
                Ok(job_id) => {
                    self.app.show_success(&format!("AI job {job_id} started"));
                    self.ai_source.set(String::new());
                }
                Err(err) => self.app.show_error(err.detail()),
            }
            self.ai_loading.set(false);
        });
    }
}

/// Dashboard page component. Rendered only when a user is signed in.
#[component]
pub fn Dashboard() -> impl IntoView {
    let app = use_context::<AppState>().expect("AppState not found");
    let state = DashboardState::new(app);
    provide_context(state);

    // Initial snapshot load on mount
    create_effect(move |_| state.reload());

    view! {
        <section id="dashboard" class="py-12">
            <div class="max-w-6xl mx-auto px-6">
                {move || {
                    if state.snapshot.with(|snap| snap.is_some()) {
                        view! {
                            <DashboardHeader />
                            <PlatformGrid />
                            <div class="mt-10 grid grid-cols-1 lg:grid-cols-3 gap-6">
                                <Uploader />
                                <AccountsPanel />
                            </div>
                            <div class="mt-10 grid grid-cols-1 lg:grid-cols-3 gap-6">
                                <ProductTable />
                                <ProductFormPanel />
                            </div>
                            <AiEditPanel />
                        }
                        .into_view()
                    } else if let Some(message) = state.load_error.get() {
                        view! { <LoadError message /> }.into_view()
                    } else {
                        view! { <CardSkeleton /> }.into_view()
                    }
                }}
            </div>
        </section>
    }
}

/// Welcome line with plan and today's usage
#[component]
fn DashboardHeader() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4 mb-8">
            <h2 class="text-2xl font-bold text-white">
                {move || {
                    state.snapshot.with(|snap| {
                        snap.as_ref()
                            .map(|s| format!("Welcome, {}", s.profile.name))
                            .unwrap_or_default()
                    })
                }}
            </h2>
            <div class="text-white/80">
                {move || {
                    state.snapshot.with(|snap| {
                        snap.as_ref()
                            .map(|s| {
                                format!(
                                    "Plan: {} · Today: {}",
                                    s.stats.plan.label(),
                                    s.stats.usage_label()
                                )
                            })
                            .unwrap_or_default()
                    })
                }}
            </div>
        </div>
    }
}

#[component]
fn PlatformGrid() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-5 gap-4">
            {move || {
                state
                    .snapshot
                    .with(|snap| snap.as_ref().map(|s| s.platforms.clone()).unwrap_or_default())
                    .into_iter()
                    .map(|platform| view! { <PlatformCard platform /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn PlatformCard(platform: Platform) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let color = platform_color(&platform.key);
    let favicon = favicon_for(&platform.url);
    let url = platform.url.clone();
    let toggle_target = platform.key.clone();
    let link_target = platform.key.clone();

    let key = platform.key.clone();
    let is_selected = create_memo(move |_| state.selected.with(|sel| sel.contains(&key)));

    view! {
        <div class=move || {
            let base = "rounded-xl p-4 bg-white/5 hover:bg-white/10 transition border border-white/10";
            if is_selected.get() {
                format!("{base} ring-2 ring-fuchsia-500")
            } else {
                base.to_string()
            }
        }>
            <div class="flex items-center justify-between mb-3">
                <div class="flex items-center gap-2">
                    <img src=favicon alt=platform.name.clone() class="w-5 h-5 rounded" />
                    <div class="font-medium" style=format!("color: {color}")>
                        {platform.name.clone()}
                    </div>
                </div>
                <button
                    on:click=move |_| open_external(&url)
                    class="text-xs text-white/60 hover:text-white"
                >
                    "Open"
                </button>
            </div>
            <button
                on:click=move |_| state.toggle_select(&toggle_target)
                class="w-full py-2 rounded-lg bg-white/10 hover:bg-white/20 text-white"
            >
                {move || if is_selected.get() { "Selected" } else { "Select" }}
            </button>
            <button
                on:click=move |_| state.link_account(link_target.clone())
                class="w-full mt-2 text-xs text-white/70 hover:text-white"
            >
                "Quick link"
            </button>
        </div>
    }
}

#[component]
fn Uploader() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <div class="lg:col-span-2 bg-white/5 border border-white/10 rounded-2xl p-6">
            <h3 class="text-white font-semibold mb-4">"Unified Uploader"</h3>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <div>
                    <label class="block text-sm text-white/70 mb-1">"Media type"</label>
                    <select
                        on:change=move |ev| {
                            if let Some(media) = MediaType::from_value(&event_target_value(&ev)) {
                                state.media_type.set(media);
                            }
                        }
                        prop:value=move || state.media_type.get().as_str().to_string()
                        class="w-full bg-black/40 text-white border border-white/10 rounded-lg px-3 py-2"
                    >
                        {MediaType::ALL
                            .into_iter()
                            .map(|media| view! { <option value=media.as_str()>{media.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="md:col-span-2">
                    <label class="block text-sm text-white/70 mb-1">"Caption"</label>
                    <input
                        prop:value=move || state.caption.get()
                        on:input=move |ev| state.caption.set(event_target_value(&ev))
                        class="w-full bg-black/40 text-white border border-white/10 rounded-lg px-3 py-2"
                        placeholder="Say something..."
                    />
                </div>
            </div>
            <div class="mt-4 flex gap-3">
                // Disabled until at least one platform is selected
                <button
                    disabled=move || {
                        !state.selected.with(|sel| can_queue(sel, state.uploading.get()))
                    }
                    on:click=move |_| state.queue_upload()
                    class="px-5 py-2 rounded-lg bg-fuchsia-600 text-white hover:bg-fuchsia-700 disabled:opacity-50"
                >
                    {move || if state.uploading.get() { "Queuing..." } else { "Queue Upload" }}
                </button>
                <div class="text-white/70 text-sm self-center">
                    {move || format!("Selected: {}", state.selected.with(|sel| sel.len()))}
                </div>
            </div>
        </div>
    }
}

#[component]
fn AccountsPanel() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <div class="bg-white/5 border border-white/10 rounded-2xl p-6">
            <h3 class="text-white font-semibold mb-2">"Connected Accounts"</h3>
            <div class="space-y-2 max-h-64 overflow-auto pr-2">
                {move || {
                    let accounts = state
                        .snapshot
                        .with(|snap| snap.as_ref().map(|s| s.accounts.clone()).unwrap_or_default());

                    if accounts.is_empty() {
                        view! {
                            <div class="text-white/50 text-sm">"No accounts linked yet."</div>
                        }
                        .into_view()
                    } else {
                        accounts
                            .into_iter()
                            .map(|account| view! {
                                <div class="flex items-center justify-between text-white/80 bg-white/5 rounded-lg px-3 py-2">
                                    <div class="font-medium">{account.platform}</div>
                                    <div class="text-xs">{account.username}</div>
                                </div>
                            })
                            .collect_view()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn ProductTable() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <div class="bg-white/5 border border-white/10 rounded-2xl p-6 lg:col-span-2 overflow-x-auto">
            <div class="flex items-center justify-between mb-4">
                <h3 class="text-white font-semibold">"Products"</h3>
                <div class="text-white/60 text-sm">
                    {move || {
                        format!(
                            "Total: {}",
                            state.snapshot.with(|snap| {
                                snap.as_ref().map(|s| s.products.len()).unwrap_or(0)
                            })
                        )
                    }}
                </div>
            </div>
            <table class="min-w-full text-sm">
                <thead class="text-white/60">
                    <tr>
                        <th class="text-left py-2 pr-4">"Name"</th>
                        <th class="text-left py-2 pr-4">"Type"</th>
                        <th class="text-left py-2 pr-4">"Price"</th>
                        <th class="text-left py-2 pr-4">"Status"</th>
                        <th class="text-left py-2 pr-4">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let products = state
                            .snapshot
                            .with(|snap| snap.as_ref().map(|s| s.products.clone()).unwrap_or_default());

                        if products.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="5" class="text-white/50 py-6">
                                        "No products yet. Add one below."
                                    </td>
                                </tr>
                            }
                            .into_view()
                        } else {
                            products
                                .into_iter()
                                .map(|product| view! { <ProductRow product /> })
                                .collect_view()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn ProductRow(product: Product) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let id = product.id;
    let edit_source = product.clone();

    view! {
        <tr class="border-t border-white/10 text-white">
            <td class="py-2 pr-4">{product.title.clone()}</td>
            <td class="py-2 pr-4">{product.product_type.label()}</td>
            <td class="py-2 pr-4">{format!("${:.2}", product.price)}</td>
            <td class="py-2 pr-4">{product.status.label()}</td>
            <td class="py-2 pr-4 space-x-2">
                <button
                    on:click=move |_| state.form.set(ProductForm::begin_edit(&edit_source))
                    class="text-xs px-2 py-1 rounded bg-white/10 hover:bg-white/20"
                >
                    "Edit"
                </button>
                <button
                    on:click=move |_| state.delete_product(id)
                    class="text-xs px-2 py-1 rounded bg-red-500/70 hover:bg-red-500 text-white"
                >
                    "Delete"
                </button>
                <button
                    disabled=move || state.order_loading.get()
                    on:click=move |_| state.checkout(id)
                    class="text-xs px-2 py-1 rounded bg-emerald-600 hover:bg-emerald-700 text-white disabled:opacity-50"
                >
                    "Test Checkout"
                </button>
            </td>
        </tr>
    }
}

/// Shared create/edit form over the tagged draft buffer
#[component]
fn ProductFormPanel() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let editing = create_memo(move |_| state.form.with(|form| form.editing_id().is_some()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.save_product();
    };

    const FIELD: &str = "w-full bg-black/40 text-white border border-white/10 rounded-lg px-3 py-2";

    view! {
        <div class="bg-white/5 border border-white/10 rounded-2xl p-6">
            <h3 class="text-white font-semibold mb-3">
                {move || if editing.get() { "Edit product" } else { "Add product" }}
            </h3>
            <form on:submit=on_submit class="space-y-3">
                <div>
                    <label class="block text-sm text-white/70 mb-1">"Title"</label>
                    <input
                        prop:value=move || state.form.with(|form| form.draft().title.clone())
                        on:input=move |ev| {
                            state.form.update(|form| form.draft_mut().title = event_target_value(&ev))
                        }
                        class=FIELD
                        required
                    />
                </div>
                <div>
                    <label class="block text-sm text-white/70 mb-1">"Description"</label>
                    <textarea
                        prop:value=move || state.form.with(|form| form.draft().description.clone())
                        on:input=move |ev| {
                            state
                                .form
                                .update(|form| form.draft_mut().description = event_target_value(&ev))
                        }
                        rows="3"
                        class=FIELD
                    />
                </div>
                <div class="grid grid-cols-2 gap-3">
                    <div>
                        <label class="block text-sm text-white/70 mb-1">"Price"</label>
                        <input
                            type="number"
                            step="0.01"
                            min="0"
                            prop:value=move || state.form.with(|form| form.draft().price.to_string())
                            on:input=move |ev| {
                                // Prices never go negative
                                let price = event_target_value(&ev)
                                    .parse::<f64>()
                                    .unwrap_or(0.0)
                                    .max(0.0);
                                state.form.update(|form| form.draft_mut().price = price);
                            }
                            class=FIELD
                            required
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-white/70 mb-1">"Type"</label>
                        <select
                            prop:value=move || {
                                state.form.with(|form| form.draft().product_type.as_str().to_string())
                            }
                            on:change=move |ev| {
                                if let Some(kind) = ProductType::from_value(&event_target_value(&ev)) {
                                    state.form.update(|form| form.draft_mut().product_type = kind);
                                }
                            }
                            class=FIELD
                        >
                            {ProductType::ALL
                                .into_iter()
                                .map(|kind| view! { <option value=kind.as_str()>{kind.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                </div>
                <div>
                    <label class="block text-sm text-white/70 mb-1">"Status"</label>
                    <select
                        prop:value=move || state.form.with(|form| form.draft().status.as_str().to_string())
                        on:change=move |ev| {
                            if let Some(status) = ProductStatus::from_value(&event_target_value(&ev)) {
                                state.form.update(|form| form.draft_mut().status = status);
                            }
                        }
                        class=FIELD
                    >
                        {ProductStatus::ALL
                            .into_iter()
                            .map(|status| view! { <option value=status.as_str()>{status.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="flex gap-2">
                    <button class="px-4 py-2 rounded-lg bg-indigo-600 hover:bg-indigo-700 text-white">
                        {move || if editing.get() { "Update" } else { "Create" }}
                    </button>
                    // Cancel reverts to a clean create; no stale edit state survives
                    {move || {
                        editing.get().then(|| view! {
                            <button
                                type="button"
                                on:click=move |_| state.form.set(ProductForm::default())
                                class="px-4 py-2 rounded-lg bg-white/10 hover:bg-white/20 text-white"
                            >
                                "Cancel"
                            </button>
                        })
                    }}
                </div>
            </form>
        </div>
    }
}

/// AI edit panel; controls are disabled, not removed, below Ultra Pro
#[component]
fn AiEditPanel() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let is_ultra = create_memo(move |_| state.is_ultra());

    view! {
        <div class="mt-10 bg-white/5 border border-white/10 rounded-2xl p-6">
            <div class="flex items-center justify-between">
                <h3 class="text-white font-semibold">"AI Video Editing"</h3>
                {move || {
                    (!is_ultra.get()).then(|| view! {
                        <span class="text-xs text-white/60">"Ultra Pro only"</span>
                    })
                }}
            </div>
            <div class="mt-4 grid grid-cols-1 md:grid-cols-3 gap-4">
                <div class="md:col-span-2">
                    <label class="block text-sm text-white/70 mb-1">"Source URL"</label>
                    <input
                        disabled=move || !is_ultra.get()
                        prop:value=move || state.ai_source.get()
                        on:input=move |ev| state.ai_source.set(event_target_value(&ev))
                        class="w-full bg-black/40 text-white border border-white/10 rounded-lg px-3 py-2"
                        placeholder="https://..."
                    />
                </div>
                <div>
                    <label class="block text-sm text-white/70 mb-1">"Operations"</label>
                    <div class="grid grid-cols-2 gap-2 text-white/80">
                        {AiOperation::ALL
                            .into_iter()
                            .map(|op| view! {
                                <label class="flex items-center gap-2">
                                    <input
                                        type="checkbox"
                                        disabled=move || !is_ultra.get()
                                        prop:checked=move || state.ai_toggles.with(|t| t.get(op))
                                        on:change=move |ev| {
                                            let checked = event_target_checked(&ev);
                                            state.ai_toggles.update(|t| t.set(op, checked));
                                        }
                                    />
                                    <span>{op.label()}</span>
                                </label>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <div class="mt-4">
                <button
                    disabled=move || !is_ultra.get() || state.ai_loading.get()
                    on:click=move |_| state.start_ai_edit()
                    class="px-5 py-2 rounded-lg bg-emerald-600 hover:bg-emerald-700 text-white disabled:opacity-50"
                >
                    {move || if state.ai_loading.get() { "Starting..." } else { "Start AI Edit" }}
                </button>
            </div>
        </div>
    }
}

/// Retryable error card shown when the initial snapshot load fails
#[component]
fn LoadError(message: String) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <div class="bg-white/5 border border-red-500/40 rounded-2xl p-8 text-center">
            <p class="text-red-300 mb-4">
                {format!("Could not load your dashboard: {message}")}
            </p>
            <button
                on:click=move |_| state.reload()
                class="px-5 py-2 rounded-lg bg-white/10 hover:bg-white/20 text-white"
            >
                "Retry"
            </button>
        </div>
    }
}

/// An upload may be queued only with a non-empty target set and no upload
/// already in flight.
fn can_queue(selected: &[String], uploading: bool) -> bool {
    !selected.is_empty() && !uploading
}

/// DuckDuckGo favicon for a platform's external URL. Ports are not part of
/// the hostname.
fn favicon_for(url: &str) -> String {
    let host = url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .split(['/', '?', '#', ':'])
        .next()
        .unwrap_or(url);
    format!("https://icons.duckduckgo.com/ip3/{host}.ico")
}

/// Brand accent color per platform key, white fallback.
fn platform_color(key: &str) -> &'static str {
    match key {
        "instagram" => "#E1306C",
        "facebook" => "#0866FF",
        "youtube" => "#FF0000",
        "tiktok" => "#000000",
        "x" => "#111111",
        "linkedin" => "#0A66C2",
        "pinterest" => "#E60023",
        "reddit" => "#FF4500",
        "twitch" => "#6441a5",
        "discord" => "#5865F2",
        _ => "#ffffff",
    }
}

fn open_external(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favicon_uses_the_url_hostname() {
        assert_eq!(
            favicon_for("https://www.youtube.com/upload"),
            "https://icons.duckduckgo.com/ip3/www.youtube.com.ico"
        );
        assert_eq!(
            favicon_for("https://x.com"),
            "https://icons.duckduckgo.com/ip3/x.com.ico"
        );
        assert_eq!(
            favicon_for("http://localhost:8000/p?x=1"),
            "https://icons.duckduckgo.com/ip3/localhost.ico"
        );
    }

    #[test]
    fn queueing_needs_a_selection_and_an_idle_uploader() {
        let selected = vec!["instagram".to_string()];

        assert!(can_queue(&selected, false));
        assert!(!can_queue(&selected, true));
        assert!(!can_queue(&[], false));
        assert!(!can_queue(&[], true));
    }

    #[test]
    fn platform_color_falls_back_to_white() {
        assert_eq!(platform_color("instagram"), "#E1306C");
        assert_eq!(platform_color("myspace"), "#ffffff");
    }
}
