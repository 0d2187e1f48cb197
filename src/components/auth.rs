//! Auth Panel Component
//!
//! Login / signup card with client-side validation. The checks here are
//! advisory only; the backend re-validates everything.

use leptos::*;

use crate::api;
use crate::state::global::AppState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthMode {
    Login,
    Signup,
}

/// Basic `local@domain.tld` shape.
fn email_valid(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => match domain.rsplit_once('.') {
            Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
            None => false,
        },
        _ => false,
    }
}

fn password_valid(password: &str) -> bool {
    password.chars().count() >= 6
}

/// The name only matters in signup mode.
fn name_valid(mode: AuthMode, name: &str) -> bool {
    match mode {
        AuthMode::Signup => name.trim().chars().count() >= 2,
        AuthMode::Login => true,
    }
}

fn form_valid(mode: AuthMode, name: &str, email: &str, password: &str) -> bool {
    email_valid(email) && password_valid(password) && name_valid(mode, name)
}

/// Auth panel component
#[component]
pub fn AuthPanel() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (mode, set_mode) = create_signal(AuthMode::Login);
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (show_password, set_show_password) = create_signal(false);
    let (loading, set_loading) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);
    let (success, set_success) = create_signal(None::<String>);

    // Switching modes clears stale feedback, nothing else
    let switch_mode = move |target: AuthMode| {
        set_mode.set(target);
        set_error.set(None);
        set_success.set(None);
    };

    let email_ok = create_memo(move |_| email_valid(&email.get()));
    let password_ok = create_memo(move |_| password_valid(&password.get()));
    let name_ok = create_memo(move |_| name_valid(mode.get(), &name.get()));
    let form_ok =
        create_memo(move |_| form_valid(mode.get(), &name.get(), &email.get(), &password.get()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !form_ok.get_untracked() || loading.get_untracked() {
            return;
        }

        set_loading.set(true);
        set_error.set(None);
        set_success.set(None);

        spawn_local(async move {
            let submitted_mode = mode.get_untracked();
            let result = match submitted_mode {
                AuthMode::Login => {
                    api::login(&email.get_untracked(), &password.get_untracked()).await
                }
                AuthMode::Signup => {
                    api::signup(
                        name.get_untracked().trim(),
                        &email.get_untracked(),
                        &password.get_untracked(),
                    )
                    .await
                }
            };

            match result {
                Ok(auth) => {
                    set_success.set(Some(
                        match submitted_mode {
                            AuthMode::Login => "Logged in successfully. Redirecting...",
                            AuthMode::Signup => "Account created. Welcome!",
                        }
                        .to_string(),
                    ));
                    state.sign_in(&auth.token, auth.user);
                }
                // Field values stay put so the user can retry
                Err(err) => set_error.set(Some(err.detail().to_string())),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div id="signup" class="bg-white rounded-2xl shadow-xl p-6 md:p-8 w-full max-w-xl">
            // Mode toggle
            <div class="flex items-center justify-between mb-6">
                <div class="inline-flex p-1 rounded-xl bg-slate-100">
                    <ModeButton label="Login" current=mode target=AuthMode::Login
                        on_click=move |_| switch_mode(AuthMode::Login) />
                    <ModeButton label="Sign up" current=mode target=AuthMode::Signup
                        on_click=move |_| switch_mode(AuthMode::Signup) />
                </div>
                <span class="hidden md:block text-slate-500 text-sm">
                    "Secure · Encrypted · Session-based"
                </span>
            </div>

            <form on:submit=on_submit class="space-y-4">
                // Name (signup only)
                {move || {
                    (mode.get() == AuthMode::Signup).then(|| view! {
                        <div>
                            <label class="block text-sm mb-1 text-slate-700">"Full name"</label>
                            <input
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                class=move || field_class(name_ok.get())
                                placeholder="Jane Doe"
                            />
                            {move || {
                                (!name_ok.get()).then(|| view! {
                                    <p class="text-red-600 text-xs mt-1">
                                        "Please enter at least 2 characters."
                                    </p>
                                })
                            }}
                        </div>
                    })
                }}

                // Email
                <div>
                    <label class="block text-sm mb-1 text-slate-700">"Email"</label>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class=move || field_class(email_ok.get())
                        placeholder="you@example.com"
                    />
                    {move || {
                        (!email_ok.get() && !email.get().is_empty()).then(|| view! {
                            <p class="text-red-600 text-xs mt-1">"Enter a valid email address."</p>
                        })
                    }}
                </div>

                // Password with show/hide toggle
                <div>
                    <div class="flex justify-between items-end">
                        <label class="block text-sm mb-1 text-slate-700">"Password"</label>
                        <button
                            type="button"
                            on:click=move |_| set_show_password.update(|s| *s = !*s)
                            class="text-xs text-indigo-600 hover:text-indigo-700"
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <input
                        type=move || if show_password.get() { "text" } else { "password" }
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class=move || field_class(password_ok.get())
                        placeholder=move || {
                            match mode.get() {
                                AuthMode::Signup => "At least 6 characters",
                                AuthMode::Login => "Your password",
                            }
                        }
                    />
                    {move || {
                        (!password_ok.get() && !password.get().is_empty()).then(|| view! {
                            <p class="text-red-600 text-xs mt-1">
                                "Password must be at least 6 characters."
                            </p>
                        })
                    }}
                </div>

                // Request feedback
                {move || {
                    error.get().map(|msg| view! {
                        <div class="rounded-lg border border-red-200 bg-red-50 text-red-700 text-sm px-3 py-2">
                            {msg}
                        </div>
                    })
                }}
                {move || {
                    success.get().map(|msg| view! {
                        <div class="rounded-lg border border-emerald-200 bg-emerald-50 text-emerald-700 text-sm px-3 py-2">
                            {msg}
                        </div>
                    })
                }}

                <button
                    type="submit"
                    disabled=move || !form_ok.get() || loading.get()
                    class=move || {
                        if !form_ok.get() || loading.get() {
                            "w-full py-3 rounded-lg text-white font-medium bg-indigo-400 cursor-not-allowed"
                        } else {
                            "w-full py-3 rounded-lg text-white font-medium bg-indigo-600 hover:bg-indigo-700 transition"
                        }
                    }
                >
                    {move || {
                        if loading.get() {
                            "Please wait…"
                        } else {
                            match mode.get() {
                                AuthMode::Login => "Login",
                                AuthMode::Signup => "Create account",
                            }
                        }
                    }}
                </button>

                // Mode switch footer
                <div class="text-center text-sm text-slate-500">
                    {move || {
                        match mode.get() {
                            AuthMode::Login => view! {
                                <span>
                                    "Don't have an account? "
                                    <button type="button"
                                        on:click=move |_| switch_mode(AuthMode::Signup)
                                        class="text-indigo-600 hover:text-indigo-700 font-medium">
                                        "Sign up"
                                    </button>
                                </span>
                            }.into_view(),
                            AuthMode::Signup => view! {
                                <span>
                                    "Already have an account? "
                                    <button type="button"
                                        on:click=move |_| switch_mode(AuthMode::Login)
                                        class="text-indigo-600 hover:text-indigo-700 font-medium">
                                        "Login"
                                    </button>
                                </span>
                            }.into_view(),
                        }
                    }}
                </div>
            </form>
        </div>
    }
}

fn field_class(valid: bool) -> &'static str {
    if valid {
        "w-full border rounded-lg px-3 py-2 outline-none transition border-slate-200 focus:border-slate-400"
    } else {
        "w-full border rounded-lg px-3 py-2 outline-none transition border-red-300 focus:border-red-400"
    }
}

#[component]
fn ModeButton(
    label: &'static str,
    current: ReadSignal<AuthMode>,
    target: AuthMode,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=on_click
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition";
                if current.get() == target {
                    format!("{} bg-white shadow text-slate-900", base)
                } else {
                    format!("{} text-slate-600 hover:text-slate-900", base)
                }
            }
        >
            {label}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_accepts_local_at_domain_tld() {
        assert!(email_valid("a@b.com"));
        assert!(email_valid("jane.doe@mail.example.org"));
    }

    #[test]
    fn email_shape_rejects_malformed_addresses() {
        assert!(!email_valid(""));
        assert!(!email_valid("a@b"));
        assert!(!email_valid("a.com"));
        assert!(!email_valid("@b.com"));
        assert!(!email_valid("a@.com"));
        assert!(!email_valid("a@b."));
    }

    #[test]
    fn password_requires_six_characters() {
        assert!(password_valid("secret1"));
        assert!(password_valid("123456"));
        assert!(!password_valid(""));
        assert!(!password_valid("12345"));
    }

    #[test]
    fn password_length_counts_characters_not_bytes() {
        // Three two-byte characters are still only three characters
        assert!(!password_valid("ééé"));
        assert!(password_valid("éééééé"));
    }

    #[test]
    fn name_rule_only_binds_in_signup_mode() {
        assert!(name_valid(AuthMode::Signup, "Jo"));
        assert!(name_valid(AuthMode::Signup, "  Jo  "));
        assert!(!name_valid(AuthMode::Signup, "J"));
        assert!(!name_valid(AuthMode::Signup, "   "));
        assert!(!name_valid(AuthMode::Signup, " X "));

        assert!(name_valid(AuthMode::Login, ""));
        assert!(name_valid(AuthMode::Login, "J"));
    }

    #[test]
    fn submit_enable_is_the_exact_conjunction() {
        let cases = [
            ("Jane", "a@b.com", "secret1"),
            ("J", "a@b.com", "secret1"),
            ("Jane", "a@b", "secret1"),
            ("Jane", "a@b.com", "short"),
            ("", "", ""),
        ];

        for (name, email, password) in cases {
            for mode in [AuthMode::Login, AuthMode::Signup] {
                assert_eq!(
                    form_valid(mode, name, email, password),
                    email_valid(email) && password_valid(password) && name_valid(mode, name),
                    "mode {mode:?}, name {name:?}, email {email:?}, password {password:?}",
                );
            }
        }
    }

    #[test]
    fn login_mode_ignores_an_empty_name() {
        assert!(form_valid(AuthMode::Login, "", "a@b.com", "secret1"));
        assert!(!form_valid(AuthMode::Signup, "", "a@b.com", "secret1"));
    }
}
