//! Registration page

use crate::app::Route;
use crate::client::{ClientError, api_client};
use crate::components::AuthLayout;
use crate::forms::{PasswordStrength, RegisterForm, registration_error_message, strength_meter_percent};
use tasklist_http::{Credentials, TokenPair};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

async fn register(credentials: Credentials) -> Result<Option<TokenPair>, ClientError> {
    api_client()?.register(&credentials).await
}

#[function_component(Register)]
pub fn register_page() -> Html {
    let navigator = use_navigator();
    let form = use_state(RegisterForm::default);
    let error = use_state(|| Option::<String>::None);
    let loading = use_state(|| false);
    let show_password = use_state(|| false);

    let on_field = |apply: fn(&mut RegisterForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };
    let on_email = on_field(|f, v| f.email = v);
    let on_password = on_field(|f, v| f.password = v);
    let on_confirm = on_field(|f, v| f.confirm_password = v);

    let submit = {
        let form = form.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |_: ()| {
            if *loading || !form.can_submit() {
                return;
            }
            let credentials = match form.validate() {
                Ok(credentials) => credentials,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            let error = error.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();

            loading.set(true);
            error.set(None);
            spawn_local(async move {
                let result = register(credentials).await;
                loading.set(false);
                match result {
                    Ok(tokens) => {
                        let next = if tokens.is_some() {
                            Route::Dashboard
                        } else {
                            Route::Login
                        };
                        if let Some(navigator) = navigator {
                            navigator.push(&next);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("registration failed: {e}");
                        error.set(Some(registration_error_message(&e)));
                    }
                }
            });
        })
    };

    let on_enter = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                submit.emit(());
            }
        })
    };

    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_| show_password.set(!*show_password))
    };

    let input_type = if *show_password { "text" } else { "password" };
    let strength = PasswordStrength::of(&form.password);
    let mismatch = form.shows_mismatch();
    let disabled = *loading || !form.can_submit();

    html! {
        <AuthLayout title="Create Account" subtitle="Sign up to get started">
            <div class="mb-6">
                <label class="block text-sm font-medium text-gray-700 mb-2">{"Email"}</label>
                <input
                    type="email"
                    placeholder="you@example.com"
                    class="w-full px-4 py-3 border border-gray-200 rounded-lg focus:border-blue-500 outline-none"
                    value={form.email.clone()}
                    oninput={on_email}
                    onkeypress={on_enter.clone()}
                />
            </div>
            <div class="mb-6">
                <label class="block text-sm font-medium text-gray-700 mb-2">{"Password"}</label>
                <div class="relative">
                    <input
                        type={input_type}
                        placeholder="••••••••"
                        class="w-full px-4 py-3 pr-12 border border-gray-200 rounded-lg focus:border-blue-500 outline-none"
                        value={form.password.clone()}
                        oninput={on_password}
                        onkeypress={on_enter.clone()}
                    />
                    <button
                        type="button"
                        class="absolute right-3 top-1/2 -translate-y-1/2 text-sm text-gray-500"
                        onclick={toggle_password}
                    >
                        {if *show_password { "Hide" } else { "Show" }}
                    </button>
                </div>
                if let Some(strength) = strength {
                    <div class="mt-2">
                        <div class="h-1 bg-gray-200 rounded overflow-hidden">
                            <div
                                class={classes!("h-full", "transition-all", strength.color())}
                                style={format!("width: {}%", strength_meter_percent(&form.password))}
                            ></div>
                        </div>
                        <p class="mt-1 text-xs text-gray-500">{strength.label()}</p>
                    </div>
                }
            </div>
            <div class="mb-6">
                <label class="block text-sm font-medium text-gray-700 mb-2">{"Confirm Password"}</label>
                <input
                    type={input_type}
                    placeholder="••••••••"
                    class={classes!(
                        "w-full", "px-4", "py-3", "border", "rounded-lg", "outline-none",
                        if mismatch { "border-red-500" } else { "border-gray-200" }
                    )}
                    value={form.confirm_password.clone()}
                    oninput={on_confirm}
                    onkeypress={on_enter}
                />
                if mismatch {
                    <p class="mt-1 text-xs text-red-500">{"Passwords don't match"}</p>
                }
            </div>
            if let Some(message) = (*error).clone() {
                <div class="mb-6 px-4 py-3 rounded-lg bg-red-50 border border-red-200 text-red-600 text-sm">
                    {message}
                </div>
            }
            <button
                class="w-full py-3 rounded-lg text-white font-semibold bg-blue-500 hover:bg-blue-600 disabled:bg-gray-300 disabled:cursor-not-allowed"
                disabled={disabled}
                onclick={submit.reform(|_| ())}
            >
                {if *loading { "Creating account..." } else { "Create Account" }}
            </button>
            <p class="mt-6 text-center text-sm text-gray-500">
                {"Already have an account? "}
                <Link<Route> to={Route::Login} classes={classes!("text-blue-500", "font-semibold")}>{"Login"}</Link<Route>>
            </p>
        </AuthLayout>
    }
}
