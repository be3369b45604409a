//! Login page

use crate::app::Route;
use crate::client::{ClientError, api_client};
use crate::components::AuthLayout;
use crate::forms::{LOGIN_FAILED, LoginForm};
use tasklist_http::{Credentials, TokenPair};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

async fn login(credentials: Credentials) -> Result<TokenPair, ClientError> {
    api_client()?.login(&credentials).await
}

#[function_component(Login)]
pub fn login_page() -> Html {
    let navigator = use_navigator();
    let form = use_state(LoginForm::default);
    let error = use_state(|| Option::<String>::None);
    let loading = use_state(|| false);
    let show_password = use_state(|| false);

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginForm {
                email: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_password = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginForm {
                password: input.value(),
                ..(*form).clone()
            });
        })
    };

    let submit = {
        let form = form.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |_: ()| {
            if *loading || !form.can_submit() {
                return;
            }
            let credentials = form.credentials();
            let error = error.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();

            loading.set(true);
            error.set(None);
            spawn_local(async move {
                let result = login(credentials).await;
                loading.set(false);
                match result {
                    Ok(_) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("login failed: {e}");
                        error.set(Some(LOGIN_FAILED.to_string()));
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

    let disabled = *loading || !form.can_submit();

    html! {
        <AuthLayout title="Welcome Back" subtitle="Login to your account">
            <div class="mb-6">
                <label class="block text-sm font-medium text-gray-700 mb-2">{"Email"}</label>
                <input
                    type="email"
                    placeholder="you@example.com"
                    class="w-full px-4 py-3 border border-gray-200 rounded-lg focus:border-blue-500 focus:ring-2 focus:ring-blue-100 outline-none"
                    value={form.email.clone()}
                    oninput={on_email}
                    onkeypress={on_enter.clone()}
                />
            </div>
            <div class="mb-6">
                <label class="block text-sm font-medium text-gray-700 mb-2">{"Password"}</label>
                <div class="relative">
                    <input
                        type={if *show_password { "text" } else { "password" }}
                        placeholder="••••••••"
                        class="w-full px-4 py-3 pr-12 border border-gray-200 rounded-lg focus:border-blue-500 focus:ring-2 focus:ring-blue-100 outline-none"
                        value={form.password.clone()}
                        oninput={on_password}
                        onkeypress={on_enter}
                    />
                    <button
                        type="button"
                        class="absolute right-3 top-1/2 -translate-y-1/2 text-sm text-gray-500"
                        onclick={toggle_password}
                    >
                        {if *show_password { "Hide" } else { "Show" }}
                    </button>
                </div>
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
                {if *loading { "Logging in..." } else { "Login" }}
            </button>
            <p class="mt-6 text-center text-sm text-gray-500">
                {"Don't have an account? "}
                <Link<Route> to={Route::Register} classes={classes!("text-blue-500", "font-semibold")}>{"Sign up"}</Link<Route>>
            </p>
        </AuthLayout>
    }
}
