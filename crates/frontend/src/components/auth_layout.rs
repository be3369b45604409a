//! Centered card shared by the login and registration pages

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AuthLayoutProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub children: Children,
}

#[function_component(AuthLayout)]
pub fn auth_layout(props: &AuthLayoutProps) -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center p-5 bg-gradient-to-br from-indigo-400 to-purple-700">
            <div class="w-full max-w-md bg-white rounded-2xl p-12 shadow-2xl">
                <div class="text-center mb-8">
                    <div class="w-16 h-16 mx-auto mb-5 rounded-2xl flex items-center justify-center text-3xl text-white bg-gradient-to-br from-indigo-400 to-purple-700">
                        {"✓"}
                    </div>
                    <h2 class="text-3xl font-bold text-gray-900 mb-2">{&props.title}</h2>
                    <p class="text-gray-500 m-0">{&props.subtitle}</p>
                </div>
                {props.children.clone()}
            </div>
        </div>
    }
}
