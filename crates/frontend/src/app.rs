use crate::client::has_session;
use crate::pages::{Dashboard, Login, Register};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <Login /> },
        Route::Register => html! { <Register /> },
        Route::Dashboard => html! {
            <Protected>
                <Dashboard />
            </Protected>
        },
        Route::Root | Route::NotFound => html! { <Redirect<Route> to={Route::Login} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProtectedProps {
    pub children: Children,
}

/// Route guard: renders its children only while an access token is stored
#[function_component(Protected)]
pub fn protected(props: &ProtectedProps) -> Html {
    if has_session() {
        html! { <>{ props.children.clone() }</> }
    } else {
        html! { <Redirect<Route> to={Route::Login} /> }
    }
}
