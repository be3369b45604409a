//! Todo dashboard

use crate::app::Route;
use crate::client::{ClientError, api_client};
use crate::components::LoadingSpinner;
use tasklist_http::{Todo, TodoBoard, TodoFilter};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// A user action against the board. Each one ends in a full refetch.
#[derive(Debug, Clone, PartialEq)]
enum BoardAction {
    Reload,
    Add(String),
    Toggle(i64),
    Rename(i64, String),
    Remove(i64),
    ClearCompleted,
}

impl BoardAction {
    /// Blank titles never reach the network
    fn is_noop(&self) -> bool {
        match self {
            Self::Add(title) | Self::Rename(_, title) => title.trim().is_empty(),
            _ => false,
        }
    }

    async fn apply(self, mut board: TodoBoard) -> Result<TodoBoard, ClientError> {
        let client = api_client()?;
        match self {
            Self::Reload => board.reload(&client).await?,
            Self::Add(title) => {
                board.add(&client, title.trim()).await?;
            }
            Self::Toggle(id) => board.toggle(&client, id).await?,
            Self::Rename(id, title) => {
                board.rename(&client, id, title.trim()).await?;
            }
            Self::Remove(id) => board.remove(&client, id).await?,
            Self::ClearCompleted => {
                board.clear_completed(&client).await?;
            }
        }
        Ok(board)
    }
}

fn action_error(action: &BoardAction) -> &'static str {
    match action {
        BoardAction::Reload => "Failed to load todos",
        BoardAction::Add(_) => "Failed to add todo",
        BoardAction::Toggle(_) => "Failed to update todo",
        BoardAction::Rename(..) => "Failed to rename todo",
        BoardAction::Remove(_) => "Failed to delete todo",
        BoardAction::ClearCompleted => "Failed to clear completed todos",
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let navigator = use_navigator();
    let board = use_state(TodoBoard::new);
    let filter = use_state(TodoFilter::default);
    let new_title = use_state(String::new);
    let editing = use_state(|| Option::<(i64, String)>::None);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    let dispatch = {
        let board = board.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |action: BoardAction| {
            if action.is_noop() {
                return;
            }
            let board = board.clone();
            let loading = loading.clone();
            let error = error.clone();
            let message = action_error(&action);
            let current = (*board).clone();

            spawn_local(async move {
                match action.apply(current).await {
                    Ok(next) => {
                        board.set(next);
                        error.set(None);
                    }
                    // The login redirect is already under way
                    Err(ClientError::SessionExpired) => {}
                    Err(e) => {
                        tracing::warn!("{message}: {e}");
                        error.set(Some(message.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            dispatch.emit(BoardAction::Reload);
            || ()
        });
    }

    let on_new_title = {
        let new_title = new_title.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            new_title.set(input.value());
        })
    };

    let add = {
        let new_title = new_title.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |_: ()| {
            if new_title.trim().is_empty() {
                return;
            }
            dispatch.emit(BoardAction::Add((*new_title).clone()));
            new_title.set(String::new());
        })
    };

    let on_add_key = {
        let add = add.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                add.emit(());
            }
        })
    };

    let logout = Callback::from(move |_: MouseEvent| {
        if let Err(e) = api_client().and_then(|client| client.logout()) {
            tracing::error!("failed to clear session: {e}");
        }
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    });

    let stats = board.stats();
    let visible: Vec<Todo> = board.visible(*filter).cloned().collect();

    let filter_buttons = TodoFilter::ALL.iter().map(|&f| {
        let filter_state = filter.clone();
        let active = *filter == f;
        html! {
            <button
                class={classes!(
                    "px-4", "py-2", "rounded-lg", "text-sm", "font-medium",
                    if active { "bg-blue-500 text-white" } else { "bg-gray-100 text-gray-600" }
                )}
                onclick={Callback::from(move |_| filter_state.set(f))}
            >
                {f.label()}
            </button>
        }
    });

    let rows = visible.into_iter().map(|todo| {
        html! {
            <TodoRow
                key={todo.id}
                todo={todo.clone()}
                editing={match &*editing {
                    Some((id, draft)) if *id == todo.id => Some(draft.clone()),
                    _ => None,
                }}
                on_edit_change={{
                    let editing = editing.clone();
                    Callback::from(move |state: Option<(i64, String)>| editing.set(state))
                }}
                dispatch={dispatch.clone()}
            />
        }
    });

    let empty_message = match *filter {
        TodoFilter::All => "No todos yet. Add one above!",
        TodoFilter::Active => "No active todos",
        TodoFilter::Completed => "No completed todos",
    };

    html! {
        <div class="min-h-screen bg-gray-50 py-10 px-4">
            <div class="max-w-2xl mx-auto">
                <div class="flex items-center justify-between mb-8">
                    <div>
                        <h1 class="text-3xl font-bold text-gray-900">{"My Todos"}</h1>
                        <p class="text-gray-500">
                            {format!("{} active, {} completed", stats.active, stats.completed)}
                        </p>
                    </div>
                    <button
                        class="px-4 py-2 rounded-lg border border-gray-200 text-gray-600 hover:bg-gray-100"
                        onclick={logout}
                    >
                        {"Logout"}
                    </button>
                </div>

                <div class="bg-white rounded-2xl shadow p-6 mb-6">
                    <div class="flex gap-3">
                        <input
                            type="text"
                            placeholder="What needs to be done?"
                            class="flex-1 px-4 py-3 border border-gray-200 rounded-lg focus:border-blue-500 outline-none"
                            value={(*new_title).clone()}
                            oninput={on_new_title}
                            onkeypress={on_add_key}
                        />
                        <button
                            class="px-6 py-3 rounded-lg text-white font-semibold bg-blue-500 hover:bg-blue-600 disabled:bg-gray-300"
                            disabled={new_title.trim().is_empty()}
                            onclick={add.reform(|_| ())}
                        >
                            {"Add"}
                        </button>
                    </div>
                </div>

                if let Some(message) = (*error).clone() {
                    <div class="mb-6 px-4 py-3 rounded-lg bg-red-50 border border-red-200 text-red-600 text-sm">
                        {message}
                    </div>
                }

                <div class="grid grid-cols-3 gap-4 mb-6">
                    <StatCard label="Total" value={stats.total} />
                    <StatCard label="Active" value={stats.active} />
                    <StatCard label="Completed" value={stats.completed} />
                </div>

                <div class="flex items-center justify-between mb-4">
                    <div class="flex gap-2">{for filter_buttons}</div>
                    if stats.completed > 0 {
                        <button
                            class="text-sm text-red-500 hover:text-red-600"
                            onclick={dispatch.reform(|_| BoardAction::ClearCompleted)}
                        >
                            {format!("Clear completed ({})", stats.completed)}
                        </button>
                    }
                </div>

                <div class="bg-white rounded-2xl shadow divide-y divide-gray-100">
                    if *loading {
                        <div class="py-12"><LoadingSpinner /></div>
                    } else if board.visible(*filter).next().is_none() {
                        <p class="py-12 text-center text-gray-400">{empty_message}</p>
                    } else {
                        {for rows}
                    }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    label: AttrValue,
    value: usize,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-white rounded-xl shadow p-4 text-center">
            <div class="text-2xl font-bold text-gray-900">{props.value}</div>
            <div class="text-sm text-gray-500">{props.label.clone()}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TodoRowProps {
    todo: Todo,
    /// Draft title while this row is being edited
    editing: Option<String>,
    on_edit_change: Callback<Option<(i64, String)>>,
    dispatch: Callback<BoardAction>,
}

#[function_component(TodoRow)]
fn todo_row(props: &TodoRowProps) -> Html {
    let id = props.todo.id;

    let toggle = props.dispatch.reform(move |_: Event| BoardAction::Toggle(id));
    let remove = props.dispatch.reform(move |_: MouseEvent| BoardAction::Remove(id));

    let start_edit = {
        let title = props.todo.title.clone();
        props
            .on_edit_change
            .reform(move |_: MouseEvent| Some((id, title.clone())))
    };
    let cancel = props.on_edit_change.reform(|_: MouseEvent| None);

    if let Some(draft) = props.editing.clone() {
        let on_input = props.on_edit_change.reform(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Some((id, input.value()))
        });
        let save = {
            let dispatch = props.dispatch.clone();
            let on_edit_change = props.on_edit_change.clone();
            let draft = draft.clone();
            Callback::from(move |_: ()| {
                if draft.trim().is_empty() {
                    return;
                }
                dispatch.emit(BoardAction::Rename(id, draft.clone()));
                on_edit_change.emit(None);
            })
        };
        let on_key = {
            let save = save.clone();
            let on_edit_change = props.on_edit_change.clone();
            Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
                "Enter" => save.emit(()),
                "Escape" => on_edit_change.emit(None),
                _ => {}
            })
        };

        return html! {
            <div class="flex items-center gap-3 px-6 py-4">
                <input
                    type="text"
                    class="flex-1 px-3 py-2 border border-blue-500 rounded-lg outline-none"
                    value={draft}
                    oninput={on_input}
                    onkeydown={on_key}
                />
                <button class="text-sm text-blue-500 font-semibold" onclick={save.reform(|_| ())}>
                    {"Save"}
                </button>
                <button class="text-sm text-gray-500" onclick={cancel}>{"Cancel"}</button>
            </div>
        };
    }

    html! {
        <div class="flex items-center gap-3 px-6 py-4 group">
            <input
                type="checkbox"
                class="w-5 h-5 accent-blue-500"
                checked={props.todo.is_completed}
                onchange={toggle}
            />
            <span class={classes!(
                "flex-1",
                if props.todo.is_completed { "line-through text-gray-400" } else { "text-gray-800" }
            )}>
                {props.todo.title.clone()}
            </span>
            <button class="text-sm text-gray-500 hover:text-blue-500" onclick={start_edit}>
                {"Edit"}
            </button>
            <button class="text-sm text-gray-500 hover:text-red-500" onclick={remove}>
                {"Delete"}
            </button>
        </div>
    }
}
