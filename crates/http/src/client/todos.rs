//! Todo collection client methods

use super::{ApiRequest, ClientError, TodoClient};
use crate::types::{CreateTodoRequest, Todo};
use futures::future::try_join_all;
use reqwest::Method;

pub const TODOS_PATH: &str = "/api/todos";

fn todo_path(id: i64) -> String {
    format!("{TODOS_PATH}/{id}")
}

impl TodoClient {
    /// Fetch the full list
    pub async fn list_todos(&self) -> Result<Vec<Todo>, ClientError> {
        self.execute(&ApiRequest::new(Method::GET, TODOS_PATH)).await
    }

    /// Create a todo
    pub async fn create_todo(&self, title: &str) -> Result<Todo, ClientError> {
        let request = ApiRequest::new(Method::POST, TODOS_PATH).json(&CreateTodoRequest {
            title: title.to_string(),
        })?;
        self.execute(&request).await
    }

    /// Replace a todo with `todo`, sending every field
    pub async fn update_todo(&self, todo: &Todo) -> Result<Todo, ClientError> {
        let request = ApiRequest::new(Method::PUT, todo_path(todo.id)).json(todo)?;
        self.execute(&request).await
    }

    /// Flip the completion flag, leaving the other fields untouched
    pub async fn toggle_todo(&self, todo: &Todo) -> Result<Todo, ClientError> {
        self.update_todo(&todo.toggled()).await
    }

    /// Change the title, leaving the other fields untouched
    pub async fn rename_todo(&self, todo: &Todo, title: &str) -> Result<Todo, ClientError> {
        self.update_todo(&todo.renamed(title)).await
    }

    /// Delete a todo
    pub async fn delete_todo(&self, id: i64) -> Result<(), ClientError> {
        self.execute_empty(&ApiRequest::new(Method::DELETE, todo_path(id)))
            .await
    }

    /// Delete every completed todo in `todos`, concurrently.
    ///
    /// Fails with the first error; deletes already sent are not undone.
    pub async fn delete_completed(&self, todos: &[Todo]) -> Result<usize, ClientError> {
        let deletes = todos
            .iter()
            .filter(|todo| todo.is_completed)
            .map(|todo| self.delete_todo(todo.id));
        let deleted = try_join_all(deletes).await?;
        Ok(deleted.len())
    }
}
