//! Client-side view of the todo list
//!
//! The board caches the server's list but never patches it locally: every
//! mutation is followed by a full refetch.

use crate::client::{TodoClient, error::ClientError};
use crate::types::Todo;
use std::fmt;
use std::str::FromStr;

/// List filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TodoFilter {
    pub const ALL: [TodoFilter; 3] = [Self::All, Self::Active, Self::Completed];

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Active => !todo.is_completed,
            Self::Completed => todo.is_completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for TodoFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TodoFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" | "done" => Ok(Self::Completed),
            other => Err(format!("unknown filter '{other}'")),
        }
    }
}

/// Counts shown under the list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

/// Cached list plus the dashboard operations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoBoard {
    todos: Vec<Todo>,
}

impl TodoBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: i64) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    pub fn visible(&self, filter: TodoFilter) -> impl Iterator<Item = &Todo> {
        self.todos.iter().filter(move |todo| filter.matches(todo))
    }

    pub fn stats(&self) -> TodoStats {
        let completed = self.todos.iter().filter(|t| t.is_completed).count();
        TodoStats {
            total: self.todos.len(),
            active: self.todos.len() - completed,
            completed,
        }
    }

    /// Replace the cache with the server's list
    pub async fn reload(&mut self, client: &TodoClient) -> Result<(), ClientError> {
        self.todos = client.list_todos().await?;
        Ok(())
    }

    /// Create a todo. Blank titles are ignored and return `false`.
    pub async fn add(&mut self, client: &TodoClient, title: &str) -> Result<bool, ClientError> {
        if title.trim().is_empty() {
            return Ok(false);
        }
        client.create_todo(title).await?;
        self.reload(client).await?;
        Ok(true)
    }

    pub async fn toggle(&mut self, client: &TodoClient, id: i64) -> Result<(), ClientError> {
        let todo = self.cached(id)?;
        client.toggle_todo(&todo).await?;
        self.reload(client).await
    }

    /// Save an edited title. Blank titles are ignored and return `false`.
    pub async fn rename(
        &mut self,
        client: &TodoClient,
        id: i64,
        title: &str,
    ) -> Result<bool, ClientError> {
        if title.trim().is_empty() {
            return Ok(false);
        }
        let todo = self.cached(id)?;
        client.rename_todo(&todo, title).await?;
        self.reload(client).await?;
        Ok(true)
    }

    pub async fn remove(&mut self, client: &TodoClient, id: i64) -> Result<(), ClientError> {
        client.delete_todo(id).await?;
        self.reload(client).await
    }

    /// Delete all completed todos, then refetch once
    pub async fn clear_completed(&mut self, client: &TodoClient) -> Result<usize, ClientError> {
        let deleted = client.delete_completed(&self.todos).await?;
        self.reload(client).await?;
        Ok(deleted)
    }

    fn cached(&self, id: i64) -> Result<Todo, ClientError> {
        self.get(id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("todo {id} is not in the list")))
    }
}

impl From<Vec<Todo>> for TodoBoard {
    fn from(todos: Vec<Todo>) -> Self {
        Self { todos }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i64, title: &str, is_completed: bool) -> Todo {
        Todo::new(id, title, is_completed)
    }

    fn sample() -> TodoBoard {
        TodoBoard::from(vec![
            todo(1, "buy milk", false),
            todo(2, "file taxes", true),
            todo(3, "call mum", false),
        ])
    }

    #[test]
    fn test_filters() {
        let board = sample();
        let ids = |filter| board.visible(filter).map(|t| t.id).collect::<Vec<_>>();
        assert_eq!(ids(TodoFilter::All), vec![1, 2, 3]);
        assert_eq!(ids(TodoFilter::Active), vec![1, 3]);
        assert_eq!(ids(TodoFilter::Completed), vec![2]);
    }

    #[test]
    fn test_stats() {
        assert_eq!(
            sample().stats(),
            TodoStats {
                total: 3,
                active: 2,
                completed: 1
            }
        );
        assert_eq!(TodoBoard::new().stats(), TodoStats::default());
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("Active".parse::<TodoFilter>(), Ok(TodoFilter::Active));
        assert_eq!("done".parse::<TodoFilter>(), Ok(TodoFilter::Completed));
        assert!("later".parse::<TodoFilter>().is_err());
    }
}
