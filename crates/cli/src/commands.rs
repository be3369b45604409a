//! CLI commands

use anyhow::{Result, bail};
use clap::Subcommand;
use tasklist_http::{Credentials, Todo, TodoBoard, TodoClient, TodoFilter, TodoStats};
use tracing::info;

/// Passwords shorter than this are rejected before any request is made
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and store the session
    Login {
        email: String,

        #[arg(long, env = "TASKLIST_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Create an account
    Register {
        email: String,

        #[arg(long, env = "TASKLIST_PASSWORD", hide_env_values = true)]
        password: String,

        /// Repeat the password; must match when given
        #[arg(long)]
        confirm: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show whether a session is stored
    Status,

    /// List todos
    List {
        #[arg(short, long, default_value = "all")]
        filter: TodoFilter,
    },

    /// Add a todo
    Add {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Flip a todo between active and completed
    Toggle { id: i64 },

    /// Change a todo's title
    Rename {
        id: i64,

        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Delete a todo
    Rm { id: i64 },

    /// Delete every completed todo
    ClearCompleted,
}

impl Commands {
    pub async fn execute(self, client: &TodoClient) -> Result<()> {
        match self {
            Commands::Login { email, password } => {
                client.login(&Credentials::new(email, password)).await?;
                println!("Logged in");
                Ok(())
            }
            Commands::Register {
                email,
                password,
                confirm,
            } => {
                validate_password(&password, confirm.as_deref())?;
                match client.register(&Credentials::new(email, password)).await {
                    Ok(Some(_)) => println!("Account created, you are logged in"),
                    Ok(None) => println!("Account created, run `tasklist login` to continue"),
                    Err(e) => bail!(
                        "{}",
                        e.server_message()
                            .unwrap_or_else(|| "Registration failed".to_string())
                    ),
                }
                Ok(())
            }
            Commands::Logout => {
                client.logout()?;
                println!("Logged out");
                Ok(())
            }
            Commands::Status => {
                if client.is_authenticated() {
                    println!("Logged in to {}", client.base_url());
                } else {
                    println!("Not logged in");
                }
                Ok(())
            }
            Commands::List { filter } => {
                let board = load_board(client).await?;
                print!("{}", render_board(&board, filter));
                Ok(())
            }
            Commands::Add { title } => {
                let mut board = TodoBoard::new();
                if !board.add(client, &title.join(" ")).await? {
                    bail!("title must not be blank");
                }
                print!("{}", render_board(&board, TodoFilter::All));
                Ok(())
            }
            Commands::Toggle { id } => {
                let mut board = load_board(client).await?;
                board.toggle(client, id).await?;
                print!("{}", render_board(&board, TodoFilter::All));
                Ok(())
            }
            Commands::Rename { id, title } => {
                let mut board = load_board(client).await?;
                if !board.rename(client, id, &title.join(" ")).await? {
                    bail!("title must not be blank");
                }
                print!("{}", render_board(&board, TodoFilter::All));
                Ok(())
            }
            Commands::Rm { id } => {
                let mut board = TodoBoard::new();
                board.remove(client, id).await?;
                print!("{}", render_board(&board, TodoFilter::All));
                Ok(())
            }
            Commands::ClearCompleted => {
                let mut board = load_board(client).await?;
                let deleted = board.clear_completed(client).await?;
                info!(deleted, "cleared completed todos");
                println!("Deleted {deleted} completed todo(s)");
                print!("{}", render_board(&board, TodoFilter::All));
                Ok(())
            }
        }
    }
}

async fn load_board(client: &TodoClient) -> Result<TodoBoard> {
    let mut board = TodoBoard::new();
    board.reload(client).await?;
    Ok(board)
}

fn validate_password(password: &str, confirm: Option<&str>) -> Result<()> {
    if confirm.is_some_and(|confirm| confirm != password) {
        bail!("Passwords don't match");
    }
    if password.encode_utf16().count() < MIN_PASSWORD_LEN {
        bail!("Password must be at least {MIN_PASSWORD_LEN} characters");
    }
    Ok(())
}

fn render_todo(todo: &Todo) -> String {
    let mark = if todo.is_completed { 'x' } else { ' ' };
    format!("[{mark}] {:>4}  {}", todo.id, todo.title)
}

fn render_stats(stats: TodoStats) -> String {
    format!(
        "{} total, {} active, {} completed",
        stats.total, stats.active, stats.completed
    )
}

fn render_board(board: &TodoBoard, filter: TodoFilter) -> String {
    let mut out = String::new();
    for todo in board.visible(filter) {
        out.push_str(&render_todo(todo));
        out.push('\n');
    }
    if out.is_empty() {
        out.push_str(match filter {
            TodoFilter::All => "No todos yet\n",
            TodoFilter::Active => "No active todos\n",
            TodoFilter::Completed => "No completed todos\n",
        });
    }
    out.push_str(&render_stats(board.stats()));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> TodoBoard {
        TodoBoard::from(vec![
            Todo::new(1, "buy milk", false),
            Todo::new(12, "file taxes", true),
        ])
    }

    #[test]
    fn test_render_board() {
        assert_eq!(
            render_board(&board(), TodoFilter::All),
            "[ ]    1  buy milk\n[x]   12  file taxes\n2 total, 1 active, 1 completed\n"
        );
        assert_eq!(
            render_board(&board(), TodoFilter::Completed),
            "[x]   12  file taxes\n2 total, 1 active, 1 completed\n"
        );
    }

    #[test]
    fn test_render_empty_filter() {
        let board = TodoBoard::from(vec![]);
        assert_eq!(
            render_board(&board, TodoFilter::Active),
            "No active todos\n0 total, 0 active, 0 completed\n"
        );
    }

    #[test]
    fn test_password_validation_order() {
        let err = validate_password("abc", Some("abd")).unwrap_err();
        assert_eq!(err.to_string(), "Passwords don't match");

        let err = validate_password("abc", None).unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 6 characters");

        assert!(validate_password("secret1", Some("secret1")).is_ok());
        // Counted in UTF-16 units, like the browser form
        assert!(validate_password("😀😀😀", None).is_ok());
        assert!(validate_password("😀😀", None).is_err());
    }
}
