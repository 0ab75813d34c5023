//! Simple CLI demo for the todo-list engine.
//!
//! Replays the canonical seed and a few actions through the store, printing
//! the ordered list after each dispatch.

use std::sync::Arc;

use tasklist::{Todo, TodoAction, TodoEnvironment, TodoListState, TodoReducer};
use tasklist_core::environment::LocaleCollation;
use tasklist_runtime::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_todos(todos: &[Todo]) {
    for todo in todos {
        let status = if todo.resolved { "x" } else { " " };
        println!("  [{}] {}", status, todo.text);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tasklist=debug,tasklist_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Todo List ===\n");

    let collation = Arc::new(LocaleCollation::new("en")?);
    let seed = vec![
        Todo::new("C Third todo", false),
        Todo::new("A second resolved todo", true),
        Todo::new("A first resolved todo", true),
        Todo::new("B second todo", false),
        Todo::new("C third resolved todo", true),
    ];

    let env = TodoEnvironment::new(collation.clone());
    let store = Store::new(
        TodoListState::seeded(seed, collation.as_ref()),
        TodoReducer::new(),
        env,
    );

    println!("Seeded list:");
    let todos = store.state(|s| s.todos.clone()).await;
    print_todos(&todos);

    println!("\n>>> Add \"A This is first now\"");
    store
        .send(TodoAction::Add {
            text: "A This is first now".to_string(),
        })
        .await?;
    let todos = store.state(|s| s.todos.clone()).await;
    print_todos(&todos);

    println!("\n>>> Resolve \"B second todo\"");
    store
        .send(TodoAction::Resolve {
            text: "B second todo".to_string(),
        })
        .await?;
    let todos = store.state(|s| s.todos.clone()).await;
    print_todos(&todos);

    println!("\n>>> Remove \"C Third todo\"");
    store
        .send(TodoAction::Remove {
            text: "C Third todo".to_string(),
        })
        .await?;
    let todos = store.state(|s| s.todos.clone()).await;
    print_todos(&todos);

    println!("\n>>> Reset");
    store.send(TodoAction::Reset).await?;
    let state = store.state(Clone::clone).await;
    print_todos(&state.todos);

    println!("\nState as the view layer sees it:");
    println!("{}", serde_json::to_string_pretty(&state.todos)?);

    Ok(())
}
