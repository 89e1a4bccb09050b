//! Simple CLI demo for the home screen.
//!
//! Drives the controller against the mock gateways end to end: activation,
//! create, edit, delete, with the alert channel printed after each step.
//! Point `TODO_API_URL` at a real backend and swap in the HTTP gateways to
//! run against a live server.

use std::time::Duration;
use todo_client_home::mocks::{MockProfileGateway, MockTodoGateway};
use todo_client_home::{
    AlertChannel, HomeController, HomeEnvironment, IdentityStream, Todo, TodoId, User,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("=== Todo Home Demo ===\n");

    let todos = MockTodoGateway::with_items(vec![Todo::new(
        TodoId::new("seed-1"),
        "Buy milk",
        "two bottles",
    )]);
    let profile = MockProfileGateway::with_profile(User::new("jane@example.com"));
    let alerts = AlertChannel::new();
    let identity = IdentityStream::with_user(User::new("jane@example.com"));

    let env = HomeEnvironment::new(todos, profile, alerts.clone());
    let controller = HomeController::new(env, &identity);

    // Activate: page 1 + profile
    let mut handle = controller.activate().await?;
    handle.wait_with_timeout(Duration::from_secs(5)).await?;
    print_list(&controller, "After activation").await;

    // Create a todo
    controller.set_title("Write documentation".to_string()).await?;
    controller.submit().await?;
    tokio::time::sleep(Duration::from_millis(100)).await;
    print_list(&controller, "After create").await;

    // Edit the seeded todo
    let first = controller.state(|s| s.todos[0].clone()).await;
    controller.edit_todo(first.clone()).await?;
    controller.set_title("Buy oat milk".to_string()).await?;
    controller.submit().await?;
    tokio::time::sleep(Duration::from_millis(100)).await;
    print_list(&controller, "After edit").await;

    // Delete it
    controller.delete_todo(first.id).await?;
    tokio::time::sleep(Duration::from_millis(100)).await;
    println!("Alert: {:?}", alerts.current());
    print_list(&controller, "After delete").await;

    controller.shutdown(Duration::from_secs(5)).await?;
    Ok(())
}

async fn print_list(
    controller: &HomeController<MockTodoGateway, MockProfileGateway>,
    label: &str,
) {
    let (todos, total) = controller
        .state(|s| (s.todos.clone(), s.pagination.total_items))
        .await;
    println!("{label}: {total} total");
    for todo in todos {
        println!("  - [{}] {}", todo.id, todo.title);
    }
    println!();
}
