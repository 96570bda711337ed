//! Walks a todo through create, find, update, page and delete against the
//! database named by `DATABASE_URL`.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use crudmap::{ClientConfig, CrudClient, PageRequest, Result};
use tracing_subscriber::EnvFilter;

crudmap::entity! {
    #[derive(Debug, Default)]
    struct Todo {
        id: Option<i32>,
        title: Option<String>,
        finished: Option<bool>,
        created_at: Option<NaiveDateTime>,
        deadline: Option<NaiveDate>,
        finished_at: Option<NaiveDateTime>,
    }
}

const CREATE_TODO_TABLE: &str = "CREATE TABLE IF NOT EXISTS todo (
    id SERIAL PRIMARY KEY,
    title VARCHAR(255) NOT NULL,
    finished BOOLEAN NOT NULL,
    created_at TIMESTAMP NOT NULL,
    deadline DATE,
    finished_at TIMESTAMP
)";

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn dump(todo: &Todo) {
    println!("---dump start----");
    println!("{:?}", todo.id);
    println!("{:?}", todo.title);
    println!("{:?}", todo.created_at);
    println!("{:?}", todo.deadline);
    println!("{:?}", todo.finished);
    println!("{:?}", todo.finished_at);
    println!("---dump end----");
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = ClientConfig::from_env()?;
    let client = CrudClient::connect(&config).await?;
    client.driver().execute(CREATE_TODO_TABLE, &[]).await?;
    let todo_mapper = client.mapper::<Todo>()?;

    let now = Local::now().naive_local();
    let mut new_todo = Todo {
        title: Some("test".to_string()),
        finished: Some(false),
        created_at: Some(now),
        deadline: Some(now.date() + Duration::days(7)),
        ..Default::default()
    };
    todo_mapper.create(&mut new_todo).await?;
    tracing::info!(id = ?new_todo.id, "created todo");

    let Some(mut todo) = todo_mapper.find_one(new_todo.id).await? else {
        tracing::warn!(id = ?new_todo.id, "created todo not found");
        return Ok(());
    };
    dump(&todo);

    todo.title = todo.title.map(|title| format!("{} Edit", title));
    todo.finished = Some(true);
    todo.finished_at = Some(Local::now().naive_local());
    if todo_mapper.update(&todo).await? {
        let criteria = Todo {
            title: Some("test Edit".to_string()),
            ..Default::default()
        };
        let page = todo_mapper
            .find_page_by_criteria(Some(&criteria), PageRequest::of(0, 10))
            .await?;
        tracing::info!(total = page.total, "found todos");
        page.iter().for_each(dump);
    }

    if todo_mapper.delete(todo.id).await? {
        if let Some(todo) = todo_mapper.find_one(todo.id).await? {
            dump(&todo);
        }
    }

    Ok(())
}
