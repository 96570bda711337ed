#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use crudmap::drivers::InMemoryTestResponseBuilder;
use crudmap::traits::FieldSet;
use crudmap::types::{RawQueryResult, SqlValue};

crudmap::entity! {
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Todo {
        pub id: Option<i32>,
        pub title: Option<String>,
        pub finished: Option<bool>,
        pub created_at: Option<NaiveDateTime>,
        pub deadline: Option<NaiveDate>,
        pub finished_at: Option<NaiveDateTime>,
    }
}

pub const TODO_COLUMNS: [&str; 6] = [
    "id",
    "title",
    "finished",
    "created_at",
    "deadline",
    "finished_at",
];

pub fn timestamp(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .unwrap()
}

/// The todo the demo script starts from.
pub fn new_todo() -> Todo {
    Todo {
        id: None,
        title: Some("test".to_string()),
        finished: Some(false),
        created_at: Some(timestamp(1, 9)),
        deadline: NaiveDate::from_ymd_opt(2024, 3, 8),
        finished_at: None,
    }
}

/// A result set holding the given todos, as the store would return them.
pub fn todo_rows(todos: &[&Todo]) -> RawQueryResult {
    todos
        .iter()
        .fold(
            InMemoryTestResponseBuilder::new().columns(&TODO_COLUMNS),
            |builder, todo| builder.row(Todo::fields().iter().map(|f| f.read(todo))),
        )
        .build()
}

pub fn generated_id(id: i32) -> RawQueryResult {
    InMemoryTestResponseBuilder::new()
        .columns(&["id"])
        .row([SqlValue::Int32(id)])
        .build()
}
