//! crudmap - Generic CRUD SQL derived from an entity's registered fields
//!
//! # Example
//! ```ignore
//! use crudmap::{ClientConfig, CrudClient, PageRequest};
//!
//! crudmap::entity! {
//!     #[derive(Debug, Default)]
//!     struct Todo {
//!         id: Option<i32>,
//!         title: Option<String>,
//!         finished: Option<bool>,
//!     }
//! }
//!
//! let client = CrudClient::connect(&ClientConfig::from_env()?).await?;
//! let todos = client.mapper::<Todo>()?;
//!
//! let mut todo = Todo { title: Some("test".into()), ..Default::default() };
//! todos.create(&mut todo).await?;            // INSERT INTO todo (id, title, finished) ...
//! let found = todos.find_one(todo.id).await?; // SELECT id, title, finished FROM todo WHERE id = $1
//!
//! let criteria = Todo { finished: Some(false), ..Default::default() };
//! let page = todos
//!     .find_page_by_criteria(Some(&criteria), PageRequest::of(0, 10))
//!     .await?;
//! ```

pub mod builders;
pub mod clauses;
pub mod config;
pub mod dialect;
pub mod drivers;
pub mod error;
pub mod mapper;
pub mod naming;
pub mod traits;
pub mod types;

mod client;
mod macros;

// Re-export main types for convenient access
pub use clauses::WhereClause;
pub use client::CrudClient;
pub use config::ClientConfig;
pub use dialect::{Dialect, DialectKind};
pub use error::{CrudMapError, Result};
pub use mapper::CrudMapper;
pub use traits::{DatabaseDriver, Entity, Field, FieldSet};
pub use types::{Page, PageRequest, SqlValue, Statement};
