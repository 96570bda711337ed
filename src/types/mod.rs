mod page;
mod row;
mod sql_value;
mod statement;

pub use page::{Page, PageRequest};
pub use row::{ExecuteResult, QueryResult, RawQueryResult, Row};
pub use sql_value::{FromSqlValue, SqlValue, ValueError};
pub use statement::{BoundParam, ParamBinder, Statement};
