//! Record types for the indexed struct tables
//!
//! Each model has an integer `id` primary key. A struct-typed field `name`
//! is stored as a foreign key column `"{name}Id"` pointing at the target
//! table's `id`; the field itself is only populated when eagerly loaded.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of the `"MyStruct"` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct MyStruct {
    pub id: i32,
    pub one: i64,
    pub two: i64,
}

/// Row of the `"MyOtherStruct"` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct MyOtherStruct {
    pub id: i32,
    pub value: i64,
}

/// Row of the `"MyComplexStruct"` table, relations unloaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MyComplexStruct {
    pub id: i32,
    #[sqlx(rename = "oneId")]
    pub one_id: i32,
    #[sqlx(rename = "twoId")]
    pub two_id: i32,
}

/// A `MyComplexStruct` with `one` and `two` loaded in the same query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyComplexStructWithRelations {
    pub id: i32,
    pub one_id: i32,
    pub two_id: i32,
    pub one: MyStruct,
    pub two: MyOtherStruct,
}

impl MyComplexStructWithRelations {
    /// The bare record, without its relations
    pub fn record(&self) -> MyComplexStruct {
        MyComplexStruct {
            id: self.id,
            one_id: self.one_id,
            two_id: self.two_id,
        }
    }
}

/// Values for a new `"MyStruct"` row (id assigned by the database)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewMyStruct {
    pub one: i64,
    pub two: i64,
}

/// Values for a new `"MyOtherStruct"` row (id assigned by the database)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewMyOtherStruct {
    pub value: i64,
}
