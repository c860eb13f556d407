//! MyComplexStruct repository
//!
//! - find_many_with_relations: both relations JOINed in one statement (no N+1)
//! - insert: relation targets and the record in one transaction
//!
//! Value columns are read through `::BIGINT` so tables declared with
//! INTEGER (Prisma `Int`) decode as well as BIGINT ones. Any other column
//! mismatch surfaces as `StructqError::Database`.

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Row};

use crate::models::{
    MyComplexStruct, MyComplexStructWithRelations, MyOtherStruct, MyStruct, NewMyOtherStruct,
    NewMyStruct,
};
use crate::Result;

const FIND_MANY_WITH_RELATIONS: &str = r#"
    SELECT
        c.id,
        c."oneId" AS one_id,
        c."twoId" AS two_id,
        o.id AS one_ref_id,
        o.one::BIGINT AS one_one,
        o.two::BIGINT AS one_two,
        t.id AS two_ref_id,
        t.value::BIGINT AS two_value
    FROM "MyComplexStruct" c
    JOIN "MyStruct" o ON o.id = c."oneId"
    JOIN "MyOtherStruct" t ON t.id = c."twoId"
    ORDER BY c.id
"#;

impl<'r> FromRow<'r, PgRow> for MyComplexStructWithRelations {
    fn from_row(r: &'r PgRow) -> std::result::Result<Self, sqlx::Error> {
        Ok(MyComplexStructWithRelations {
            id: r.try_get("id")?,
            one_id: r.try_get("one_id")?,
            two_id: r.try_get("two_id")?,
            one: MyStruct {
                id: r.try_get("one_ref_id")?,
                one: r.try_get("one_one")?,
                two: r.try_get("one_two")?,
            },
            two: MyOtherStruct {
                id: r.try_get("two_ref_id")?,
                value: r.try_get("two_value")?,
            },
        })
    }
}

/// Repository over `"MyComplexStruct"` and its two relations
pub struct ComplexStructRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ComplexStructRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All records with `one` and `two` populated, ordered by id.
    pub async fn find_many_with_relations(&self) -> Result<Vec<MyComplexStructWithRelations>> {
        let records = sqlx::query_as::<_, MyComplexStructWithRelations>(FIND_MANY_WITH_RELATIONS)
            .fetch_all(self.pool)
            .await?;

        Ok(records)
    }

    /// Insert a record together with the rows it relates to (atomic).
    pub async fn insert(
        &self,
        one: NewMyStruct,
        two: NewMyOtherStruct,
    ) -> Result<MyComplexStructWithRelations> {
        let mut tx = self.pool.begin().await?;

        let one: MyStruct = sqlx::query_as(
            r#"
            INSERT INTO "MyStruct" (one, two)
            VALUES ($1, $2)
            RETURNING id, one, two
            "#,
        )
        .bind(one.one)
        .bind(one.two)
        .fetch_one(&mut *tx)
        .await?;

        let two: MyOtherStruct = sqlx::query_as(
            r#"
            INSERT INTO "MyOtherStruct" (value)
            VALUES ($1)
            RETURNING id, value
            "#,
        )
        .bind(two.value)
        .fetch_one(&mut *tx)
        .await?;

        let record: MyComplexStruct = sqlx::query_as(
            r#"
            INSERT INTO "MyComplexStruct" ("oneId", "twoId")
            VALUES ($1, $2)
            RETURNING id, "oneId", "twoId"
            "#,
        )
        .bind(one.id)
        .bind(two.id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(MyComplexStructWithRelations {
            id: record.id,
            one_id: record.one_id,
            two_id: record.two_id,
            one,
            two,
        })
    }

    pub async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM "MyComplexStruct""#)
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}
