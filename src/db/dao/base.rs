use std::{future::Future, pin::Pin};

use sea_orm::sea_query::{Expr, ExprTrait, LikeExpr, extension::postgres::PgExpr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, DbBackend, EntityTrait, QueryFilter,
    Select, TransactionError, TransactionTrait,
};

use super::error::{DaoLayerError, DaoResult};

const LIKE_ESCAPE: char = '\\';

pub type TxnFuture<'c, T> = Pin<Box<dyn Future<Output = DaoResult<T>> + Send + 'c>>;

/// Runs `op` in its own transaction: commit on `Ok`, roll back on `Err`.
/// The connection goes back to the pool either way.
pub async fn in_transaction<T, F>(db: &DatabaseConnection, op: F) -> DaoResult<T>
where
    T: Send,
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> TxnFuture<'c, T> + Send,
{
    db.transaction::<F, T, DaoLayerError>(op)
        .await
        .map_err(|err| match err {
            TransactionError::Connection(db_err) => DaoLayerError::Db(db_err),
            TransactionError::Transaction(err) => err,
        })
}

/// Case-insensitive substring match on `column`. `%` and `_` in `term` match literally.
///
/// Case folding happens in the store on both sides of the match: `ILIKE` on
/// Postgres, `LIKE` on SQLite (which folds ASCII letters only).
pub fn filter_name_contains<E>(
    select: Select<E>,
    column: E::Column,
    term: &str,
    backend: DbBackend,
) -> Select<E>
where
    E: EntityTrait,
{
    let pattern = LikeExpr::new(format!("%{}%", escape_like(term))).escape(LIKE_ESCAPE);
    let matches = match backend {
        DbBackend::Postgres => Expr::col(column).ilike(pattern),
        _ => Expr::col(column).like(pattern),
    };
    select.filter(matches)
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(ch);
    }
    escaped
}

#[async_trait::async_trait]
pub trait DaoBase: Clone + Send + Sync + Sized + 'static {
    type Entity: EntityTrait;
    const ENTITY_NAME: &'static str;

    fn new(db: &DatabaseConnection) -> Self;

    fn db(&self) -> &DatabaseConnection;

    fn id_column() -> <Self::Entity as EntityTrait>::Column;

    fn not_found(id: i32) -> DaoLayerError {
        DaoLayerError::NotFound {
            entity: Self::ENTITY_NAME,
            id,
        }
    }

    async fn find_by_id(&self, id: i32) -> DaoResult<<Self::Entity as EntityTrait>::Model> {
        Self::Entity::find()
            .filter(Self::id_column().eq(id))
            .one(self.db())
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    async fn find_many(&self, ids: &[i32]) -> DaoResult<Vec<<Self::Entity as EntityTrait>::Model>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids = ids.to_vec();
        Ok(Self::Entity::find()
            .filter(Self::id_column().is_in(ids))
            .all(self.db())
            .await?)
    }

    async fn delete(&self, id: i32) -> DaoResult<()> {
        let result = in_transaction(self.db(), move |txn| {
            Box::pin(async move {
                Ok(Self::Entity::delete_many()
                    .filter(Self::id_column().eq(id))
                    .exec(txn)
                    .await?)
            })
        })
        .await?;

        if result.rows_affected == 0 {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
