use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use crate::route::books::Book;

/// Failure of a [`BookRepository`] operation, grouped by how the API
/// should answer it.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("failed to reach the database: {0}")]
    Connection(#[source] sqlx::Error),
    #[error("a book with this id already exists")]
    DuplicateKey(#[source] sqlx::Error),
    #[error("database query failed: {0}")]
    Query(#[source] sqlx::Error),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if matches!(
            err,
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
        ) {
            return RepoError::Connection(err);
        }

        if err
            .as_database_error()
            .is_some_and(|db_err| db_err.is_unique_violation())
        {
            return RepoError::DuplicateKey(err);
        }

        RepoError::Query(err)
    }
}

/// Book storage backed by a shared MySQL connection pool.
///
/// One pool is built at startup and handed to every handler through the
/// state, instead of opening a fresh connection per request.
#[derive(Clone)]
pub struct BookRepository {
    pool: MySqlPool,
}

impl BookRepository {
    /// Builds the pool without connecting.
    ///
    /// Connections are established on first use, so startup does not
    /// require a reachable database.
    pub fn connect_lazy(database_url: &str, pool_size: u32) -> Result<Self, sqlx::Error> {
        let pool = MySqlPoolOptions::new()
            .max_connections(pool_size)
            .connect_lazy(database_url)?;

        Ok(Self { pool })
    }

    /// Inserts a book inside its own transaction.
    ///
    /// Columns are bound by name so the statement stays correct if the
    /// table ever gains columns or changes order. The transaction guard
    /// rolls back on drop, so a failure at any stage leaves the table
    /// unchanged.
    pub async fn insert(&self, book: &Book) -> Result<(), RepoError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO books (id, name, isbn) VALUES (?, ?, ?)")
            .bind(&book.id)
            .bind(&book.name)
            .bind(&book.isbn)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    /// Reads every book, in whatever order the database returns rows.
    pub async fn list_all(&self) -> Result<Vec<Book>, RepoError> {
        let books = sqlx::query_as::<_, Book>("SELECT id, name, isbn FROM books")
            .fetch_all(&self.pool)
            .await?;

        Ok(books)
    }
}
