use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// The unique natural-key index the client upsert conflicts on.
///
/// Entity-derived schemas only carry per-column uniques, so this composite
/// index has to be created explicitly; without it SQLite rejects the
/// `ON CONFLICT (document_type, document_number)` target.
pub fn client_document_index() -> IndexCreateStatement {
    Index::create()
        .name("idx_client_document")
        .table(Client)
        .col(entity::client::Column::DocumentType)
        .col(entity::client::Column::DocumentNumber)
        .unique()
        .to_owned()
}

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory
/// SQLite databases. Use the builder pattern to add entity tables, then call
/// `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Room, Client};
///
/// let test = TestBuilder::new()
///     .with_table(Room)
///     .with_table(Client)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema
    /// builder. Statements are executed in the order they were added during
    /// `build()`.
    tables: Vec<TableCreateStatement>,

    /// Additional CREATE INDEX statements, executed after every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using
    /// SQLite backend syntax. The table will be created when `build()` is called.
    /// Tables should be added in dependency order (tables with foreign keys after
    /// their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index to create after all tables exist.
    ///
    /// # Arguments
    /// - `index` - CREATE INDEX statement to execute during `build()`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds all tables required for reservation-lifecycle operations.
    ///
    /// This convenience method adds the following, in dependency order:
    /// - Room
    /// - Client (plus its natural-key index)
    /// - Reservation
    ///
    /// Use this when testing allocation or lifecycle functionality that stops
    /// short of billing. For check-out and invoice tests, use
    /// `with_billing_tables()`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_reservation_tables(self) -> Self {
        self.with_table(Room)
            .with_table(Client)
            .with_index(client_document_index())
            .with_table(Reservation)
    }

    /// Adds all tables required for check-out and invoice operations.
    ///
    /// Equivalent to `with_reservation_tables()` followed by
    /// `with_table(Invoice)`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_billing_tables(self) -> Self {
        self.with_reservation_tables().with_table(Invoice)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection, executes all CREATE
    /// TABLE statements that were added via `with_table()` in order, then the
    /// CREATE INDEX statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
