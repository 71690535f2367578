//! Client factory for creating test client entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::enums::DocumentType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clients with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::client::ClientFactory;
///
/// let client = ClientFactory::new(&db)
///     .full_name("Amina Berrada")
///     .document(DocumentType::Passport, "P1234567")
///     .build()
///     .await?;
/// ```
pub struct ClientFactory<'a> {
    db: &'a DatabaseConnection,
    full_name: String,
    phone: String,
    email: String,
    document_type: DocumentType,
    document_number: String,
}

impl<'a> ClientFactory<'a> {
    /// Creates a new ClientFactory with default values.
    ///
    /// Defaults:
    /// - full_name: `"Client {id}"` where id is auto-incremented
    /// - phone: `"0600{id:06}"`
    /// - email: `"client{id}@example.com"`
    /// - document: `DocumentType::NationalId`, `"ID{id:06}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ClientFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            full_name: format!("Client {}", id),
            phone: format!("0600{:06}", id),
            email: format!("client{}@example.com", id),
            document_type: DocumentType::NationalId,
            document_number: format!("ID{:06}", id),
        }
    }

    /// Sets the client full name.
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    /// Sets the client phone number.
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the client email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the identity document forming the natural key.
    pub fn document(mut self, document_type: DocumentType, number: impl Into<String>) -> Self {
        self.document_type = document_type;
        self.document_number = number.into();
        self
    }

    /// Builds and inserts the client entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::client::Model)` - Created client entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::client::Model, DbErr> {
        entity::client::ActiveModel {
            id: ActiveValue::NotSet,
            full_name: ActiveValue::Set(self.full_name),
            phone: ActiveValue::Set(self.phone),
            email: ActiveValue::Set(self.email),
            document_type: ActiveValue::Set(self.document_type),
            document_number: ActiveValue::Set(self.document_number),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a client with default values.
///
/// Shorthand for `ClientFactory::new(db).build()`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::client::Model)` - Created client entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_client(db: &DatabaseConnection) -> Result<entity::client::Model, DbErr> {
    ClientFactory::new(db).build().await
}
