use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::client::UpsertClientParams;

pub struct ClientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds or creates a client by identity document, updating contact
    /// fields in place.
    ///
    /// The upsert targets the (document_type, document_number) natural key:
    /// a repeated submission for the same document overwrites the stored
    /// name, phone, and email rather than creating a duplicate record.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created or refreshed client
    /// - `Err(DbErr)`: Database error
    pub async fn upsert(&self, params: UpsertClientParams) -> Result<entity::client::Model, DbErr> {
        entity::prelude::Client::insert(entity::client::ActiveModel {
            full_name: ActiveValue::Set(params.full_name),
            phone: ActiveValue::Set(params.phone),
            email: ActiveValue::Set(params.email),
            document_type: ActiveValue::Set(params.document_type),
            document_number: ActiveValue::Set(params.document_number),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::client::Column::DocumentType,
                entity::client::Column::DocumentNumber,
            ])
            .update_columns([
                entity::client::Column::FullName,
                entity::client::Column::Phone,
                entity::client::Column::Email,
            ])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Gets a client by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::client::Model>, DbErr> {
        entity::prelude::Client::find_by_id(id).one(self.db).await
    }

    /// Lists clients, newest first, optionally filtered by a free-text query
    /// matched against name, phone, email, and document number.
    ///
    /// # Arguments
    /// - `query`: Optional case-insensitive substring filter
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Matching clients
    /// - `Err(DbErr)`: Database error
    pub async fn list(&self, query: Option<&str>) -> Result<Vec<entity::client::Model>, DbErr> {
        let mut find = entity::prelude::Client::find();

        if let Some(q) = query.map(str::trim).filter(|q| !q.is_empty()) {
            find = find.filter(
                Condition::any()
                    .add(entity::client::Column::FullName.contains(q))
                    .add(entity::client::Column::Phone.contains(q))
                    .add(entity::client::Column::Email.contains(q))
                    .add(entity::client::Column::DocumentNumber.contains(q)),
            );
        }

        find.order_by_desc(entity::client::Column::CreatedAt)
            .all(self.db)
            .await
    }
}
