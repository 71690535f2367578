//! Domain parameter types for client operations.

use entity::enums::DocumentType;

use crate::server::error::AppError;

/// Contact and identity fields for the find-or-create client upsert.
///
/// Construction through [`UpsertClientParams::new`] normalizes the fields the
/// way the registry stores them: trimmed, email lowercased, document number
/// uppercased. Empty fields are rejected before any persistence attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertClientParams {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub document_type: DocumentType,
    pub document_number: String,
}

impl UpsertClientParams {
    /// Validates and normalizes client identity fields.
    ///
    /// # Returns
    /// - `Ok(UpsertClientParams)` - All fields present after trimming
    /// - `Err(AppError::BadRequest)` - Any field empty after trimming
    pub fn new(
        full_name: &str,
        phone: &str,
        email: &str,
        document_type: DocumentType,
        document_number: &str,
    ) -> Result<Self, AppError> {
        let full_name = full_name.trim().to_string();
        let phone = phone.trim().to_string();
        let email = email.trim().to_lowercase();
        let document_number = document_number.trim().to_uppercase();

        if full_name.is_empty() || phone.is_empty() || email.is_empty() || document_number.is_empty()
        {
            return Err(AppError::BadRequest(
                "client identity requires full_name, phone, email, document_type and document_number"
                    .to_string(),
            ));
        }

        Ok(Self {
            full_name,
            phone,
            email,
            document_type,
            document_number,
        })
    }
}
