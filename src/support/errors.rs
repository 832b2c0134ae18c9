use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn account_not_found(email: &str) -> Self {
        Self::NotFound {
            entity: "Account",
            field: "email",
            value: email.to_string(),
        }
    }

    pub fn product_not_found(product_id: i64) -> Self {
        Self::NotFound {
            entity: "Product",
            field: "id",
            value: product_id.to_string(),
        }
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Storage(e.to_string())
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_key() {
        let err = DomainError::account_not_found("nobody@example.com");
        assert_eq!(
            err.to_string(),
            "Not found: Account with email=nobody@example.com"
        );
    }

    #[test]
    fn product_not_found_uses_id_field() {
        let err = DomainError::product_not_found(42);
        assert_eq!(err.to_string(), "Not found: Product with id=42");
    }

    #[test]
    fn db_errors_become_storage_errors() {
        let err: DomainError = sea_orm::DbErr::Custom("boom".into()).into();
        assert!(matches!(err, DomainError::Storage(ref m) if m.contains("boom")));
    }
}
