use thiserror::Error;

// Field validation failures surface as `Model(ModelError::Validation)`;
// the service layer adds no validation of its own.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    NotAssociated(String),
    #[error("database error: {0}")]
    Db(String),
    #[error(transparent)]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    /// Messages are part of the API surface and asserted by integration tests.
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("The {entity} with the given id was not found"))
    }

    pub fn not_associated() -> Self {
        Self::NotAssociated(
            "The airport with the given id is not associated with the airline".into(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_entity() {
        assert_eq!(
            ServiceError::not_found("airline").to_string(),
            "The airline with the given id was not found"
        );
        assert_eq!(
            ServiceError::not_found("airport").to_string(),
            "The airport with the given id was not found"
        );
    }

    #[test]
    fn not_associated_message_is_fixed() {
        assert_eq!(
            ServiceError::not_associated().to_string(),
            "The airport with the given id is not associated with the airline"
        );
    }
}
