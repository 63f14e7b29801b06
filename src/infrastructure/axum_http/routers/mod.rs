use uuid::Uuid;

use crate::application::usecases::errors::{Resource, UseCaseError};

use super::error_responses::AppError;

pub mod dashboard;
pub mod iam;
pub mod storefront;
pub mod subscriptions;

/// Record ids arrive as raw path segments; one that is not a UUID names no record.
pub(crate) fn parse_id(raw: &str, resource: Resource) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::from(UseCaseError::NotFound(resource)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_turns_malformed_ids_into_not_found() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string(), Resource::Product).unwrap(), id);

        let err = parse_id("prod-1", Resource::Product).unwrap_err();
        assert!(matches!(
            err,
            AppError::UseCase(UseCaseError::NotFound(Resource::Product))
        ));
    }
}
