use std::fmt::Display;

use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    User,
    Store,
    Product,
    Subscription,
}

impl Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Resource::User => "user",
            Resource::Store => "store",
            Resource::Product => "product",
            Resource::Subscription => "subscription",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("email already registered")]
    DuplicateEmail,
    #[error("email address is invalid")]
    InvalidEmail,
    #[error("password must be at least 6 characters")]
    WeakPassword,
    #[error("store name is required")]
    MissingStoreName,
    #[error("product name is required")]
    MissingProductName,
    #[error("price cannot be negative")]
    NegativePrice,
}

#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("{0} not found")]
    NotFound(Resource),
    #[error(transparent)]
    Validation(#[from] ValidationIssue),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl UseCaseError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            UseCaseError::NotFound(_) => StatusCode::NOT_FOUND,
            UseCaseError::Validation(_) => StatusCode::BAD_REQUEST,
            UseCaseError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown by the Arabic storefront.
    pub fn message_ar(&self) -> &'static str {
        match self {
            UseCaseError::NotFound(Resource::User) => "مستخدم غير موجود",
            UseCaseError::NotFound(Resource::Store) => "المتجر غير موجود",
            UseCaseError::NotFound(Resource::Product) => "المنتج غير موجود",
            UseCaseError::NotFound(Resource::Subscription) => "لا توجد معلومات عن اشتراكك",
            UseCaseError::Validation(ValidationIssue::InvalidCredentials) => {
                "البريد الإلكتروني أو كلمة المرور غير صحيحة"
            }
            UseCaseError::Validation(ValidationIssue::DuplicateEmail) => {
                "البريد الإلكتروني مستخدم بالفعل"
            }
            UseCaseError::Validation(ValidationIssue::InvalidEmail) => {
                "البريد الإلكتروني غير صالح"
            }
            UseCaseError::Validation(ValidationIssue::WeakPassword) => {
                "يجب أن تتكون كلمة المرور من 6 أحرف على الأقل"
            }
            UseCaseError::Validation(ValidationIssue::MissingStoreName) => "اسم المتجر مطلوب",
            UseCaseError::Validation(ValidationIssue::MissingProductName) => "اسم المنتج مطلوب",
            UseCaseError::Validation(ValidationIssue::NegativePrice) => {
                "لا يمكن أن يكون السعر سالباً"
            }
            UseCaseError::Internal(_) => "حدث خطأ غير متوقع",
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, UseCaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404_with_readable_message() {
        let err = UseCaseError::NotFound(Resource::Product);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "product not found");
    }

    #[test]
    fn validation_maps_to_400() {
        let err = UseCaseError::from(ValidationIssue::DuplicateEmail);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "email already registered");
    }

    #[test]
    fn internal_errors_map_to_500() {
        let err = UseCaseError::from(anyhow::anyhow!("lock poisoned"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
