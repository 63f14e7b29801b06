use std::sync::Arc;

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    application::{
        interfaces::{clock::Clock, latency::NetworkLatency},
        usecases::errors::{Resource, UseCaseError, UseCaseResult, ValidationIssue},
    },
    auth::password,
    domain::{
        entities::stores::InsertStoreEntity,
        repositories::users::UserRepository,
        value_objects::{
            enums::store_statuses::StoreStatus,
            iam::{LoginModel, RegisterSellerModel, UserModel, normalize_email},
            subscriptions::SubscriptionState,
        },
    },
};

pub const MIN_PASSWORD_LEN: usize = 6;

pub struct IamUseCase<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    user_repo: Arc<U>,
    clock: Arc<dyn Clock>,
    latency: NetworkLatency,
}

impl<U> IamUseCase<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    pub fn new(user_repo: Arc<U>, clock: Arc<dyn Clock>, latency: NetworkLatency) -> Self {
        Self {
            user_repo,
            clock,
            latency,
        }
    }

    pub async fn login(&self, login_model: LoginModel) -> UseCaseResult<UserModel> {
        self.latency.pause().await;

        let email = normalize_email(&login_model.email);
        info!(%email, "iam: login requested");

        let user = self
            .user_repo
            .find_by_email(email.clone())
            .await
            .map_err(|err| {
                error!(%email, db_error = ?err, "iam: failed to load user by email");
                UseCaseError::Internal(err)
            })?;

        let user = match user {
            Some(user) => user,
            None => {
                warn!(%email, "iam: invalid credentials");
                return Err(ValidationIssue::InvalidCredentials.into());
            }
        };

        let verified = verify_off_thread(login_model.password, user.password_hash.clone())
            .await
            .map_err(|err| {
                error!(%email, error = ?err, "iam: password verification task failed");
                UseCaseError::Internal(err)
            })?;
        if !verified {
            warn!(%email, "iam: invalid credentials");
            return Err(ValidationIssue::InvalidCredentials.into());
        }

        info!(user_id = %user.id, "iam: login succeeded");
        Ok(UserModel::from(user))
    }

    /// Opens a seller account: user, store in trial, and a 30-day trial subscription.
    pub async fn register(&self, register_model: RegisterSellerModel) -> UseCaseResult<UserModel> {
        self.latency.pause().await;

        let email = normalize_email(&register_model.email);
        info!(%email, "iam: registration requested");

        validate_registration(&register_model, &email).inspect_err(|issue| {
            warn!(%email, issue = %issue, "iam: registration rejected");
        })?;

        let existing = self
            .user_repo
            .find_by_email(email.clone())
            .await
            .map_err(|err| {
                error!(%email, db_error = ?err, "iam: failed to check existing email");
                UseCaseError::Internal(err)
            })?;
        if existing.is_some() {
            warn!(%email, "iam: email already registered");
            return Err(ValidationIssue::DuplicateEmail.into());
        }

        let password_hash = hash_off_thread(register_model.password.clone())
            .await
            .map_err(|err| {
                error!(%email, error = ?err, "iam: failed to hash password");
                UseCaseError::Internal(err)
            })?;
        let now = self.clock.now();

        let store = InsertStoreEntity {
            name: register_model.store_name.trim().to_string(),
            logo: String::new(),
            store_type: register_model.store_type.unwrap_or_default(),
            description: String::new(),
            phone: register_model.phone.trim().to_string(),
            status: StoreStatus::Trial,
            created_at: now,
        };

        let user = self
            .user_repo
            .register_seller(
                register_model.to_entity(password_hash, now),
                store,
                SubscriptionState::trial_from(now),
            )
            .await
            .map_err(|err| {
                error!(%email, db_error = ?err, "iam: failed to register seller");
                UseCaseError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(%email, "iam: email taken by a concurrent registration");
                UseCaseError::from(ValidationIssue::DuplicateEmail)
            })?;

        info!(
            user_id = %user.id,
            store_id = %user.store_id,
            "iam: seller registered with trial store"
        );
        Ok(UserModel::from(user))
    }

    pub async fn current_user(&self, user_id: Uuid) -> UseCaseResult<UserModel> {
        self.latency.pause().await;

        self.user_repo
            .find_by_id(user_id)
            .await
            .map_err(|err| {
                error!(%user_id, db_error = ?err, "iam: failed to load user");
                UseCaseError::Internal(err)
            })?
            .map(UserModel::from)
            .ok_or(UseCaseError::NotFound(Resource::User))
    }
}

// argon2 is CPU-bound; keep it off the async workers.
async fn hash_off_thread(plain: String) -> anyhow::Result<String> {
    tokio::task::spawn_blocking(move || password::hash_password(&plain)).await?
}

async fn verify_off_thread(plain: String, password_hash: String) -> anyhow::Result<bool> {
    let verified =
        tokio::task::spawn_blocking(move || password::verify_password(&plain, &password_hash))
            .await?;
    Ok(verified)
}

fn validate_registration(
    register_model: &RegisterSellerModel,
    email: &str,
) -> Result<(), ValidationIssue> {
    if register_model.store_name.trim().is_empty() {
        return Err(ValidationIssue::MissingStoreName);
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
        _ => return Err(ValidationIssue::InvalidEmail),
    }
    if register_model.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationIssue::WeakPassword);
    }
    Ok(())
}
