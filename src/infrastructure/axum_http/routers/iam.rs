use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{
    application::{
        interfaces::{clock::Clock, latency::NetworkLatency},
        usecases::iam::IamUseCase,
    },
    auth::{AuthUser, JwtKeys},
    domain::{
        repositories::users::UserRepository,
        value_objects::iam::{LoginModel, RegisterSellerModel, UserModel},
    },
    infrastructure::{
        axum_http::error_responses::AppError,
        memory::{memory_connection::MemoryPoolSquad, repositories::users::UserMemory},
    },
};

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: UserModel,
    pub token: String,
}

pub fn routes(
    db_pool: Arc<MemoryPoolSquad>,
    clock: Arc<dyn Clock>,
    latency: NetworkLatency,
) -> Router {
    let user_repository = UserMemory::new(Arc::clone(&db_pool));
    let iam_usecase = IamUseCase::new(Arc::new(user_repository), clock, latency);

    Router::new()
        .route("/login", post(login::<UserMemory>))
        .route("/register", post(register::<UserMemory>))
        .route("/me", get(current_user::<UserMemory>))
        .with_state(Arc::new(iam_usecase))
}

pub async fn login<U>(
    State(iam_usecase): State<Arc<IamUseCase<U>>>,
    Extension(jwt_keys): Extension<Arc<JwtKeys>>,
    Json(login_model): Json<LoginModel>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync + 'static,
{
    match iam_usecase.login(login_model).await {
        Ok(user) => with_token(&jwt_keys, user, StatusCode::OK),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub async fn register<U>(
    State(iam_usecase): State<Arc<IamUseCase<U>>>,
    Extension(jwt_keys): Extension<Arc<JwtKeys>>,
    Json(register_model): Json<RegisterSellerModel>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync + 'static,
{
    match iam_usecase.register(register_model).await {
        Ok(user) => with_token(&jwt_keys, user, StatusCode::CREATED),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub async fn current_user<U>(
    State(iam_usecase): State<Arc<IamUseCase<U>>>,
    auth: AuthUser,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync + 'static,
{
    match iam_usecase.current_user(auth.user_id).await {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

// Token expiry is checked against wall-clock time, so it is issued against it too.
fn with_token(jwt_keys: &JwtKeys, user: UserModel, status: StatusCode) -> Response {
    match jwt_keys.issue_token(&user, Utc::now()) {
        Ok(token) => (status, Json(AuthResponse { user, token })).into_response(),
        Err(err) => AppError::Internal(err).into_response(),
    }
}
