use axum::{
    Json, Router,
    extract::State,
    routing::{delete, get, post},
};
use axum_helpers::{
    MessageResponse, TypedPath, UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestPathResponse, BadRequestUuidResponse, BadRequestValidationResponse,
        ConflictResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{CreateUser, UpdateUser, UserResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_users,
        create_user,
        get_user,
        get_user_by_login,
        get_user_by_email,
        filter_by_name,
        filter_by_age,
        update_user,
        delete_user,
        delete_all_users,
    ),
    components(
        schemas(UserResponse, CreateUser, UpdateUser, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            BadRequestPathResponse,
            ConflictResponse
        )
    ),
    tags(
        (name = "Users", description = "Shop user endpoints")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/all", get(list_users))
        .route("/add", post(create_user))
        .route("/find/by/{id}", get(get_user))
        .route("/find/by/login/{login}", get(get_user_by_login))
        .route("/find/by/email/{email}", get(get_user_by_email))
        .route("/filter/by/name/{name}", get(filter_by_name))
        .route("/filter/by/age/{age}", get(filter_by_age))
        .route("/edit/{user_id}", post(update_user))
        .route("/delete/all", delete(delete_all_users))
        .route("/delete/{id}", delete(delete_user))
        .with_state(shared_service)
}

/// List every user
#[utoipa::path(
    get,
    path = "/all",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<Vec<UserResponse>>> {
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Register a user
#[utoipa::path(
    post,
    path = "/add",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> UserResult<Json<UserResponse>> {
    let user = service.create_user(input).await?;
    Ok(Json(user))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/find/by/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    UuidPath(id): UuidPath,
) -> UserResult<Json<UserResponse>> {
    let user = service.get_user(id).await?;
    Ok(Json(user))
}

/// Get a user by login
#[utoipa::path(
    get,
    path = "/find/by/login/{login}",
    tag = "Users",
    params(
        ("login" = String, Path, description = "User login")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_user_by_login<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    TypedPath(login): TypedPath<String>,
) -> UserResult<Json<UserResponse>> {
    let user = service.get_user_by_login(login).await?;
    Ok(Json(user))
}

/// Get a user by email
#[utoipa::path(
    get,
    path = "/find/by/email/{email}",
    tag = "Users",
    params(
        ("email" = String, Path, description = "User email")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_user_by_email<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    TypedPath(email): TypedPath<String>,
) -> UserResult<Json<UserResponse>> {
    let user = service.get_user_by_email(email).await?;
    Ok(Json(user))
}

/// Users whose name equals `name`
#[utoipa::path(
    get,
    path = "/filter/by/name/{name}",
    tag = "Users",
    params(
        ("name" = String, Path, description = "Exact name")
    ),
    responses(
        (status = 200, description = "Matching users", body = Vec<UserResponse>),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn filter_by_name<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    TypedPath(name): TypedPath<String>,
) -> UserResult<Json<Vec<UserResponse>>> {
    let users = service.get_users_by_name(name).await?;
    Ok(Json(users))
}

/// Users whose age equals `age`
#[utoipa::path(
    get,
    path = "/filter/by/age/{age}",
    tag = "Users",
    params(
        ("age" = i32, Path, description = "Exact age")
    ),
    responses(
        (status = 200, description = "Matching users", body = Vec<UserResponse>),
        (status = 400, response = BadRequestPathResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn filter_by_age<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    TypedPath(age): TypedPath<i32>,
) -> UserResult<Json<Vec<UserResponse>>> {
    let users = service.get_users_by_age(age).await?;
    Ok(Json(users))
}

/// Overwrite a user's name, login, password, email and age
#[utoipa::path(
    post,
    path = "/edit/{user_id}",
    tag = "Users",
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse)
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateUser>,
) -> UserResult<Json<UserResponse>> {
    let user = service.update_user(id, input).await?;
    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/delete/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    UuidPath(id): UuidPath,
) -> UserResult<Json<MessageResponse>> {
    service.delete_user(id).await?;
    Ok(Json(MessageResponse::new(format!(
        "User with id: {} was deleted.",
        id
    ))))
}

/// Delete every user
#[utoipa::path(
    delete,
    path = "/delete/all",
    tag = "Users",
    responses(
        (status = 200, description = "All users deleted", body = MessageResponse)
    )
)]
async fn delete_all_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<MessageResponse>> {
    let removed = service.delete_all_users().await?;
    tracing::debug!(removed, "Bulk user delete");
    Ok(Json(MessageResponse::new("All users were deleted.")))
}
