use axum::{
    Json, Router,
    extract::State,
    routing::{delete, get, post},
};
use axum_helpers::{
    MessageResponse, TypedPath, UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestPathResponse, BadRequestUuidResponse, BadRequestValidationResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, UpdateItem};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_items,
        create_item,
        get_item,
        filter_by_title,
        filter_by_price,
        filter_by_weight,
        update_item,
        delete_item,
        delete_all_items,
    ),
    components(
        schemas(Item, CreateItem, UpdateItem, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            BadRequestPathResponse
        )
    ),
    tags(
        (name = "Items", description = "Shop item endpoints")
    )
)]
pub struct ApiDoc;

/// Create the items router with all HTTP endpoints
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/all", get(list_items))
        .route("/add", post(create_item))
        .route("/find/by/{id}", get(get_item))
        .route("/filter/by/title/{title}", get(filter_by_title))
        .route("/filter/by/price/{price}", get(filter_by_price))
        .route("/filter/by/weight/{weight}", get(filter_by_weight))
        .route("/edit/{id}", post(update_item))
        .route("/delete/all", delete(delete_all_items))
        .route("/delete/{id}", delete(delete_item))
        .with_state(shared_service)
}

/// List every item
#[utoipa::path(
    get,
    path = "/all",
    tag = "Items",
    responses(
        (status = 200, description = "All items", body = Vec<Item>)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.list_items().await?;
    Ok(Json(items))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "/add",
    tag = "Items",
    request_body = CreateItem,
    responses(
        (status = 200, description = "Item created", body = Item),
        (status = 400, response = BadRequestValidationResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateItem>,
) -> ItemResult<Json<Item>> {
    let item = service.create_item(input).await?;
    Ok(Json(item))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/find/by/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    UuidPath(id): UuidPath,
) -> ItemResult<Json<Item>> {
    let item = service.get_item(id).await?;
    Ok(Json(item))
}

/// Items whose title equals `title`
#[utoipa::path(
    get,
    path = "/filter/by/title/{title}",
    tag = "Items",
    params(
        ("title" = String, Path, description = "Exact title")
    ),
    responses(
        (status = 200, description = "Matching items", body = Vec<Item>),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn filter_by_title<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    TypedPath(title): TypedPath<String>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.get_items_by_title(title).await?;
    Ok(Json(items))
}

/// Items whose price equals `price`
#[utoipa::path(
    get,
    path = "/filter/by/price/{price}",
    tag = "Items",
    params(
        ("price" = f64, Path, description = "Exact price")
    ),
    responses(
        (status = 200, description = "Matching items", body = Vec<Item>),
        (status = 400, response = BadRequestPathResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn filter_by_price<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    TypedPath(price): TypedPath<f64>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.get_items_by_price(price).await?;
    Ok(Json(items))
}

/// Items whose weight equals `weight`
#[utoipa::path(
    get,
    path = "/filter/by/weight/{weight}",
    tag = "Items",
    params(
        ("weight" = f64, Path, description = "Exact weight")
    ),
    responses(
        (status = 200, description = "Matching items", body = Vec<Item>),
        (status = 400, response = BadRequestPathResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn filter_by_weight<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    TypedPath(weight): TypedPath<f64>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.get_items_by_weight(weight).await?;
    Ok(Json(items))
}

/// Overwrite an item's title, description, price and weight
#[utoipa::path(
    post,
    path = "/edit/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateItem>,
) -> ItemResult<Json<Item>> {
    let item = service.update_item(id, input).await?;
    Ok(Json(item))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/delete/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted", body = MessageResponse),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    UuidPath(id): UuidPath,
) -> ItemResult<Json<MessageResponse>> {
    service.delete_item(id).await?;
    Ok(Json(MessageResponse::new(format!("Item with id: {} deleted.", id))))
}

/// Delete every item
#[utoipa::path(
    delete,
    path = "/delete/all",
    tag = "Items",
    responses(
        (status = 200, description = "All items deleted", body = MessageResponse)
    )
)]
async fn delete_all_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<MessageResponse>> {
    let removed = service.delete_all_items().await?;
    tracing::debug!(removed, "Bulk item delete");
    Ok(Json(MessageResponse::new("All items deleted")))
}
