use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Shop API",
        version = "0.1.0",
        description = "CRUD API for the online shop's users and items"
    ),
    nest(
        (path = "/items", api = domain_items::ApiDoc),
        (path = "/users", api = domain_users::ApiDoc)
    )
)]
pub struct ApiDoc;
