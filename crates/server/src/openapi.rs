use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ClientInputDoc {
    pub name: String,
    pub email: String,
    pub event_type: String,
    pub address: String,
    pub city: String,
    /// Full state name or postal code; PA, NJ, NY, DE and MD only
    #[schema(example = "new york")]
    pub state: String,
    #[schema(example = "2025-06-14")]
    pub date: String,
}

#[derive(ToSchema)]
pub struct ClientResponseDoc {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub event_type: String,
    pub address: String,
    pub city: String,
    #[schema(example = "NY")]
    pub state: String,
    #[schema(example = "2025-06-14")]
    pub date: String,
}

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    pub message: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::clients::create,
        crate::routes::clients::list,
        crate::routes::clients::get,
        crate::routes::clients::sort_by_date,
        crate::routes::clients::update,
        crate::routes::clients::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ClientInputDoc,
            ClientResponseDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "client")
    )
)]
pub struct ApiDoc;
