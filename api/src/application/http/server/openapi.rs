use utoipa::OpenApi;

use crate::application::http::{
    category::router::CategoryApiDoc, product::router::ProductApiDoc,
    product_category::router::ProductCategoryApiDoc, user::router::UserApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Backoffice API"
    ),
    nest(
        (path = "/products", api = ProductApiDoc),
        (path = "/products/{product_id}/categories", api = ProductCategoryApiDoc),
        (path = "/users", api = UserApiDoc),
        (path = "/categories", api = CategoryApiDoc),
    )
)]
pub struct ApiDoc;
