use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductCategoryValidator {
    #[validate(range(min = 1, message = "category_id must be positive"))]
    pub category_id: i32,
}
