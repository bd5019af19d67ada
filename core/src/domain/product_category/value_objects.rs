#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateProductCategoryInput {
    pub product_id: i32,
    pub category_id: i32,
}

/// The link is only removed when it belongs to `product_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteProductCategoryInput {
    pub id: i32,
    pub product_id: i32,
}
