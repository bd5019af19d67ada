use crate::{
    domain::product_category::entities::ProductCategory,
    entity::{category, product_category},
};

impl From<(product_category::Model, category::Model)> for ProductCategory {
    fn from((link, category): (product_category::Model, category::Model)) -> Self {
        Self {
            id: link.id,
            category_id: link.category_id,
            product_id: link.product_id,
            name: category.name,
            created_at: link.created_at.and_utc(),
            updated_at: link.updated_at.and_utc(),
        }
    }
}
