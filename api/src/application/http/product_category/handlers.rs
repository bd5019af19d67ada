pub mod create_product_category;
pub mod delete_product_category;
pub mod get_product_categories;
