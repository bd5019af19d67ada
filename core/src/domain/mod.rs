pub mod category;
pub mod common;
pub mod product;
pub mod product_category;
pub mod table_query;
pub mod user;
