pub mod category;
pub mod product;
pub mod product_category;
pub mod query_extractor;
pub mod query_params;
pub mod server;
pub mod user;
