pub mod delete_product;
pub mod get_table_products;
