pub mod product_category_repository;
