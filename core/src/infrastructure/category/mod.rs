pub mod repositories;

pub use repositories::category_repository::PostgresCategoryRepository;
