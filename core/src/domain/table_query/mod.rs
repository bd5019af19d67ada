pub mod entities;
pub mod predicate;
pub mod services;
pub mod value_objects;
