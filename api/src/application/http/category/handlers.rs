pub mod get_select_categories;
