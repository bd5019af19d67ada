pub mod get_table_users;
