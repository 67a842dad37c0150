pub mod commit;
pub mod graphql_types;
pub mod owner;
pub mod repository;
