pub mod ids;
pub mod normalize;
pub mod todo_service;
pub mod validate;
