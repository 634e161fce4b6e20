pub mod body;
pub mod routing;
pub mod types;
