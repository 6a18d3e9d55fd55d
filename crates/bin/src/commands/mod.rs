pub mod extract;
pub mod get;
pub mod print;
