pub mod request;
pub mod turn;
