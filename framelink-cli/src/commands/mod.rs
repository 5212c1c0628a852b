pub mod recv;
pub mod send;
