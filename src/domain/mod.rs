pub mod conversation;
pub mod intelligence;
pub mod message;
pub mod ports;
pub mod response;
pub mod score;
