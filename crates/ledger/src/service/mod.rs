pub mod days;
pub mod export;
