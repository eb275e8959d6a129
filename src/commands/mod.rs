pub mod generate;
pub mod share;
