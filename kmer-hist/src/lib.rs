pub mod cli;
pub mod histogram;
