pub mod file_tools;
pub mod logger;
