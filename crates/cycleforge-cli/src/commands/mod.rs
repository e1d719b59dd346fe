pub mod brackets;
pub mod init;
pub mod plan;
