pub mod data;
pub mod init;
pub mod neural;
pub mod prelude;
