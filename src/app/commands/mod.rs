pub mod init;
pub mod new_site;
