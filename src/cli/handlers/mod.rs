pub mod checksum;
pub mod config;
pub mod decode;
pub mod encode;
