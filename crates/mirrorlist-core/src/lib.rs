pub mod config;
pub mod logging;

pub mod checksum;
pub mod error;
pub mod fetch;
pub mod origin;
pub mod page;
pub mod particles;
pub mod release;
pub mod render;
pub mod server;
