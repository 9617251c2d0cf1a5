pub mod app_config;
pub mod memory_repo;
pub mod fs_writer;
pub mod http_api;

pub use memory_repo::InMemoryOrderStore;
pub use fs_writer::FsFileWriter;
pub use http_api::{HttpApiClient, OfflineApiClient};
