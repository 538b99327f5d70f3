mod error;
mod key;
mod traits;

pub mod memory;
pub mod s3;

pub use error::StorageError;
pub use key::{file_extension, generate_object_key};
pub use traits::{ObjectStore, StoredObject};
