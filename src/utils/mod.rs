pub mod category;
mod free_list;
pub mod handle;
pub mod storage;

pub use category::*;
pub use handle::Handle;
pub use storage::{HandleStorage, StorageInfo, MAX_SLOTS};
