use handlestore::{HandleCategory, HandleStorage, StorageInfo};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn storage<C: HandleCategory, T>(initial_capacity: usize, bump_size: usize) -> HandleStorage<C, T> {
    init_logging();
    HandleStorage::new(&StorageInfo {
        debug_name: "integration",
        initial_capacity,
        bump_size,
    })
}
