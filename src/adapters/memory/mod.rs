mod backend;

#[allow(unused_imports)]
pub use backend::MemoryBackend;
