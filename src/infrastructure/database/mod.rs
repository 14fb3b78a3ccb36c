pub mod memory;
pub mod redis;

pub use memory::MemoryWordIndex;
pub use self::redis::{RedisSettings, RedisWordIndex};
