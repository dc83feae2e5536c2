//! # FIFO Store
//!
//! 鍵值儲存與帳本資料存取

pub mod file;
pub mod kv;
pub mod repository;

// Re-export 主要類型
pub use file::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
pub use repository::LedgerRepository;

/// 儲存錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("讀寫失敗: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 序列化失敗: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("無效的儲存鍵: {0:?}")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
