pub mod audio;
pub mod notifications;
pub mod observability;
pub mod persistence;
pub mod storage;
