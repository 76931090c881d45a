pub mod database;
pub mod money;
pub mod storage;
pub mod validation;
