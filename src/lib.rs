pub mod api;
pub mod birthday;
pub mod format;
pub mod history;
pub mod intent;
pub mod profile;
pub mod share;
pub mod storage;
pub mod types;
pub mod ui;
pub mod views;
pub mod voice;
