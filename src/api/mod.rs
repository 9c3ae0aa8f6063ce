//! Remote API clients

pub mod sheets;

pub use sheets::SheetsClient;
