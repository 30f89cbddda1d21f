// Price history sources
pub mod binance;
pub mod demo;
pub mod json_dir;
pub mod memory;
pub mod source;

// Re-export commonly used types
pub use binance::BinanceSource;
pub use demo::DemoSource;
pub use json_dir::JsonDirSource;
pub use memory::InMemorySource;
pub use source::{PriceHistorySource, SourceKind, SourceSelection, build_source};
