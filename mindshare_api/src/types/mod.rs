mod page;
pub use self::page::extract_records;

mod timeframe;
pub use self::timeframe::Timeframe;
