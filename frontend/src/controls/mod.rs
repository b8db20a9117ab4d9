pub use self::clock::Clock;
pub use self::export::ExportButton;
pub use self::history_table::HistoryTable;
pub use self::reading_card::ReadingCard;

pub mod clock;
pub mod export;
pub mod history_table;
pub mod reading_card;
