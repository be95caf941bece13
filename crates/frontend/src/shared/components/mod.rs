pub mod pagination;
pub mod stat_card;
pub mod table;
pub mod ui;

pub use pagination::Pagination;
pub use stat_card::StatCard;
