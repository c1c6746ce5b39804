//! tally-core: currency catalog, locale hints and the transaction record model

pub mod currency;
pub mod date;
pub mod locale;
pub mod record;

pub use currency::{CurrencyCode, UnknownCurrency};
pub use date::calendar_date;
pub use locale::LocaleHint;
pub use record::{Direction, TransactionRecord};
