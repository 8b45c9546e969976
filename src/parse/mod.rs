pub mod sheet;
pub mod structured;

pub use sheet::parse_sheet;
pub use structured::parse_structured;
