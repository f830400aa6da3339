pub mod line_item;
pub mod parameters;
pub mod response;

pub use line_item::{AimLineItem, LINE_ITEM_SEPARATOR};
pub use parameters::ParameterSet;
pub use response::{AimResponse, Outcome};
