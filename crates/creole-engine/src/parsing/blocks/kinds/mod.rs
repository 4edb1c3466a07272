pub mod heading;
pub mod list_item;
pub mod macro_block;
pub mod rule;
pub mod table_row;
pub mod verbatim;

pub use heading::Heading;
pub use list_item::{ListItem, ListType};
pub use macro_block::{MacroBlock, MacroOpen};
pub use rule::Rule;
pub use table_row::TableRow;
pub use verbatim::Verbatim;
