pub mod blocks;
pub mod fields;
pub mod layout;
pub mod table;

pub use blocks::{render_blocks, Block, Tone};
pub use fields::{
    add_entry, bind, edit_entry, on_submit, CategoryFields, Field, SelectField, SubmitButton,
};
pub use table::{ScrollTable, TableRow, TableView};
