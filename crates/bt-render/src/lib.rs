/// Terminal output for blocktty: truecolor SGR serialization.

pub mod ansi;
pub mod terminal;

pub use ansi::{write_cell, write_grid, write_row};
pub use terminal::terminal_grid_size;
