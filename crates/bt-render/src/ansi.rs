use std::io::{self, Write};

use bt_core::frame::{BlockCell, CellGrid};

/// Séquence SGR de remise à zéro émise en fin de ligne.
pub const RESET: &str = "\x1b[0m";

/// Écrit une cellule : une seule séquence SGR truecolor puis le glyphe.
///
/// Sans inversion, `bg` va au fond (48) et `fg` au premier plan (38) ;
/// `reverse` échange les deux sélecteurs.
///
/// # Errors
/// Propagates write errors from `out`.
///
/// # Example
/// ```
/// use bt_core::frame::BlockCell;
/// use bt_render::ansi::write_cell;
/// let mut out = Vec::new();
/// let cell = BlockCell { ch: '▀', fg: (1, 2, 3), bg: (4, 5, 6), reverse: false };
/// write_cell(&mut out, &cell).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "\x1b[48;2;4;5;6;38;2;1;2;3m▀");
/// ```
#[inline]
pub fn write_cell<W: Write>(out: &mut W, cell: &BlockCell) -> io::Result<()> {
    let (bg_sel, fg_sel) = if cell.reverse { (38, 48) } else { (48, 38) };
    let (r, g, b) = cell.bg;
    let (fr, fg, fb) = cell.fg;
    write!(
        out,
        "\x1b[{bg_sel};2;{r};{g};{b};{fg_sel};2;{fr};{fg};{fb}m{}",
        cell.ch
    )
}

/// Écrit une ligne de cellules, suivie du reset et d'un saut de ligne.
///
/// # Errors
/// Propagates write errors from `out`.
pub fn write_row<W: Write>(out: &mut W, row: &[BlockCell]) -> io::Result<()> {
    for cell in row {
        write_cell(out, cell)?;
    }
    writeln!(out, "{RESET}")
}

/// Écrit toute la grille, ligne par ligne, de haut en bas.
///
/// # Errors
/// Propagates write errors from `out`.
///
/// # Example
/// ```
/// use bt_core::frame::CellGrid;
/// use bt_render::ansi::write_grid;
/// let mut out = Vec::new();
/// write_grid(&mut out, &CellGrid::new(2, 3)).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
/// ```
pub fn write_grid<W: Write>(out: &mut W, grid: &CellGrid) -> io::Result<()> {
    for row in grid.rows() {
        write_row(out, row)?;
    }
    out.flush()
}
