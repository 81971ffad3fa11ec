use crossterm::terminal;

/// Taille de grille qui remplit le terminal courant.
///
/// Une ligne est réservée à l'invite du shell. `None` si stdout n'est pas
/// un terminal ou si la taille est inconnue.
#[must_use]
pub fn terminal_grid_size() -> Option<(u16, u16)> {
    match terminal::size() {
        Ok((cols, rows)) if cols > 0 && rows > 1 => Some((cols, rows - 1)),
        Ok((cols, rows)) => {
            log::warn!("Terminal trop petit : {cols}×{rows}");
            None
        }
        Err(e) => {
            log::warn!("Taille du terminal indisponible : {e}");
            None
        }
    }
}
