use super::{Board, Color};

#[cfg(debug_assertions)]
impl Board {
    /// Print the grid and counters to stdout.
    pub fn debug_print(&self) {
        print!("{self}");
        for color in Color::BOTH {
            println!(
                "{color}: {} left, {} crowned",
                self.pieces_left(color),
                self.kings(color)
            );
        }
        println!("------------------------------------");
    }
}
