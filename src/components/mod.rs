mod filter_bar;
mod game_grid;
mod game_details;

pub use filter_bar::FilterBar;
pub use game_grid::GameGrid;
pub use game_details::GameDetails;
