//! Terminal UI: the interactive Connect Four board. Purely presentation;
//! every rule lives in [`crate::game`].

mod app;
mod game_view;

pub use app::App;
