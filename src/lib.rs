pub mod cli;
pub mod game;
pub mod input_handler;
pub mod searcher;
pub mod tictactoe;
