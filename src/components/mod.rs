pub mod token_board;
