pub mod d100_widget_board;
