pub mod d400_safety_overview;
