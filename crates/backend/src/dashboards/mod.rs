pub mod d400_shop_summary;
