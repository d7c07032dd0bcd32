pub mod p900_cart_summary;
