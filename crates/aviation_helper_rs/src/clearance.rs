pub mod airlines;
