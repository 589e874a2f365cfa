pub mod msch;
