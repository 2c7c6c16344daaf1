pub mod a001_store;
