pub mod shared_store;
