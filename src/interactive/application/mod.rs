pub mod find;
pub mod state_store;

#[cfg(test)]
mod state_store_test;
