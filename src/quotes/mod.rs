pub mod store;

pub use store::QuoteStore;
