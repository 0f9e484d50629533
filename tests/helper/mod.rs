pub mod fetcher;

pub use fetcher::{StubFetcher, make_tool};
