
pub use test_conn::*;
