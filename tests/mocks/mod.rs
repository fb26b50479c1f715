pub mod fetch_mock;
