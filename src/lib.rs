pub mod aggregate;
pub mod breakdown;
pub mod fixture_feed;
pub mod model;
pub mod momentum;
pub mod taxonomy;
pub mod timeline;
