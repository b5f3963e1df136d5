//! Non-persistent geometric queries.

pub use self::point::{PointProjection, PointQuery, PointQueryWithLocation};

pub mod point;
