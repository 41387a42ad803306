pub mod traits;
pub mod labeled;

pub use traits::{Graph, NodeId};
pub use labeled::RouteGraph;
