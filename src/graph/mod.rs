//! Road graph construction and adjacency queries.

mod road_graph;

pub use road_graph::RoadGraph;
