//! Shortest-path routing over the road graph.

mod bfs;

pub use bfs::find_route;
