//! Interactive node-link graph view.
//!
//! Renders a precomputed graph layout on an HTML canvas with:
//! - Coordinate normalization and size scaling on load
//! - Hover highlighting of a node's neighborhood, with exact restoration
//! - Click-to-open node URLs
//! - Incremental search with keyboard navigation and a camera fly-to
//!
//! # Example
//!
//! ```ignore
//! use graph_lens::components::graph_view::{GraphViewer, SizeScale, parse_graph};
//! use graph_lens::ViewerConfig;
//!
//! let config = ViewerConfig::default();
//! let scale = SizeScale { node: config.node_size_scale, edge: config.edge_size_scale };
//! let graph = parse_graph(json, scale)?;
//!
//! view! { <GraphViewer graph=graph config=config /> }
//! ```

mod camera;
mod component;
mod events;
mod highlight;
mod loader;
mod navigation;
mod normalize;
mod render;
pub mod scale;
pub mod search;
mod state;
pub mod store;
pub mod theme;
mod types;

pub use camera::{Camera, CameraAnimation, CameraState};
pub use component::GraphViewer;
pub use events::{GraphEvent, GraphEventHandler};
pub use highlight::HighlightEngine;
pub use loader::{SizeScale, build_graph, parse_graph};
pub use navigation::{BrowserOpener, NavigationAction, UrlOpener};
pub use normalize::{AxisRange, Bounds, normalize_positions};
pub use state::ViewerState;
pub use store::GraphStore;
pub use theme::Theme;
pub use types::{GraphData, RawEdge, RawNode};
