//! Errors that abort viewer startup.

use thiserror::Error;

/// Anything that prevents the graph from being fetched, parsed or built.
///
/// All variants are terminal for the page load: the interactive viewer is
/// never mounted once one of these is returned.
#[derive(Debug, Error)]
pub enum LoadError {
	/// The request never produced a response.
	#[error("request for {url} failed: {reason}")]
	Fetch {
		/// Requested location.
		url: String,
		/// Browser error rendered as text.
		reason: String,
	},

	/// The server answered with a non-success status.
	#[error("request for {url} returned HTTP {status}")]
	Status {
		/// Requested location.
		url: String,
		#[allow(missing_docs)]
		status: u16,
	},

	/// The body, or the embedded configuration, is not valid JSON for its schema.
	#[error("could not parse graph data: {0}")]
	Parse(#[from] serde_json::Error),

	/// Two nodes share an ID.
	#[error("duplicate node id {0:?}")]
	DuplicateNode(String),

	/// Two edges share an ID.
	#[error("duplicate edge id {0:?}")]
	DuplicateEdge(String),

	/// An edge names a source or target that is not a node.
	#[error("edge {edge:?} references unknown node {node:?}")]
	UnknownEndpoint {
		/// ID of the offending edge.
		edge: String,
		/// The missing endpoint.
		node: String,
	},

	/// A configuration value is out of range.
	#[error("invalid viewer configuration: {0}")]
	Config(String),
}
