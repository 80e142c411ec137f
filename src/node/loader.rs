//! Node definition file loading
//!
//! Node names resolve to files under a single storage root. Every reference
//! loads the file fresh; definitions are never cached across a run.

use crate::error::{BoxkiteError, ConfigError};
use crate::node::types::Node;
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions tried when resolving a node name
const NODE_FILE_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Default directory where node definitions live
pub const DEFAULT_NODE_ROOT: &str = "/etc/boxkite";

/// Resolves node names to definition files under a storage root
#[derive(Debug, Clone)]
pub struct NodeLoader {
    root: PathBuf,
}

impl NodeLoader {
    /// Create a loader for the given storage root
    pub fn new(root: PathBuf) -> Self {
        NodeLoader { root }
    }

    /// The configured storage root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load a node by name from `<root>/<name>.<ext>`
    ///
    /// A missing definition is a configuration error, fatal to the whole run.
    pub fn load(&self, name: &str) -> Result<Node, BoxkiteError> {
        let mut searched = Vec::new();

        for ext in NODE_FILE_EXTENSIONS {
            let path = self.root.join(format!("{}.{}", name, ext));

            if path.exists() && path.is_file() {
                return self.load_path(&path);
            }
            searched.push(path.display().to_string());
        }

        Err(ConfigError::NodeNotFound {
            name: name.to_string(),
            searched: searched.join(", "),
        }
        .into())
    }

    /// Load a node from an explicit file path (the root node on the command
    /// line is addressed this way)
    pub fn load_path(&self, path: &Path) -> Result<Node, BoxkiteError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        parse_node(&contents)
    }
}

impl Default for NodeLoader {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_NODE_ROOT))
    }
}

/// Parse a node definition from a YAML string
pub fn parse_node(yaml: &str) -> Result<Node, BoxkiteError> {
    let node: Node = serde_yaml::from_str(yaml)?;
    Ok(node)
}
