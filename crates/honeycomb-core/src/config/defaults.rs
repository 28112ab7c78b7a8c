//! Default values for Honeycomb configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Storage Defaults
// ============================================================================

/// Default data directory.
pub const DEFAULT_DATA_DIR: &str = ".honeycomb";

/// Store key of the hive root.
pub const DEFAULT_ROOT_KEY: &str = "app_root";

/// Extension of stored documents.
pub const DEFAULT_FILE_EXTENSION: &str = "json";

/// Version written into stored documents.
pub const STORE_FORMAT_VERSION: u32 = 1;

// ============================================================================
// Import Defaults
// ============================================================================

/// Maximum size of an import payload (2 MiB).
pub const DEFAULT_MAX_IMPORT_BYTES: usize = 2 * 1024 * 1024;

// ============================================================================
// Server Defaults
// ============================================================================

/// Default listen host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 6543;

/// Default public base URL used in resource links.
pub const DEFAULT_BASE_URL: &str = "http://localhost:6543";

// ============================================================================
// Layout Defaults
// ============================================================================

/// Radius of the circular view layout.
pub const DEFAULT_LAYOUT_RADIUS: f64 = 300.0;

pub const DEFAULT_ROOT_WIDTH: u32 = 200;
pub const DEFAULT_ROOT_HEIGHT: u32 = 80;
pub const DEFAULT_CHILD_WIDTH: u32 = 152;
pub const DEFAULT_CHILD_HEIGHT: u32 = 58;

// ============================================================================
// Content Defaults
// ============================================================================

/// Title of a freshly created hive root.
pub const DEFAULT_HIVE_TITLE: &str = "BeeHive Root";

/// Name of the graph seeded into a new hive.
pub const DEFAULT_MAIN_GRAPH: &str = "main-graph";

/// Base name for nodes created from the graph page.
pub const DEFAULT_NEW_NODE_BASE: &str = "new-node";

/// Title for nodes created from the graph page.
pub const DEFAULT_NEW_NODE_TITLE: &str = "New node";

/// Title and kind of edges created from the node editor.
pub const DEFAULT_CONNECTION_TITLE: &str = "Connection created";
pub const DEFAULT_CONNECTION_KIND: &str = "default";
