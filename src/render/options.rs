//! Rendering options and configuration.

/// Default wrap column for menu text.
pub const DEFAULT_WIDTH: usize = 80;

/// Options for rendering a document as a menu.
///
/// The host and port are the network identity written into every
/// navigable menu line; clients reconnect there to follow a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Host clients should reconnect to
    pub host: String,

    /// Port clients should reconnect to
    pub port: u16,

    /// Wrap column for informational text
    pub width: usize,
}

impl RenderOptions {
    /// Create options for a given network identity.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            width: DEFAULT_WIDTH,
        }
    }

    /// Set the wrap column.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}
