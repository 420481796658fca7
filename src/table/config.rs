//! Sound table configuration

/// Sound table configuration options
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Unload the previous handle when a name is registered again
    pub unload_on_overwrite: bool,

    /// Number of entries to reserve space for up front
    pub initial_capacity: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            unload_on_overwrite: true,
            initial_capacity: 16,
        }
    }
}

impl TableConfig {
    /// Set whether overwriting a name unloads the previous handle
    ///
    /// When disabled the previous handle is dropped without `unload()`.
    pub fn unload_on_overwrite(mut self, enabled: bool) -> Self {
        self.unload_on_overwrite = enabled;
        self
    }

    /// Set the initial entry capacity
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}
