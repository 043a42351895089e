//! Common traits for platform resources

/// Common trait for object store resources
pub trait PlatformResource {
    /// Get the resource ID
    fn id(&self) -> &str;

    /// Get the human-readable name
    fn name(&self) -> &str;

    /// Case-sensitive prefix match on the ID
    fn id_starts_with(&self, prefix: &str) -> bool {
        self.id().starts_with(prefix)
    }
}
