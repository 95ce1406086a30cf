/// Checked by [`super::ConfigManager`] before a config is cached or written.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
