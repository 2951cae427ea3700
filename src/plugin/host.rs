use crate::data::{ContentType, ListItem};

use super::PluginError;

/// Listing surface of the host application
///
/// A handler adds rows one at a time, may set a content hint once and
/// terminates the listing with `end_of_directory`.
pub trait DirectoryHost {
    /// Append one row. `url` is either a stream URL (playable rows) or a
    /// navigation URL back into the plugin (folders).
    fn add_directory_item(&mut self, url: &str, item: &ListItem, is_folder: bool) -> Result<(), PluginError>;

    /// Tell the host what kind of rows the listing holds
    fn set_content(&mut self, content: ContentType) -> Result<(), PluginError>;

    /// Signal that the listing is complete
    fn end_of_directory(&mut self) -> Result<(), PluginError>;

    /// Ask the user for a number. Blocks until the user answers;
    /// `None` when the dialog was cancelled or left empty.
    fn input_numeric(&mut self, heading: &str) -> Result<Option<String>, PluginError>;
}
