/// Value types shared by the router and the host bindings
pub mod list_item;
pub mod mode;
pub mod navigation;

pub use list_item::{ContentType, ListItem, MusicInfo};
pub use mode::Mode;
pub use navigation::{NavigationError, NavigationRequest};
