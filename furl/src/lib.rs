pub mod dispatch;
pub mod handlers;
pub mod state;
pub mod widgets;

pub use dispatch::{dispatch_activation, DispatchError};
pub use handlers::{ChangeHandler, Handler, HandlerRegistry};
pub use state::ToggleState;

pub mod prelude {
    pub use crate::dispatch::{dispatch_activation, DispatchError};
    pub use crate::handlers::{ChangeHandler, Handler, HandlerRegistry};
    pub use crate::state::ToggleState;
    pub use crate::widgets::{menu_classes, menu_items, Dropdown, ItemKind, ItemSpec, MenuItem};

    pub use furl_dom::{find_element, markup, Content, Element};
}
