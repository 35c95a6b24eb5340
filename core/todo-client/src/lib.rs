//! Client side of the todo item store.
//!
//! - [`TodoClient`]: one method per API endpoint
//! - [`TodoView`]: the local item list, patched after each round trip
//! - [`ItemEditor`] / [`AddForm`]: input state that never leaves the client
//! - [`render`]: plain-text rendering used by the `todo` binary

mod api;
mod editor;
mod error;
mod render;
mod view;

pub use api::{ClientConfig, TodoClient, DEFAULT_SERVER_URL};
pub use editor::{AddForm, EditMode, ItemEditor};
pub use error::{ClientError, ClientResult};
pub use render::render;
pub use view::{Outcome, TodoView};
