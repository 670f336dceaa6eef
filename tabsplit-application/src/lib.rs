#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod session;

pub use error::{AddFriendError, FormField, FormKind, SessionError, SplitBillError};
pub use model::{Action, ActionOutcome, AddFriendForm, SplitBillForm, UiMode};
pub use session::{DEFAULT_AVATAR_BASE, Session};
