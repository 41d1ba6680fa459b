pub mod forms;
pub mod reducer;
pub mod toast;

pub use forms::ItemForm;
pub use reducer::{Change, ContentAction, reduce};
pub use toast::{Chime, SilentChime, TOAST_DURATION, Toast, ToastSlot};
