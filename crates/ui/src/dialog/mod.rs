mod alert_dialog;
mod content;
mod dialog;

pub use alert_dialog::*;
pub use content::*;
pub use dialog::*;
