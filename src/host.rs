//! Hosting-context callbacks consumed by the form controller

use crate::domain::RelayRecord;

/// The context a relay key dialog lives in
pub trait DialogHost {
    /// A save succeeded; `record` is the server's response, unmodified
    fn on_submit_success(&mut self, record: &RelayRecord);

    /// Close the dialog
    fn close_modal(&mut self);

    /// Show a user-facing error notification
    fn notify_error(&mut self, message: &str);
}
