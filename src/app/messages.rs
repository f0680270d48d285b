//! AppMessage enum for async communication within the application.

use crate::models::PageData;

/// Messages sent back to the event loop by spawned fetch tasks.
///
/// Every message carries the request generation it belongs to; the app
/// discards messages whose generation is stale.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A page fetch completed successfully.
    PageLoaded {
        generation: u64,
        page_number: u16,
        data: PageData,
    },
    /// A page fetch failed; `message` is already user-facing.
    PageLoadFailed { generation: u64, message: String },
}
