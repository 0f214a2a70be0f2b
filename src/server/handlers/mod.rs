pub mod contact_submit;
pub mod content_create;
pub mod content_delete;
pub mod content_list;
pub mod content_read;
pub mod content_toggle;
pub mod content_update;
pub mod daemon;
pub mod generate;
