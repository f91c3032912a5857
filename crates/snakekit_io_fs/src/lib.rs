//! `snakekit_io_fs` v1:
//! Filesystem engine that copies a directory tree under snake-case names.
//!
//! Modules:
//! - `rename` : traversal and copy orchestration
//! - `spec`   : enums/options/events/errors
//! - `report` : run-time report model
//! - `util`   : shared helper functions

pub mod rename;
pub mod report;
pub mod spec;
mod util;

pub use rename::rename_tree;
pub use report::ReportRename;
pub use spec::{
    C_OUTPUT_FOLDER_DEFAULT, EnumRenameOutcome, EnumRenamePatternMode, EventRename,
    RenameTreeError, SpecRenameError, SpecRenameOptions,
};
