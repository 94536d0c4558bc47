pub mod batch;
pub mod depth;
pub mod error;
pub mod file_walker;
pub mod filter;
pub mod path_info;

pub use batch::{for_each, for_each_with};
pub use depth::DepthSpec;
pub use error::{FindError, FindResult};
pub use file_walker::{EntryKind, FileWalker, WalkOptions};
pub use filter::{filter, FilterCriteria};
pub use path_info::{describe, PathInfo};
