// 三层架构模块
pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

// 重新导出主要类型
pub use domain::{
    describe, filter, for_each, for_each_with, DepthSpec, EntryKind, FileWalker, FilterCriteria,
    FindError, PathInfo, WalkOptions,
};
pub use application::{Config, FindReport, FindRequest, Finder};
pub use infrastructure::{ErrorLogger, ErrorType, Logger, LoggerTrait};
pub use presentation::{format_duration, write_listing};
