use thiserror::Error;

/// 领域层错误
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FindError {
    /// 层级必须为正整数 (-1 表示不限层级)
    #[error("无效的层级: {0} (层级从 1 开始, -1 表示不限层级)")]
    InvalidLevel(i64),

    /// 层级集合不能为空
    #[error("层级集合不能为空")]
    EmptyLevelSet,

    /// 无法解析的层级文本
    #[error("无法解析层级 '{0}'")]
    UnparsableLevel(String),
}

pub type FindResult<T> = std::result::Result<T, FindError>;
