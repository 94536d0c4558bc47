use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::error::{FindError, FindResult};

/// 遍历层级设置
///
/// 层级从根目录的直接子项开始计为 1。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DepthSpec {
    /// 不限层级
    #[default]
    Unbounded,
    /// 只记录指定的单个层级
    Level(usize),
    /// 只记录集合中的层级
    Levels(BTreeSet<usize>),
}

impl DepthSpec {
    /// 从命令行整数创建 (-1 表示不限层级)
    pub fn from_level(level: i64) -> FindResult<Self> {
        match level {
            -1 => Ok(DepthSpec::Unbounded),
            n if n >= 1 => Ok(DepthSpec::Level(n as usize)),
            n => Err(FindError::InvalidLevel(n)),
        }
    }

    /// 从层级列表创建
    pub fn from_levels<I>(levels: I) -> FindResult<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        let set: BTreeSet<usize> = levels.into_iter().collect();
        if set.is_empty() {
            return Err(FindError::EmptyLevelSet);
        }
        if set.contains(&0) {
            return Err(FindError::InvalidLevel(0));
        }
        Ok(DepthSpec::Levels(set))
    }

    /// 当前层级的条目是否需要记录
    pub fn includes(&self, level: usize) -> bool {
        match self {
            DepthSpec::Unbounded => true,
            DepthSpec::Level(target) => level == *target,
            DepthSpec::Levels(set) => set.contains(&level),
        }
    }

    /// 是否继续进入下一层
    pub fn should_descend(&self, level: usize) -> bool {
        match self.max_level() {
            None => true,
            Some(max) => level < max,
        }
    }

    /// 需要访问的最深层级, 不限层级时为 None
    pub fn max_level(&self) -> Option<usize> {
        match self {
            DepthSpec::Unbounded => None,
            DepthSpec::Level(target) => Some(*target),
            // 构造时保证集合非空
            DepthSpec::Levels(set) => set.iter().next_back().copied(),
        }
    }
}

impl FromStr for DepthSpec {
    type Err = FindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(DepthSpec::Unbounded);
        }

        if s.contains(',') {
            let levels = s
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(|part| {
                    part.parse::<usize>()
                        .map_err(|_| FindError::UnparsableLevel(part.to_string()))
                })
                .collect::<FindResult<Vec<usize>>>()?;
            return Self::from_levels(levels);
        }

        let level = s
            .parse::<i64>()
            .map_err(|_| FindError::UnparsableLevel(s.to_string()))?;
        Self::from_level(level)
    }
}

impl fmt::Display for DepthSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepthSpec::Unbounded => write!(f, "all"),
            DepthSpec::Level(level) => write!(f, "{}", level),
            DepthSpec::Levels(set) => {
                let joined = set
                    .iter()
                    .map(|level| level.to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                write!(f, "{}", joined)
            }
        }
    }
}
