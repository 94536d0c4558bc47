use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::domain::{filter, DepthSpec, FileWalker, FilterCriteria};
use crate::infrastructure::LoggerTrait;

/// 一次查找请求
#[derive(Debug, Clone, Default)]
pub struct FindRequest {
    pub roots: Vec<PathBuf>,
    pub full_path: bool,
    pub depth: DepthSpec,
    pub get_files: bool,
    pub get_dirs: bool,
    /// 只作用于文件, 目录结果不过滤
    pub criteria: FilterCriteria,
}

/// 查找结果; 未请求的类型为 None
#[derive(Debug, Clone, Default)]
pub struct FindReport {
    pub files: Option<Vec<PathBuf>>,
    pub dirs: Option<Vec<PathBuf>>,
    pub duration: Duration,
}

/// 串联遍历和过滤
pub struct Finder {
    walker: FileWalker,
    logger: Arc<dyn LoggerTrait>,
}

impl Finder {
    pub fn new(walker: FileWalker, logger: Arc<dyn LoggerTrait>) -> Self {
        Self { walker, logger }
    }

    pub fn run(&self, request: &FindRequest) -> Result<FindReport> {
        let start_time = Instant::now();

        if self.logger.is_enabled() {
            self.logger.log_message(&format!("根目录: {:?}", request.roots))?;
            self.logger.log_message(&format!("层级: {}", request.depth))?;
            self.logger.log_message(&format!("完整路径: {}", request.full_path))?;
            self.logger.log_message(&format!("遍历选项: {:?}", self.walker.options()))?;
            if !request.criteria.is_empty() {
                self.logger.log_message(&format!("过滤条件: {:?}", request.criteria))?;
            }
        }

        let files = if request.get_files {
            let files = self
                .walker
                .collect_files(&request.roots, request.full_path, &request.depth);
            let files = if request.criteria.is_empty() {
                files
            } else {
                let before = files.len();
                let kept = filter(&files, &request.criteria);
                if self.logger.is_enabled() {
                    self.logger.log_message(&format!("过滤: {} -> {} 个文件", before, kept.len()))?;
                }
                kept
            };
            Some(files)
        } else {
            None
        };

        let dirs = if request.get_dirs {
            Some(
                self.walker
                    .collect_dirs(&request.roots, request.full_path, &request.depth),
            )
        } else {
            None
        };

        let duration = start_time.elapsed();
        self.logger.finalize(
            files.as_ref().map_or(0, Vec::len),
            dirs.as_ref().map_or(0, Vec::len),
            duration,
        )?;

        Ok(FindReport {
            files,
            dirs,
            duration,
        })
    }
}
