use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use chrono::Local;

/// 错误类型分类
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// 根目录不存在或无法读取
    RootUnreadable,
    /// 子目录读取失败
    DirectoryRead,
    /// 无法获取元数据
    Metadata,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::RootUnreadable => "根目录不可读",
            ErrorType::DirectoryRead => "目录读取",
            ErrorType::Metadata => "元数据",
        }
    }
}

/// 错误日志记录器
///
/// 计数始终生效; 只有启用时才写入错误日志文件。
pub struct ErrorLogger {
    error_file: Arc<Mutex<Option<File>>>,
    error_path: PathBuf,
    enabled: bool,
    error_counts: Arc<Mutex<HashMap<ErrorType, usize>>>,
}

impl ErrorLogger {
    /// 创建新的错误日志记录器, 日志文件写到当前目录
    pub fn new(enabled: bool) -> Result<Self> {
        Self::in_dir(enabled, Path::new("."))
    }

    /// 在指定目录创建错误日志记录器
    pub fn in_dir(enabled: bool, dir: &Path) -> Result<Self> {
        if !enabled {
            return Ok(Self {
                error_file: Arc::new(Mutex::new(None)),
                error_path: PathBuf::new(),
                enabled: false,
                error_counts: Arc::new(Mutex::new(HashMap::new())),
            });
        }

        let now = Local::now();
        let timestamp = now.format("%Y%m%d_%H%M%S");
        let error_path = dir.join(format!("ff_error_{}.log", timestamp));

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&error_path)?;

        // 写入UTF-8 BOM以确保文件被正确识别为UTF-8
        let mut file_clone = file.try_clone()?;
        file_clone.write_all(&[0xEF, 0xBB, 0xBF])?;

        writeln!(file_clone, "# ff 错误日志")?;
        writeln!(file_clone, "# 开始时间: {}", now.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(file_clone, "# ============================================")?;
        writeln!(file_clone)?;

        Ok(Self {
            error_file: Arc::new(Mutex::new(Some(file))),
            error_path,
            enabled: true,
            error_counts: Arc::new(Mutex::new(HashMap::new())),
        })
    }

    /// 记录错误
    pub fn log_error(
        &self,
        error_type: ErrorType,
        path: Option<&Path>,
        message: &str,
    ) -> Result<()> {
        if let Ok(mut counts) = self.error_counts.lock() {
            *counts.entry(error_type.clone()).or_insert(0) += 1;
        }

        if !self.enabled {
            return Ok(());
        }

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");

        if let Ok(mut file_guard) = self.error_file.lock() {
            if let Some(ref mut file) = *file_guard {
                writeln!(file, "[{}] {} - {}", timestamp, error_type.as_str(), message)?;

                if let Some(path) = path {
                    writeln!(file, "  路径: {}", path.display())?;
                }

                writeln!(file)?;
                file.flush()?;
            }
        }

        Ok(())
    }

    /// 获取错误统计信息
    pub fn get_error_summary(&self) -> HashMap<ErrorType, usize> {
        if let Ok(counts) = self.error_counts.lock() {
            counts.clone()
        } else {
            HashMap::new()
        }
    }

    /// 获取总错误数
    pub fn get_total_errors(&self) -> usize {
        if let Ok(counts) = self.error_counts.lock() {
            counts.values().sum()
        } else {
            0
        }
    }

    /// 检查是否有错误
    pub fn has_errors(&self) -> bool {
        self.get_total_errors() > 0
    }

    /// 完成错误日志记录
    pub fn finalize(&self) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        if let Ok(mut file_guard) = self.error_file.lock() {
            if let Some(ref mut file) = *file_guard {
                let now = Local::now();
                writeln!(file, "# ============================================")?;
                writeln!(file, "# 结束时间: {}", now.format("%Y-%m-%d %H:%M:%S"))?;

                let summary = self.get_error_summary();
                if summary.is_empty() {
                    writeln!(file, "# 无错误记录")?;
                } else {
                    writeln!(file, "# 错误统计:")?;
                    for (error_type, count) in &summary {
                        writeln!(file, "#   {}: {} 次", error_type.as_str(), count)?;
                    }
                    writeln!(file, "#   总计: {} 个错误", self.get_total_errors())?;
                }

                file.flush()?;
            }
        }

        Ok(())
    }

    /// 打印错误摘要到标准错误输出
    pub fn print_error_summary(&self) {
        if !self.has_errors() {
            return;
        }

        eprintln!("\n遍历过程中跳过了部分路径:");
        eprintln!("----------------------------");

        for (error_type, count) in &self.get_error_summary() {
            eprintln!("  {}: {} 次", error_type.as_str(), count);
        }

        eprintln!("  总计: {} 个错误", self.get_total_errors());
        if self.enabled {
            eprintln!("  详细错误信息请查看: {}", self.error_path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_error_logger_creation() {
        let logger = ErrorLogger::new(false).unwrap();
        assert_eq!(logger.get_total_errors(), 0);
        assert!(!logger.has_errors());
    }

    #[test]
    fn test_counts_kept_when_disabled() {
        let logger = ErrorLogger::new(false).unwrap();
        logger
            .log_error(ErrorType::DirectoryRead, Some(Path::new("/nope")), "权限不足")
            .unwrap();

        assert_eq!(logger.get_total_errors(), 1);
        assert_eq!(logger.get_error_summary().get(&ErrorType::DirectoryRead), Some(&1));
    }

    #[test]
    fn test_error_logging_to_file() {
        let dir = tempdir().unwrap();
        let logger = ErrorLogger::in_dir(true, dir.path()).unwrap();

        logger
            .log_error(ErrorType::RootUnreadable, Some(Path::new("/missing")), "测试错误")
            .unwrap();
        logger.finalize().unwrap();

        let content = fs::read_to_string(&logger.error_path).unwrap();
        assert!(content.contains("根目录不可读 - 测试错误"));
        assert!(content.contains("/missing"));
        assert!(content.contains("总计: 1 个错误"));
    }

    #[test]
    fn test_error_types() {
        assert_eq!(ErrorType::DirectoryRead.as_str(), "目录读取");
        assert_eq!(ErrorType::Metadata.as_str(), "元数据");
    }
}
