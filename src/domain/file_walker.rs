use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ignore::{DirEntry, WalkBuilder};
use indicatif::{ProgressBar, ProgressStyle};

use super::depth::DepthSpec;
use crate::infrastructure::{ErrorLogger, ErrorType, LoggerTrait};

/// 条目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::File => "文件",
            EntryKind::Directory => "目录",
        }
    }
}

/// 遍历选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOptions {
    /// 是否包含隐藏文件
    pub include_hidden: bool,
    /// 是否跟随符号链接
    pub follow_links: bool,
    /// 是否遵循 .gitignore / .ignore 规则
    pub respect_gitignore: bool,
    /// 同级条目按文件名排序
    pub sort_by_name: bool,
    /// 在标准错误输出显示进度
    pub show_progress: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            include_hidden: true,
            follow_links: false,
            respect_gitignore: false,
            sort_by_name: true,
            show_progress: false,
        }
    }
}

/// 按层级收集文件和目录
///
/// 每次调用都从空列表开始, 同一个实例可以重复使用。
pub struct FileWalker {
    options: WalkOptions,
    logger: Arc<dyn LoggerTrait>,
    errors: Arc<ErrorLogger>,
}

impl FileWalker {
    pub fn new(options: WalkOptions, logger: Arc<dyn LoggerTrait>, errors: Arc<ErrorLogger>) -> Self {
        Self {
            options,
            logger,
            errors,
        }
    }

    pub fn options(&self) -> &WalkOptions {
        &self.options
    }

    /// 收集文件
    pub fn collect_files<P: AsRef<Path>>(&self, roots: &[P], full_path: bool, depth: &DepthSpec) -> Vec<PathBuf> {
        self.collect_kind(roots, full_path, depth, EntryKind::File)
    }

    /// 收集目录
    pub fn collect_dirs<P: AsRef<Path>>(&self, roots: &[P], full_path: bool, depth: &DepthSpec) -> Vec<PathBuf> {
        self.collect_kind(roots, full_path, depth, EntryKind::Directory)
    }

    /// 收集文件和/或目录, 文件在前
    pub fn collect<P: AsRef<Path>>(
        &self,
        roots: &[P],
        full_path: bool,
        depth: &DepthSpec,
        want_files: bool,
        want_dirs: bool,
    ) -> Vec<PathBuf> {
        let mut entries = Vec::new();
        if want_files {
            entries.extend(self.collect_files(roots, full_path, depth));
        }
        if want_dirs {
            entries.extend(self.collect_dirs(roots, full_path, depth));
        }
        entries
    }

    /// 按根目录顺序依次遍历, 每个根目录的结果整体追加
    pub fn collect_kind<P: AsRef<Path>>(
        &self,
        roots: &[P],
        full_path: bool,
        depth: &DepthSpec,
        kind: EntryKind,
    ) -> Vec<PathBuf> {
        let progress = self.progress_bar();
        let mut entries = Vec::new();

        for root in roots {
            let found = self.walk_root(root.as_ref(), full_path, depth, kind, &progress);
            entries.extend(found);
        }

        progress.finish_and_clear();
        entries
    }

    fn walk_root(
        &self,
        root: &Path,
        full_path: bool,
        depth: &DepthSpec,
        kind: EntryKind,
        progress: &ProgressBar,
    ) -> Vec<PathBuf> {
        if self.logger.is_enabled() {
            let _ = self.logger.log_message(&format!(
                "开始遍历{}: {} (层级: {})",
                kind.as_str(),
                root.display(),
                depth
            ));
        }

        // 不存在或不是目录的根路径不产生任何条目
        if !root.is_dir() {
            let _ = self.errors.log_error(
                ErrorType::RootUnreadable,
                Some(root),
                "根路径不存在或不是目录",
            );
            if self.logger.is_enabled() {
                let _ = self.logger.log_message(&format!("已跳过根路径: {}", root.display()));
            }
            return Vec::new();
        }

        let mut listings = DirectoryListings::new(root);

        for result in self.build_walker(root, depth).build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    // 无法读取的子目录: 记录后继续
                    let _ = self
                        .errors
                        .log_error(ErrorType::DirectoryRead, None, &err.to_string());
                    if self.logger.is_enabled() {
                        let _ = self.logger.log_message(&format!("遍历错误: {}", err));
                    }
                    continue;
                }
            };

            // 深度 0 是根路径本身
            let level = entry.depth();
            if level == 0 {
                continue;
            }

            let entry_kind = self.classify(&entry);
            if entry.file_type().map_or(false, |ft| ft.is_dir()) {
                listings.open(entry.path());
            }

            if !depth.includes(level) || entry_kind != Some(kind) {
                continue;
            }

            let path = format_entry(&entry, full_path);
            if self.logger.is_enabled() {
                let _ = self.logger.log_entry(entry.path(), kind.as_str(), "已记录");
            }

            progress.inc(1);
            progress.set_message(format!("已找到 {} 个{}", progress.position(), kind.as_str()));
            listings.push(entry.path(), path);
        }

        let found = listings.into_entries();

        if self.logger.is_enabled() {
            let _ = self.logger.log_message(&format!(
                "完成遍历: {} (找到 {} 个{})",
                root.display(),
                found.len(),
                kind.as_str()
            ));
        }

        found
    }

    fn build_walker(&self, root: &Path, depth: &DepthSpec) -> WalkBuilder {
        let respect_gitignore = self.options.respect_gitignore;

        let mut builder = WalkBuilder::new(root);
        builder
            .hidden(!self.options.include_hidden)
            .follow_links(self.options.follow_links)
            .ignore(respect_gitignore)
            .parents(respect_gitignore)
            .git_global(respect_gitignore)
            .git_ignore(respect_gitignore)
            .git_exclude(respect_gitignore)
            // 超过最深层级后不再向下遍历
            .max_depth(depth.max_level());

        if self.options.sort_by_name {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }

        builder
    }

    /// 按文件类型归类; 未跟随的符号链接按目标类型归类, 悬空链接视为文件
    fn classify(&self, entry: &DirEntry) -> Option<EntryKind> {
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            return Some(EntryKind::Directory);
        }

        if file_type.is_symlink() {
            return match fs::metadata(entry.path()) {
                Ok(metadata) if metadata.is_dir() => Some(EntryKind::Directory),
                Ok(_) => Some(EntryKind::File),
                Err(err) => {
                    if err.kind() != io::ErrorKind::NotFound {
                        let _ = self.errors.log_error(
                            ErrorType::Metadata,
                            Some(entry.path()),
                            &err.to_string(),
                        );
                    }
                    Some(EntryKind::File)
                }
            };
        }

        Some(EntryKind::File)
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.options.show_progress {
            return ProgressBar::hidden();
        }

        let progress = ProgressBar::new_spinner();
        progress.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        progress.set_message("开始遍历");
        progress
    }
}

/// 按目录分组的遍历结果
///
/// 目录按首次访问的顺序排列, 每个目录的直接子项放在一起输出,
/// 与自上而下逐个目录列出内容的遍历顺序一致。
struct DirectoryListings {
    order: Vec<Vec<PathBuf>>,
    index: HashMap<PathBuf, usize>,
}

impl DirectoryListings {
    fn new(root: &Path) -> Self {
        let mut listings = Self {
            order: Vec::new(),
            index: HashMap::new(),
        };
        listings.open(root);
        listings
    }

    fn open(&mut self, dir: &Path) -> usize {
        if let Some(&slot) = self.index.get(dir) {
            return slot;
        }
        self.order.push(Vec::new());
        let slot = self.order.len() - 1;
        self.index.insert(dir.to_path_buf(), slot);
        slot
    }

    fn push(&mut self, walked: &Path, entry: PathBuf) {
        let parent = walked.parent().unwrap_or(walked);
        let slot = self.open(parent);
        self.order[slot].push(entry);
    }

    fn into_entries(self) -> Vec<PathBuf> {
        self.order.into_iter().flatten().collect()
    }
}

fn format_entry(entry: &DirEntry, full_path: bool) -> PathBuf {
    if full_path {
        entry.path().to_path_buf()
    } else {
        PathBuf::from(entry.file_name())
    }
}
