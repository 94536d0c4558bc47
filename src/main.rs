use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use ff::application::{Config, FindRequest, Finder};
use ff::domain::{DepthSpec, FileWalker, FilterCriteria};
use ff::infrastructure::{ErrorLogger, Logger, LoggerTrait};
use ff::presentation::{format_duration, write_listing};

/// 按层级列出文件和目录, 并按扩展名、目录名或路径内容过滤
#[derive(Parser, Debug)]
#[clap(name = "ff", author, version, about, long_about = None)]
struct Args {
    /// 要遍历的目录路径
    #[clap(required = true)]
    directories: Vec<PathBuf>,

    /// 输出完整路径
    #[clap(long)]
    full_path: bool,

    /// 遍历层级: -1 表示不限层级, 也可以是单个层级或逗号分隔的层级列表 (例如 "1,2")
    #[clap(long, allow_hyphen_values = true)]
    level: Option<DepthSpec>,

    /// 列出文件
    #[clap(long)]
    get_files: bool,

    /// 列出目录
    #[clap(long)]
    get_dirs: bool,

    /// 只保留这些扩展名的文件 (包含点, 例如 ".txt")
    #[clap(long, num_args = 1..)]
    include_extensions: Vec<String>,

    /// 排除这些扩展名的文件
    #[clap(long, num_args = 1..)]
    exclude_extensions: Vec<String>,

    /// 只保留上级目录名在列表中的文件
    #[clap(long, num_args = 1..)]
    include_directories: Vec<String>,

    /// 排除上级目录名在列表中的文件
    #[clap(long, num_args = 1..)]
    exclude_directories: Vec<String>,

    /// 文件路径必须包含全部字符串
    #[clap(long, num_args = 1..)]
    include_strings: Vec<String>,

    /// 文件路径不能包含任何一个字符串
    #[clap(long, num_args = 1..)]
    exclude_strings: Vec<String>,

    /// 遵循 .gitignore 规则, 默认情况下会列出所有文件
    #[clap(long)]
    respect_gitignore: bool,

    /// 跟随符号链接
    #[clap(long)]
    follow_links: bool,

    /// 在标准错误输出显示进度
    #[clap(long)]
    progress: bool,

    /// 启用详细日志记录，日志文件将保存到当前目录
    #[clap(long)]
    log: bool,

    /// 配置文件路径 (TOML)
    #[clap(long)]
    config: Option<PathBuf>,
}

impl Args {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new()
            .include_extensions(self.include_extensions.iter().cloned())
            .exclude_extensions(self.exclude_extensions.iter().cloned())
            .include_directories(self.include_directories.iter().cloned())
            .exclude_directories(self.exclude_directories.iter().cloned())
            .include_strings(self.include_strings.iter().cloned())
            .exclude_strings(self.exclude_strings.iter().cloned())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 只有显式指定时才读取配置文件
    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };
    config.walk.respect_gitignore |= args.respect_gitignore;
    config.walk.follow_links |= args.follow_links;
    config.output.show_progress |= args.progress;
    config.output.full_path |= args.full_path;

    let depth = match &args.level {
        Some(depth) => depth.clone(),
        None => config.depth()?,
    };

    // 初始化日志记录器
    let logger: Arc<dyn LoggerTrait> = Arc::new(Logger::new(args.log)?);
    let errors = Arc::new(ErrorLogger::new(args.log)?);

    let walker = FileWalker::new(config.walk_options(), Arc::clone(&logger), Arc::clone(&errors));
    let finder = Finder::new(walker, Arc::clone(&logger));

    let request = FindRequest {
        roots: args.directories.clone(),
        full_path: config.output.full_path,
        depth,
        get_files: args.get_files,
        get_dirs: args.get_dirs,
        criteria: args.criteria(),
    };

    let report = finder.run(&request)?;

    let mut stdout = io::stdout().lock();
    if let Some(files) = &report.files {
        write_listing(&mut stdout, "files", files)?;
    }
    if let Some(dirs) = &report.dirs {
        write_listing(&mut stdout, "directories", dirs)?;
    }
    stdout.flush()?;

    errors.finalize()?;
    errors.print_error_summary();

    if logger.is_enabled() {
        eprintln!("总用时: {}", format_duration(report.duration));
    }

    Ok(())
}
