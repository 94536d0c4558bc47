use std::path::Path;

/// 路径分解结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathInfo {
    /// 上级目录 (没有时为空字符串)
    pub parent: String,
    /// 带扩展名的文件名
    pub file_name: String,
    /// 去掉扩展名的文件名
    pub stem: String,
    /// 扩展名, 包含前导的点, 没有时为空字符串
    pub extension: String,
}

/// 分解路径, 不访问文件系统
pub fn describe(path: &Path) -> PathInfo {
    let parent = path
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = file_name_of(path);
    let (stem, extension) = split_extension(&file_name);

    PathInfo {
        parent,
        stem: stem.to_string(),
        extension: extension.to_string(),
        file_name,
    }
}

/// 获取路径的扩展名 (包含点)
pub fn extension_of(path: &Path) -> String {
    let file_name = file_name_of(path);
    split_extension(&file_name).1.to_string()
}

/// 获取上级目录的名称
pub fn parent_name_of(path: &Path) -> String {
    path.parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// 按最后一个点拆分文件名; 开头的点不算扩展名分隔符
fn split_extension(file_name: &str) -> (&str, &str) {
    let leading_dots = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[leading_dots..].rfind('.') {
        Some(idx) => file_name.split_at(leading_dots + idx),
        None => (file_name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_describe_file() {
        let info = describe(Path::new("/tmp/dir1/file1.txt"));
        assert_eq!(info.parent, "/tmp/dir1");
        assert_eq!(info.file_name, "file1.txt");
        assert_eq!(info.stem, "file1");
        assert_eq!(info.extension, ".txt");
    }

    #[test]
    fn test_describe_without_extension() {
        let info = describe(Path::new("/tmp/dir2"));
        assert_eq!(info.parent, "/tmp");
        assert_eq!(info.file_name, "dir2");
        assert_eq!(info.stem, "dir2");
        assert_eq!(info.extension, "");
    }

    #[test]
    fn test_multiple_dots_use_last() {
        let info = describe(Path::new("archive.tar.gz"));
        assert_eq!(info.parent, "");
        assert_eq!(info.stem, "archive.tar");
        assert_eq!(info.extension, ".gz");
    }

    #[test]
    fn test_dotfiles() {
        let info = describe(Path::new("home/.bashrc"));
        assert_eq!(info.stem, ".bashrc");
        assert_eq!(info.extension, "");

        let info = describe(Path::new("home/.config.toml"));
        assert_eq!(info.stem, ".config");
        assert_eq!(info.extension, ".toml");
    }

    #[test]
    fn test_trailing_dot() {
        assert_eq!(extension_of(Path::new("notes.")), ".");
    }

    #[test]
    fn test_parent_name() {
        assert_eq!(parent_name_of(Path::new("/a/b/c.txt")), "b");
        assert_eq!(parent_name_of(Path::new("c.txt")), "");
        assert_eq!(parent_name_of(&PathBuf::from("b").join("c.txt")), "b");
    }

    #[test]
    fn test_stem_and_extension_rebuild_file_name() {
        for name in ["a.txt", ".hidden", "x.y.z", "plain", "..weird.rs"] {
            let info = describe(Path::new(name));
            assert_eq!(format!("{}{}", info.stem, info.extension), info.file_name);
        }
    }
}
