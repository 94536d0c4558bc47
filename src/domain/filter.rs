use std::path::{Path, PathBuf};

use super::path_info::{extension_of, parent_name_of};

/// 结果过滤条件
///
/// 每个列表为空时表示该维度不做限制。不同维度之间是"与"关系。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub include_extensions: Vec<String>,
    pub exclude_extensions: Vec<String>,
    pub include_directories: Vec<String>,
    pub exclude_directories: Vec<String>,
    pub include_strings: Vec<String>,
    pub exclude_strings: Vec<String>,
}

impl FilterCriteria {
    /// 创建空的过滤条件
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include_extensions<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_extensions = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn exclude_extensions<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_extensions = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn include_directories<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_directories = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn exclude_directories<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_directories = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn include_strings<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_strings = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn exclude_strings<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_strings = values.into_iter().map(Into::into).collect();
        self
    }

    /// 是否没有任何过滤条件
    pub fn is_empty(&self) -> bool {
        self.include_extensions.is_empty()
            && self.exclude_extensions.is_empty()
            && self.include_directories.is_empty()
            && self.exclude_directories.is_empty()
            && self.include_strings.is_empty()
            && self.exclude_strings.is_empty()
    }

    /// 检查单个路径是否通过全部条件
    ///
    /// 检查顺序: 扩展名, 上级目录名, 路径子串。遇到第一个不满足的条件即返回。
    pub fn matches(&self, path: &Path) -> bool {
        if !self.include_extensions.is_empty() || !self.exclude_extensions.is_empty() {
            let extension = extension_of(path);
            if !self.include_extensions.is_empty() && !contains(&self.include_extensions, &extension) {
                return false;
            }
            if contains(&self.exclude_extensions, &extension) {
                return false;
            }
        }

        if !self.include_directories.is_empty() || !self.exclude_directories.is_empty() {
            let parent = parent_name_of(path);
            if !self.include_directories.is_empty() && !contains(&self.include_directories, &parent) {
                return false;
            }
            if contains(&self.exclude_directories, &parent) {
                return false;
            }
        }

        if !self.include_strings.is_empty() || !self.exclude_strings.is_empty() {
            let path_str = path.to_string_lossy();
            if !self.include_strings.iter().all(|s| path_str.contains(s.as_str())) {
                return false;
            }
            if self.exclude_strings.iter().any(|s| path_str.contains(s.as_str())) {
                return false;
            }
        }

        true
    }
}

fn contains(values: &[String], candidate: &str) -> bool {
    values.iter().any(|value| value == candidate)
}

/// 按条件过滤路径列表, 保持原有顺序
pub fn filter<P>(paths: &[P], criteria: &FilterCriteria) -> Vec<PathBuf>
where
    P: AsRef<Path>,
{
    paths
        .iter()
        .map(AsRef::as_ref)
        .filter(|path| criteria.matches(path))
        .map(Path::to_path_buf)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_paths() -> Vec<PathBuf> {
        vec![
            PathBuf::from("root/file1.txt"),
            PathBuf::from("root/dir1/file2.txt"),
            PathBuf::from("root/dir1/subdir1/file3.txt"),
            PathBuf::from("root/dir2/file4.py"),
            PathBuf::from("root/dir2/.env"),
        ]
    }

    #[test]
    fn test_no_criteria_is_identity() {
        let paths = sample_paths();
        let criteria = FilterCriteria::new();
        assert!(criteria.is_empty());
        assert_eq!(filter(&paths, &criteria), paths);
    }

    #[test]
    fn test_include_extensions() {
        let criteria = FilterCriteria::new().include_extensions([".txt"]);
        let result = filter(&sample_paths(), &criteria);
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|p| p.to_string_lossy().ends_with(".txt")));
    }

    #[test]
    fn test_exclude_extensions() {
        let criteria = FilterCriteria::new().exclude_extensions([".txt"]);
        let result = filter(&sample_paths(), &criteria);
        assert_eq!(
            result,
            vec![PathBuf::from("root/dir2/file4.py"), PathBuf::from("root/dir2/.env")]
        );
    }

    #[test]
    fn test_empty_extension_is_matchable() {
        let criteria = FilterCriteria::new().include_extensions([""]);
        let result = filter(&sample_paths(), &criteria);
        assert_eq!(result, vec![PathBuf::from("root/dir2/.env")]);
    }

    #[test]
    fn test_directory_filters_use_immediate_parent() {
        let criteria = FilterCriteria::new().include_directories(["dir1"]);
        let result = filter(&sample_paths(), &criteria);
        // subdir1 下的文件上级目录不是 dir1
        assert_eq!(result, vec![PathBuf::from("root/dir1/file2.txt")]);

        let criteria = FilterCriteria::new().exclude_directories(["dir2", "subdir1"]);
        let result = filter(&sample_paths(), &criteria);
        assert_eq!(
            result,
            vec![PathBuf::from("root/file1.txt"), PathBuf::from("root/dir1/file2.txt")]
        );
    }

    #[test]
    fn test_include_strings_require_all() {
        let criteria = FilterCriteria::new().include_strings(["dir1"]);
        assert_eq!(filter(&sample_paths(), &criteria).len(), 2);

        let criteria = FilterCriteria::new().include_strings(["dir1", "subdir"]);
        assert_eq!(
            filter(&sample_paths(), &criteria),
            vec![PathBuf::from("root/dir1/subdir1/file3.txt")]
        );
    }

    #[test]
    fn test_exclude_strings_reject_any() {
        let criteria = FilterCriteria::new().exclude_strings(["subdir", "py"]);
        let result = filter(&sample_paths(), &criteria);
        assert_eq!(result.len(), 3);
        assert!(!result.contains(&PathBuf::from("root/dir2/file4.py")));
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let criteria = FilterCriteria::new()
            .include_extensions([".txt"])
            .exclude_extensions([".txt"]);
        assert!(filter(&sample_paths(), &criteria).is_empty());
    }

    #[test]
    fn test_dimensions_combine_with_and() {
        let criteria = FilterCriteria::new()
            .include_extensions([".txt", ".py"])
            .exclude_directories(["dir1"])
            .exclude_strings(["subdir"]);
        assert_eq!(
            filter(&sample_paths(), &criteria),
            vec![PathBuf::from("root/file1.txt"), PathBuf::from("root/dir2/file4.py")]
        );
    }

    #[test]
    fn test_filter_is_idempotent() {
        let criteria = FilterCriteria::new()
            .include_extensions([".txt"])
            .exclude_strings(["subdir"]);
        let once = filter(&sample_paths(), &criteria);
        let twice = filter(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_preserves_order() {
        let paths = vec![
            PathBuf::from("z.txt"),
            PathBuf::from("a.py"),
            PathBuf::from("m.txt"),
        ];
        let criteria = FilterCriteria::new().include_extensions([".txt"]);
        assert_eq!(
            filter(&paths, &criteria),
            vec![PathBuf::from("z.txt"), PathBuf::from("m.txt")]
        );
    }
}
