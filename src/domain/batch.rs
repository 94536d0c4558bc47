use std::path::Path;

/// 对每个路径依次执行操作, 遇到第一个错误立即返回
pub fn for_each<P, F, E>(paths: &[P], mut operation: F) -> Result<(), E>
where
    P: AsRef<Path>,
    F: FnMut(&Path) -> Result<(), E>,
{
    for path in paths {
        operation(path.as_ref())?;
    }
    Ok(())
}

/// 与 [`for_each`] 相同, 额外参数原样传给每次调用
pub fn for_each_with<P, A, F, E>(paths: &[P], extra: &A, mut operation: F) -> Result<(), E>
where
    P: AsRef<Path>,
    A: ?Sized,
    F: FnMut(&Path, &A) -> Result<(), E>,
{
    for_each(paths, |path| operation(path, extra))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_visits_in_order() {
        let paths = vec![PathBuf::from("a"), PathBuf::from("b"), PathBuf::from("c")];
        let mut seen = Vec::new();

        for_each(&paths, |path| -> Result<(), ()> {
            seen.push(path.to_path_buf());
            Ok(())
        })
        .unwrap();

        assert_eq!(seen, paths);
    }

    #[test]
    fn test_extra_args_passed_through() {
        let paths = ["x.txt", "y.txt"];
        let mut lines = Vec::new();

        for_each_with(&paths, "Additional argument", |path, extra| -> Result<(), ()> {
            lines.push(format!("{} {}", path.display(), extra));
            Ok(())
        })
        .unwrap();

        assert_eq!(lines, vec!["x.txt Additional argument", "y.txt Additional argument"]);
    }

    #[test]
    fn test_fails_fast() {
        let paths = ["one", "two", "three"];
        let mut visited = 0;

        let result = for_each(&paths, |path| {
            visited += 1;
            if path == Path::new("two") {
                Err(format!("失败: {}", path.display()))
            } else {
                Ok(())
            }
        });

        assert_eq!(result, Err("失败: two".to_string()));
        assert_eq!(visited, 2);
    }
}
