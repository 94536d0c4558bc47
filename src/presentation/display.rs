use std::io::Write;
use std::path::Path;

use anyhow::Result;

/// 格式化持续时间
pub fn format_duration(duration: std::time::Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, mins, secs)
    } else if mins > 0 {
        format!("{}m {}s", mins, secs)
    } else {
        format!("{}.{:03}s", secs, duration.subsec_millis())
    }
}

/// 输出 "Found <n> <noun>:" 以及每行一个路径
pub fn write_listing<W, P>(out: &mut W, noun: &str, entries: &[P]) -> Result<()>
where
    W: Write,
    P: AsRef<Path>,
{
    writeln!(out, "Found {} {}:", entries.len(), noun)?;
    for entry in entries {
        writeln!(out, "{}", entry.as_ref().display())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn test_write_listing() {
        let entries = vec![PathBuf::from("a/file1.txt"), PathBuf::from("b/file2.txt")];
        let mut out = Vec::new();
        write_listing(&mut out, "files", &entries).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Found 2 files:\na/file1.txt\nb/file2.txt\n");
    }

    #[test]
    fn test_write_empty_listing() {
        let mut out = Vec::new();
        write_listing::<_, PathBuf>(&mut out, "directories", &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Found 0 directories:\n");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.500s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
        assert_eq!(format_duration(Duration::from_secs(3725)), "1h 2m 5s");
    }
}
