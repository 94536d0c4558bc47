use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::{DepthSpec, WalkOptions};

/// 应用程序配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 遍历相关配置
    pub walk: WalkConfig,
    /// 输出相关配置
    pub output: OutputConfig,
}

/// 遍历配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// 默认层级 ("-1"/"all", "2", "1,2")
    pub level: String,
    /// 是否包含隐藏文件
    pub hidden: bool,
    /// 是否跟随符号链接
    pub follow_links: bool,
    /// 是否遵循 .gitignore 规则
    pub respect_gitignore: bool,
    /// 同级条目按名称排序
    pub sort_by_name: bool,
}

/// 输出配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// 默认输出完整路径
    pub full_path: bool,
    /// 显示进度
    pub show_progress: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            level: "-1".to_string(),
            hidden: true,
            follow_links: false,
            respect_gitignore: false,
            sort_by_name: true,
        }
    }
}

impl Config {
    /// 从文件加载配置
    pub fn load_from_file(config_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("无法读取配置文件: {}", config_path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("无法解析配置文件: {}", config_path.display()))?;

        config
            .validate()
            .with_context(|| format!("配置文件无效: {}", config_path.display()))?;
        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, config_path: &Path) -> Result<()> {
        // 确保目录存在
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("无法创建配置目录: {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("无法序列化配置")?;

        fs::write(config_path, content)
            .with_context(|| format!("无法写入配置文件: {}", config_path.display()))?;

        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        self.depth()?;
        Ok(())
    }

    /// 解析默认层级
    pub fn depth(&self) -> Result<DepthSpec> {
        self.walk
            .level
            .parse::<DepthSpec>()
            .with_context(|| format!("walk.level 无效: '{}'", self.walk.level))
    }

    /// 转换为遍历选项
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            include_hidden: self.walk.hidden,
            follow_links: self.walk.follow_links,
            respect_gitignore: self.walk.respect_gitignore,
            sort_by_name: self.walk.sort_by_name,
            show_progress: self.output.show_progress,
        }
    }
}
