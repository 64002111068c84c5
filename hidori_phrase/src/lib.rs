use std::{fs, io, path::Path};

use hidori_core::phrase::ReasonSource;

/// 内置理由文案（固定顺序）。
const BUILTIN: [&str; 15] = [
    "なんとなく良い感じがしたから",
    "AIの直感です！",
    "この日が運命の日だと思うから",
    "宇宙からのメッセージを受信しました",
    "サイコロを振ったらこうなりました",
    "今日の気分的にこの日！",
    "きっと良いことがある日だから",
    "特に理由はないけど、これで決まり！",
    "この日なら間違いない（たぶん）",
    "占い的な何かでこの日が良いらしい",
    "ランダムだけど、運命的な選択です",
    "AIが3秒考えた結果です",
    "この日が一番輝いて見えたから",
    "フィーリングで選びました",
    "深い理由があるような、ないような...",
];

/// 默认语料：内置的 15 条理由。
pub struct BuiltinReasons {
    list: Vec<String>,
}

impl BuiltinReasons {
    pub fn new() -> Self {
        Self {
            list: BUILTIN.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for BuiltinReasons {
    fn default() -> Self {
        Self::new()
    }
}

impl ReasonSource for BuiltinReasons {
    fn phrases(&self) -> &[String] {
        &self.list
    }
}

/// 行文本格式（简化版）：
///
/// - 一行一条理由文案
/// - 允许 `#` 开头注释行；空行跳过
/// - 解析后一条都没有视为数据错误（空池没法抽）
#[derive(Debug)]
pub struct FileReasons {
    list: Vec<String>,
}

impl FileReasons {
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let s = fs::read_to_string(path)?;
        Self::from_lines(&s)
    }

    pub fn from_lines(s: &str) -> io::Result<Self> {
        let mut list = Vec::new();
        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            list.push(line.to_string());
        }
        if list.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "理由ファイルに1件もフレーズがありません",
            ));
        }
        Ok(Self { list })
    }
}

impl ReasonSource for FileReasons {
    fn phrases(&self) -> &[String] {
        &self.list
    }
}
