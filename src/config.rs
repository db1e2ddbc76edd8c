//! 설정 파일 로드/저장 (JSON)
//!
//! 금지 단어 사전은 로직이 아니라 설정 데이터이므로 여기서 관리한다.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::detection::blacklist::{Blacklist, DEFAULT_WORDS};

/// Jamofix 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct JamofixConfig {
    /// 변환 금지 단어 목록 (후보에 포함되면 변환 거부)
    #[serde(default = "default_blacklist")]
    pub blacklist: Vec<String>,
}

fn default_blacklist() -> Vec<String> {
    DEFAULT_WORDS.iter().map(|w| w.to_string()).collect()
}

impl Default for JamofixConfig {
    fn default() -> Self {
        Self {
            blacklist: default_blacklist(),
        }
    }
}

impl JamofixConfig {
    /// 설정의 단어 목록으로 사전 생성
    pub fn to_blacklist(&self) -> Blacklist {
        Blacklist::from_words(&self.blacklist)
    }
}

/// 설정 파일 경로: ~/.config/jamofix/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백 (쓰기 가능, /tmp보다 안전)
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("jamofix").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> JamofixConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파싱 실패, 기본값 사용: {}", e);
            JamofixConfig::default()
        }),
        Err(_) => JamofixConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &JamofixConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
