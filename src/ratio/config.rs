//! 절:구 비율 검증 설정
//!
//! 목표 비율과 허용 오차 정의

use serde::{Deserialize, Serialize};

/// 절:구 비율 검증 설정
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioConfig {
    /// 목표 비율 (절:구 = target:1)
    #[serde(default = "default_target_ratio")]
    pub target_ratio: f64,

    /// 허용 오차 (목표 ± tolerance, 경계 포함)
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

fn default_target_ratio() -> f64 {
    2.0
}

fn default_tolerance() -> f64 {
    0.3
}

impl Default for RatioConfig {
    fn default() -> Self {
        Self {
            target_ratio: default_target_ratio(),
            tolerance: default_tolerance(),
        }
    }
}

impl RatioConfig {
    /// 새 설정 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 목표 비율 설정
    pub fn with_target(mut self, target_ratio: f64) -> Self {
        self.target_ratio = target_ratio;
        self
    }

    /// 허용 오차 설정
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// 허용 범위 하한
    pub fn min_ratio(&self) -> f64 {
        self.target_ratio - self.tolerance
    }

    /// 허용 범위 상한
    pub fn max_ratio(&self) -> f64 {
        self.target_ratio + self.tolerance
    }

    /// 절 수 기준 이상적인 구 수 (내림)
    pub fn ideal_phrase_count(&self, clause_count: usize) -> i64 {
        (clause_count as f64 / self.target_ratio).floor() as i64
    }

    /// 이상적인 구 수의 허용 폭 (내림)
    pub fn phrase_slack(&self, clause_count: usize) -> i64 {
        (clause_count as f64 * self.tolerance / self.target_ratio).floor() as i64
    }
}
