//! Configuration types for course-pilot
//!
//! This module defines the settings tree shared by the JSON and YAML loaders.
//! Field names follow the camelCase keys of the configuration file. Every
//! field accepts an explicit `null` and reads it as the zero value.

use crate::util::{SecretString, null_as_default};
use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigDocument {
    /// Process-wide behavior switches
    #[serde(deserialize_with = "null_as_default")]
    pub setting: GlobalSetting,

    /// One entry per configured account (may be empty)
    #[serde(deserialize_with = "null_as_default")]
    pub users: Vec<UserProfile>,
}

/// Process-wide settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlobalSetting {
    #[serde(deserialize_with = "null_as_default")]
    pub basic_setting: BasicSetting,
    #[serde(deserialize_with = "null_as_default")]
    pub email_inform: EmailInform,
    #[serde(deserialize_with = "null_as_default")]
    pub ai_setting: AiSetting,
}

/// Basic run-time switches. Toggles are integers where non-zero means on.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BasicSetting {
    /// Play a tone once all work is done
    #[serde(deserialize_with = "null_as_default")]
    pub completion_tone: i64,

    /// Colored log output
    #[serde(deserialize_with = "null_as_default")]
    pub color_log: i64,

    /// Also write logs to a file
    #[serde(deserialize_with = "null_as_default")]
    pub log_out_file_sw: i64,

    /// Log verbosity, e.g. "INFO" or "DEBUG"
    #[serde(deserialize_with = "null_as_default")]
    pub log_level: String,

    /// Log granularity, see [`LogMode`]
    #[serde(deserialize_with = "null_as_default")]
    pub log_model: i64,

    /// Route traffic through the IP proxy pool
    #[serde(deserialize_with = "null_as_default")]
    pub ip_proxy_sw: i64,
}

impl BasicSetting {
    pub fn completion_tone_enabled(&self) -> bool {
        self.completion_tone != 0
    }

    pub fn color_log_enabled(&self) -> bool {
        self.color_log != 0
    }

    pub fn log_to_file_enabled(&self) -> bool {
        self.log_out_file_sw != 0
    }

    pub fn proxy_enabled(&self) -> bool {
        self.ip_proxy_sw != 0
    }

    /// Interpret `log_model`. Values outside {0, 1} are unspecified.
    pub fn log_mode(&self) -> Option<LogMode> {
        LogMode::from_raw(self.log_model)
    }
}

/// Log granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// One line per video submission
    PerSubmission,
    /// One line per course
    PerCourse,
}

impl LogMode {
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(LogMode::PerSubmission),
            1 => Some(LogMode::PerCourse),
            _ => None,
        }
    }
}

/// Email notification settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailInform {
    /// Enable switch
    #[serde(deserialize_with = "null_as_default")]
    pub sw: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub smtp_host: String,
    /// Kept as text, the notifier parses it
    #[serde(deserialize_with = "null_as_default")]
    pub smtp_port: String,
    /// Sender address
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub password: SecretString,
}

impl EmailInform {
    pub fn enabled(&self) -> bool {
        self.sw != 0
    }
}

/// AI assistant settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AiSetting {
    #[serde(deserialize_with = "null_as_default")]
    pub ai_type: AiType,

    /// Provider endpoint
    #[serde(deserialize_with = "null_as_default")]
    pub ai_url: String,

    /// Model identifier
    #[serde(deserialize_with = "null_as_default")]
    pub model: String,

    /// API credential. The YAML loader also accepts `API_KEY`.
    #[serde(deserialize_with = "null_as_default")]
    pub api_key: SecretString,
}

/// AI provider tag. Matching is case-insensitive; unknown tags map to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum AiType {
    /// Not configured
    #[default]
    Unspecified,
    Tongyi,
    Chatglm,
    Xinghuo,
    Doubao,
    Openai,
    Deepseek,
    Silicon,
    Metaai,
    /// Any other provider speaking an OpenAI-compatible API
    Other,
}

impl From<String> for AiType {
    fn from(tag: String) -> Self {
        match tag.trim().to_ascii_uppercase().as_str() {
            "" => AiType::Unspecified,
            "TONGYI" => AiType::Tongyi,
            "CHATGLM" => AiType::Chatglm,
            "XINGHUO" => AiType::Xinghuo,
            "DOUBAO" => AiType::Doubao,
            "OPENAI" => AiType::Openai,
            "DEEPSEEK" => AiType::Deepseek,
            "SILICON" => AiType::Silicon,
            "METAAI" => AiType::Metaai,
            _ => AiType::Other,
        }
    }
}

/// One configured account
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    /// Platform tag, e.g. "YINGHUA"
    #[serde(deserialize_with = "null_as_default")]
    pub account_type: String,

    /// Login endpoint
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,

    #[serde(deserialize_with = "null_as_default")]
    pub account: String,
    #[serde(deserialize_with = "null_as_default")]
    pub password: SecretString,

    /// Redo work that is already complete (0/1)
    #[serde(deserialize_with = "null_as_default")]
    pub over_brush: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub courses_custom: CourseCustomization,
}

impl UserProfile {
    pub fn over_brush_enabled(&self) -> bool {
        self.over_brush != 0
    }
}

/// Per-user task shaping rules
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CourseCustomization {
    /// Video watching mode selector
    #[serde(deserialize_with = "null_as_default")]
    pub video_model: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub auto_exam: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub exam_auto_submit: i64,

    /// Courses never worked on
    #[serde(deserialize_with = "null_as_default")]
    pub exclude_courses: Vec<String>,

    /// When non-empty, only these courses are worked on
    #[serde(deserialize_with = "null_as_default")]
    pub include_courses: Vec<String>,

    /// Per-course exam rules
    #[serde(deserialize_with = "null_as_default")]
    pub courses_settings: Vec<CourseRule>,
}

impl CourseCustomization {
    pub fn auto_exam_enabled(&self) -> bool {
        self.auto_exam != 0
    }

    pub fn exam_auto_submit_enabled(&self) -> bool {
        self.exam_auto_submit != 0
    }
}

/// Exam include/exclude lists for one course
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CourseRule {
    /// Course name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub include_exams: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub exclude_exams: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document() {
        let doc = ConfigDocument::default();
        assert!(doc.users.is_empty());
        assert_eq!(doc.setting.basic_setting.log_model, 0);
        assert_eq!(doc.setting.ai_setting.ai_type, AiType::Unspecified);
        assert!(doc.setting.ai_setting.api_key.is_empty());
    }

    #[test]
    fn test_log_mode() {
        let mut basic = BasicSetting::default();
        assert_eq!(basic.log_mode(), Some(LogMode::PerSubmission));

        basic.log_model = 1;
        assert_eq!(basic.log_mode(), Some(LogMode::PerCourse));

        basic.log_model = 5;
        assert_eq!(basic.log_mode(), None);
    }

    #[test]
    fn test_deserialize_ai_type() {
        let ai: AiType = serde_json::from_str(r#""TONGYI""#).unwrap();
        assert_eq!(ai, AiType::Tongyi);

        let ai: AiType = serde_json::from_str(r#""openai""#).unwrap();
        assert_eq!(ai, AiType::Openai);

        let ai: AiType = serde_json::from_str(r#""KIMI""#).unwrap();
        assert_eq!(ai, AiType::Other);

        let ai: AiType = serde_json::from_str(r#""""#).unwrap();
        assert_eq!(ai, AiType::Unspecified);
    }

    #[test]
    fn test_omitted_lists_are_empty() {
        let user: UserProfile = serde_json::from_str(r#"{"account": "alice"}"#).unwrap();
        assert_eq!(user.account, "alice");
        assert!(user.courses_custom.include_courses.is_empty());
        assert!(user.courses_custom.exclude_courses.is_empty());
        assert!(user.courses_custom.courses_settings.is_empty());
    }

    #[test]
    fn test_null_fields_are_zero() {
        let doc: ConfigDocument = serde_json::from_str(
            r#"{
                "setting": {"basicSetting": {"logLevel": null, "logModel": null}, "aiSetting": null},
                "users": [{
                    "account": "alice",
                    "password": null,
                    "coursesCustom": {
                        "excludeCourses": null,
                        "includeCourses": null,
                        "coursesSettings": [{"name": "math101", "includeExams": null, "excludeExams": null}]
                    }
                }]
            }"#,
        )
        .unwrap();

        assert!(doc.setting.basic_setting.log_level.is_empty());
        assert_eq!(doc.setting.basic_setting.log_model, 0);
        assert_eq!(doc.setting.ai_setting, AiSetting::default());

        let user = &doc.users[0];
        assert!(user.password.is_empty());
        assert!(user.courses_custom.exclude_courses.is_empty());
        assert!(user.courses_custom.include_courses.is_empty());
        assert!(user.courses_custom.courses_settings[0].include_exams.is_empty());
        assert!(user.courses_custom.courses_settings[0].exclude_exams.is_empty());

        let doc: ConfigDocument = serde_json::from_str(r#"{"users": null}"#).unwrap();
        assert!(doc.users.is_empty());
    }

    #[test]
    fn test_toggles() {
        let user: UserProfile = serde_json::from_str(
            r#"{"overBrush": 1, "coursesCustom": {"autoExam": 1, "examAutoSubmit": 0}}"#,
        )
        .unwrap();
        assert!(user.over_brush_enabled());
        assert!(user.courses_custom.auto_exam_enabled());
        assert!(!user.courses_custom.exam_auto_submit_enabled());
    }
}
