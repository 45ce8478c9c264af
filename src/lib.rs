//! Course Pilot configuration
//!
//! Loads the run-time settings for a per-user course-watching and
//! exam-taking automation tool.
//!
//! ## Loading
//!
//! - [`FileConfigLoader`] reads an explicit JSON file. Omitted fields take
//!   their zero value.
//! - [`DiscoveredConfigLoader`] looks for `config.yaml` (or `config.yml`) in
//!   its search directories and fills omitted keys from a [`Defaults`] table.
//!
//! Both return `Result<ConfigDocument, ConfigError>`; the caller decides
//! whether a failure ends the process.
//!
//! ## Example Configuration
//!
//! ```yaml
//! setting:
//!   basicSetting:
//!     completionTone: 1
//!     logLevel: INFO
//!   aiSetting:
//!     aiType: TONGYI
//!     API_KEY: sk-xxxx
//! users:
//!   - accountType: YINGHUA
//!     url: https://example.edu
//!     account: "alice"
//!     password: "secret"
//!     coursesCustom:
//!       excludeCourses: ["chem301"]
//!       coursesSettings:
//!         - name: math101
//!           excludeExams: ["final"]
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod util;

// Re-export main types
pub use crate::config::{
    ConfigDocument, Defaults, DiscoveredConfigLoader, FileConfigLoader, discover_config,
    load_json_config, merge_defaults,
};
pub use crate::error::{ConfigError, Result};
pub use crate::filter::{CourseFilter, CourseMatcher, cmp_course};
