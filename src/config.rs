/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 同时导出的工作表数量
    pub max_concurrent_exports: usize,
    /// 工作表 TOML 文件存放目录
    pub worksheet_folder: String,
    /// 导出文件输出目录
    pub output_folder: String,
    /// 图片请求超时（秒）
    pub image_fetch_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    // --- 工作表存储 API 配置 ---
    pub store_api_base_url: String,
    pub store_token: String,
    /// 非空时从存储服务按 owner 拉取工作表，而不是扫描本地目录
    pub store_owner_id: String,
    // --- 存储来源工作表的默认导出选项 ---
    pub default_exam_title: String,
    pub default_school_name: String,
    pub default_subject: String,
    pub default_class_name: String,
    pub default_time: String,
    pub default_max_marks: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_concurrent_exports: 4,
            worksheet_folder: "worksheets".to_string(),
            output_folder: "output_docx".to_string(),
            image_fetch_timeout_secs: 30,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            store_api_base_url: "https://worksheet-store.example.com".to_string(),
            store_token: String::new(),
            store_owner_id: String::new(),
            default_exam_title: "PRE-BOARD EXAMINATION (2024-25)".to_string(),
            default_school_name: String::new(),
            default_subject: String::new(),
            default_class_name: String::new(),
            default_time: "3 Hours".to_string(),
            default_max_marks: 80,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            max_concurrent_exports: std::env::var("MAX_CONCURRENT_EXPORTS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_concurrent_exports),
            worksheet_folder: std::env::var("WORKSHEET_FOLDER").unwrap_or(default.worksheet_folder),
            output_folder: std::env::var("OUTPUT_FOLDER").unwrap_or(default.output_folder),
            image_fetch_timeout_secs: std::env::var("IMAGE_FETCH_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.image_fetch_timeout_secs),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            store_api_base_url: std::env::var("STORE_API_BASE_URL").unwrap_or(default.store_api_base_url),
            store_token: std::env::var("STORE_TOKEN").unwrap_or(default.store_token),
            store_owner_id: std::env::var("STORE_OWNER_ID").unwrap_or(default.store_owner_id),
            default_exam_title: std::env::var("DEFAULT_EXAM_TITLE").unwrap_or(default.default_exam_title),
            default_school_name: std::env::var("DEFAULT_SCHOOL_NAME").unwrap_or(default.default_school_name),
            default_subject: std::env::var("DEFAULT_SUBJECT").unwrap_or(default.default_subject),
            default_class_name: std::env::var("DEFAULT_CLASS_NAME").unwrap_or(default.default_class_name),
            default_time: std::env::var("DEFAULT_TIME").unwrap_or(default.default_time),
            default_max_marks: std::env::var("DEFAULT_MAX_MARKS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.default_max_marks),
        }
    }

    /// 存储来源工作表没有随附的导出选项，使用配置中的默认值
    pub fn default_export_options(&self) -> crate::models::ExportOptions {
        crate::models::ExportOptions {
            exam_title: self.default_exam_title.clone(),
            school_name: self.default_school_name.clone(),
            subject: self.default_subject.clone(),
            class_name: self.default_class_name.clone(),
            time: self.default_time.clone(),
            max_marks: self.default_max_marks,
        }
    }
}
