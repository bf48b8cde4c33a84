use std::fmt;

/// 导出错误类型
///
/// 错误分类对应导出流程的四个阶段：
/// 输入校验 → 图片获取 → 文档序列化 → 文件投递
#[derive(Debug)]
pub enum ExportError {
    /// 导出输入校验错误（致命，在任何网络请求之前报告）
    InvalidInput(InvalidInputError),
    /// 图片获取错误（局部，由渲染层降级为占位块）
    ImageFetch(ImageFetchError),
    /// 文档序列化错误（致命，不产生任何文件）
    Serialization(SerializationError),
    /// 文件投递错误（致命）
    Delivery(DeliveryError),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::InvalidInput(e) => write!(f, "导出输入错误: {}", e),
            ExportError::ImageFetch(e) => write!(f, "图片获取错误: {}", e),
            ExportError::Serialization(e) => write!(f, "文档序列化错误: {}", e),
            ExportError::Delivery(e) => write!(f, "文件投递错误: {}", e),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::InvalidInput(e) => Some(e),
            ExportError::ImageFetch(e) => Some(e),
            ExportError::Serialization(e) => Some(e),
            ExportError::Delivery(e) => Some(e),
        }
    }
}

/// 导出输入校验错误
#[derive(Debug)]
pub enum InvalidInputError {
    /// 必填导出选项为空
    EmptyField {
        field: &'static str,
    },
    /// 总分必须为正整数
    NonPositiveMaxMarks {
        value: u32,
    },
    /// 工作表缺少章节列表
    MissingSections,
}

impl fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInputError::EmptyField { field } => {
                write!(f, "必填导出选项为空: {}", field)
            }
            InvalidInputError::NonPositiveMaxMarks { value } => {
                write!(f, "总分必须为正整数, 实际为: {}", value)
            }
            InvalidInputError::MissingSections => {
                write!(f, "工作表缺少章节列表")
            }
        }
    }
}

impl std::error::Error for InvalidInputError {}

/// 图片获取错误
#[derive(Debug)]
pub enum ImageFetchError {
    /// 网络请求失败
    RequestFailed {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 服务端返回错误状态码
    BadStatus {
        url: String,
        status: u16,
    },
    /// 读取响应体失败
    BodyReadFailed {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 图片内容无法解码
    DecodeFailed {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ImageFetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageFetchError::RequestFailed { url, source } => {
                write!(f, "图片请求失败 ({}): {}", url, source)
            }
            ImageFetchError::BadStatus { url, status } => {
                write!(f, "图片请求返回错误状态 ({}): HTTP {}", url, status)
            }
            ImageFetchError::BodyReadFailed { url, source } => {
                write!(f, "读取图片内容失败 ({}): {}", url, source)
            }
            ImageFetchError::DecodeFailed { url, source } => {
                write!(f, "图片解码失败 ({}): {}", url, source)
            }
        }
    }
}

impl std::error::Error for ImageFetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImageFetchError::RequestFailed { source, .. }
            | ImageFetchError::BodyReadFailed { source, .. }
            | ImageFetchError::DecodeFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            ImageFetchError::BadStatus { .. } => None,
        }
    }
}

/// 文档序列化错误
#[derive(Debug)]
pub enum SerializationError {
    /// 打包 docx 失败
    PackFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for SerializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializationError::PackFailed { source } => {
                write!(f, "打包 docx 文档失败: {}", source)
            }
        }
    }
}

impl std::error::Error for SerializationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SerializationError::PackFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// 文件投递错误
#[derive(Debug)]
pub enum DeliveryError {
    /// 创建输出目录失败
    CreateDirFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 写入文件失败
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryError::CreateDirFailed { path, source } => {
                write!(f, "创建输出目录失败 ({}): {}", path, source)
            }
            DeliveryError::WriteFailed { path, source } => {
                write!(f, "写入文件失败 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for DeliveryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeliveryError::CreateDirFailed { source, .. }
            | DeliveryError::WriteFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

// ========== 子错误到顶层错误的转换 ==========

impl From<InvalidInputError> for ExportError {
    fn from(err: InvalidInputError) -> Self {
        ExportError::InvalidInput(err)
    }
}

impl From<ImageFetchError> for ExportError {
    fn from(err: ImageFetchError) -> Self {
        ExportError::ImageFetch(err)
    }
}

impl From<SerializationError> for ExportError {
    fn from(err: SerializationError) -> Self {
        ExportError::Serialization(err)
    }
}

impl From<DeliveryError> for ExportError {
    fn from(err: DeliveryError) -> Self {
        ExportError::Delivery(err)
    }
}

// ========== 便捷构造函数 ==========

impl SerializationError {
    /// 创建打包失败错误
    pub fn pack_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        SerializationError::PackFailed {
            source: Box::new(source),
        }
    }
}

impl DeliveryError {
    /// 创建输出目录创建失败错误
    pub fn create_dir_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        DeliveryError::CreateDirFailed {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// 创建文件写入失败错误
    pub fn write_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        DeliveryError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        }
    }
}

impl ImageFetchError {
    /// 创建网络请求失败错误
    pub fn request_failed(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ImageFetchError::RequestFailed {
            url: url.into(),
            source: Box::new(source),
        }
    }

    /// 创建响应体读取失败错误
    pub fn body_read_failed(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ImageFetchError::BodyReadFailed {
            url: url.into(),
            source: Box::new(source),
        }
    }

    /// 创建图片解码失败错误
    pub fn decode_failed(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ImageFetchError::DecodeFailed {
            url: url.into(),
            source: Box::new(source),
        }
    }
}

// ========== Result 类型别名 ==========

/// 导出结果类型
pub type ExportResult<T> = Result<T, ExportError>;
