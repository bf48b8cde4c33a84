//! 图片获取客户端
//!
//! 导出流程与对象存储的唯一接触点：按 URL 拉取一张图片的原始字节。
//! 单次尝试，不缓存不重试；失败由调用方（章节渲染）就地隔离。

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::config::Config;
use crate::error::ImageFetchError;

/// 图片获取能力
///
/// 渲染层只依赖这个接口，测试中用桩实现替换网络。
pub trait ImageFetcher {
    fn fetch_image(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<Vec<u8>, ImageFetchError>> + Send;
}

/// 基于 HTTP 的图片客户端
pub struct ImageClient {
    http: reqwest::Client,
}

impl ImageClient {
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.image_fetch_timeout_secs))
            .build()
            .unwrap_or_default();
        Self { http }
    }
}

impl ImageFetcher for ImageClient {
    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, ImageFetchError> {
        debug!("获取图片: {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ImageFetchError::request_failed(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageFetchError::BadStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ImageFetchError::body_read_failed(url, e))?;

        // 无法解码的内容与获取失败同等对待，保证 docx 写出阶段只见到合法图片
        image::load_from_memory(&bytes).map_err(|e| ImageFetchError::decode_failed(url, e))?;

        Ok(bytes.to_vec())
    }
}
