//! 测试用数据与测试桩

use crate::clients::ImageFetcher;
use crate::error::ImageFetchError;

/// 1x1 PNG，图片相关测试共用
pub(crate) const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0xF8,
    0xCF, 0xC0, 0xF0, 0x1F, 0x00, 0x05, 0x00, 0x01, 0xFF, 0x89, 0x99, 0x3D, 0x1D, 0x00, 0x00,
    0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// 图片获取测试桩：URL 含 "broken" 时模拟获取失败，其余返回 1x1 PNG
pub(crate) struct StubFetcher;

impl ImageFetcher for StubFetcher {
    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, ImageFetchError> {
        if url.contains("broken") {
            Err(ImageFetchError::BadStatus {
                url: url.to_string(),
                status: 404,
            })
        } else {
            Ok(TINY_PNG.to_vec())
        }
    }
}
