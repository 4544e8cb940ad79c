const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// 曲线满幅
const SCALE: f64 = 160.0;

/// 曲线整体偏移
const OFFSET: f64 = -60.0;

/// 按文件大小计算进度条宽度（logistic 曲线）。
///
/// 小于 1 GiB 时 `x = 0`，宽度恒为 20；否则 `x = -0.1 * GiB 数`，
/// 宽度 = `160 / (1 + e^-x) - 60`，随文件增大单调不增，最终趋近 -60。
pub fn bar_width(size_bytes: u64) -> f64 {
    let gib = size_bytes as f64 / GIB;
    let x = if gib < 1.0 { 0.0 } else { -0.1 * gib };

    SCALE / (1.0 + (-x).exp()) + OFFSET
}
