//! 进度条平滑：实际进度可能突增或长时间停滞，显示进度按阈值表与固定增量平滑推进。

pub mod functions;
pub mod structs;
