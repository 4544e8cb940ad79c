//! 平滑器测试：模拟定时刷新进度条的循环。

use crate::progress::{ProgressConfig, ProgressError, ProgressSmoother};
use crate::tests::assert_close;

#[test]
fn smoother_creeps_then_snaps() {
    let mut smoother = ProgressSmoother::new(ProgressConfig::standard()).unwrap();

    // 实际进度停在 10，显示进度每次 +0.4
    for _ in 0..5 {
        smoother.tick(10.0).unwrap();
    }
    assert_close(smoother.shown(), 2.0);

    // 实际进度突增到 95，先跳到第一个阈值
    assert_close(smoother.tick(95.0).unwrap(), 50.0);
    assert_close(smoother.tick(95.0).unwrap(), 90.0);
    assert_close(smoother.tick(95.0).unwrap(), 90.4);
}

#[test]
fn smoother_overshoots_checkpoint_by_at_most_one_step() {
    let config = ProgressConfig::fine();
    let limit = 50.0 + config.fixed_speed;
    let mut smoother = ProgressSmoother::new(config).unwrap();

    for _ in 0..1000 {
        let shown = smoother.tick(30.0).unwrap();
        assert!(shown < limit, "显示进度 {} 越过阈值 50 超过一个增量", shown);
    }

    // 越过 50 后 real 落后于上一阈值，显示进度冻结
    let frozen = smoother.shown();
    assert!(frozen >= 50.0 && frozen < limit);
    assert_close(smoother.tick(30.0).unwrap(), frozen);
}

#[test]
fn smoother_finishes_when_real_completes() {
    let mut smoother = ProgressSmoother::default();
    smoother.tick(42.0).unwrap();
    assert!(!smoother.is_finished());

    assert_close(smoother.tick(100.0).unwrap(), 100.0);
    assert!(smoother.is_finished());

    smoother.reset();
    assert_close(smoother.shown(), 0.0);
    assert_eq!(smoother.config(), &ProgressConfig::standard());
}

#[test]
fn smoother_keeps_state_on_error() {
    let mut smoother = ProgressSmoother::default();
    smoother.tick(20.0).unwrap();
    let before = smoother.shown();

    assert!(matches!(
        smoother.tick(120.0),
        Err(ProgressError::PercentOutOfRange { name: "real", .. })
    ));
    assert_close(smoother.shown(), before);
}

#[test]
fn smoother_rejects_invalid_config() {
    let config = ProgressConfig::new(0.4, vec![90.0, 50.0]);
    assert!(matches!(
        ProgressSmoother::new(config),
        Err(ProgressError::ThresholdsNotAscending { .. })
    ));

    let config = ProgressConfig::new(-1.0, vec![50.0]);
    assert_eq!(
        ProgressSmoother::new(config),
        Err(ProgressError::InvalidSpeed(-1.0))
    );
}
