use glongge_math::core::prelude::*;
use glongge_math::util::{gg_err, setup_log};

fn main() -> Result<()> {
    setup_log()?;

    let camera = look_at(Vec3::new(1.0, 0.0, -1.0), Vec3::UP);
    info!("camera orientation: {camera:.4}");
    info!("camera forward: {:.4}", camera.forward());

    let mut model = Mat4x4::identity();
    model
        .translate(Vec3::new(0.0, 0.0, -5.0))
        .rotate(Vec3::UP, gg_float::rad(30.0))
        .scale_uniform(0.5);
    let view = camera.to_matrix().try_inverse().context("camera matrix is singular")?;
    let projection = perspective_matrix(gg_float::rad(60.0), 16.0 / 9.0, 0.1, 100.0);
    let mvp = projection * view * model;
    info!("model-view-projection:\n{mvp:.4}");

    for corner in [Vec3::new(-1.0, -1.0, 1.0), Vec3::new(1.0, 1.0, -1.0)] {
        info!("{corner:.2} -> {:.4}", mvp.project_point(corner));
    }

    let start = Quat::identity();
    let end = Quat::from_axis_angle(Vec3::UP, gg_float::rad(90.0));
    for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
        info!(
            "slerp t={t:.2}: forward = {:.4}",
            slerp(start, end, t).forward()
        );
    }

    // Pool failures are logged, not fatal. The second config is empty and gets rejected.
    gg_err::log_err_and_ignore(pool_round_trip([mvp, model, view]));
    gg_err::log_err_and_ignore(pool_round_trip_with(PoolConfig {
        mat4_blocks: 0,
        mat4_increment: 0,
        ..PoolConfig::default()
    }));

    // Degenerate input is reported, not fatal.
    let (v, errors) = diag::capture(|| Vec2::new(1.0, 1.0) / 0.0);
    info!("{v} after {} reported error(s): {}", errors.len(), errors.iter().join("; "));
    Ok(())
}

fn pool_round_trip(matrices: [Mat4x4; 3]) -> Result<()> {
    let mut pool = MatrixPool::new(PoolConfig::default())?;
    let blocks = matrices.map(|m| pool.store_mat4(&m));
    let restored = blocks.map(|block| pool.load_mat4(block));
    for (m, r) in matrices.iter().zip(&restored) {
        if m != r {
            bail!("matrix pool corrupted {m} into {r}");
        }
    }
    info!(
        "matrix pool: {}",
        pool.mat4_pool().stats().format_summary()
    );
    Ok(())
}

fn pool_round_trip_with(config: PoolConfig) -> Result<()> {
    let mut pool = MatrixPool::new(config).context("could not set up a matrix pool")?;
    let block = pool.store_mat3(&homogeneous2d::rotate(gg_float::PI / 4.0));
    info!("stored rotation: {}", pool.load_mat3(block));
    Ok(())
}
