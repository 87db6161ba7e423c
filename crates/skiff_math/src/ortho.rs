//! Orthographic projection helper for pixel-space rendering

/// Build a column-major orthographic projection matrix mapping pixel
/// coordinates to NDC.
///
/// With `left = 0, right = width, top = 0, bottom = height` the origin lands
/// in the top-left corner with +Y down, matching the sim's screen space.
/// Depth maps `[near, far]` to `[0, 1]` (wgpu convention).
pub fn ortho_matrix(
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    near: f32,
    far: f32,
) -> [[f32; 4]; 4] {
    let rl = 1.0 / (right - left);
    let bt = 1.0 / (bottom - top);
    let fn_ = 1.0 / (far - near);

    [
        [2.0 * rl, 0.0, 0.0, 0.0],
        [0.0, -2.0 * bt, 0.0, 0.0],
        [0.0, 0.0, fn_, 0.0],
        [
            -(right + left) * rl,
            (bottom + top) * bt,
            -near * fn_,
            1.0,
        ],
    ]
}

/// Project a pixel-space point through a column-major matrix (w assumed 1)
#[cfg(test)]
fn transform_point(m: &[[f32; 4]; 4], x: f32, y: f32) -> (f32, f32) {
    (
        m[0][0] * x + m[1][0] * y + m[3][0],
        m[0][1] * x + m[1][1] * y + m[3][1],
    )
}
