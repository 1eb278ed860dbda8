//! Portal Shader Geometry
//!
//! CPU-side data for the decorative torus shown during the hero transition:
//! mesh generation, camera matrices and the GLSL sources. Matrices are
//! column-major, ready for `uniformMatrix4fv`.

use std::f32::consts::TAU;

pub const TORUS_RADIUS: f32 = 5.0;
pub const TORUS_TUBE: f32 = 0.5;
pub const RADIAL_SEGMENTS: u16 = 16;
pub const TUBULAR_SEGMENTS: u16 = 100;

pub const FIELD_OF_VIEW_DEG: f32 = 75.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;
pub const CAMERA_Z: f32 = 10.0;

/// Spin applied on every animation frame
pub const ROTATION_PER_FRAME: f32 = 0.01;

/// Scale the portal grows to while opening
pub const OPEN_SCALE: f32 = 1.5;
pub const OPEN_SECONDS: f32 = 1.0;

pub const VERTEX_SHADER: &str = r"
attribute vec3 position;
attribute vec2 uv;
uniform mat4 projectionMatrix;
uniform mat4 modelViewMatrix;
varying vec2 vUv;
void main() {
  vUv = uv;
  gl_Position = projectionMatrix * modelViewMatrix * vec4(position, 1.0);
}
";

pub const FRAGMENT_SHADER: &str = r"
precision mediump float;
uniform float time;
varying vec2 vUv;
void main() {
  vec2 center = vec2(0.5, 0.5);
  float dist = length(vUv - center);
  float pulse = sin(time * 2.0) * 0.5 + 0.5;
  vec3 color = vec3(0.0, 0.96, 1.0) * (1.0 - dist) * pulse;
  gl_FragColor = vec4(color, 1.0);
}
";

/// Interleaving-free mesh buffers
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    /// xyz triples
    pub positions: Vec<f32>,
    /// uv pairs
    pub uvs: Vec<f32>,
    /// Triangle list
    pub indices: Vec<u16>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }
}

/// Torus around the Z axis with `radial` segments around the tube and
/// `tubular` segments along the ring.
pub fn torus(radius: f32, tube: f32, radial: u16, tubular: u16) -> Mesh {
    let vertices = usize::from(radial + 1) * usize::from(tubular + 1);
    let mut positions = Vec::with_capacity(vertices * 3);
    let mut uvs = Vec::with_capacity(vertices * 2);

    for j in 0..=radial {
        let v_frac = f32::from(j) / f32::from(radial);
        let v = v_frac * TAU;
        for i in 0..=tubular {
            let u_frac = f32::from(i) / f32::from(tubular);
            let u = u_frac * TAU;
            let ring = tube.mul_add(v.cos(), radius);
            positions.extend_from_slice(&[ring * u.cos(), ring * u.sin(), tube * v.sin()]);
            uvs.extend_from_slice(&[u_frac, v_frac]);
        }
    }

    let stride = tubular + 1;
    let mut indices = Vec::with_capacity(usize::from(radial) * usize::from(tubular) * 6);
    for j in 1..=radial {
        for i in 1..=tubular {
            let a = stride * j + i - 1;
            let b = stride * (j - 1) + i - 1;
            let c = stride * (j - 1) + i;
            let d = stride * j + i;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    Mesh { positions, uvs, indices }
}

/// The portal ring with its fixed dimensions
pub fn portal_mesh() -> Mesh {
    torus(TORUS_RADIUS, TORUS_TUBE, RADIAL_SEGMENTS, TUBULAR_SEGMENTS)
}

/// OpenGL-style perspective projection
#[rustfmt::skip]
pub fn perspective(fov_y_deg: f32, aspect: f32, near: f32, far: f32) -> [f32; 16] {
    let f = 1.0 / (fov_y_deg.to_radians() / 2.0).tan();
    let depth = near - far;
    [
        f / aspect, 0.0, 0.0, 0.0,
        0.0, f, 0.0, 0.0,
        0.0, 0.0, (far + near) / depth, -1.0,
        0.0, 0.0, 2.0 * far * near / depth, 0.0,
    ]
}

/// Uniform scale, then rotation about Z, then the camera pulled back along Z
#[rustfmt::skip]
pub fn model_view(rotation_z: f32, scale: f32, camera_z: f32) -> [f32; 16] {
    let (sin, cos) = rotation_z.sin_cos();
    [
        scale * cos, scale * sin, 0.0, 0.0,
        -scale * sin, scale * cos, 0.0, 0.0,
        0.0, 0.0, scale, 0.0,
        0.0, 0.0, -camera_z, 1.0,
    ]
}

/// Portal scale `elapsed` seconds after opening, eased out quadratically
pub fn opening_scale(elapsed: f32) -> f32 {
    let t = (elapsed / OPEN_SECONDS).clamp(0.0, 1.0);
    let eased = 1.0 - (1.0 - t) * (1.0 - t);
    (OPEN_SCALE - 1.0).mul_add(eased, 1.0)
}
