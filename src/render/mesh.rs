use folio_core::Starfield;
use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StarVertex {
    pub position: [f32; 3],
    pub brightness: f32,
}

pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u16>,
}

/// Unit sphere, `stacks` latitude bands by `slices` longitude segments.
pub fn uv_sphere(stacks: u32, slices: u32) -> Mesh {
    let stacks = stacks.max(2);
    let slices = slices.max(3);
    let mut vertices = Vec::with_capacity(((stacks + 1) * (slices + 1)) as usize);
    for i in 0..=stacks {
        let phi = std::f32::consts::PI * i as f32 / stacks as f32;
        let (sp, cp) = phi.sin_cos();
        for j in 0..=slices {
            let theta = std::f32::consts::TAU * j as f32 / slices as f32;
            let (st, ct) = theta.sin_cos();
            let n = [sp * ct, cp, sp * st];
            vertices.push(MeshVertex {
                position: n,
                normal: n,
            });
        }
    }
    let row = slices + 1;
    let mut indices = Vec::with_capacity((stacks * slices * 6) as usize);
    for i in 0..stacks {
        for j in 0..slices {
            let a = (i * row + j) as u16;
            let b = ((i + 1) * row + j) as u16;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
    Mesh { vertices, indices }
}

/// Low-poly stand-in drawn for models the catalog cannot resolve.
pub fn octahedron() -> Mesh {
    let axes = [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z];
    let vertices = axes
        .iter()
        .map(|a| MeshVertex {
            position: a.to_array(),
            normal: a.to_array(),
        })
        .collect();
    let indices = vec![
        0, 2, 4, 4, 2, 1, 1, 2, 5, 5, 2, 0, //
        4, 3, 0, 1, 3, 4, 5, 3, 1, 0, 3, 5,
    ];
    Mesh { vertices, indices }
}

/// Line-list vertices for a closed polyline.
pub fn polyline_segments(points: &[Vec3], color: [f32; 4]) -> Vec<LineVertex> {
    points
        .windows(2)
        .flat_map(|w| {
            [w[0], w[1]].map(|p| LineVertex {
                position: p.to_array(),
                color,
            })
        })
        .collect()
}

pub fn star_vertices(field: &Starfield) -> Vec<StarVertex> {
    field
        .stars
        .iter()
        .map(|s| StarVertex {
            position: s.position.to_array(),
            brightness: s.brightness,
        })
        .collect()
}
