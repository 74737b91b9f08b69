use crate::constants::{CLEAR_RGB, HOVER_BRIGHTEN, ORBIT_PATH_RGBA, SPHERE_SLICES, SPHERE_STACKS};
use folio_core::{Appearance, Camera, SceneRoot, Section, BODY_LIGHT_RANGE};
use glam::Vec3;
use web_sys as web;
use wgpu::util::DeviceExt;

mod helpers;
pub mod mesh;

use mesh::{LineVertex, MeshVertex, StarVertex};

const MAX_SPHERES: usize = 8;
const MAX_BODY_LIGHTS: usize = 4;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    eye: [f32; 4],
    sun: [f32; 4],
    params: [f32; 4],
    body_lights: [[f32; 4]; MAX_BODY_LIGHTS],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SphereInstance {
    center_scale: [f32; 4],
    base_emissive: [f32; 4],
    band_freq: [f32; 4],
    spin_highlight: [f32; 4],
}

impl SphereInstance {
    fn new(center: Vec3, scale: f32, a: &Appearance, spin: f32, highlight: f32) -> Self {
        Self {
            center_scale: [center.x, center.y, center.z, scale],
            base_emissive: [a.base_rgb[0], a.base_rgb[1], a.base_rgb[2], a.emissive],
            band_freq: [a.band_rgb[0], a.band_rgb[1], a.band_rgb[2], a.band_frequency],
            spin_highlight: [spin, highlight, 0.0, 0.0],
        }
    }
}

const MESH_ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const INSTANCE_ATTRS: [wgpu::VertexAttribute; 4] =
    wgpu::vertex_attr_array![2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4];
const LINE_ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];
const STAR_ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32];

struct GpuMesh {
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    fn upload(device: &wgpu::Device, label: &str, m: &mesh::Mesh) -> Self {
        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&m.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&m.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertices,
            indices,
            index_count: m.indices.len() as u32,
        }
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,

    globals_buffer: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,

    sphere_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    star_pipeline: wgpu::RenderPipeline,

    sphere_mesh: GpuMesh,
    fallback_mesh: GpuMesh,
    instance_buffer: wgpu::Buffer,
    ring_buffer: wgpu::Buffer,
    ring_vertex_count: u32,
    star_buffer: wgpu::Buffer,
    star_count: u32,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    time_accum: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, scene: &SceneRoot) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(folio_core::SCENE_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let sphere_pipeline = helpers::make_scene_pipeline(
            &device,
            &pl,
            &shader,
            ("vs_sphere", "fs_sphere"),
            &[
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<MeshVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &MESH_ATTRS,
                },
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<SphereInstance>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &INSTANCE_ATTRS,
                },
            ],
            wgpu::PrimitiveTopology::TriangleList,
            format,
            None,
            true,
        );
        let line_pipeline = helpers::make_scene_pipeline(
            &device,
            &pl,
            &shader,
            ("vs_line", "fs_line"),
            &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<LineVertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &LINE_ATTRS,
            }],
            wgpu::PrimitiveTopology::LineList,
            format,
            Some(wgpu::BlendState::ALPHA_BLENDING),
            false,
        );
        let star_pipeline = helpers::make_scene_pipeline(
            &device,
            &pl,
            &shader,
            ("vs_star", "fs_star"),
            &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<StarVertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &STAR_ATTRS,
            }],
            wgpu::PrimitiveTopology::PointList,
            format,
            None,
            true,
        );

        let sphere_mesh = GpuMesh::upload(&device, "sphere_mesh", &mesh::uv_sphere(SPHERE_STACKS, SPHERE_SLICES));
        let fallback_mesh = GpuMesh::upload(&device, "fallback_mesh", &mesh::octahedron());
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sphere_instances"),
            size: (MAX_SPHERES * std::mem::size_of::<SphereInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // Orbit paths and stars are fixed for the session.
        let ring_vertices: Vec<LineVertex> = scene
            .rings
            .iter()
            .flat_map(|r| mesh::polyline_segments(&r.points, ORBIT_PATH_RGBA))
            .collect();
        let ring_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("orbit_paths"),
            contents: bytemuck::cast_slice(&ring_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let stars = mesh::star_vertices(&scene.starfield);
        let star_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("stars"),
            contents: bytemuck::cast_slice(&stars),
            usage: wgpu::BufferUsages::VERTEX,
        });
        log::info!(
            "[gpu] ready {}x{} format={:?} rings={} stars={}",
            width,
            height,
            format,
            scene.rings.len(),
            stars.len()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_tex,
            depth_view,
            globals_buffer,
            globals_bg,
            sphere_pipeline,
            line_pipeline,
            star_pipeline,
            sphere_mesh,
            fallback_mesh,
            instance_buffer,
            ring_buffer,
            ring_vertex_count: ring_vertices.len() as u32,
            star_buffer,
            star_count: stars.len() as u32,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_RGB[0],
                g: CLEAR_RGB[1],
                b: CLEAR_RGB[2],
                a: 1.0,
            },
            time_accum: 0.0,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            (self.depth_tex, self.depth_view) =
                helpers::create_depth_texture(&self.device, width, height);
        }
    }

    fn write_globals(&self, scene: &SceneRoot, camera: &Camera) {
        let sun = &scene.lighting.sun;
        let mut body_lights = [[0.0; 4]; MAX_BODY_LIGHTS];
        for (slot, light) in body_lights.iter_mut().zip(scene.body_lights()) {
            *slot = [light.position.x, light.position.y, light.position.z, light.intensity];
        }
        let g = Globals {
            view_proj: camera.view_projection().to_cols_array_2d(),
            eye: camera.eye.extend(1.0).to_array(),
            sun: [sun.color[0], sun.color[1], sun.color[2], sun.intensity],
            params: [scene.lighting.ambient, sun.range, self.time_accum, BODY_LIGHT_RANGE],
            body_lights,
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&g));
    }

    /// Pack sphere instances with full meshes first; returns the split point.
    fn write_instances(&self, scene: &SceneRoot, hover: Option<Section>) -> (u32, u32) {
        let c = &scene.central;
        let mut all: Vec<(bool, SphereInstance)> = Vec::with_capacity(MAX_SPHERES);
        all.push((
            c.appearance.is_fallback(),
            SphereInstance::new(Vec3::ZERO, c.scale, &c.appearance, c.self_rotation, 1.0),
        ));
        for b in &scene.bodies {
            let Some(pos) = b.last_world_position() else {
                continue;
            };
            let highlight = if hover == Some(b.config.section) {
                HOVER_BRIGHTEN
            } else {
                1.0
            };
            all.push((
                b.appearance.is_fallback(),
                SphereInstance::new(
                    pos,
                    b.config.visual_scale,
                    &b.appearance,
                    b.state().current_self_rotation,
                    highlight,
                ),
            ));
        }
        all.truncate(MAX_SPHERES);
        all.sort_by_key(|(fallback, _)| *fallback);
        let spheres = all.iter().filter(|(f, _)| !*f).count() as u32;
        let packed: Vec<SphereInstance> = all.into_iter().map(|(_, i)| i).collect();
        self.queue
            .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&packed));
        (spheres, packed.len() as u32)
    }

    pub fn render(
        &mut self,
        dt_sec: f32,
        scene: &SceneRoot,
        camera: &Camera,
        hover: Option<Section>,
    ) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        self.write_globals(scene, camera);
        let (spheres, total) = self.write_instances(scene, hover);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bg, &[]);

            rpass.set_pipeline(&self.star_pipeline);
            rpass.set_vertex_buffer(0, self.star_buffer.slice(..));
            rpass.draw(0..self.star_count, 0..1);

            rpass.set_pipeline(&self.sphere_pipeline);
            rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            for (m, range) in [(&self.sphere_mesh, 0..spheres), (&self.fallback_mesh, spheres..total)] {
                if range.is_empty() {
                    continue;
                }
                rpass.set_vertex_buffer(0, m.vertices.slice(..));
                rpass.set_index_buffer(m.indices.slice(..), wgpu::IndexFormat::Uint16);
                rpass.draw_indexed(0..m.index_count, 0, range);
            }

            rpass.set_pipeline(&self.line_pipeline);
            rpass.set_vertex_buffer(0, self.ring_buffer.slice(..));
            rpass.draw(0..self.ring_vertex_count, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
