//! wgpu renderer for the cube and its label sprites

use crate::ShellError;
use bytemuck::{Pod, Zeroable};
use sprite_labels::{
    Billboard, CubeMaterial, FrameTarget, MeshData, OrthographicCamera, SceneContext, TextureId,
};
use std::collections::HashMap;
use std::sync::Arc;
use wgpu::util::DeviceExt;
use winit::window::Window;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
struct Vertex {
    position: [f32; 3],
    normal: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
struct CubeUniforms {
    mvp: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    view_model: [[f32; 4]; 4],
    color: [f32; 4],
    light_position: [f32; 4],
    light_color: [f32; 4],
    /// x: 1.0 for Lambert shading, 0.0 for normal colors.
    params: [f32; 4],
}

impl CubeUniforms {
    fn new(scene: &SceneContext) -> Self {
        let model = scene.cube.model_matrix();
        let view = scene.camera.view_matrix();
        let (color, lambert) = match scene.cube.material() {
            CubeMaterial::Normal => ([1.0; 3], 0.0),
            CubeMaterial::Lambert { color } => (color, 1.0),
        };
        Self {
            mvp: (scene.camera.projection_matrix() * view * model).to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            view_model: (view * model).to_cols_array_2d(),
            color: [color[0], color[1], color[2], 1.0],
            light_position: scene.light.position.extend(1.0).to_array(),
            light_color: [scene.light.color[0], scene.light.color[1], scene.light.color[2], 1.0],
            params: [lambert, 0.0, 0.0, 0.0],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
struct CameraUniforms {
    view: [[f32; 4]; 4],
    projection: [[f32; 4]; 4],
}

impl CameraUniforms {
    fn new(camera: &OrthographicCamera) -> Self {
        Self {
            view: camera.view_matrix().to_cols_array_2d(),
            projection: camera.projection_matrix().to_cols_array_2d(),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
struct SpriteUniforms {
    center: [f32; 4],
    scale: [f32; 4],
    tint: [f32; 4],
}

impl SpriteUniforms {
    fn new(billboard: &Billboard) -> Self {
        let scale = billboard.scale();
        Self {
            center: billboard.translation().extend(1.0).to_array(),
            scale: [scale.x, scale.y, 1.0, 0.0],
            tint: billboard.material().tint(),
        }
    }
}

/// GPU copy of one label texture and its per-sprite uniforms.
struct GpuSprite {
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Indexed geometry uploaded once.
struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    num_indices: u32,
}

impl GpuMesh {
    fn upload(device: &wgpu::Device, name: &str, mesh: &MeshData) -> Self {
        let vertices = mesh_vertices(mesh);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Vertex Buffer", name)),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Index Buffer", name)),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            num_indices: mesh.indices.len() as u32,
        }
    }

    fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        render_pass.draw_indexed(0..self.num_indices, 0, 0..1);
    }
}

pub struct Renderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_texture: wgpu::TextureView,
    cube_pipeline: wgpu::RenderPipeline,
    cube_mesh: GpuMesh,
    cube_uniform_buffer: wgpu::Buffer,
    cube_bind_group: wgpu::BindGroup,
    sprite_pipeline: wgpu::RenderPipeline,
    quad_mesh: GpuMesh,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    sprite_bind_group_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    sprites: HashMap<TextureId, GpuSprite>,
}

impl Renderer {
    pub async fn new(window: Arc<Window>) -> Result<Self, ShellError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;

        let adapter = match request_adapter(&instance, &surface, false).await {
            Ok(adapter) => adapter,
            Err(e) => {
                log::warn!("No hardware adapter ({}), trying the software fallback", e);
                request_adapter(&instance, &surface, true).await?
            }
        };
        let info = adapter.get_info();
        log::info!("Using adapter {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default().using_resolution(adapter.limits()),
                label: None,
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
                experimental_features: Default::default(),
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = pick_surface_format(&surface_caps.formats).ok_or(ShellError::NoSurfaceFormat)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture = create_depth_texture(&device, &config);

        // Cube: one uniform buffer at group 0
        let cube_uniform_buffer = create_uniform_buffer::<CubeUniforms>(&device, "Cube Uniform Buffer");
        let cube_bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Cube Bind Group Layout"),
            entries: &[uniform_layout_entry(0, wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT)],
        });
        let cube_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Cube Bind Group"),
            layout: &cube_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: cube_uniform_buffer.as_entire_binding(),
            }],
        });

        let cube_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Cube Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });
        let cube_pipeline = create_pipeline(
            &device,
            "Cube",
            &cube_shader,
            &[&cube_bind_group_layout],
            config.format,
            wgpu::BlendState::REPLACE,
            Some(wgpu::Face::Back),
        );

        // Sprites: shared camera at group 0, per-label uniforms and texture at group 1
        let camera_buffer = create_uniform_buffer::<CameraUniforms>(&device, "Camera Uniform Buffer");
        let camera_bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Camera Bind Group Layout"),
            entries: &[uniform_layout_entry(0, wgpu::ShaderStages::VERTEX)],
        });
        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let sprite_bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Sprite Bind Group Layout"),
            entries: &[
                uniform_layout_entry(0, wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let sprite_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Sprite Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("sprite.wgsl").into()),
        });
        let sprite_pipeline = create_pipeline(
            &device,
            "Sprite",
            &sprite_shader,
            &[&camera_bind_group_layout, &sprite_bind_group_layout],
            config.format,
            wgpu::BlendState::ALPHA_BLENDING,
            None,
        );

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Label Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let cube_mesh = GpuMesh::upload(&device, "Cube", &MeshData::unit_cube());
        let quad_mesh = GpuMesh::upload(&device, "Quad", &MeshData::unit_quad());

        log::info!(
            "Renderer ready: {}x{} {:?}",
            config.width,
            config.height,
            config.format
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_texture,
            cube_pipeline,
            cube_mesh,
            cube_uniform_buffer,
            cube_bind_group,
            sprite_pipeline,
            quad_mesh,
            camera_buffer,
            camera_bind_group,
            sprite_bind_group_layout,
            sampler,
            sprites: HashMap::new(),
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth_texture = create_depth_texture(&self.device, &self.config);
        }
    }

    /// Copy a label's texture to the GPU. Each texture is uploaded once;
    /// later frames only rewrite the sprite's uniforms.
    fn upload_label(&mut self, billboard: &Billboard) {
        let texture = billboard.texture();
        if self.sprites.contains_key(&texture.id()) {
            return;
        }

        let size = wgpu::Extent3d {
            width: texture.width(),
            height: texture.height(),
            depth_or_array_layers: 1,
        };
        let gpu_texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some(&format!("Texture {}", billboard.id())),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &gpu_texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            texture.pixels(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * texture.width()),
                rows_per_image: Some(texture.height()),
            },
            size,
        );
        let view = gpu_texture.create_view(&wgpu::TextureViewDescriptor::default());

        let uniform_buffer = create_uniform_buffer::<SpriteUniforms>(&self.device, "Sprite Uniform Buffer");
        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("Sprite Bind Group {}", billboard.id())),
            layout: &self.sprite_bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });

        log::debug!(
            "Uploaded {} texture {}x{}",
            billboard.id(),
            texture.width(),
            texture.height()
        );
        self.sprites.insert(texture.id(), GpuSprite { uniform_buffer, bind_group });
    }

    pub fn render(&mut self, scene: &SceneContext) -> Result<(), ShellError> {
        for label in scene.labels() {
            self.upload_label(label);
        }

        let output = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::debug!("Surface timed out, skipping frame");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        self.queue
            .write_buffer(&self.cube_uniform_buffer, 0, bytemuck::bytes_of(&CubeUniforms::new(scene)));
        self.queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&CameraUniforms::new(&scene.camera)));
        for label in scene.labels() {
            if let Some(sprite) = self.sprites.get(&label.texture().id()) {
                self.queue
                    .write_buffer(&sprite.uniform_buffer, 0, bytemuck::bytes_of(&SpriteUniforms::new(label)));
            }
        }

        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color(scene.background())),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_pipeline(&self.cube_pipeline);
            render_pass.set_bind_group(0, &self.cube_bind_group, &[]);
            self.cube_mesh.draw(&mut render_pass);

            render_pass.set_pipeline(&self.sprite_pipeline);
            render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
            for label in scene.labels() {
                if let Some(sprite) = self.sprites.get(&label.texture().id()) {
                    render_pass.set_bind_group(1, &sprite.bind_group, &[]);
                    self.quad_mesh.draw(&mut render_pass);
                }
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

impl FrameTarget for Renderer {
    type Error = ShellError;

    fn draw(&mut self, scene: &SceneContext) -> Result<(), ShellError> {
        self.render(scene)
    }
}

async fn request_adapter(
    instance: &wgpu::Instance,
    surface: &wgpu::Surface<'_>,
    force_fallback_adapter: bool,
) -> Result<wgpu::Adapter, wgpu::RequestAdapterError> {
    instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(surface),
            force_fallback_adapter,
        })
        .await
}

/// sRGB formats first so label colors come out as rasterized.
fn pick_surface_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| formats.first().copied())
}

fn clear_color(background: [f32; 4]) -> wgpu::Color {
    wgpu::Color {
        r: background[0] as f64,
        g: background[1] as f64,
        b: background[2] as f64,
        a: background[3] as f64,
    }
}

fn mesh_vertices(mesh: &MeshData) -> Vec<Vertex> {
    mesh.positions
        .iter()
        .zip(&mesh.normals)
        .map(|(position, normal)| Vertex {
            position: *position,
            normal: *normal,
        })
        .collect()
}

fn create_uniform_buffer<T: Pod>(device: &wgpu::Device, label: &str) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: std::mem::size_of::<T>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn uniform_layout_entry(binding: u32, visibility: wgpu::ShaderStages) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

fn create_pipeline(
    device: &wgpu::Device,
    name: &str,
    shader: &wgpu::ShaderModule,
    bind_group_layouts: &[&wgpu::BindGroupLayout],
    format: wgpu::TextureFormat,
    blend: wgpu::BlendState,
    cull_mode: Option<wgpu::Face>,
) -> wgpu::RenderPipeline {
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(&format!("{} Pipeline Layout", name)),
        bind_group_layouts,
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(&format!("{} Pipeline", name)),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::layout()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(blend),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        multiview: None,
        cache: None,
    })
}

fn create_depth_texture(device: &wgpu::Device, config: &wgpu::SurfaceConfiguration) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width: config.width,
            height: config.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
