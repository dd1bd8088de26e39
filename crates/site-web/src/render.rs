//! WebGPU renderer for the decorative background: one fullscreen
//! wave-grid pass, then one instanced sprite pass for shapes, the
//! particle field and the emblems. The canvas is cleared transparent
//! so the page shows through.

use glam::{Mat3, Mat4, Vec3};
use site_core::{SceneObject, SceneObjectKind, ShapeKind, CAMERA_FOV_DEG};
use web_sys as web;
use wgpu::util::DeviceExt;

const EMBLEM_SPRITE_SIZE: f32 = 6.0;
const FIELD_POINT_SIZE: f32 = 0.05;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct WaveUniforms {
    resolution: [f32; 2],
    time: f32,
    opacity: f32,
    tint: [f32; 4],
}

/// One camera-facing quad. Layout matches the sprite shader's instance
/// attributes.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Instance {
    pub pos: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
    pub shape: f32,
    pub spin: f32,
}

const QUAD_VERTICES: [[f32; 2]; 6] = [
    [-0.5, -0.5],
    [0.5, -0.5],
    [0.5, 0.5],
    [-0.5, -0.5],
    [0.5, 0.5],
    [-0.5, 0.5],
];

fn shape_sprite(shape: ShapeKind) -> (f32, f32) {
    // (shape id, sprite size); ids match the fragment shader's masks
    match shape {
        ShapeKind::Sphere => (0.0, 0.6),
        ShapeKind::Cube => (1.0, 0.5),
        ShapeKind::Cone => (2.0, 0.6),
        ShapeKind::Octahedron => (3.0, 0.8),
        ShapeKind::Torus => (4.0, 0.8),
    }
}

/// Flatten the scene catalog into sprite instances. The wave grid is
/// drawn by its own pass and contributes nothing here.
pub fn build_instances(objects: &[SceneObject], out: &mut Vec<Instance>) {
    out.clear();
    for object in objects {
        let rgba = |alpha: f32| {
            [
                object.color[0],
                object.color[1],
                object.color[2],
                alpha,
            ]
        };
        match &object.kind {
            SceneObjectKind::Shape { shape } => {
                let (id, size) = shape_sprite(*shape);
                out.push(Instance {
                    pos: object.position.to_array(),
                    scale: size,
                    color: rgba(0.7),
                    shape: id,
                    spin: object.rotation.z + object.rotation.y,
                });
            }
            SceneObjectKind::ParticleField { offsets } => {
                let rot = Mat3::from_rotation_y(object.rotation.y)
                    * Mat3::from_rotation_x(object.rotation.x);
                for offset in offsets {
                    out.push(Instance {
                        pos: (rot * *offset).to_array(),
                        scale: FIELD_POINT_SIZE,
                        color: rgba(0.8),
                        shape: 0.0,
                        spin: 0.0,
                    });
                }
            }
            SceneObjectKind::WaveGrid => {}
            SceneObjectKind::Emblem { scale, .. } => {
                out.push(Instance {
                    pos: object.position.to_array(),
                    scale: scale * EMBLEM_SPRITE_SIZE,
                    color: [1.0, 1.0, 1.0, 0.9],
                    shape: 5.0,
                    spin: object.rotation.z,
                });
            }
        }
    }
}

pub fn view_proj(camera: Vec3, width: u32, height: u32) -> Mat4 {
    let aspect = width as f32 / (height as f32).max(1.0);
    let proj = Mat4::perspective_rh(CAMERA_FOV_DEG.to_radians(), aspect, 0.1, 100.0);
    let view = Mat4::look_to_rh(camera, Vec3::NEG_Z, Vec3::Y);
    proj * view
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    wave_pipeline: wgpu::RenderPipeline,
    wave_uniform_buffer: wgpu::Buffer,
    wave_bind_group: wgpu::BindGroup,

    sprite_pipeline: wgpu::RenderPipeline,
    sprite_uniform_buffer: wgpu::Buffer,
    sprite_bind_group: wgpu::BindGroup,
    quad_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,

    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
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
            .unwrap_or(caps.formats[0]);
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes[0]
        };
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

        let uniform_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniform_bgl"),
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

        // Wave-grid fullscreen layer, drawn first.
        let wave_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("wave_shader"),
            source: wgpu::ShaderSource::Wgsl(site_core::WAVE_WGSL.into()),
        });
        let wave_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("wave_pl"),
            bind_group_layouts: &[&uniform_bgl],
            push_constant_ranges: &[],
        });
        let wave_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("wave_pipeline"),
            layout: Some(&wave_pl),
            vertex: wgpu::VertexState {
                module: &wave_shader,
                entry_point: Some("vs_fullscreen"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &wave_shader,
                entry_point: Some("fs_wave"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });
        let wave_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("wave_uniforms"),
            size: std::mem::size_of::<WaveUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let wave_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("wave_bg"),
            layout: &uniform_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wave_uniform_buffer.as_entire_binding(),
            }],
        });

        // Instanced sprite pass.
        let sprite_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sprite_shader"),
            source: wgpu::ShaderSource::Wgsl(site_core::SCENE_WGSL.into()),
        });
        let sprite_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sprite_pl"),
            bind_group_layouts: &[&uniform_bgl],
            push_constant_ranges: &[],
        });
        let quad_layout = wgpu::VertexBufferLayout {
            array_stride: 8,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &wgpu::vertex_attr_array![0 => Float32x2],
        };
        let instance_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Instance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &wgpu::vertex_attr_array![
                1 => Float32x3,
                2 => Float32,
                3 => Float32x4,
                4 => Float32,
                5 => Float32,
            ],
        };
        let sprite_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sprite_pipeline"),
            layout: Some(&sprite_pl),
            vertex: wgpu::VertexState {
                module: &sprite_shader,
                entry_point: Some("vs_main"),
                buffers: &[quad_layout, instance_layout],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &sprite_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });
        let sprite_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sprite_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let sprite_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sprite_bg"),
            layout: &uniform_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: sprite_uniform_buffer.as_entire_binding(),
            }],
        });
        let quad_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vertices"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_capacity = 128;
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sprite_instances"),
            size: (instance_capacity * std::mem::size_of::<Instance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            wave_pipeline,
            wave_uniform_buffer,
            wave_bind_group,
            sprite_pipeline,
            sprite_uniform_buffer,
            sprite_bind_group,
            quad_buffer,
            instance_buffer,
            instance_capacity,
            width,
            height,
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
        }
    }

    fn upload_instances(&mut self, instances: &[Instance]) {
        if instances.len() > self.instance_capacity {
            self.instance_capacity = instances.len().next_power_of_two();
            self.instance_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("sprite_instances"),
                size: (self.instance_capacity * std::mem::size_of::<Instance>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
        }
        self.queue
            .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(instances));
    }

    pub fn render(
        &mut self,
        camera: Vec3,
        instances: &[Instance],
        time: f32,
        wave_tint: [f32; 3],
        wave_opacity: f32,
    ) -> Result<(), wgpu::SurfaceError> {
        self.upload_instances(instances);

        let scene_u = SceneUniforms {
            view_proj: view_proj(camera, self.width, self.height).to_cols_array_2d(),
        };
        self.queue
            .write_buffer(&self.sprite_uniform_buffer, 0, bytemuck::bytes_of(&scene_u));
        let wave_u = WaveUniforms {
            resolution: [self.width as f32, self.height as f32],
            time,
            opacity: wave_opacity,
            tint: [wave_tint[0], wave_tint[1], wave_tint[2], 1.0],
        };
        self.queue
            .write_buffer(&self.wave_uniform_buffer, 0, bytemuck::bytes_of(&wave_u));

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
                label: Some("background_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.wave_pipeline);
            rpass.set_bind_group(0, &self.wave_bind_group, &[]);
            rpass.draw(0..3, 0..1);

            if !instances.is_empty() {
                rpass.set_pipeline(&self.sprite_pipeline);
                rpass.set_bind_group(0, &self.sprite_bind_group, &[]);
                rpass.set_vertex_buffer(0, self.quad_buffer.slice(..));
                rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
                rpass.draw(0..6, 0..instances.len() as u32);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
