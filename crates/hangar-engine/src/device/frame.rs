/// A single acquired surface texture plus the encoder recording into it.
///
/// Holding the surface texture blocks acquisition of the next one; hand the
/// frame to [`Gpu::submit`](super::Gpu::submit) as soon as recording is done.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
