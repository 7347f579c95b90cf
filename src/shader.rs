//! GPU-side data layouts and shader sources.

use bytemuck::{Pod, Zeroable};

use crate::style::PostSettings;

/// Instanced render shader for shards and panels.
pub const SCENE_SOURCE: &str = include_str!("scene.wgsl");

/// One rendered instance: transform and color, rewritten every frame.
///
/// `scale` is the animator's output multiplier; `half_size` is the static
/// base extent in world units. The shader multiplies the two.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ShardInstance {
    pub position: [f32; 3],
    pub scale: f32,
    pub rotation: [f32; 3],
    pub half_size: f32,
    pub color: [f32; 3],
    pub _pad: f32,
}

/// Per-frame uniforms shared by the scene and post passes.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
    pub group: [[f32; 4]; 4],
    pub time: f32,
    pub delta_time: f32,
    pub _padding: [f32; 2],
}

/// Build the WGSL for the fixed post-process chain.
///
/// Effect parameters are baked in as constants at pipeline creation; only
/// `uniforms.time` varies per frame (it drives the grain).
pub fn post_source(settings: &PostSettings) -> String {
    format!(
        r#"struct Uniforms {{
    view_proj: mat4x4<f32>,
    group: mat4x4<f32>,
    time: f32,
    delta_time: f32,
}};

struct VertexOutput {{
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
}};

@group(0) @binding(0)
var scene: texture_2d<f32>;
@group(0) @binding(1)
var scene_sampler: sampler;
@group(0) @binding(2)
var<uniform> uniforms: Uniforms;

const BLOOM: f32 = {bloom:?};
const DEFOCUS: f32 = {defocus:?};
const GRAIN: f32 = {grain:?};
const VIGNETTE: f32 = {vignette:?};

@vertex
fn vs_main(@builtin(vertex_index) vertex_index: u32) -> VertexOutput {{
    var positions = array<vec2<f32>, 3>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>(3.0, -1.0),
        vec2<f32>(-1.0, 3.0),
    );
    var uvs = array<vec2<f32>, 3>(
        vec2<f32>(0.0, 1.0),
        vec2<f32>(2.0, 1.0),
        vec2<f32>(0.0, -1.0),
    );

    var out: VertexOutput;
    out.clip_position = vec4<f32>(positions[vertex_index], 0.0, 1.0);
    out.uv = uvs[vertex_index];
    return out;
}}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {{
    let center_dist = length(in.uv - vec2<f32>(0.5, 0.5));

    var color = textureSample(scene, scene_sampler, in.uv).rgb;

    // Neighborhood gather, reused for both defocus and bloom.
    let blur = DEFOCUS * center_dist * 0.01 + 0.002;
    var offsets = array<vec2<f32>, 8>(
        vec2<f32>(1.0, 0.0), vec2<f32>(-1.0, 0.0),
        vec2<f32>(0.0, 1.0), vec2<f32>(0.0, -1.0),
        vec2<f32>(0.7, 0.7), vec2<f32>(-0.7, 0.7),
        vec2<f32>(0.7, -0.7), vec2<f32>(-0.7, -0.7),
    );
    var gather = vec3<f32>(0.0);
    for (var i = 0u; i < 8u; i = i + 1u) {{
        gather = gather + textureSample(scene, scene_sampler, in.uv + offsets[i] * blur).rgb;
    }}
    gather = gather / 8.0;

    // Focus falls off toward the frame edges.
    color = mix(color, gather, clamp(DEFOCUS * center_dist, 0.0, 0.85));

    // Bright pass feeds back as bloom.
    let luma = dot(gather, vec3<f32>(0.299, 0.587, 0.114));
    color = color + gather * max(luma - 0.35, 0.0) * BLOOM;

    // Animated grain.
    let noise = fract(sin(dot(in.uv * 1000.0, vec2<f32>(12.9898, 78.233)) + uniforms.time) * 43758.5453);
    color = color + (noise - 0.5) * GRAIN;

    // Vignette.
    color = color * (1.0 - VIGNETTE * smoothstep(0.35, 0.85, center_dist));

    return vec4<f32>(color, 1.0);
}}
"#,
        bloom = settings.bloom,
        defocus = settings.defocus,
        grain = settings.grain,
        vignette = settings.vignette,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_layout() {
        // The vertex attribute offsets in the pipeline rely on this layout.
        assert_eq!(std::mem::size_of::<ShardInstance>(), 48);
        assert_eq!(std::mem::size_of::<Uniforms>(), 144);
    }

    #[test]
    fn test_post_source_bakes_settings() {
        let src = post_source(&PostSettings {
            bloom: 0.25,
            defocus: 1.5,
            grain: 0.03,
            vignette: 0.4,
        });
        assert!(src.contains("const BLOOM: f32 = 0.25;"));
        assert!(src.contains("const DEFOCUS: f32 = 1.5;"));
    }
}
