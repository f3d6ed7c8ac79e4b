// src/rendering_lib/shader.rs

pub const WGSL_SHADER_SOURCE: &str = r#"
struct PointStyle {
    color: vec4<f32>,
}

@group(0) @binding(0)
var<uniform> style: PointStyle;

struct VertexInput {
    @location(0) v_position: vec2<f32>, // already in clip space
}

@vertex
fn vs_main(model: VertexInput) -> @builtin(position) vec4<f32> {
    return vec4<f32>(model.v_position, 0.0, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return style.color;
}
"#;
