//! The WGSL sources must parse cleanly before they ever reach a device.

use shards::shader;
use shards::style::PostSettings;

#[test]
fn test_scene_shader_parses() {
    naga::front::wgsl::parse_str(shader::SCENE_SOURCE).expect("scene shader should parse");
}

#[test]
fn test_post_shader_parses() {
    let src = shader::post_source(&PostSettings::default());
    naga::front::wgsl::parse_str(&src).expect("post shader should parse");
}

#[test]
fn test_post_shader_parses_across_settings() {
    let extremes = [
        PostSettings {
            bloom: 0.0,
            defocus: 0.0,
            grain: 0.0,
            vignette: 0.0,
        },
        PostSettings {
            bloom: 2.0,
            defocus: 4.0,
            grain: 0.2,
            vignette: 1.0,
        },
    ];
    for settings in extremes {
        let src = shader::post_source(&settings);
        naga::front::wgsl::parse_str(&src).expect("post shader should parse for any settings");
    }
}
