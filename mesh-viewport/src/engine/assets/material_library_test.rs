use super::*;

fn material(name: &str) -> tobj::Material {
    tobj::Material {
        name: name.to_string(),
        ..Default::default()
    }
}

#[test]
fn diffuse_becomes_base_colour() {
    let mut mtl = material("red");
    mtl.diffuse = Some([1.0, 0.0, 0.0]);

    let standard = standard_material_from_mtl(&mtl);
    let colour = standard.base_color.to_srgba();
    assert_eq!(colour.red, 1.0);
    assert_eq!(colour.green, 0.0);
    assert_eq!(colour.blue, 0.0);
    assert_eq!(colour.alpha, 1.0);
    assert!(matches!(standard.alpha_mode, AlphaMode::Opaque));
}

#[test]
fn missing_diffuse_defaults_to_white() {
    let standard = standard_material_from_mtl(&material("plain"));
    assert_eq!(standard.base_color.to_srgba(), Srgba::WHITE);
}

#[test]
fn dissolve_enables_blending() {
    let mut mtl = material("glass");
    mtl.dissolve = Some(0.25);

    let standard = standard_material_from_mtl(&mtl);
    assert_eq!(standard.base_color.alpha(), 0.25);
    assert!(matches!(standard.alpha_mode, AlphaMode::Blend));
}

#[test]
fn shininess_lowers_roughness() {
    let dull = roughness_from_shininess(0.0);
    let shiny = roughness_from_shininess(900.0);
    assert_eq!(dull, 1.0);
    assert!(shiny < dull);
    assert!(shiny >= 0.089);
}

#[test]
fn parses_mtl_source() {
    let source = "newmtl Cube\nKd 0.5 0.5 0.5\nd 1.0\nNs 250\n\nnewmtl Trim\nKd 0 0 1\n";
    let (materials, _) = tobj::load_mtl_buf(&mut source.as_bytes()).expect("valid mtl");

    let names: Vec<_> = materials.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Cube", "Trim"]);

    let trim = standard_material_from_mtl(&materials[1]);
    assert_eq!(trim.base_color.to_srgba().blue, 1.0);
}

#[test]
fn blank_texture_names_are_ignored() {
    assert_eq!(non_empty(&Some("  ".to_string())), None);
    assert_eq!(non_empty(&Some("cube.dds".to_string())), Some("cube.dds"));
    assert_eq!(non_empty(&None), None);
}
