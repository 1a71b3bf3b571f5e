use shapeview::geometry::generators::{BoxGenerator, CylinderGenerator, TextGenerator};
use shapeview::geometry::{Control, ParamDomain, ShapeGenerator};

fn clamp_all(controls: &mut [Control<'_>]) {
    for control in controls.iter_mut() {
        control.clamp();
    }
}

#[test]
fn float_values_clamp_to_declared_range() {
    let mut value = 50.0f32;
    let mut control = Control::slider("width", &mut value, 0.1, 10.0, 0.01);
    control.clamp();
    assert_eq!(value, 10.0);

    let mut value = -3.0f32;
    let mut control = Control::slider("width", &mut value, 0.1, 10.0, 0.01);
    control.clamp();
    assert_eq!(value, 0.1);
}

#[test]
fn int_values_clamp_to_declared_range() {
    let mut value = 200u32;
    let mut control = Control::int_slider("segments", &mut value, 1, 64);
    control.clamp();
    assert_eq!(value, 64);

    let mut value = 0u32;
    let mut control = Control::int_slider("segments", &mut value, 1, 64);
    control.clamp();
    assert_eq!(value, 1);
}

#[test]
fn out_of_range_parameters_never_reach_the_builder() {
    let mut generator = BoxGenerator {
        width: 1000.0,
        width_segments: 99,
        ..Default::default()
    };
    clamp_all(&mut generator.controls());
    assert_eq!(generator.width, 10.0);
    assert_eq!(generator.width_segments, 10);
    assert!(generator.generate().is_ok());
}

#[test]
fn box_declares_six_controls() {
    let mut generator = BoxGenerator::default();
    let controls = generator.controls();
    assert_eq!(controls.len(), 6);
    let keys: Vec<_> = controls.iter().map(|c| c.spec.key).collect();
    assert_eq!(
        keys,
        [
            "width",
            "height",
            "depth",
            "widthSegments",
            "heightSegments",
            "depthSegments"
        ]
    );
}

#[test]
fn cylinder_angles_are_edited_in_degrees() {
    let mut generator = CylinderGenerator::default();
    let controls = generator.controls();
    let theta = controls
        .iter()
        .find(|c| c.spec.key == "thetaLength")
        .unwrap();
    match theta.spec.domain {
        ParamDomain::Range { min, max, .. } => {
            assert_eq!(min, 0.0);
            assert_eq!(max, 360.0);
        }
        _ => panic!("thetaLength should be a float range"),
    }
}

#[test]
fn text_generator_exposes_a_text_field() {
    let mut generator = TextGenerator::new("assets/vitro.ttf");
    let controls = generator.controls();
    let text = controls.iter().find(|c| c.spec.key == "text").unwrap();
    assert!(matches!(text.spec.domain, ParamDomain::Text));
}
