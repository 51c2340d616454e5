//! Integration tests for the shape capability seen from outside the crate.

use shapecast_core::prelude::*;

/// A variant the crate knows nothing about.
#[derive(Debug)]
struct Triangle {
    base: f64,
    height: f64,
}

impl Shape for Triangle {
    fn name(&self) -> &str {
        "triangle"
    }

    fn area(&self) -> f64 {
        0.5 * self.base * self.height
    }
}

/// Minimal renderer so the service can run without the adapters crate.
struct NameOnly;

impl ShapeRenderer for NameOnly {
    fn render_text(&self, shape: &dyn Shape) -> String {
        format!("{}={}", shape.name(), shape.area())
    }

    fn render_structured(&self, shape: &dyn Shape) -> ShapeResult<String> {
        Ok(format!("{:?}", AreaRecord::of(shape)))
    }
}

#[test]
fn external_variant_flows_through_the_service() {
    let service = RenderService::new(Box::new(NameOnly));
    let triangle = Triangle {
        base: 4.0,
        height: 3.0,
    };

    assert_eq!(
        service.render(&triangle, RenderFormat::Text).unwrap(),
        "triangle=6"
    );
}

#[test]
fn external_and_builtin_variants_mix_in_one_batch() {
    let service = RenderService::new(Box::new(NameOnly));
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle::new(0.0)),
        Box::new(Triangle {
            base: 2.0,
            height: 2.0,
        }),
        "square:3".parse::<ShapeDescriptor>().unwrap().into_shape().unwrap(),
    ];

    let lines = service
        .render_all(shapes.iter().map(|s| s.as_ref()), RenderFormat::Text)
        .unwrap();
    assert_eq!(lines, ["circle=0", "triangle=2", "square=9"]);
}

#[test]
fn area_record_captures_external_variant() {
    let record = AreaRecord::of(&Triangle {
        base: 1.0,
        height: 1.0,
    });
    assert_eq!(record.shape, "triangle");
    assert_eq!(record.area, 0.5);
}

#[test]
fn shapes_can_be_shared_across_threads() {
    let circle = Circle::new(3.0);
    let square = Square::new(3.0);

    let areas: Vec<f64> = std::thread::scope(|scope| {
        let handles = [
            scope.spawn(|| circle.area()),
            scope.spawn(|| square.area()),
        ];
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(areas[1], 9.0);
    assert!((areas[0] - 28.274_333_882_308_138).abs() < 1e-9);
}
