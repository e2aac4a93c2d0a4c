//! Pack a cluster of bubbles, watch the layout events, and trace the
//! inner guide circles on a text canvas.
//!
//! Run with `RUST_LOG=gyre_layout=debug` to see overflow and padding
//! events.

use std::cell::RefCell;
use std::rc::Rc;

use gyre::prelude::*;
use tracing_subscriber::EnvFilter;

struct Bubble {
    label: String,
    radius: f64,
    at: Point,
}

impl Placeable for Bubble {
    fn radius(&self) -> f64 {
        self.radius
    }

    fn position(&self) -> Point {
        self.at
    }

    fn set_position(&mut self, position: Point) {
        self.at = position;
    }

    fn invalidate(&mut self) {
        println!("{} invalidated", self.label);
    }
}

/// Prints every draw and remove call.
#[derive(Default)]
struct TextCanvas {
    next: usize,
}

impl GuideCanvas for TextCanvas {
    type Shape = usize;

    fn draw_circle(&mut self, center: Point, radius: f64, style: &GuideStyle) -> usize {
        self.next += 1;
        println!(
            "  draw #{} circle at {center} r={radius:.2} stroke {}",
            self.next, style.stroke
        );
        self.next
    }

    fn remove_shape(&mut self, shape: usize) {
        println!("  remove #{shape}");
    }
}

fn main() -> Result<(), LayoutError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = LayoutConfig::new()
        .with_orbit_padding(4.0)
        .with_animate_transitions(true);
    let mut system = OrbitSystem::with_config(config)?;

    let orbit_count = Rc::new(RefCell::new(1usize));
    let counter = Rc::clone(&orbit_count);
    system.subscribe(move |event| match event {
        LayoutEvent::OrbitAttached { orbit } => {
            *counter.borrow_mut() += 1;
            println!("orbit {} opened at inner radius {:.2}", orbit.id, orbit.inner_radius);
        }
        LayoutEvent::OrbitDetached { id } => {
            *counter.borrow_mut() -= 1;
            println!("orbit {id} discarded");
        }
        LayoutEvent::GeometryChanged { .. } => {}
    });

    let (overlay, _) = OrbitOverlay::attach(TextCanvas::default(), &mut system);
    overlay.borrow_mut().set_layer_visible(GuideLayer::Inner, true);

    let radii = [18.0, 6.0, 6.0, 9.0, 4.0, 4.0, 12.0, 5.0, 5.0, 5.0, 7.0, 3.0];
    for (i, radius) in radii.into_iter().enumerate() {
        let bubble = Bubble {
            label: format!("bubble-{i}"),
            radius,
            at: Point::ORIGIN,
        };
        system.add_object(bubble, Positioning::Immediate)?;
    }

    println!(
        "{} bubbles in {} orbits, radius {:.2}",
        system.object_count(),
        *orbit_count.borrow(),
        system.radius()
    );
    for (_, bubble) in system.iter() {
        println!("  {:>10} at {}", bubble.label, bubble.position());
    }

    system.set_orbit_padding(0.0)?;
    println!("without padding, radius {:.2}", system.radius());

    system.invalidate();
    let removed = system.remove_all_objects();
    println!("reset, {} bubbles returned", removed.len());
    Ok(())
}
