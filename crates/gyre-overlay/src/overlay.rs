//! Guide circles kept in step with a layout.

use std::cell::RefCell;
use std::rc::Rc;

use gyre_core::{Placeable, Point};
use gyre_layout::{LayoutEvent, OrbitGeometry, OrbitSystem};
use gyre_observe::{Observable, ObserverId};
use tracing::{debug, warn};

use crate::canvas::GuideCanvas;
use crate::style::{GuideLayer, GuideStyle};

struct Layer<S> {
    visible: bool,
    style: GuideStyle,
    shapes: Vec<S>,
}

/// Debug overlay drawing one circle per orbit for each enabled layer.
///
/// The overlay caches the last orbit geometry it saw. Enabling a layer
/// draws it from that cache; disabling removes its shapes. Enabled
/// layers are redrawn on every
/// [`GeometryChanged`](LayoutEvent::GeometryChanged), so each enabled
/// layer always has exactly one shape per orbit.
pub struct OrbitOverlay<C: GuideCanvas> {
    canvas: C,
    geometry: Vec<OrbitGeometry>,
    layers: [Layer<C::Shape>; 3],
}

impl<C: GuideCanvas> OrbitOverlay<C> {
    /// Create an overlay with every layer hidden and no known orbits.
    pub fn new(canvas: C) -> Self {
        let layer = |l: GuideLayer| Layer {
            visible: false,
            style: l.default_style(),
            shapes: Vec::new(),
        };
        Self {
            canvas,
            geometry: Vec::new(),
            layers: [
                layer(GuideLayer::Inner),
                layer(GuideLayer::Center),
                layer(GuideLayer::Outer),
            ],
        }
    }

    /// Create an overlay and subscribe it to `system`.
    ///
    /// The overlay starts from the system's current geometry. Drop the
    /// subscription with
    /// [`OrbitSystem::unsubscribe`](gyre_layout::OrbitSystem::unsubscribe)
    /// and the returned handle.
    pub fn attach<P: Placeable>(
        canvas: C,
        system: &mut OrbitSystem<P>,
    ) -> (Rc<RefCell<Self>>, ObserverId)
    where
        C: 'static,
    {
        let mut overlay = Self::new(canvas);
        overlay.geometry = system.orbit_geometry();
        let overlay = Rc::new(RefCell::new(overlay));
        let sink = Rc::clone(&overlay);
        let id = system.subscribe(move |event| {
            match sink.try_borrow_mut() {
                Ok(mut overlay) => overlay.handle_event(event),
                Err(_) => warn!("overlay borrowed during layout change, event dropped"),
            };
        });
        (overlay, id)
    }

    /// Drive a layer's visibility from a shared toggle.
    ///
    /// The layer takes the toggle's current value immediately and follows
    /// every later change. The toggle holds only a weak link, so dropping
    /// the overlay silences it.
    pub fn follow_toggle(
        overlay: &Rc<RefCell<Self>>,
        layer: GuideLayer,
        toggle: &Observable<bool>,
    ) -> ObserverId
    where
        C: 'static,
    {
        overlay.borrow_mut().set_layer_visible(layer, toggle.get());
        let weak = Rc::downgrade(overlay);
        toggle.observe(move |visible| {
            let Some(overlay) = weak.upgrade() else {
                return;
            };
            match overlay.try_borrow_mut() {
                Ok(mut overlay) => overlay.set_layer_visible(layer, *visible),
                Err(_) => warn!(%layer, "overlay borrowed during toggle, change dropped"),
            };
        })
    }

    /// Replace a layer's style. A visible layer is redrawn.
    pub fn set_style(&mut self, layer: GuideLayer, style: GuideStyle) {
        self.layers[layer.index()].style = style;
        if self.is_layer_visible(layer) {
            self.redraw(layer);
        }
    }

    /// The style a layer draws with.
    pub fn style(&self, layer: GuideLayer) -> &GuideStyle {
        &self.layers[layer.index()].style
    }

    /// Whether a layer is currently drawn.
    pub fn is_layer_visible(&self, layer: GuideLayer) -> bool {
        self.layers[layer.index()].visible
    }

    /// Show or hide a layer.
    pub fn set_layer_visible(&mut self, layer: GuideLayer, visible: bool) {
        if self.is_layer_visible(layer) == visible {
            return;
        }
        debug!(%layer, visible, orbits = self.geometry.len(), "guide layer toggled");
        self.layers[layer.index()].visible = visible;
        if visible {
            self.draw(layer);
        } else {
            self.clear(layer);
        }
    }

    /// Flip a layer's visibility and return the new state.
    pub fn toggle_layer(&mut self, layer: GuideLayer) -> bool {
        let visible = !self.is_layer_visible(layer);
        self.set_layer_visible(layer, visible);
        visible
    }

    /// Update from a layout event.
    pub fn handle_event(&mut self, event: &LayoutEvent) {
        // Attach and detach are always followed by a geometry change.
        if let LayoutEvent::GeometryChanged { orbits } = event {
            self.geometry.clone_from(orbits);
            for layer in GuideLayer::ALL {
                if self.is_layer_visible(layer) {
                    self.redraw(layer);
                }
            }
        }
    }

    /// Shapes currently drawn across all layers.
    pub fn shape_count(&self) -> usize {
        self.layers.iter().map(|l| l.shapes.len()).sum()
    }

    /// Shapes currently drawn for one layer.
    pub fn layer_shape_count(&self, layer: GuideLayer) -> usize {
        self.layers[layer.index()].shapes.len()
    }

    /// Orbit geometry the overlay last saw.
    pub fn geometry(&self) -> &[OrbitGeometry] {
        &self.geometry
    }

    /// The drawing surface.
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Remove every shape and give the canvas back.
    pub fn into_canvas(mut self) -> C {
        for layer in GuideLayer::ALL {
            self.clear(layer);
        }
        self.canvas
    }

    fn redraw(&mut self, layer: GuideLayer) {
        self.clear(layer);
        self.draw(layer);
    }

    fn draw(&mut self, layer: GuideLayer) {
        let Self {
            canvas,
            geometry,
            layers,
        } = self;
        let state = &mut layers[layer.index()];
        for orbit in geometry.iter() {
            let radius = layer.radius_of(orbit);
            let shape = canvas.draw_circle(Point::ORIGIN, radius, &state.style);
            state.shapes.push(shape);
        }
    }

    fn clear(&mut self, layer: GuideLayer) {
        for shape in self.layers[layer.index()].shapes.drain(..) {
            self.canvas.remove_shape(shape);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gyre_layout::Positioning;
    use gyre_test_utils::MockNode;
    use std::collections::BTreeMap;

    /// Records live shapes by handle.
    #[derive(Default)]
    struct RecordingCanvas {
        next: u32,
        live: BTreeMap<u32, (f64, GuideStyle)>,
        removed: usize,
    }

    impl GuideCanvas for RecordingCanvas {
        type Shape = u32;

        fn draw_circle(&mut self, center: Point, radius: f64, style: &GuideStyle) -> u32 {
            assert_eq!(center, Point::ORIGIN);
            self.next += 1;
            self.live.insert(self.next, (radius, *style));
            self.next
        }

        fn remove_shape(&mut self, shape: u32) {
            assert!(self.live.remove(&shape).is_some(), "shape {shape} removed twice");
            self.removed += 1;
        }
    }

    fn system_with_orbits(n: usize) -> OrbitSystem<MockNode> {
        let mut system = OrbitSystem::new(1.0).unwrap();
        while system.orbit_count() < n || system.is_empty() {
            system
                .add_object(MockNode::new(10.0), Positioning::Immediate)
                .unwrap();
        }
        system
    }

    #[test]
    fn enabling_layer_draws_one_circle_per_orbit() {
        let mut system = system_with_orbits(4);
        let (overlay, _) = OrbitOverlay::attach(RecordingCanvas::default(), &mut system);
        let mut overlay = overlay.borrow_mut();
        assert_eq!(overlay.shape_count(), 0);

        overlay.set_layer_visible(GuideLayer::Inner, true);
        assert_eq!(overlay.shape_count(), 4);
        let radii: Vec<f64> = overlay.canvas().live.values().map(|(r, _)| *r).collect();
        let expected: Vec<f64> = system.orbits().iter().map(|o| o.inner_radius()).collect();
        assert_eq!(radii, expected);

        overlay.set_layer_visible(GuideLayer::Inner, false);
        assert_eq!(overlay.shape_count(), 0);
        assert!(overlay.canvas().live.is_empty());
    }

    #[test]
    fn visible_layers_track_orbit_count() {
        let mut system = system_with_orbits(2);
        let (overlay, _) = OrbitOverlay::attach(RecordingCanvas::default(), &mut system);
        overlay.borrow_mut().set_layer_visible(GuideLayer::Inner, true);
        overlay.borrow_mut().set_layer_visible(GuideLayer::Outer, true);

        for _ in 0..40 {
            system
                .add_object(MockNode::new(10.0), Positioning::Immediate)
                .unwrap();
            let overlay = overlay.borrow();
            assert_eq!(overlay.layer_shape_count(GuideLayer::Inner), system.orbit_count());
            assert_eq!(overlay.layer_shape_count(GuideLayer::Outer), system.orbit_count());
            assert_eq!(overlay.layer_shape_count(GuideLayer::Center), 0);
            assert_eq!(overlay.canvas().live.len(), 2 * system.orbit_count());
        }
        assert!(system.orbit_count() > 3);

        system.remove_all_objects();
        assert_eq!(overlay.borrow().shape_count(), 2);
    }

    #[test]
    fn redraw_uses_current_radii_and_style() {
        let mut system = system_with_orbits(2);
        let (overlay, _) = OrbitOverlay::attach(RecordingCanvas::default(), &mut system);
        overlay.borrow_mut().set_layer_visible(GuideLayer::Outer, true);
        system.set_orbit_padding(6.0).unwrap();

        let overlay = overlay.borrow();
        let (radius, style) = *overlay.canvas().live.values().last().unwrap();
        assert_eq!(radius, system.radius());
        assert_eq!(style, GuideLayer::Outer.default_style());
    }

    #[test]
    fn restyle_redraws_visible_layer() {
        let mut overlay = OrbitOverlay::new(RecordingCanvas::default());
        overlay.handle_event(&LayoutEvent::GeometryChanged {
            orbits: system_with_orbits(3).orbit_geometry(),
        });
        overlay.set_layer_visible(GuideLayer::Center, true);
        let thin = GuideStyle {
            stroke_width: 0.5,
            ..GuideLayer::Center.default_style()
        };
        overlay.set_style(GuideLayer::Center, thin);
        assert_eq!(overlay.style(GuideLayer::Center), &thin);
        assert_eq!(overlay.shape_count(), 3);
        assert!(overlay.canvas().live.values().all(|(_, s)| *s == thin));
    }

    #[test]
    fn toggle_and_teardown() {
        let mut overlay = OrbitOverlay::new(RecordingCanvas::default());
        overlay.handle_event(&LayoutEvent::GeometryChanged {
            orbits: system_with_orbits(2).orbit_geometry(),
        });
        assert!(overlay.toggle_layer(GuideLayer::Inner));
        assert!(overlay.toggle_layer(GuideLayer::Center));
        assert!(!overlay.toggle_layer(GuideLayer::Inner));
        assert_eq!(overlay.shape_count(), 2);

        let canvas = overlay.into_canvas();
        assert!(canvas.live.is_empty());
        assert_eq!(canvas.removed, 4);
    }

    #[test]
    fn layer_follows_observable_toggle() {
        let mut system = system_with_orbits(3);
        let (overlay, _) = OrbitOverlay::attach(RecordingCanvas::default(), &mut system);
        let toggle = Observable::new(true);
        OrbitOverlay::follow_toggle(&overlay, GuideLayer::Center, &toggle);
        assert_eq!(overlay.borrow().layer_shape_count(GuideLayer::Center), 3);

        toggle.set(false);
        assert!(!overlay.borrow().is_layer_visible(GuideLayer::Center));
        assert_eq!(overlay.borrow().shape_count(), 0);

        // A follower bound to a master switch drives the layer too.
        let master = Observable::new(false);
        toggle.bind(&master);
        master.set(true);
        assert_eq!(overlay.borrow().layer_shape_count(GuideLayer::Center), 3);

        drop(overlay);
        master.set(false);
        assert!(!toggle.get());
    }

    #[test]
    fn toggle_while_overlay_borrowed_is_dropped() {
        let mut system = system_with_orbits(2);
        let (overlay, _) = OrbitOverlay::attach(RecordingCanvas::default(), &mut system);
        let toggle = Observable::new(false);
        OrbitOverlay::follow_toggle(&overlay, GuideLayer::Outer, &toggle);

        {
            let held = overlay.borrow();
            toggle.set(true);
            assert!(!held.is_layer_visible(GuideLayer::Outer));
        }
        assert!(toggle.get());
        assert_eq!(overlay.borrow().shape_count(), 0);

        toggle.set(false);
        toggle.set(true);
        assert_eq!(overlay.borrow().layer_shape_count(GuideLayer::Outer), 2);
    }

    #[test]
    fn unsubscribed_overlay_stops_tracking() {
        let mut system = system_with_orbits(1);
        let (overlay, id) = OrbitOverlay::attach(RecordingCanvas::default(), &mut system);
        overlay.borrow_mut().set_layer_visible(GuideLayer::Outer, true);
        assert!(system.unsubscribe(id));
        system
            .add_object(MockNode::new(5.0), Positioning::Immediate)
            .unwrap();
        assert_eq!(system.orbit_count(), 2);
        assert_eq!(overlay.borrow().shape_count(), 1);
    }
}
