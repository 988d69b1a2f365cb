use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;
use yew::prelude::*;
use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{window, js_sys, CanvasRenderingContext2d, HtmlCanvasElement};

const PARTICLE_COUNT: usize = 60;
const MAX_RADIUS: f64 = 4.0;
const MAX_OPACITY: f64 = 0.5;
const MIN_OPACITY: f64 = 0.1;
const OPACITY_STEP: f64 = 0.01;
const SPEED: f64 = 2.0;
const LINK_DISTANCE: f64 = 150.0;
const LINK_OPACITY: f64 = 0.2;
const FRAME_MS: u32 = 16;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub opacity: f64,
    fading: bool,
}

/// Drifting dots for the page background. `random` must yield values in [0, 1).
#[derive(Clone, Debug)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(width: f64, height: f64, count: usize, mut random: impl FnMut() -> f64) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                x: random() * width,
                y: random() * height,
                vx: random() - 0.5,
                vy: random() - 0.5,
                radius: (random() * MAX_RADIUS).max(0.5),
                opacity: MIN_OPACITY + random() * (MAX_OPACITY - MIN_OPACITY),
                fading: random() < 0.5,
            })
            .collect();
        Self { width, height, particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Keeps particles at the same relative position on the new canvas.
    pub fn resize(&mut self, width: f64, height: f64) {
        if self.width > 0.0 && self.height > 0.0 {
            let (sx, sy) = (width / self.width, height / self.height);
            for p in &mut self.particles {
                p.x *= sx;
                p.y *= sy;
            }
        }
        self.width = width;
        self.height = height;
    }

    /// Advances one frame. Particles that leave an edge come back on the opposite one.
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for p in &mut self.particles {
            p.x += p.vx * SPEED / 2.0;
            p.y += p.vy * SPEED / 2.0;

            if p.x - p.radius > width {
                p.x = -p.radius;
            } else if p.x + p.radius < 0.0 {
                p.x = width + p.radius;
            }
            if p.y - p.radius > height {
                p.y = -p.radius;
            } else if p.y + p.radius < 0.0 {
                p.y = height + p.radius;
            }

            if p.fading {
                p.opacity -= OPACITY_STEP;
                if p.opacity <= MIN_OPACITY {
                    p.opacity = MIN_OPACITY;
                    p.fading = false;
                }
            } else {
                p.opacity += OPACITY_STEP;
                if p.opacity >= MAX_OPACITY {
                    p.opacity = MAX_OPACITY;
                    p.fading = true;
                }
            }
        }
    }

    /// Pairs close enough to be joined by a line, with the line's opacity.
    pub fn links(&self) -> Vec<(usize, usize, f64)> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let distance = (a.x - b.x).hypot(a.y - b.y);
                if distance <= LINK_DISTANCE {
                    links.push((i, j, LINK_OPACITY * (1.0 - distance / LINK_DISTANCE)));
                }
            }
        }
        links
    }
}

fn viewport_size() -> Option<(f64, f64)> {
    let window = window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

fn draw(context: &CanvasRenderingContext2d, field: &ParticleField) {
    let (width, height) = field.size();
    context.clear_rect(0.0, 0.0, width, height);

    let particles = field.particles();
    context.set_line_width(1.0);
    for (i, j, opacity) in field.links() {
        let (a, b) = (&particles[i], &particles[j]);
        context.set_stroke_style_str(&format!("rgba(220, 38, 38, {:.3})", opacity));
        context.begin_path();
        context.move_to(a.x, a.y);
        context.line_to(b.x, b.y);
        context.stroke();
    }

    for p in particles {
        context.set_fill_style_str(&format!("rgba(220, 38, 38, {:.3})", p.opacity));
        context.begin_path();
        if context.arc(p.x, p.y, p.radius, 0.0, 2.0 * PI).is_ok() {
            context.fill();
        }
    }
}

#[function_component(BloodParticles)]
pub fn blood_particles() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut interval = None;
                let context = canvas_ref.cast::<HtmlCanvasElement>().and_then(|canvas| {
                    let context = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()?
                        .dyn_into::<CanvasRenderingContext2d>()
                        .ok()?;
                    Some((canvas, context))
                });

                match (context, viewport_size()) {
                    (Some((canvas, context)), Some((width, height))) => {
                        canvas.set_width(width as u32);
                        canvas.set_height(height as u32);
                        let field = Rc::new(RefCell::new(ParticleField::new(
                            width,
                            height,
                            PARTICLE_COUNT,
                            js_sys::Math::random,
                        )));

                        interval = Some(Interval::new(FRAME_MS, move || {
                            let mut field = field.borrow_mut();
                            if let Some((width, height)) = viewport_size() {
                                if (width, height) != field.size() {
                                    canvas.set_width(width as u32);
                                    canvas.set_height(height as u32);
                                    field.resize(width, height);
                                }
                            }
                            field.step();
                            draw(&context, &field);
                        }));
                    }
                    _ => log::warn!("Canvas unavailable, skipping background particles"),
                }

                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            class="blood-particles"
            style="position: fixed; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none; z-index: 0; mix-blend-mode: screen; background: #000;"
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic stand-in for `Math.random`.
    fn sequence(values: &[f64]) -> impl FnMut() -> f64 + '_ {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn new_field_spreads_particles_inside_canvas() {
        let field = ParticleField::new(800.0, 600.0, PARTICLE_COUNT, sequence(&[0.1, 0.5, 0.9, 0.3]));
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        for p in field.particles() {
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
            assert!(p.radius > 0.0 && p.radius <= MAX_RADIUS);
            assert!((MIN_OPACITY..=MAX_OPACITY).contains(&p.opacity));
            assert!(p.vx.abs() <= 0.5 && p.vy.abs() <= 0.5);
        }
    }

    #[test]
    fn particle_leaving_right_edge_reappears_left() {
        let mut field = ParticleField::new(100.0, 100.0, 1, sequence(&[0.5]));
        field.particles[0] = Particle {
            x: 103.5,
            y: 50.0,
            vx: 0.5,
            vy: 0.0,
            radius: 3.0,
            opacity: 0.3,
            fading: false,
        };
        field.step();
        assert_eq!(field.particles()[0].x, -3.0);
        assert_eq!(field.particles()[0].y, 50.0);
    }

    #[test]
    fn opacity_pulses_between_bounds() {
        let mut field = ParticleField::new(100.0, 100.0, 1, sequence(&[0.5, 0.5, 0.5, 0.5, 0.5, 0.0, 0.9]));
        for _ in 0..200 {
            field.step();
            let opacity = field.particles()[0].opacity;
            assert!((MIN_OPACITY..=MAX_OPACITY).contains(&opacity));
        }
    }

    #[test]
    fn only_nearby_particles_are_linked() {
        let mut field = ParticleField::new(1000.0, 1000.0, 3, sequence(&[0.5]));
        field.particles[0].x = 0.0;
        field.particles[0].y = 0.0;
        field.particles[1].x = 75.0;
        field.particles[1].y = 0.0;
        field.particles[2].x = 500.0;
        field.particles[2].y = 500.0;

        let links = field.links();
        assert_eq!(links.len(), 1);
        let (i, j, opacity) = links[0];
        assert_eq!((i, j), (0, 1));
        assert!((opacity - LINK_OPACITY / 2.0).abs() < 1e-9);
    }

    #[test]
    fn resize_keeps_relative_positions() {
        let mut field = ParticleField::new(200.0, 100.0, 1, sequence(&[0.5]));
        field.resize(400.0, 300.0);
        let p = &field.particles()[0];
        assert_eq!((p.x, p.y), (200.0, 150.0));
        assert_eq!(field.size(), (400.0, 300.0));
    }
}
