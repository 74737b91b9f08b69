use glam::{Vec2, Vec3};
use web_sys as web;

/// Pointer travel beyond which a press counts as a drag rather than a click.
pub const DRAG_CLICK_SLOP_PX: f32 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragKind {
    Rotate,
    Pan,
}

#[derive(Clone, Copy, Debug)]
pub struct Drag {
    pub kind: DragKind,
    pub last: Vec2,
    pub travel: f32,
}

#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub inside: bool,
    pub drag: Option<Drag>,
    /// Set once the current press has travelled past the click slop; read by
    /// the click handler so a drag does not also navigate.
    pub dragged: bool,
}

impl MouseState {
    pub fn press(&mut self, pos: Vec2, kind: DragKind) {
        self.drag = Some(Drag {
            kind,
            last: pos,
            travel: 0.0,
        });
        self.dragged = false;
    }

    /// Pointer moved while pressed: returns the kind and pixel delta since the
    /// previous move.
    pub fn drag_to(&mut self, pos: Vec2) -> Option<(DragKind, Vec2)> {
        let drag = self.drag.as_mut()?;
        let delta = pos - drag.last;
        drag.last = pos;
        drag.travel += delta.length();
        if drag.travel > DRAG_CLICK_SLOP_PX {
            self.dragged = true;
        }
        Some((drag.kind, delta))
    }

    #[inline]
    pub fn release(&mut self) {
        self.drag = None;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Nearest sphere hit along the ray, by index into `spheres`.
pub fn pick_nearest<I>(ray_origin: Vec3, ray_dir: Vec3, spheres: I) -> Option<usize>
where
    I: IntoIterator<Item = (Vec3, f32)>,
{
    let mut best = None::<(usize, f32)>;
    for (i, (center, radius)) in spheres.into_iter().enumerate() {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, center, radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width() as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height() as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}
