/// Bounding box of the tilted element, in client pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub lift_px: f64,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        lift_px: 0.0,
    };

    /// Pointer offset ratios are clamped to [-0.5, 0.5] and scaled so the
    /// element edges reach `max_deg`. Moving right turns the element around
    /// its Y axis; moving down tips it back around X.
    pub fn from_pointer(x: f64, y: f64, rect: Rect, max_deg: f64, lift_px: f64) -> Tilt {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return Tilt::NEUTRAL;
        }
        let rx = ((x - rect.left) / rect.width - 0.5).clamp(-0.5, 0.5);
        let ry = ((y - rect.top) / rect.height - 0.5).clamp(-0.5, 0.5);
        let scale = max_deg * 2.0;
        // 0.0 - v keeps the centered case at +0.0 rather than -0.0
        let rotate_x_deg = 0.0 - ry * scale;
        let rotate_y_deg = rx * scale;
        let lift_px = if rotate_x_deg == 0.0 && rotate_y_deg == 0.0 { 0.0 } else { lift_px };
        Tilt {
            rotate_x_deg,
            rotate_y_deg,
            lift_px,
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Tilt::NEUTRAL
    }

    pub fn to_css(&self) -> String {
        format!(
            "transform: perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) translateZ({:.1}px);",
            self.rotate_x_deg, self.rotate_y_deg, self.lift_px
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: Rect = Rect { left: 100.0, top: 50.0, width: 400.0, height: 500.0 };

    #[test]
    fn center_is_zero_rotation() {
        let t = Tilt::from_pointer(300.0, 300.0, BOX, 8.0, 12.0);
        assert_eq!(t.rotate_x_deg, 0.0);
        assert_eq!(t.rotate_y_deg, 0.0);
        assert!(t.is_neutral());
    }

    #[test]
    fn corners_reach_the_bound() {
        let tl = Tilt::from_pointer(100.0, 50.0, BOX, 8.0, 12.0);
        assert_eq!(tl.rotate_x_deg, 8.0);
        assert_eq!(tl.rotate_y_deg, -8.0);
        assert_eq!(tl.lift_px, 12.0);

        let br = Tilt::from_pointer(500.0, 550.0, BOX, 8.0, 12.0);
        assert_eq!(br.rotate_x_deg, -8.0);
        assert_eq!(br.rotate_y_deg, 8.0);
    }

    #[test]
    fn pointer_outside_is_clamped() {
        let t = Tilt::from_pointer(-1000.0, 5000.0, BOX, 8.0, 12.0);
        assert_eq!(t.rotate_x_deg, -8.0);
        assert_eq!(t.rotate_y_deg, -8.0);
    }

    #[test]
    fn exit_resets_to_exact_zero() {
        let t = Tilt::NEUTRAL;
        assert_eq!(t.rotate_x_deg, 0.0);
        assert_eq!(t.rotate_y_deg, 0.0);
        assert_eq!(t.lift_px, 0.0);
        assert_eq!(
            t.to_css(),
            "transform: perspective(1000px) rotateX(0.00deg) rotateY(0.00deg) translateZ(0.0px);"
        );
    }

    #[test]
    fn degenerate_box_is_neutral() {
        let flat = Rect { width: 0.0, ..BOX };
        assert!(Tilt::from_pointer(10.0, 10.0, flat, 8.0, 12.0).is_neutral());
    }
}
