// logo gloss effect
//
// the pointer position relative to the logo's bounding box, fed to css as the
// --x/--y custom properties.  values are not clamped, so a move event that
// lands on the border can produce slightly negative coordinates

pub const SHINE_X_VAR: &str = "--x";
pub const SHINE_Y_VAR: &str = "--y";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub client_x: f64,
    pub client_y: f64,
    pub bounds: Bounds,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShinePosition {
    pub x: f64,
    pub y: f64,
}

impl ShinePosition {
    pub fn from_pointer(sample: &PointerSample) -> Self {
        ShinePosition {
            x: sample.client_x - sample.bounds.left,
            y: sample.client_y - sample.bounds.top,
        }
    }

    pub fn css_x(&self) -> String {
        format!("{}px", self.x)
    }

    pub fn css_y(&self) -> String {
        format!("{}px", self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_relative_to_bounds() {
        let sample = PointerSample {
            client_x: 130.0,
            client_y: 42.5,
            bounds: Bounds {
                left: 100.0,
                top: 20.0,
                width: 160.0,
                height: 48.0,
            },
        };

        let pos = ShinePosition::from_pointer(&sample);
        assert_eq!(pos, ShinePosition { x: 30.0, y: 22.5 });
        assert_eq!(pos.css_x(), "30px");
        assert_eq!(pos.css_y(), "22.5px");
    }

    #[test]
    fn edge_samples_are_not_clamped() {
        let sample = PointerSample {
            client_x: 99.0,
            client_y: 20.0,
            bounds: Bounds {
                left: 100.0,
                top: 20.0,
                ..Bounds::default()
            },
        };

        let pos = ShinePosition::from_pointer(&sample);
        assert_eq!(pos.x, -1.0);
        assert_eq!(pos.css_y(), "0px");
    }
}
