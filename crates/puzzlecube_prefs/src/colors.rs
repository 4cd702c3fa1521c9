use std::fmt;
use std::str::FromStr;

use cubemath::SignedAxis;
use serde::de::Error;
use serde::{Deserialize, Serialize};

/// 8-bit sRGB color that serializes to a string like `"#ff00ff"`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// sRGB component values.
    pub rgb: [u8; 3],
}
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode(self.rgb))
    }
}
impl FromStr for Rgb {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rgb = [0_u8; 3];
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        match s.len() {
            3 => {
                let doubled = s.chars().flat_map(|c| [c, c]).collect::<String>();
                hex::decode_to_slice(doubled, &mut rgb)?;
            }
            _ => hex::decode_to_slice(s, &mut rgb)?,
        }
        Ok(Rgb { rgb })
    }
}
impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_string().serialize(serializer)
    }
}
impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Self>().map_err(D::Error::custom)
    }
}
impl Rgb {
    /// Pure black
    pub const BLACK: Rgb = Rgb { rgb: [0; 3] };
    /// Pure white
    pub const WHITE: Rgb = Rgb { rgb: [255; 3] };

    /// Constructs a color from floating-point components in the range
    /// [0, 1].
    pub fn from_floats(r: f32, g: f32, b: f32) -> Self {
        let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgb {
            rgb: [to_u8(r), to_u8(g), to_u8(b)],
        }
    }
    /// Returns the components in the range [0, 1].
    pub fn to_floats(self) -> [f32; 3] {
        self.rgb.map(|c| c as f32 / 255.0)
    }
    /// Returns the color scaled toward black by `brightness` in [0, 1].
    #[must_use]
    pub fn dimmed(self, brightness: f32) -> Self {
        let [r, g, b] = self.to_floats();
        let k = brightness.clamp(0.0, 1.0);
        Self::from_floats(r * k, g * k, b * k)
    }
}

/// Sticker color of each face of the puzzle.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct FaceColors {
    pub bottom: Rgb,
    pub top: Rgb,
    pub back: Rgb,
    pub front: Rgb,
    pub left: Rgb,
    pub right: Rgb,
}
impl Default for FaceColors {
    fn default() -> Self {
        Self {
            bottom: Rgb { rgb: [0x80, 0x4d, 0xcc] },
            top: Rgb { rgb: [0xff, 0x1a, 0x1a] },
            back: Rgb { rgb: [0xff, 0xff, 0x33] },
            front: Rgb::WHITE,
            left: Rgb { rgb: [0x00, 0x66, 0xe6] },
            right: Rgb { rgb: [0x00, 0xcc, 0x33] },
        }
    }
}
impl FaceColors {
    /// Faces in the order used for persisted color lists.
    pub const ORDER: [SignedAxis; 6] = [
        SignedAxis::NegY,
        SignedAxis::PosY,
        SignedAxis::NegZ,
        SignedAxis::PosZ,
        SignedAxis::NegX,
        SignedAxis::PosX,
    ];

    /// Returns the color of the face whose outward normal is `face`.
    pub fn get(&self, face: SignedAxis) -> Rgb {
        match face {
            SignedAxis::NegY => self.bottom,
            SignedAxis::PosY => self.top,
            SignedAxis::NegZ => self.back,
            SignedAxis::PosZ => self.front,
            SignedAxis::NegX => self.left,
            SignedAxis::PosX => self.right,
        }
    }
    /// Sets the color of the face whose outward normal is `face`.
    pub fn set(&mut self, face: SignedAxis, color: Rgb) {
        let slot = match face {
            SignedAxis::NegY => &mut self.bottom,
            SignedAxis::PosY => &mut self.top,
            SignedAxis::NegZ => &mut self.back,
            SignedAxis::PosZ => &mut self.front,
            SignedAxis::NegX => &mut self.left,
            SignedAxis::PosX => &mut self.right,
        };
        *slot = color;
    }

    /// Returns the six colors in [`FaceColors::ORDER`].
    pub fn to_list(&self) -> [Rgb; 6] {
        Self::ORDER.map(|face| self.get(face))
    }
    /// Constructs face colors from a list in [`FaceColors::ORDER`].
    pub fn from_list(list: [Rgb; 6]) -> Self {
        let mut ret = Self::default();
        for (face, color) in Self::ORDER.into_iter().zip(list) {
            ret.set(face, color);
        }
        ret
    }
}
