//! Primitive assembly modes selectable from the page

use std::str::FromStr;

use thiserror::Error;

use crate::backend::types::PrimitiveTopology;

/// Returned for a mode code outside {0, 1, 2}
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Invalid draw mode {0}, expected 0 (triangles), 1 (strip) or 2 (fan)")]
pub struct InvalidDrawMode(pub i32);

/// Returned for a button id that names no mode
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown draw mode `{0}`")]
pub struct UnknownDrawMode(pub String);

/// How the six vertices are assembled into primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrawMode {
    #[default]
    Triangles,
    TriangleStrip,
    TriangleFan,
}

impl DrawMode {
    pub const ALL: [DrawMode; 3] = [
        DrawMode::Triangles,
        DrawMode::TriangleStrip,
        DrawMode::TriangleFan,
    ];

    /// Value written to the `u_mode` uniform
    pub fn code(&self) -> i32 {
        match self {
            DrawMode::Triangles => 0,
            DrawMode::TriangleStrip => 1,
            DrawMode::TriangleFan => 2,
        }
    }

    pub fn topology(&self) -> PrimitiveTopology {
        match self {
            DrawMode::Triangles => PrimitiveTopology::TriangleList,
            DrawMode::TriangleStrip => PrimitiveTopology::TriangleStrip,
            DrawMode::TriangleFan => PrimitiveTopology::TriangleFan,
        }
    }

    /// Id of the page button that selects this mode
    pub fn button_id(&self) -> &'static str {
        match self {
            DrawMode::Triangles => "triangles",
            DrawMode::TriangleStrip => "triangle_strip",
            DrawMode::TriangleFan => "triangle_fan",
        }
    }
}

impl TryFrom<i32> for DrawMode {
    type Error = InvalidDrawMode;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(DrawMode::Triangles),
            1 => Ok(DrawMode::TriangleStrip),
            2 => Ok(DrawMode::TriangleFan),
            other => Err(InvalidDrawMode(other)),
        }
    }
}

impl FromStr for DrawMode {
    type Err = UnknownDrawMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DrawMode::ALL
            .into_iter()
            .find(|mode| mode.button_id() == s)
            .ok_or_else(|| UnknownDrawMode(s.to_string()))
    }
}

impl std::fmt::Display for DrawMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.button_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for mode in DrawMode::ALL {
            assert_eq!(DrawMode::try_from(mode.code()), Ok(mode));
        }
    }

    #[test]
    fn test_invalid_codes() {
        assert_eq!(DrawMode::try_from(3), Err(InvalidDrawMode(3)));
        assert_eq!(DrawMode::try_from(-1), Err(InvalidDrawMode(-1)));
    }

    #[test]
    fn test_parse_button_ids() {
        assert_eq!("triangle_fan".parse::<DrawMode>(), Ok(DrawMode::TriangleFan));
        assert_eq!(
            "points".parse::<DrawMode>(),
            Err(UnknownDrawMode("points".into()))
        );
    }

    #[test]
    fn test_default_is_triangles() {
        assert_eq!(DrawMode::default(), DrawMode::Triangles);
        assert_eq!(DrawMode::default().topology(), PrimitiveTopology::TriangleList);
    }
}
