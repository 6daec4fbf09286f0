//! Scene files: named objects given either as eight world-space corners or
//! as local bounds plus a row-major world matrix.

use std::collections::HashSet;

use anyhow::{bail, Context, Result};
use draftcull_math::{Point3, Transform};
use draftcull_obb::{BoundingBox, LocalBounds};
use serde::Deserialize;

/// A scene: the objects a drawing may show.
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    /// Objects in file order.
    pub objects: Vec<SceneObject>,
}

/// One named object.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneObject {
    /// Unique object name.
    pub name: String,
    /// Where its box comes from.
    #[serde(flatten)]
    pub shape: Shape,
}

/// Box source of an object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Shape {
    /// World-space corners in the corner convention.
    Corners {
        /// The corners; must be eight.
        corners: Vec<[f64; 3]>,
    },
    /// Local axis-aligned bounds placed by a world matrix.
    Bounds {
        /// Local minimum corner.
        min: [f64; 3],
        /// Local maximum corner.
        max: [f64; 3],
        /// Row-major world matrix; identity when absent.
        #[serde(default)]
        matrix: Option<[[f64; 4]; 4]>,
    },
}

fn point(c: &[f64; 3]) -> Point3 {
    Point3::new(c[0], c[1], c[2])
}

impl SceneObject {
    /// World-space box of this object, checked against the corner convention.
    pub fn bounding_box(&self) -> Result<BoundingBox> {
        let bbox = match &self.shape {
            Shape::Corners { corners } => {
                let points: Vec<Point3> = corners.iter().map(point).collect();
                BoundingBox::from_slice(&points)?
            }
            Shape::Bounds { min, max, matrix } => {
                let transform = matrix.map(Transform::from_rows).unwrap_or_default();
                BoundingBox::from_local(&LocalBounds::new(point(min), point(max)), &transform)
            }
        };
        bbox.validate()?;
        Ok(bbox)
    }
}

impl Scene {
    /// Parse a scene from JSON and check that object names are unique.
    pub fn from_json(text: &str) -> Result<Self> {
        let scene: Scene = serde_json::from_str(text).context("malformed scene file")?;
        let mut seen = HashSet::new();
        for obj in &scene.objects {
            if !seen.insert(obj.name.as_str()) {
                bail!("duplicate object name {:?}", obj.name);
            }
        }
        Ok(scene)
    }

    /// Boxes of all objects, in object order.
    pub fn boxes(&self) -> Result<Vec<BoundingBox>> {
        self.objects
            .iter()
            .map(|obj| {
                obj.bounding_box()
                    .with_context(|| format!("object {:?}", obj.name))
            })
            .collect()
    }

    /// Index of the object called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.objects.iter().position(|obj| obj.name == name)
    }
}
