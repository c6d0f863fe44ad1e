//! Decorative, analyzer-inert attributes carried on places and transitions.
//!
//! Display hints, coordinates, and behavior-attribute restrictions never
//! influence [`crate::analysis`]; they exist so a net built through this
//! crate can round-trip through external rendering or editing tools without
//! losing layout information.

/// Display hint and canvas placement for a place or transition.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewProperties {
    pub hint: Hint,
    pub x: f64,
    pub y: f64,
    pub angle: f64,
}

impl Default for ViewProperties {
    fn default() -> Self {
        ViewProperties {
            hint: Hint::Auto,
            x: 0.0,
            y: 0.0,
            angle: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Hint {
    Auto,
    Fixed,
}

/// A named restriction used by macro-event mapping rules; never consulted
/// by analysis.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BehaviorAttributeRestriction {
    pub name: String,
    pub function: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BehaviorAttribute {
    pub attribute_type: String,
    pub restrictions: Vec<BehaviorAttributeRestriction>,
}
