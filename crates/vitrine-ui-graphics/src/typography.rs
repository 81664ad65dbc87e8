//! Typography data structures (font descriptors and weights)

/// Font weight (100-900)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const LIGHT: FontWeight = FontWeight(300);
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const MEDIUM: FontWeight = FontWeight(500);
    pub const BOLD: FontWeight = FontWeight(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Describes a font by family name, point size and weight (data only,
/// no rendering). Resolution to concrete metrics happens in the text
/// measurement layer and may fall back when the family is unknown.
#[derive(Clone, Debug, PartialEq)]
pub struct FontDescriptor {
    pub family: String,
    pub size: f32,
    pub weight: FontWeight,
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            weight: FontWeight::NORMAL,
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_builders() {
        let font = FontDescriptor::new("HelveticaNeue-Bold", 16.0)
            .with_weight(FontWeight::BOLD)
            .with_size(17.0);
        assert_eq!(font.family, "HelveticaNeue-Bold");
        assert_eq!(font.size, 17.0);
        assert_eq!(font.weight, FontWeight::BOLD);
    }
}
