use rand::{Rng, seq::IndexedRandom};
use shapes::{Color, ParseColorError};

/// Named colors sampled for canvases and shapes.
pub const STANDARD_COLORS: [(&str, &str); 10] = [
    ("darkgreen", "#006400"),
    ("darkblue", "#00008B"),
    ("maroon3", "#B03060"),
    ("orangered", "#FF4500"),
    ("gold", "#FFD700"),
    ("lawngreen", "#7CFC00"),
    ("aqua", "#00FFFF"),
    ("fuchsia", "#FF00FF"),
    ("cornflower", "#6495ED"),
    ("peachpuff", "#FFDAB9"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedColor {
    pub name: String,
    pub color: Color,
}

/// The three colors one batch is drawn with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorScheme {
    pub canvas: NamedColor,
    pub shape: NamedColor,
    pub overlay: NamedColor,
}

pub struct Palette {
    colors: Vec<NamedColor>,
}

impl Palette {
    pub fn from_hex_table(table: &[(&str, &str)]) -> Result<Self, ParseColorError> {
        let colors = table
            .iter()
            .map(|&(name, hex)| {
                Ok(NamedColor {
                    name: name.to_string(),
                    color: Color::from_hex(hex)?,
                })
            })
            .collect::<Result<_, ParseColorError>>()?;
        Ok(Self { colors })
    }

    pub fn standard() -> Result<Self, ParseColorError> {
        Self::from_hex_table(&STANDARD_COLORS)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Three distinct colors chosen at random, `None` if the palette is too small.
    pub fn pick_scheme<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<ColorScheme> {
        let picked: Vec<&NamedColor> = self.colors.choose_multiple(rng, 3).collect();
        Self::scheme_from(&picked)
    }

    /// The first three colors in declaration order.
    pub fn leading_scheme(&self) -> Option<ColorScheme> {
        let picked: Vec<&NamedColor> = self.colors.iter().take(3).collect();
        Self::scheme_from(&picked)
    }

    fn scheme_from(picked: &[&NamedColor]) -> Option<ColorScheme> {
        match picked {
            [canvas, shape, overlay] => Some(ColorScheme {
                canvas: (*canvas).clone(),
                shape: (*shape).clone(),
                overlay: (*overlay).clone(),
            }),
            _ => None,
        }
    }
}
